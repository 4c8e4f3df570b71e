use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::errors::OAuth2Error;
use super::traits::SessionStore;

/// In-memory [`SessionStore`].
///
/// Clones share the same underlying map, mirroring how every script on a
/// page sees one session storage; tests keep a clone to observe mutations
/// made through the flow.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, OAuth2Error> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| OAuth2Error::Storage("Session store poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), OAuth2Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| OAuth2Error::Storage("Session store poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), OAuth2Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| OAuth2Error::Storage("Session store poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
