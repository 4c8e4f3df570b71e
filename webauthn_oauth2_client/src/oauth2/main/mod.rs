mod core;
mod exchange;

pub use self::core::ProviderFlow;
pub use exchange::UserInfoProfileSource;
