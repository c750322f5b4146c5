//! Configuration types module

pub mod app;
pub mod deferred;
pub mod expansion;
pub mod logging;
pub mod naming;

// Re-export main types
pub use app::AppConfig;
pub use deferred::DeferredConfig;
pub use expansion::ExpansionConfig;
pub use logging::LoggingConfig;
pub use naming::NamingConfig;
