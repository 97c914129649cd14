mod config_manager;
mod content_provider;
mod validate;

pub use config_manager::ConfigManager;
pub use content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use validate::Validate;
