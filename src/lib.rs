pub use pywalfox_cli::cli;
pub use pywalfox_cli::commands;
pub use pywalfox_cli::config;
pub use pywalfox_cli::telemetry;
pub use pywalfox_cli::config::AppConfig;

pub use pywalfox_core as core;
pub use pywalfox_core::model;
pub use pywalfox_core::template;
pub use pywalfox_core::theme;
pub use pywalfox_core::ThemeService;
