pub mod cli;
pub mod commands;
pub mod config;
pub mod telemetry;

pub use pywalfox_core as core;
pub use pywalfox_core::model;
