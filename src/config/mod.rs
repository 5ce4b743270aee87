pub mod application_settings;

pub use application_settings::{ServerConfig, Settings};
