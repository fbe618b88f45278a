// Configuration module
// Handles loading and managing game configuration from a TOML file

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config};
pub use types::{AudioConfig, Config, DisplayConfig, KeyBindings, PhysicsConfig};
