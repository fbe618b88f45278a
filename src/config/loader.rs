// Configuration file loading and creation

use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("flapterm");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create a default one if it doesn't
/// exist. An unparseable file falls back to defaults with a warning; a file
/// that parses but fails validation is a hard error.
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    let config = if config_path.exists() {
        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                Config::default()
            }
        }
    } else {
        create_default_config(&config_path)?;
        Config::default()
    };

    config
        .validate()
        .with_context(|| format!("invalid configuration in {}", config_path.display()))?;

    Ok(config)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config)?;

    // Add helpful header comments
    let commented_toml = format!(
        "# flapterm Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Space\", \"Up\", \"Down\", \"Enter\", \"Esc\"\n\
         #                     or single characters like \"Q\", \"F\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # Physics speeds are in virtual world units per frame at target_fps.\n\
         # Constraint: world_height - pipe_gap - ground_height must stay\n\
         # at or above min_pipe_height, or the game will refuse to start.\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        // Should round-trip cleanly, with parsed values matching the original defaults
        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.physics.gravity, config.physics.gravity);
        assert_eq!(parsed.physics.flap_strength, config.physics.flap_strength);
        assert_eq!(parsed.physics.pipe_gap, config.physics.pipe_gap);
        assert_eq!(parsed.keybindings.flap, config.keybindings.flap);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.audio.enabled, config.audio.enabled);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        // Should be able to parse partial config with #[serde(default)]
        let partial_toml = r#"
            [physics]
            gravity = 0.4
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        // Custom value
        assert_eq!(config.physics.gravity, 0.4);

        // Default values should still be there
        assert_eq!(config.physics.pipe_gap, 150.0);
        assert_eq!(config.keybindings.flap, "Space");
        assert_eq!(config.display.game_over_pause_ms, 2000);
    }

    #[test]
    fn test_parsed_config_can_still_be_invalid() {
        let bad_toml = r#"
            [physics]
            pipe_gap = 550.0
        "#;

        let config: Config = toml::from_str(bad_toml).unwrap();
        assert!(config.validate().is_err());
    }
}
