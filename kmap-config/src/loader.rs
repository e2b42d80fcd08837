// Configuration loader, merges the built-in defaults under the user config

use std::path::Path;

use config::{Config, File, FileFormat};

use crate::KeyboardTomlConfig;
use crate::error::{ConfigError, ConfigResult};

/// Defaults merged under every user config
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load keyboard configuration with two passes:
    ///
    /// **Pass 1**: Parse the user config alone, so that syntax errors point at the user file
    /// **Pass 2**: Merge the defaults with the user config
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kmap_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("keyboard.toml").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<KeyboardTomlConfig> {
        // Pass 1: the user file must be valid on its own
        KeyboardTomlConfig::new_from_toml_path(path.as_ref())?;

        // Pass 2: merge defaults with user config
        Self::merge_configs(DEFAULT_CONFIG, path.as_ref())
    }

    /// Merge the defaults with a user config file
    fn merge_configs(default_str: &str, user_path: &Path) -> ConfigResult<KeyboardTomlConfig> {
        let path = user_path.display().to_string();
        Config::builder()
            .add_source(File::from_str(default_str, FileFormat::Toml))
            .add_source(File::from(user_path).format(FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::TomlParse {
                path: path.clone(),
                message: format!("failed to merge configs: {}", e),
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::TomlParse {
                path,
                message: format!("failed to deserialize merged config: {}", e),
            })
    }
}
