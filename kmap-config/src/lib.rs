//! Load a kmap keymap from a `keyboard.toml`.
//!
//! ```toml
//! [layout]
//! rows = 1
//! cols = 3
//! layers = 2
//! matrix_map = "(0,0) (0,1) (0,2)"
//!
//! [[layer]]
//! name = "base"
//! keys = "Fn0 A B"
//!
//! [[layer]]
//! name = "cursor"
//! keys = "Fn0 Left Right"
//!
//! [[fn_key]]
//! layer = "cursor"
//! ```
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize as SerdeDeserialize;
use serde::de;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

use kmap::fn_key::FnKey;
use kmap::keycode::KeyCode;

pub mod error;
pub mod keycode_alias;
pub mod layout;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::KEYCODE_ALIAS;
pub use loader::ConfigLoader;

/// Configurations of a kmap keyboard.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    /// Basic keyboard info
    #[serde(default)]
    keyboard: KeyboardInfo,
    /// Layout config
    layout: Option<LayoutTomlConfig>,
    // Aliases for key maps
    aliases: Option<HashMap<String, String>>,
    // Layers of key maps
    layer: Option<Vec<LayerTomlConfig>>,
    // Fn association table, the n-th entry configures Fn<n>
    fn_key: Option<Vec<FnKeyTomlConfig>>,
}

impl KeyboardTomlConfig {
    /// Parse a config from TOML text, without merging defaults
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: "<string>".to_string(),
            message: e.message().to_string(),
        })
    }

    /// Read and parse a config file, without merging defaults
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn keyboard(&self) -> &KeyboardInfo {
        &self.keyboard
    }
}

/// Configurations for keyboard info
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardInfo {
    /// Keyboard name
    #[serde_inline_default("kmap keyboard".to_string())]
    pub name: String,
    pub description: Option<String>,
}

impl Default for KeyboardInfo {
    fn default() -> Self {
        Self {
            name: "kmap keyboard".to_string(),
            description: None,
        }
    }
}

/// Configurations for keyboard layout
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTomlConfig {
    pub rows: u8,
    pub cols: u8,
    #[serde_inline_default(1)]
    #[serde(deserialize_with = "check_layer_num")]
    pub layers: u8,
    /// Wired positions, "(row,col) (row,col) ..."
    pub matrix_map: Option<String>,
}

fn check_layer_num<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value: u8 = SerdeDeserialize::deserialize(deserializer)?;
    if value == 0 {
        return Err(de::Error::custom("layout.layers must be at least 1"));
    }
    Ok(value)
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerTomlConfig {
    pub name: Option<String>,
    pub keys: String,
}

/// Target layer of an Fn key, by name or by number
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LayerRef {
    Number(u8),
    Name(String),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FnKeyTomlConfig {
    /// Layer activated while held, no layer switch if omitted
    pub layer: Option<LayerRef>,
    /// Keycode sent on tap, `No` if omitted
    pub tap: Option<String>,
}

/// Validated layout, with every key resolved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
    /// Wired positions in declaration order
    pub matrix_map: Vec<(u8, u8)>,
    /// `keymap[layer][row][col]`
    pub keymap: Vec<Vec<Vec<KeyCode>>>,
    /// At most `FN_KEY_NUM` entries, the n-th configures Fn<n>
    pub fn_keys: Vec<FnKey>,
}
