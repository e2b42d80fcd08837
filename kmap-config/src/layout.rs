use std::collections::HashMap;
use std::str::FromStr;

use kmap::fn_key::FnKey;
use kmap::keycode::{FN_KEY_NUM, KeyCode};
use kmap::{FnTable, KeyTable, KeymapError};
use pest::Parser;
use pest_derive::Parser;

use crate::error::{ConfigError, ConfigResult};
use crate::{FnKeyTomlConfig, KEYCODE_ALIAS, KeyboardTomlConfig, LayerRef, LayoutConfig};

// Pest parser using the grammar file
#[derive(Parser)]
#[grammar = "keymap.pest"]
struct ConfigParser;

// Max alias resolution depth to prevent infinite loops
const MAX_ALIAS_RESOLUTION_DEPTH: usize = 10;

impl KeyboardTomlConfig {
    /// Resolve aliases, layer names and keycodes, and check every size
    pub fn get_layout_config(&self) -> ConfigResult<LayoutConfig> {
        let aliases = self.aliases.clone().unwrap_or_default();
        let layers = self.layer.clone().unwrap_or_default();
        let fn_keys = self.fn_key.clone().unwrap_or_default();
        let layout = self.layout.clone().ok_or(ConfigError::MissingField {
            field: "layout".to_string(),
        })?;

        // Check alias keys for whitespace
        for key in aliases.keys() {
            if key.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue {
                    field: "aliases".to_string(),
                    value: key.clone(),
                    expected: "an alias name without whitespace".to_string(),
                });
            }
        }

        let matrix_map = layout.matrix_map.as_deref().ok_or(ConfigError::MissingField {
            field: "layout.matrix_map".to_string(),
        })?;
        let sequence_to_grid = Self::parse_matrix_map(matrix_map)?;
        let mut wired = vec![vec![false; layout.cols as usize]; layout.rows as usize];
        for &(row, col) in &sequence_to_grid {
            if row >= layout.rows || col >= layout.cols {
                return Err(ConfigError::Validation {
                    field: "layout.matrix_map".to_string(),
                    message: format!(
                        "coordinate ({},{}) is out of bounds, ([0..{}], [0..{}]) is the expected range",
                        row,
                        col,
                        layout.rows.saturating_sub(1),
                        layout.cols.saturating_sub(1)
                    ),
                });
            }
            if wired[row as usize][col as usize] {
                return Err(ConfigError::Validation {
                    field: "layout.matrix_map".to_string(),
                    message: format!("duplicate coordinate ({},{})", row, col),
                });
            }
            wired[row as usize][col as usize] = true;
        }

        if layers.len() > layout.layers as usize {
            return Err(ConfigError::Validation {
                field: "layer".to_string(),
                message: format!(
                    "{} [[layer]] entries, but layout.layers is {}",
                    layers.len(),
                    layout.layers
                ),
            });
        }

        // Collect layer names first
        let mut layer_names = HashMap::<String, u8>::new();
        for (layer_number, layer) in layers.iter().enumerate() {
            if let Some(name) = &layer.name {
                if layer_names.insert(name.clone(), layer_number as u8).is_some() {
                    return Err(ConfigError::Validation {
                        field: "layer.name".to_string(),
                        message: format!("duplicate layer name '{}'", name),
                    });
                }
            }
        }

        let mut keymap = Vec::with_capacity(layout.layers as usize);
        for (layer_number, layer) in layers.iter().enumerate() {
            let keys = Self::keymap_parser(&layer.keys, &aliases)?;
            if keys.len() != sequence_to_grid.len() {
                return Err(ConfigError::ShapeMismatch {
                    field: match &layer.name {
                        Some(name) => format!("layer '{}'", name),
                        None => format!("layer #{}", layer_number),
                    },
                    expected: sequence_to_grid.len(),
                    found: keys.len(),
                });
            }
            let mut grid = vec![vec![KeyCode::No; layout.cols as usize]; layout.rows as usize];
            for (&(row, col), keycode) in sequence_to_grid.iter().zip(keys) {
                grid[row as usize][col as usize] = keycode;
            }
            keymap.push(grid);
        }
        // Fill the rest with empty layers
        for _ in keymap.len()..layout.layers as usize {
            keymap.push(vec![vec![KeyCode::No; layout.cols as usize]; layout.rows as usize]);
        }

        let fn_keys = Self::fn_key_resolver(&fn_keys, &aliases, &layer_names, layout.layers)?;

        Ok(LayoutConfig {
            rows: layout.rows,
            cols: layout.cols,
            layers: layout.layers,
            matrix_map: sequence_to_grid,
            keymap,
            fn_keys,
        })
    }

    /// Parses and validates a matrix_map string using Pest.
    /// Ensures the string contains only valid coordinates and whitespace.
    fn parse_matrix_map(matrix_map: &str) -> ConfigResult<Vec<(u8, u8)>> {
        let invalid = |message: String| ConfigError::InvalidValue {
            field: "layout.matrix_map".to_string(),
            value: message,
            expected: "a list of (row,col) coordinates".to_string(),
        };
        let pairs = ConfigParser::parse(Rule::matrix_map, matrix_map).map_err(|e| invalid(e.to_string()))?;

        let mut coordinates = Vec::new();
        for pair in pairs {
            if pair.as_rule() != Rule::matrix_map {
                continue;
            }
            for inner_pair in pair.into_inner() {
                match inner_pair.as_rule() {
                    Rule::coordinate => {
                        let mut coord_parts = inner_pair.into_inner();
                        let row_str = coord_parts
                            .next()
                            .ok_or_else(|| invalid("missing row coordinate".to_string()))?
                            .as_str();
                        let col_str = coord_parts
                            .next()
                            .ok_or_else(|| invalid("missing col coordinate".to_string()))?
                            .as_str();
                        let row = row_str
                            .parse::<u8>()
                            .map_err(|e| invalid(format!("row '{}': {}", row_str, e)))?;
                        let col = col_str
                            .parse::<u8>()
                            .map_err(|e| invalid(format!("col '{}': {}", col_str, e)))?;
                        coordinates.push((row, col));
                    }
                    Rule::EOI => (),
                    rule => return Err(invalid(format!("unexpected rule {:?}", rule))),
                }
            }
        }
        Ok(coordinates)
    }

    fn alias_resolver(keys: &str, aliases: &HashMap<String, String>) -> ConfigResult<String> {
        let mut current_keys = keys.to_string();
        let mut iterations = 0;

        loop {
            let mut next_keys = String::with_capacity(current_keys.capacity());
            let mut made_replacement = false;
            let mut last_index = 0;

            while let Some(at_index) = current_keys[last_index..].find('@') {
                let start_index = last_index + at_index;
                next_keys.push_str(&current_keys[last_index..start_index]);

                // A lone '@' is kept as is
                let alias_len = current_keys[start_index + 1..]
                    .find(char::is_whitespace)
                    .unwrap_or(current_keys.len() - start_index - 1);
                if alias_len == 0 {
                    next_keys.push('@');
                    last_index = start_index + 1;
                    continue;
                }

                let end_index = start_index + 1 + alias_len;
                let alias_key = &current_keys[start_index + 1..end_index];
                match aliases.get(alias_key) {
                    Some(value) => {
                        next_keys.push_str(value);
                        made_replacement = true;
                    }
                    None => {
                        return Err(ConfigError::InvalidValue {
                            field: "layer.keys".to_string(),
                            value: format!("@{}", alias_key),
                            expected: "an alias defined in [aliases]".to_string(),
                        });
                    }
                }
                last_index = end_index;
            }
            next_keys.push_str(&current_keys[last_index..]);

            if !made_replacement {
                break;
            }
            iterations += 1;
            if iterations >= MAX_ALIAS_RESOLUTION_DEPTH {
                return Err(ConfigError::Validation {
                    field: "aliases".to_string(),
                    message: format!(
                        "alias resolution exceeded maximum depth ({}), potential infinite loop detected in '{}'",
                        MAX_ALIAS_RESOLUTION_DEPTH, keys
                    ),
                });
            }
            current_keys = next_keys;
        }

        Ok(current_keys)
    }

    /// Keycode by canonical name, lowercase name or short alias. `_` is `No`.
    fn parse_keycode(name: &str) -> Option<KeyCode> {
        if name == "_" {
            return Some(KeyCode::No);
        }
        KeyCode::from_str(name).ok().or_else(|| {
            KEYCODE_ALIAS
                .get(name.to_lowercase().as_str())
                .and_then(|canonical| KeyCode::from_str(canonical).ok())
        })
    }

    fn keymap_parser(layer_keys: &str, aliases: &HashMap<String, String>) -> ConfigResult<Vec<KeyCode>> {
        // Resolve aliases first
        let layer_keys = Self::alias_resolver(layer_keys, aliases)?;

        let pairs = ConfigParser::parse(Rule::key_map, &layer_keys).map_err(|e| ConfigError::InvalidValue {
            field: "layer.keys".to_string(),
            value: e.to_string(),
            expected: "whitespace separated key names".to_string(),
        })?;

        let mut keys = Vec::new();
        for pair in pairs {
            if pair.as_rule() != Rule::key_map {
                continue;
            }
            for inner_pair in pair.into_inner() {
                match inner_pair.as_rule() {
                    Rule::no_action => keys.push(KeyCode::No),
                    Rule::keycode_name | Rule::symbol => {
                        let name = inner_pair.as_str();
                        let keycode = Self::parse_keycode(name).ok_or_else(|| ConfigError::InvalidValue {
                            field: "layer.keys".to_string(),
                            value: name.to_string(),
                            expected: "a keycode name or alias".to_string(),
                        })?;
                        keys.push(keycode);
                    }
                    Rule::EOI => (),
                    rule => {
                        return Err(ConfigError::Validation {
                            field: "layer.keys".to_string(),
                            message: format!("unexpected rule {:?}", rule),
                        });
                    }
                }
            }
        }
        Ok(keys)
    }

    fn fn_key_resolver(
        fn_keys: &[FnKeyTomlConfig],
        aliases: &HashMap<String, String>,
        layer_names: &HashMap<String, u8>,
        num_layer: u8,
    ) -> ConfigResult<Vec<FnKey>> {
        if fn_keys.len() > FN_KEY_NUM {
            return Err(ConfigError::Validation {
                field: "fn_key".to_string(),
                message: format!("{} entries, at most {} Fn keys are supported", fn_keys.len(), FN_KEY_NUM),
            });
        }

        fn_keys
            .iter()
            .enumerate()
            .map(|(fn_index, fn_key)| {
                let layer = match &fn_key.layer {
                    None => None,
                    Some(LayerRef::Number(layer)) => Some(*layer),
                    Some(LayerRef::Name(name)) => {
                        Some(*layer_names.get(name).ok_or_else(|| ConfigError::InvalidValue {
                            field: format!("fn_key[{}].layer", fn_index),
                            value: name.clone(),
                            expected: "a layer name defined in [[layer]]".to_string(),
                        })?)
                    }
                };
                if let Some(layer) = layer.filter(|&layer| layer >= num_layer) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("fn_key[{}].layer", fn_index),
                        value: layer.to_string(),
                        expected: format!("a layer number below {}", num_layer),
                    });
                }

                let tap = match &fn_key.tap {
                    None => KeyCode::No,
                    Some(tap) => {
                        let keys = Self::keymap_parser(tap, aliases)?;
                        match keys.as_slice() {
                            [keycode] if !keycode.is_fn() => *keycode,
                            _ => {
                                return Err(ConfigError::InvalidValue {
                                    field: format!("fn_key[{}].tap", fn_index),
                                    value: tap.clone(),
                                    expected: "a single non-Fn keycode".to_string(),
                                });
                            }
                        }
                    }
                };
                Ok(FnKey::new(layer, tap))
            })
            .collect()
    }
}

impl LayoutConfig {
    /// Build the keycode table.
    ///
    /// `ROW`, `COL` and `NUM_LAYER` must equal the configured `rows`, `cols` and `layers`.
    pub fn to_key_table<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
        &self,
    ) -> ConfigResult<KeyTable<ROW, COL, NUM_LAYER>> {
        if NUM_LAYER == 0 {
            return Err(KeymapError::NoLayers.into());
        }
        for (field, expected, found) in [
            ("layout.rows", ROW, self.rows as usize),
            ("layout.cols", COL, self.cols as usize),
            ("layout.layers", NUM_LAYER, self.layers as usize),
        ] {
            if expected != found {
                return Err(ConfigError::ShapeMismatch {
                    field: field.to_string(),
                    expected,
                    found,
                });
            }
        }

        let mut layers = [[[KeyCode::No; COL]; ROW]; NUM_LAYER];
        for (layer, grid) in layers.iter_mut().zip(&self.keymap) {
            for (keys, row) in layer.iter_mut().zip(grid) {
                for (key, keycode) in keys.iter_mut().zip(row) {
                    *key = *keycode;
                }
            }
        }
        Ok(KeyTable::new(layers))
    }

    /// Build the Fn association table, unconfigured Fn keys do nothing
    pub fn to_fn_table(&self) -> FnTable {
        let mut keys = [FnKey::NONE; FN_KEY_NUM];
        for (key, fn_key) in keys.iter_mut().zip(&self.fn_keys) {
            *key = *fn_key;
        }
        FnTable::new(keys)
    }
}
