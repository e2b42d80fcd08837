use crate::error::{IndexKind, KeymapError};
use crate::fn_key::FnKey;
use crate::keycode::{FN_KEY_NUM, KeyCode};

/// Fn association table.
///
/// Two parallel mappings from an Fn slot to the layer it activates while held
/// and to the keycode it sends when tapped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FnTable {
    layers: [Option<u8>; FN_KEY_NUM],
    tap_keycodes: [KeyCode; FN_KEY_NUM],
}

impl Default for FnTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl FnTable {
    /// No Fn key switches layer or sends anything
    pub const fn empty() -> Self {
        Self {
            layers: [None; FN_KEY_NUM],
            tap_keycodes: [KeyCode::No; FN_KEY_NUM],
        }
    }

    pub const fn new(keys: [FnKey; FN_KEY_NUM]) -> Self {
        let mut table = Self::empty();
        let mut i = 0;
        while i < FN_KEY_NUM {
            table.layers[i] = keys[i].layer;
            table.tap_keycodes[i] = keys[i].tap;
            i += 1;
        }
        table
    }

    /// Build from the classic pair of byte tables, where layer `0` means
    /// "don't switch layer".
    pub const fn from_legacy(layers: [u8; FN_KEY_NUM], tap_keycodes: [KeyCode; FN_KEY_NUM]) -> Self {
        let mut table = Self::empty();
        let mut i = 0;
        while i < FN_KEY_NUM {
            if layers[i] != 0 {
                table.layers[i] = Some(layers[i]);
            }
            table.tap_keycodes[i] = tap_keycodes[i];
            i += 1;
        }
        table
    }

    /// Check Fn targets against a keymap with `num_layer` layers
    pub(crate) const fn validate(&self, num_layer: usize) -> Result<(), KeymapError> {
        let mut i = 0;
        while i < FN_KEY_NUM {
            if let Some(layer) = self.layers[i] {
                if layer as usize >= num_layer {
                    return Err(KeymapError::InvalidFnLayer {
                        fn_index: i as u8,
                        layer,
                    });
                }
            }
            if self.tap_keycodes[i].is_fn() {
                return Err(KeymapError::InvalidFnTap { fn_index: i as u8 });
            }
            i += 1;
        }
        Ok(())
    }

    fn slot(fn_index: u8) -> Result<usize, KeymapError> {
        let idx = fn_index as usize;
        if idx < FN_KEY_NUM {
            Ok(idx)
        } else {
            warn!("Not a valid fn slot {}, only {} fn keys are supported", fn_index, FN_KEY_NUM);
            Err(KeymapError::out_of_range(IndexKind::FnSlot, idx, FN_KEY_NUM))
        }
    }

    /// Layer activated while the Fn key is held, `None` if it doesn't switch layer
    pub fn layer_for(&self, fn_index: u8) -> Result<Option<u8>, KeymapError> {
        Self::slot(fn_index).map(|i| self.layers[i])
    }

    /// Keycode sent when the Fn key is tapped, `KeyCode::No` if nothing
    pub fn fallback_keycode_for(&self, fn_index: u8) -> Result<KeyCode, KeymapError> {
        Self::slot(fn_index).map(|i| self.tap_keycodes[i])
    }

    pub fn get(&self, fn_index: u8) -> Result<FnKey, KeymapError> {
        Self::slot(fn_index).map(|i| FnKey::new(self.layers[i], self.tap_keycodes[i]))
    }

    pub fn iter(&self) -> impl Iterator<Item = FnKey> + '_ {
        self.layers
            .iter()
            .zip(self.tap_keycodes.iter())
            .map(|(layer, tap)| FnKey::new(*layer, *tap))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_legacy_zero_means_no_switch() {
        let table = FnTable::from_legacy([1, 0, 0, 0, 0, 0, 0, 2], [KeyCode::No; FN_KEY_NUM]);
        assert_eq!(table.layer_for(0), Ok(Some(1)));
        assert_eq!(table.layer_for(1), Ok(None));
        assert_eq!(table.layer_for(7), Ok(Some(2)));
        assert_eq!(table.fallback_keycode_for(0), Ok(KeyCode::No));
    }

    #[test]
    fn test_explicit_base_layer_target() {
        // Layer 0 is a legitimate target when set explicitly
        let mut keys = [FnKey::NONE; FN_KEY_NUM];
        keys[2] = FnKey::layer_tap(0, KeyCode::Escape);
        let table = FnTable::new(keys);
        assert_eq!(table.layer_for(2), Ok(Some(0)));
        assert_eq!(table.fallback_keycode_for(2), Ok(KeyCode::Escape));
        assert_eq!(table.get(2), Ok(FnKey::layer_tap(0, KeyCode::Escape)));
        assert_eq!(table.layer_for(3), Ok(None));
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut keys = [FnKey::NONE; FN_KEY_NUM];
        keys[0] = FnKey::momentary(1);
        let table = FnTable::new(keys);
        let err = Err(KeymapError::IndexOutOfRange {
            index: IndexKind::FnSlot,
            value: 8,
            bound: FN_KEY_NUM,
        });
        // Never falls back to slot 0
        assert_eq!(table.layer_for(8), err);
        assert_eq!(table.fallback_keycode_for(8).map(|_| None), err);
        assert!(table.get(255).is_err());
    }

    #[test]
    fn test_validate() {
        let mut keys = [FnKey::NONE; FN_KEY_NUM];
        keys[4] = FnKey::momentary(3);
        assert_eq!(
            FnTable::new(keys).validate(3),
            Err(KeymapError::InvalidFnLayer { fn_index: 4, layer: 3 })
        );
        assert_eq!(FnTable::new(keys).validate(4), Ok(()));

        let mut keys = [FnKey::NONE; FN_KEY_NUM];
        keys[1] = FnKey::tap_only(KeyCode::Fn2);
        assert_eq!(
            FnTable::new(keys).validate(1),
            Err(KeymapError::InvalidFnTap { fn_index: 1 })
        );
        assert_eq!(FnTable::empty().iter().count(), FN_KEY_NUM);
    }
}
