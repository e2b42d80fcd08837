//! Fn slot description.
//!
//! An Fn key is a key whose keycode is one of `Fn0..=Fn7`. While held it may
//! activate a layer, and when tapped without the layer being used it emits a
//! fallback keycode.

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// What one Fn slot does.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FnKey {
    /// Layer activated while the Fn key is held, `None` for no layer switch
    pub layer: Option<u8>,
    /// Keycode emitted on tap, [`KeyCode::No`] for nothing
    pub tap: KeyCode,
}

impl FnKey {
    /// Fn key that neither switches layer nor emits anything on tap
    pub const NONE: FnKey = FnKey::new(None, KeyCode::No);

    pub const fn new(layer: Option<u8>, tap: KeyCode) -> Self {
        Self { layer, tap }
    }

    /// Fn key that activates `layer` while held and does nothing on tap
    pub const fn momentary(layer: u8) -> Self {
        Self::new(Some(layer), KeyCode::No)
    }

    /// Fn key that activates `layer` while held and sends `tap` when tapped
    pub const fn layer_tap(layer: u8, tap: KeyCode) -> Self {
        Self::new(Some(layer), tap)
    }

    /// Fn key without a layer, only sends `tap`
    pub const fn tap_only(tap: KeyCode) -> Self {
        Self::new(None, tap)
    }

    /// Returns `true` if holding this key switches layer
    pub const fn switches_layer(&self) -> bool {
        self.layer.is_some()
    }
}
