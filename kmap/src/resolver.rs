use crate::error::KeymapError;
use crate::fn_table::FnTable;
use crate::keycode::KeyCode;
use crate::keymap::KeyTable;

/// Resolver is the lookup entry point used by the scanner and the layer state
/// machine.
///
/// It doesn't track any state: which layer is active and whether an Fn key
/// was tapped or held are decided by the caller. Every method is a constant
/// time read of immutable tables, so a `static` resolver can be used from any
/// context, interrupts included.
#[derive(Debug, Copy, Clone)]
pub struct Resolver<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: &'a KeyTable<ROW, COL, NUM_LAYER>,
    fn_table: &'a FnTable,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Resolver<'a, ROW, COL, NUM_LAYER> {
    /// Bind a keymap and an Fn table.
    ///
    /// Fails if an Fn key activates a layer the keymap doesn't have, or taps an
    /// Fn keycode.
    pub const fn new(keymap: &'a KeyTable<ROW, COL, NUM_LAYER>, fn_table: &'a FnTable) -> Result<Self, KeymapError> {
        match fn_table.validate(NUM_LAYER) {
            Ok(()) => Ok(Self { keymap, fn_table }),
            Err(e) => Err(e),
        }
    }

    /// Keycode at `(row, col)` on `active_layer`.
    ///
    /// An Fn keycode is returned as is, interpreting it is up to the caller.
    pub fn resolve(&self, active_layer: u8, row: u8, col: u8) -> Result<KeyCode, KeymapError> {
        let keycode = self.keymap.lookup(active_layer, row, col)?;
        trace!("Resolved ({}, {}) on layer {}: {:?}", row, col, active_layer, keycode);
        Ok(keycode)
    }

    /// Layer to activate while the Fn key `fn_index` is held
    pub fn fn_layer(&self, fn_index: u8) -> Result<Option<u8>, KeymapError> {
        self.fn_table.layer_for(fn_index)
    }

    /// Keycode to send when the Fn key `fn_index` is tapped
    pub fn fn_tap_keycode(&self, fn_index: u8) -> Result<KeyCode, KeymapError> {
        self.fn_table.fallback_keycode_for(fn_index)
    }

    pub fn keymap(&self) -> &'a KeyTable<ROW, COL, NUM_LAYER> {
        self.keymap
    }

    pub fn fn_table(&self) -> &'a FnTable {
        self.fn_table
    }
}
