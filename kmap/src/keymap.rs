use crate::error::{IndexKind, KeymapError};
use crate::keycode::KeyCode;
use crate::layout::{self, Layers, MatrixPos};

/// KeyTable is the read-only stack of layers.
///
/// It should be bound to the actual pcb matrix definition: the scanner reports
/// `(row, col)`, the layer state machine picks the active layer, and the table
/// returns the keycode for `(layer, row, col)`.
///
/// Tables are built once, usually in a `static`, and never mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyTable<const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: Layers<ROW, COL, NUM_LAYER>,
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyTable<ROW, COL, NUM_LAYER> {
    /// Create a table from dense layers.
    ///
    /// The grid shape is checked by the type system. Panics during const
    /// evaluation if there isn't any layer.
    pub const fn new(layers: Layers<ROW, COL, NUM_LAYER>) -> Self {
        assert!(NUM_LAYER > 0, "keymap has no layers");
        Self { layers }
    }

    /// Create a table from a matrix map and one positional key list per layer,
    /// see [`layout::build_layers`].
    pub const fn from_matrix_map(
        matrix_map: &[MatrixPos],
        layers: [&[KeyCode]; NUM_LAYER],
    ) -> Result<Self, KeymapError> {
        match layout::build_layers::<ROW, COL, NUM_LAYER>(matrix_map, layers) {
            Ok(layers) => Ok(Self { layers }),
            Err(e) => Err(e),
        }
    }

    /// Create a table from `(position, keycode)` assignments per layer,
    /// see [`layout::build_layers_from_assignments`].
    pub const fn from_assignments(
        matrix_map: &[MatrixPos],
        layers: [&[(MatrixPos, KeyCode)]; NUM_LAYER],
    ) -> Result<Self, KeymapError> {
        match layout::build_layers_from_assignments::<ROW, COL, NUM_LAYER>(matrix_map, layers) {
            Ok(layers) => Ok(Self { layers }),
            Err(e) => Err(e),
        }
    }

    /// `(rows, cols, layers)` of the table
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Fetch the keycode at `(layer, row, col)`.
    ///
    /// Returns `Ok(KeyCode::No)` for a position without a key on that layer,
    /// and [`KeymapError::IndexOutOfRange`] if any index is outside the table.
    pub fn lookup(&self, layer: u8, row: u8, col: u8) -> Result<KeyCode, KeymapError> {
        let grid = self.layer(layer)?;
        let keys = grid.get(row as usize).ok_or_else(|| {
            warn!("Not a valid row {}, keyboard has only {} rows", row, ROW);
            KeymapError::out_of_range(IndexKind::Row, row as usize, ROW)
        })?;
        keys.get(col as usize).copied().ok_or_else(|| {
            warn!("Not a valid col {}, keyboard has only {} cols", col, COL);
            KeymapError::out_of_range(IndexKind::Col, col as usize, COL)
        })
    }

    /// Grid of one layer
    pub fn layer(&self, layer: u8) -> Result<&[[KeyCode; COL]; ROW], KeymapError> {
        self.layers.get(layer as usize).ok_or_else(|| {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer, NUM_LAYER
            );
            KeymapError::out_of_range(IndexKind::Layer, layer as usize, NUM_LAYER)
        })
    }

    /// Returns `true` if some layer has a key other than `No` at `(row, col)`
    pub fn is_wired(&self, row: u8, col: u8) -> bool {
        self.layers.iter().any(|layer| {
            layer
                .get(row as usize)
                .and_then(|keys| keys.get(col as usize))
                .is_some_and(|k| !k.is_no())
        })
    }
}
