use core::fmt;

/// Which index of a lookup was out of range
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndexKind {
    Layer,
    Row,
    Col,
    FnSlot,
}

impl IndexKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexKind::Layer => "layer",
            IndexKind::Row => "row",
            IndexKind::Col => "col",
            IndexKind::FnSlot => "fn slot",
        }
    }
}

/// Errors of keymap construction and lookup.
///
/// [`KeymapError::IndexOutOfRange`] is the only error a lookup returns. The other
/// variants are raised while building tables, which normally happens in a
/// `const` initializer, so they surface at compile time.
///
/// An unassigned position is not an error: it resolves to `KeyCode::No`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// Layer, row, col or Fn slot index outside the declared bounds
    IndexOutOfRange { index: IndexKind, value: usize, bound: usize },
    /// A layer's key list does not cover the matrix map
    ShapeMismatch { layer: usize, expected: usize, found: usize },
    /// A matrix map entry lies outside `ROW x COL`
    PositionOutOfBounds { row: u8, col: u8 },
    /// A position appears more than once in the matrix map or in a layer
    DuplicatePosition { row: u8, col: u8 },
    /// A layer assigns a key to a position the matrix map doesn't wire
    UnwiredPosition { row: u8, col: u8 },
    /// A keymap needs at least the base layer
    NoLayers,
    /// An Fn slot activates a layer the keymap doesn't have
    InvalidFnLayer { fn_index: u8, layer: u8 },
    /// An Fn slot's tap keycode is itself an Fn keycode
    InvalidFnTap { fn_index: u8 },
}

impl KeymapError {
    pub(crate) const fn out_of_range(index: IndexKind, value: usize, bound: usize) -> Self {
        KeymapError::IndexOutOfRange { index, value, bound }
    }

    /// Short description without the details, usable in const panics
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeymapError::IndexOutOfRange { .. } => "index out of range",
            KeymapError::ShapeMismatch { .. } => "layer does not cover the matrix map",
            KeymapError::PositionOutOfBounds { .. } => "matrix map position out of bounds",
            KeymapError::DuplicatePosition { .. } => "duplicate matrix position",
            KeymapError::UnwiredPosition { .. } => "key assigned to an unwired position",
            KeymapError::NoLayers => "keymap has no layers",
            KeymapError::InvalidFnLayer { .. } => "fn key activates a missing layer",
            KeymapError::InvalidFnTap { .. } => "fn key taps another fn key",
        }
    }
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::IndexOutOfRange { index, value, bound } => {
                write!(f, "{} index {} out of range, expected < {}", index.as_str(), value, bound)
            }
            KeymapError::ShapeMismatch { layer, expected, found } => {
                write!(
                    f,
                    "layer {} has {} keys, the matrix map has {} positions",
                    layer, found, expected
                )
            }
            KeymapError::PositionOutOfBounds { row, col } => {
                write!(f, "matrix map position ({}, {}) is out of bounds", row, col)
            }
            KeymapError::DuplicatePosition { row, col } => {
                write!(f, "duplicate matrix position ({}, {})", row, col)
            }
            KeymapError::UnwiredPosition { row, col } => {
                write!(f, "position ({}, {}) is not in the matrix map", row, col)
            }
            KeymapError::NoLayers => write!(f, "keymap has no layers"),
            KeymapError::InvalidFnLayer { fn_index, layer } => {
                write!(f, "Fn{} activates layer {} which doesn't exist", fn_index, layer)
            }
            KeymapError::InvalidFnTap { fn_index } => {
                write!(f, "Fn{} sends an Fn keycode on tap", fn_index)
            }
        }
    }
}

impl core::error::Error for KeymapError {}
