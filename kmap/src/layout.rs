//! Declarative layer construction.
//!
//! A keyboard's wiring is described by a matrix map: the ordered list of
//! matrix positions that have a switch. Each layer then lists one keycode per
//! matrix map entry, either positionally or as `(position, keycode)` pairs.
//! Positions missing from the matrix map are diode matrix gaps and hold
//! [`KeyCode::No`] on every layer.
//!
//! The builders are `const fn`, so a malformed layer fails the build when the
//! table is a `const` or `static`.

use crate::error::KeymapError;
use crate::keycode::KeyCode;

/// Position of a switch in the scan matrix
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixPos {
    pub row: u8,
    pub col: u8,
}

impl MatrixPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Dense layers, indexed by `[layer][row][col]`
pub type Layers<const ROW: usize, const COL: usize, const NUM_LAYER: usize> = [[[KeyCode; COL]; ROW]; NUM_LAYER];

/// Check that every matrix map entry is inside `ROW x COL` and appears once.
/// Returns the grid of wired positions.
const fn wired_grid<const ROW: usize, const COL: usize>(
    matrix_map: &[MatrixPos],
) -> Result<[[bool; COL]; ROW], KeymapError> {
    let mut wired = [[false; COL]; ROW];
    let mut i = 0;
    while i < matrix_map.len() {
        let MatrixPos { row, col } = matrix_map[i];
        if row as usize >= ROW || col as usize >= COL {
            return Err(KeymapError::PositionOutOfBounds { row, col });
        }
        if wired[row as usize][col as usize] {
            return Err(KeymapError::DuplicatePosition { row, col });
        }
        wired[row as usize][col as usize] = true;
        i += 1;
    }
    Ok(wired)
}

/// Build dense layers from a matrix map and one positional key list per layer.
///
/// `layers[n][i]` is the keycode of layer `n` at `matrix_map[i]`. Every list
/// must have exactly `matrix_map.len()` entries.
pub const fn build_layers<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    matrix_map: &[MatrixPos],
    layers: [&[KeyCode]; NUM_LAYER],
) -> Result<Layers<ROW, COL, NUM_LAYER>, KeymapError> {
    if NUM_LAYER == 0 {
        return Err(KeymapError::NoLayers);
    }
    if let Err(e) = wired_grid::<ROW, COL>(matrix_map) {
        return Err(e);
    }

    let mut table = [[[KeyCode::No; COL]; ROW]; NUM_LAYER];
    let mut layer = 0;
    while layer < NUM_LAYER {
        let keys = layers[layer];
        if keys.len() != matrix_map.len() {
            return Err(KeymapError::ShapeMismatch {
                layer,
                expected: matrix_map.len(),
                found: keys.len(),
            });
        }
        let mut i = 0;
        while i < keys.len() {
            let pos = matrix_map[i];
            table[layer][pos.row as usize][pos.col as usize] = keys[i];
            i += 1;
        }
        layer += 1;
    }
    Ok(table)
}

/// Build dense layers from `(position, keycode)` assignments.
///
/// Each layer has to assign every matrix map position exactly once, in any
/// order. Assigning a position that isn't in the matrix map is an error.
pub const fn build_layers_from_assignments<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    matrix_map: &[MatrixPos],
    layers: [&[(MatrixPos, KeyCode)]; NUM_LAYER],
) -> Result<Layers<ROW, COL, NUM_LAYER>, KeymapError> {
    if NUM_LAYER == 0 {
        return Err(KeymapError::NoLayers);
    }
    let wired = match wired_grid::<ROW, COL>(matrix_map) {
        Ok(wired) => wired,
        Err(e) => return Err(e),
    };

    let mut table = [[[KeyCode::No; COL]; ROW]; NUM_LAYER];
    let mut layer = 0;
    while layer < NUM_LAYER {
        let assignments = layers[layer];
        let mut seen = [[false; COL]; ROW];
        let mut i = 0;
        while i < assignments.len() {
            let (MatrixPos { row, col }, keycode) = assignments[i];
            if row as usize >= ROW || col as usize >= COL {
                return Err(KeymapError::PositionOutOfBounds { row, col });
            }
            if !wired[row as usize][col as usize] {
                return Err(KeymapError::UnwiredPosition { row, col });
            }
            if seen[row as usize][col as usize] {
                return Err(KeymapError::DuplicatePosition { row, col });
            }
            seen[row as usize][col as usize] = true;
            table[layer][row as usize][col as usize] = keycode;
            i += 1;
        }
        if assignments.len() != matrix_map.len() {
            return Err(KeymapError::ShapeMismatch {
                layer,
                expected: matrix_map.len(),
                found: assignments.len(),
            });
        }
        layer += 1;
    }
    Ok(table)
}
