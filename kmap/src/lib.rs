//! Keymap and Fn key resolution for keyboard firmware.
//!
//! The engine maps `(layer, row, col)` to a [`KeyCode`](keycode::KeyCode) and
//! tells the layer state machine which layer an Fn key activates and what it
//! sends on tap. It owns no state: tables are built once, at compile time when
//! possible, and only read afterwards.
//!
//! ```ignore
//! use kmap::{KeyTable, MatrixPos, fnk, k, pos};
//!
//! const MATRIX_MAP: [MatrixPos; 2] = [pos!(0, 0), pos!(0, 1)];
//! static KEYMAP: KeyTable<1, 2, 2> =
//!     match KeyTable::from_matrix_map(&MATRIX_MAP, [&[fnk!(0), k!(A)], &[fnk!(0), k!(Left)]]) {
//!         Ok(t) => t,
//!         Err(e) => panic!("{}", e.as_str()),
//!     };
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod error;
pub mod fn_table;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod resolver;

pub use error::{IndexKind, KeymapError};
pub use fn_table::FnTable;
pub use keymap::KeyTable;
pub use kmap_types::{fn_key, keycode};
pub use layout::MatrixPos;
pub use resolver::Resolver;
