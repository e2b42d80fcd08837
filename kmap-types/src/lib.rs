//! # kmap types
//!
//! Fundamental type definitions shared by the kmap crates.
//!
//! - [`keycode`] - Logical keycodes: the HID keyboard page, the reserved no-key
//!   sentinel and the Fn key subrange
//! - [`fn_key`] - Fn slot description: held layer and tap fallback
//!
//! `kmap` builds its lookup tables from these types, `kmap-config` produces
//! them from a `keyboard.toml`.

#![no_std]

pub mod fn_key;
pub mod keycode;
