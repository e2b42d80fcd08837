pub mod common;

use kmap::error::{IndexKind, KeymapError};
use kmap::keycode::{FN_KEY_NUM, KeyCode};
use kmap::keymap::KeyTable;
use kmap::resolver::Resolver;
use proptest::prelude::*;

use crate::common::{BASE, COL, FN_TABLE, MATRIX_MAP, NUM_KEYS, NUM_LAYER, RESOLVER, ROW};

prop_compose! {
    fn in_range_position()(row in 0..ROW as u8, col in 0..COL as u8) -> (u8, u8) {
        (row, col)
    }
}

prop_compose! {
    fn any_keycode()(raw in any::<u8>()) -> KeyCode {
        KeyCode::from(raw)
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_layer(layer in (NUM_LAYER as u8)..=u8::MAX, (row, col) in in_range_position()) {
        prop_assert_eq!(
            RESOLVER.resolve(layer, row, col),
            Err(KeymapError::IndexOutOfRange { index: IndexKind::Layer, value: layer as usize, bound: NUM_LAYER })
        );
    }

    #[test]
    fn prop_out_of_range_row(layer in 0..NUM_LAYER as u8, row in (ROW as u8)..=u8::MAX, col in 0..COL as u8) {
        prop_assert_eq!(
            RESOLVER.resolve(layer, row, col),
            Err(KeymapError::IndexOutOfRange { index: IndexKind::Row, value: row as usize, bound: ROW })
        );
    }

    #[test]
    fn prop_out_of_range_col(layer in 0..NUM_LAYER as u8, row in 0..ROW as u8, col in (COL as u8)..=u8::MAX) {
        prop_assert_eq!(
            RESOLVER.resolve(layer, row, col),
            Err(KeymapError::IndexOutOfRange { index: IndexKind::Col, value: col as usize, bound: COL })
        );
    }

    #[test]
    fn prop_out_of_range_fn_slot(fn_index in (FN_KEY_NUM as u8)..=u8::MAX) {
        let expected = Err(KeymapError::IndexOutOfRange { index: IndexKind::FnSlot, value: fn_index as usize, bound: FN_KEY_NUM });
        prop_assert_eq!(RESOLVER.fn_layer(fn_index), expected);
        prop_assert_eq!(RESOLVER.fn_tap_keycode(fn_index).map(|_| ()), expected.map(|_| ()));
    }

    #[test]
    fn prop_lookup_is_deterministic(layer in 0..NUM_LAYER as u8, (row, col) in in_range_position()) {
        let first = RESOLVER.resolve(layer, row, col);
        prop_assert!(first.is_ok());
        for _ in 0..4 {
            prop_assert_eq!(RESOLVER.resolve(layer, row, col), first);
        }
    }

    #[test]
    fn prop_layers_are_independent(cursor in proptest::collection::vec(any_keycode(), NUM_KEYS), (row, col) in in_range_position()) {
        let mut layer1 = [KeyCode::No; NUM_KEYS];
        layer1.copy_from_slice(&cursor);
        let keymap: KeyTable<ROW, COL, NUM_LAYER> = KeyTable::from_matrix_map(&MATRIX_MAP, [&BASE, &layer1]).unwrap();
        let resolver = Resolver::new(&keymap, &FN_TABLE).unwrap();
        prop_assert_eq!(resolver.resolve(0, row, col), RESOLVER.resolve(0, row, col));
    }
}
