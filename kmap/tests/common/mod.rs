use kmap::fnk;
use kmap::fn_table::FnTable;
use kmap::keycode::{FN_KEY_NUM, KeyCode};
use kmap::keymap::KeyTable;
use kmap::layout::MatrixPos;
use kmap::resolver::Resolver;
use kmap::{k, pos};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const ROW: usize = 5;
pub const COL: usize = 18;
pub const NUM_LAYER: usize = 2;
pub const NUM_KEYS: usize = 78;

/// Wired switches of a 5x18 matrix, main block and keypad. Row 1 and 2 miss
/// the cells under the wide Return key, row 3 the ones under right shift, and
/// the bottom row is sparse around the space bar.
#[rustfmt::skip]
pub const MATRIX_MAP: [MatrixPos; NUM_KEYS] = [
    pos!(0, 0), pos!(0, 1), pos!(0, 2), pos!(0, 3), pos!(0, 4), pos!(0, 5), pos!(0, 6), pos!(0, 7), pos!(0, 8), pos!(0, 9), pos!(0, 10), pos!(0, 11), pos!(0, 12), pos!(0, 13), pos!(0, 14), pos!(0, 15), pos!(0, 16), pos!(0, 17),
    pos!(1, 0), pos!(1, 1), pos!(1, 2), pos!(1, 3), pos!(1, 4), pos!(1, 5), pos!(1, 6), pos!(1, 7), pos!(1, 8), pos!(1, 9), pos!(1, 10), pos!(1, 11), pos!(1, 12),              pos!(1, 14), pos!(1, 15), pos!(1, 16), pos!(1, 17),
    pos!(2, 0), pos!(2, 1), pos!(2, 2), pos!(2, 3), pos!(2, 4), pos!(2, 5), pos!(2, 6), pos!(2, 7), pos!(2, 8), pos!(2, 9), pos!(2, 10), pos!(2, 11),              pos!(2, 13), pos!(2, 14), pos!(2, 15), pos!(2, 16), pos!(2, 17),
    pos!(3, 0), pos!(3, 1), pos!(3, 2), pos!(3, 3), pos!(3, 4), pos!(3, 5), pos!(3, 6), pos!(3, 7), pos!(3, 8), pos!(3, 9), pos!(3, 10),                           pos!(3, 13), pos!(3, 14), pos!(3, 15), pos!(3, 16), pos!(3, 17),
    pos!(4, 0), pos!(4, 1),                                     pos!(4, 6),                         pos!(4, 9), pos!(4, 10), pos!(4, 11), pos!(4, 12), pos!(4, 13), pos!(4, 14),              pos!(4, 16),
];

/// Matrix cells that have no switch
pub const GAPS: [(u8, u8); 12] = [
    (1, 13),
    (2, 12),
    (3, 11),
    (3, 12),
    (4, 2),
    (4, 3),
    (4, 4),
    (4, 5),
    (4, 7),
    (4, 8),
    (4, 15),
    (4, 17),
];

#[rustfmt::skip]
pub const BASE: [KeyCode; NUM_KEYS] = [
    k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace), k!(LCtrl), k!(Equal), k!(KpSlash), k!(KpAsterisk),
    k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Kp7), k!(Kp8), k!(Kp9), k!(KpMinus),
    fnk!(0), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), k!(Enter), k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus),
    k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(Up), k!(Kp1), k!(Kp2), k!(Kp3), k!(KpEnter),
    k!(LAlt), k!(LGui), k!(Space), k!(LCtrl), k!(Backslash), k!(Left), k!(Right), k!(Down), k!(Kp0), k!(KpDot),
];

/// Cursor layer: WASD and IJKL arrows, F-keys on the number row
#[rustfmt::skip]
pub const CURSOR: [KeyCode; NUM_KEYS] = [
    k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), k!(Delete), k!(NumLock), k!(Equal), k!(KpSlash), k!(KpAsterisk),
    k!(CapsLock), k!(Home), k!(Up), k!(PageUp), k!(No), k!(No), k!(No), k!(PageUp), k!(Up), k!(Home), k!(PrintScreen), k!(ScrollLock), k!(Pause), k!(Kp7), k!(Kp8), k!(Kp9), k!(KpMinus),
    fnk!(0), k!(Left), k!(Down), k!(Right), k!(No), k!(No), k!(No), k!(Left), k!(Down), k!(Right), k!(No), k!(No), k!(Enter), k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus),
    k!(LShift), k!(End), k!(No), k!(PageDown), k!(No), k!(No), k!(No), k!(PageDown), k!(No), k!(End), k!(No), k!(PageUp), k!(Kp1), k!(Kp2), k!(Kp3), k!(KpEnter),
    k!(LAlt), k!(LGui), k!(Space), k!(LCtrl), k!(Insert), k!(Home), k!(End), k!(PageDown), k!(Kp0), k!(KpDot),
];

pub static KEYMAP: KeyTable<ROW, COL, NUM_LAYER> = match KeyTable::from_matrix_map(&MATRIX_MAP, [&BASE, &CURSOR]) {
    Ok(table) => table,
    Err(e) => panic!("{}", e.as_str()),
};

/// Fn0 activates the cursor layer and sends nothing on tap
pub static FN_TABLE: FnTable = FnTable::from_legacy([1, 0, 0, 0, 0, 0, 0, 0], [KeyCode::No; FN_KEY_NUM]);

pub static RESOLVER: Resolver<'static, ROW, COL, NUM_LAYER> = match Resolver::new(&KEYMAP, &FN_TABLE) {
    Ok(resolver) => resolver,
    Err(e) => panic!("{}", e.as_str()),
};

/// Minimal momentary-layer state machine, the way a firmware's key event
/// processor drives the resolver. Only one Fn key may be held at a time.
pub struct FnLayerHarness<'a, const R: usize, const C: usize, const L: usize> {
    resolver: Resolver<'a, R, C, L>,
    default_layer: u8,
    active_layer: u8,
    held_fn: Option<u8>,
    layer_used: bool,
}

impl<'a, const R: usize, const C: usize, const L: usize> FnLayerHarness<'a, R, C, L> {
    pub fn new(resolver: Resolver<'a, R, C, L>) -> Self {
        Self {
            resolver,
            default_layer: 0,
            active_layer: 0,
            held_fn: None,
            layer_used: false,
        }
    }

    pub fn active_layer(&self) -> u8 {
        self.active_layer
    }

    /// Press the key at `(row, col)`, returns the keycode to report
    pub fn press(&mut self, row: u8, col: u8) -> Option<KeyCode> {
        let keycode = self.resolver.resolve(self.active_layer, row, col).ok()?;
        if let Some(fn_index) = keycode.fn_index() {
            self.held_fn = Some(fn_index);
            self.layer_used = false;
            if let Some(layer) = self.resolver.fn_layer(fn_index).ok().flatten() {
                self.active_layer = layer;
            }
            return None;
        }
        if keycode.is_no() {
            return None;
        }
        if self.held_fn.is_some() {
            self.layer_used = true;
        }
        Some(keycode)
    }

    /// Release the held Fn key, returns the tap keycode if the layer wasn't used
    pub fn release_fn(&mut self) -> Option<KeyCode> {
        let fn_index = self.held_fn.take()?;
        self.active_layer = self.default_layer;
        if self.layer_used {
            return None;
        }
        let tap = self.resolver.fn_tap_keycode(fn_index).ok()?;
        (!tap.is_no()).then_some(tap)
    }
}
