/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a keycode by name. For example, `k!(A)` represents `KeyCode::A`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::keycode::KeyCode::$k
    };
}

/// Create an Fn keycode. For example, `fnk!(0)` represents `KeyCode::Fn0`
#[macro_export]
macro_rules! fnk {
    (0) => { $crate::keycode::KeyCode::Fn0 };
    (1) => { $crate::keycode::KeyCode::Fn1 };
    (2) => { $crate::keycode::KeyCode::Fn2 };
    (3) => { $crate::keycode::KeyCode::Fn3 };
    (4) => { $crate::keycode::KeyCode::Fn4 };
    (5) => { $crate::keycode::KeyCode::Fn5 };
    (6) => { $crate::keycode::KeyCode::Fn6 };
    (7) => { $crate::keycode::KeyCode::Fn7 };
}

/// Create a matrix position, `pos!(row, col)`
#[macro_export]
macro_rules! pos {
    ($row: expr, $col: expr) => {
        $crate::layout::MatrixPos::new($row, $col)
    };
}

/// Create an Fn key which activates a layer while held, with an optional tap keycode.
/// `mo!(1)` or `mo!(1, Escape)`
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::fn_key::FnKey::momentary($x)
    };
    ($x: literal, $k: ident) => {
        $crate::fn_key::FnKey::layer_tap($x, $crate::keycode::KeyCode::$k)
    };
}
