use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Number of Fn slots a keymap can reference.
pub const FN_KEY_NUM: usize = 8;

/// Logical keycode stored in a keymap cell.
///
/// Values `0x00..=0xE7` follow the usage IDs of the HID keyboard page.
/// `Fn0..=Fn7` occupy `0xE8..=0xEF`: they are references to an Fn slot and are
/// never sent to the host directly.
///
/// [`KeyCode::No`] marks a matrix position that has no key on a layer. It is a
/// valid lookup result, not an error.
#[repr(u8)]
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, FromRepr, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    #[default]
    No = 0x00,
    /// Keyboard roll over error, not a physical key.
    ErrorRollover = 0x01,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x02,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x03,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// Non-US `#` and `~`
    NonusHash = 0x32,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    // Keypad
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,
    /// Non-US `\` or `|`
    NonusBackslash = 0x64,
    Application = 0x65,
    KbPower = 0x66,
    KpEqual = 0x67,
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,
    Execute = 0x74,
    Help = 0x75,
    Menu = 0x76,
    Select = 0x77,
    Stop = 0x78,
    Again = 0x79,
    Undo = 0x7A,
    Cut = 0x7B,
    Copy = 0x7C,
    Paste = 0x7D,
    Find = 0x7E,
    KbMute = 0x7F,
    KbVolumeUp = 0x80,
    KbVolumeDown = 0x81,
    LockingCapsLock = 0x82,
    LockingNumLock = 0x83,
    LockingScrollLock = 0x84,
    KpComma = 0x85,
    KpEqualAs400 = 0x86,
    International1 = 0x87,
    International2 = 0x88,
    International3 = 0x89,
    International4 = 0x8A,
    International5 = 0x8B,
    International6 = 0x8C,
    International7 = 0x8D,
    International8 = 0x8E,
    International9 = 0x8F,
    Language1 = 0x90,
    Language2 = 0x91,
    Language3 = 0x92,
    Language4 = 0x93,
    Language5 = 0x94,
    Language6 = 0x95,
    Language7 = 0x96,
    Language8 = 0x97,
    Language9 = 0x98,
    AlternateErase = 0x99,
    SystemRequest = 0x9A,
    Cancel = 0x9B,
    Clear = 0x9C,
    Prior = 0x9D,
    Return = 0x9E,
    Separator = 0x9F,
    Out = 0xA0,
    Oper = 0xA1,
    ClearAgain = 0xA2,
    Crsel = 0xA3,
    Exsel = 0xA4,
    // System and consumer keys, translated to their own report pages by the host side
    SystemPower = 0xA5,
    SystemSleep = 0xA6,
    SystemWake = 0xA7,
    AudioMute = 0xA8,
    AudioVolUp = 0xA9,
    AudioVolDown = 0xAA,
    MediaNextTrack = 0xAB,
    MediaPrevTrack = 0xAC,
    MediaStop = 0xAD,
    MediaPlayPause = 0xAE,
    MediaSelect = 0xAF,
    MediaEject = 0xB0,
    Mail = 0xB1,
    Calculator = 0xB2,
    MyComputer = 0xB3,
    WwwSearch = 0xB4,
    WwwHome = 0xB5,
    WwwBack = 0xB6,
    WwwForward = 0xB7,
    WwwStop = 0xB8,
    WwwRefresh = 0xB9,
    WwwFavorites = 0xBA,
    // Modifiers
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
    // Fn slot references
    Fn0 = 0xE8,
    Fn1 = 0xE9,
    Fn2 = 0xEA,
    Fn3 = 0xEB,
    Fn4 = 0xEC,
    Fn5 = 0xED,
    Fn6 = 0xEE,
    Fn7 = 0xEF,
}

impl KeyCode {
    /// Returns `true` for the no-key sentinel
    pub const fn is_no(self) -> bool {
        self as u8 == KeyCode::No as u8
    }

    /// Returns `true` for usages of the HID keyboard page
    pub const fn is_simple_key(self) -> bool {
        self as u8 <= KeyCode::WwwFavorites as u8
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub const fn is_modifier(self) -> bool {
        KeyCode::LCtrl as u8 <= self as u8 && self as u8 <= KeyCode::RGui as u8
    }

    /// Returns `true` if the keycode references an Fn slot
    pub const fn is_fn(self) -> bool {
        KeyCode::Fn0 as u8 <= self as u8 && self as u8 <= KeyCode::Fn7 as u8
    }

    /// Index of the Fn slot this keycode references, if any
    pub const fn fn_index(self) -> Option<u8> {
        if self.is_fn() {
            Some(self as u8 - KeyCode::Fn0 as u8)
        } else {
            None
        }
    }

    /// Fn keycode for the given slot index
    pub const fn from_fn_index(index: u8) -> Option<KeyCode> {
        match index {
            0 => Some(KeyCode::Fn0),
            1 => Some(KeyCode::Fn1),
            2 => Some(KeyCode::Fn2),
            3 => Some(KeyCode::Fn3),
            4 => Some(KeyCode::Fn4),
            5 => Some(KeyCode::Fn5),
            6 => Some(KeyCode::Fn6),
            7 => Some(KeyCode::Fn7),
            _ => None,
        }
    }

    /// Bit of this modifier in the HID report modifier byte, 0 for other keys
    pub const fn as_modifier_bit(self) -> u8 {
        if self.is_modifier() {
            1 << (self as u8 - KeyCode::LCtrl as u8)
        } else {
            0
        }
    }

    /// Variant name, e.g. `"Kc1"` or `"Fn0"`
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Raw values without a keycode decode to [`KeyCode::No`]
impl From<u8> for KeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(KeyCode::No)
    }
}

impl From<KeyCode> for u8 {
    fn from(value: KeyCode) -> Self {
        value as u8
    }
}

#[cfg(test)]
mod test {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_fn_subrange() {
        assert!(KeyCode::Fn0.is_fn());
        assert!(KeyCode::Fn7.is_fn());
        assert!(!KeyCode::RGui.is_fn());
        assert!(!KeyCode::No.is_fn());
        assert_eq!(KeyCode::Fn3.fn_index(), Some(3));
        assert_eq!(KeyCode::A.fn_index(), None);
        assert_eq!(KeyCode::from_fn_index(0), Some(KeyCode::Fn0));
        assert_eq!(KeyCode::from_fn_index(7), Some(KeyCode::Fn7));
        assert_eq!(KeyCode::from_fn_index(8), None);
    }

    #[test]
    fn test_no_key_is_distinct() {
        assert!(KeyCode::No.is_no());
        assert!(!KeyCode::A.is_no());
        assert_eq!(KeyCode::default(), KeyCode::No);
        // Unassigned raw values fall back to the sentinel
        assert_eq!(KeyCode::from(0xC5), KeyCode::No);
        assert_eq!(KeyCode::from(0x04), KeyCode::A);
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(KeyCode::LCtrl.as_modifier_bit(), 1);
        assert_eq!(KeyCode::LShift.as_modifier_bit(), 1 << 1);
        assert_eq!(KeyCode::RGui.as_modifier_bit(), 1 << 7);
        assert_eq!(KeyCode::A.as_modifier_bit(), 0);
        assert!(!KeyCode::Fn0.is_modifier());
        assert!(!KeyCode::Fn0.is_simple_key());
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(KeyCode::Left.name(), "Left");
        assert_eq!(KeyCode::from_str("Left"), Ok(KeyCode::Left));
        assert_eq!(KeyCode::from_str("Fn0"), Ok(KeyCode::Fn0));
        assert!(KeyCode::from_str("NotAKey").is_err());
    }
}
