//! Lowercase and short names of keycodes.
//!
//! Every canonical [`KeyCode`](kmap::keycode::KeyCode) variant name maps from
//! its lowercase form, plus the classic short names (`grv`, `bspc`, `psls`...)
//! and single character symbols.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Alias -> canonical keycode name
pub static KEYCODE_ALIAS: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:tt) => {
            m.insert(paste::paste!{ stringify!([<$keycode:lower>]) }, $keycode);
        };
        ($keycode:tt = $( $alias:expr),*) => {
            add_alias!($keycode);
            $(
                m.insert($alias, $keycode);
            )*
        };
    }

    add_alias!("No" = "xxxxxxx", "kc_no");
    add_alias!("ErrorRollover" = "error_rollover");
    add_alias!("PostFail" = "post_fail");
    add_alias!("ErrorUndefined" = "error_undefined");
    add_alias!("A");
    add_alias!("B");
    add_alias!("C");
    add_alias!("D");
    add_alias!("E");
    add_alias!("F");
    add_alias!("G");
    add_alias!("H");
    add_alias!("I");
    add_alias!("J");
    add_alias!("K");
    add_alias!("L");
    add_alias!("M");
    add_alias!("N");
    add_alias!("O");
    add_alias!("P");
    add_alias!("Q");
    add_alias!("R");
    add_alias!("S");
    add_alias!("T");
    add_alias!("U");
    add_alias!("V");
    add_alias!("W");
    add_alias!("X");
    add_alias!("Y");
    add_alias!("Z");
    add_alias!("Kc1" = "1");
    add_alias!("Kc2" = "2");
    add_alias!("Kc3" = "3");
    add_alias!("Kc4" = "4");
    add_alias!("Kc5" = "5");
    add_alias!("Kc6" = "6");
    add_alias!("Kc7" = "7");
    add_alias!("Kc8" = "8");
    add_alias!("Kc9" = "9");
    add_alias!("Kc0" = "0");
    add_alias!("Enter" = "ent");
    add_alias!("Escape" = "esc");
    add_alias!("Backspace" = "bspc");
    add_alias!("Tab");
    add_alias!("Space" = "spc");
    add_alias!("Minus" = "mins", "-");
    add_alias!("Equal" = "eql", "=");
    add_alias!("LeftBracket" = "left_bracket", "lbrc", "[");
    add_alias!("RightBracket" = "right_bracket", "rbrc", "]");
    add_alias!("Backslash" = "bsls", "\\");
    add_alias!("NonusHash" = "nonus_hash", "nuhs");
    add_alias!("Semicolon" = "scln", ";");
    add_alias!("Quote" = "quot", "'");
    add_alias!("Grave" = "grv", "`");
    add_alias!("Comma" = "comm", ",");
    add_alias!("Dot" = ".");
    add_alias!("Slash" = "slsh", "/");
    add_alias!("CapsLock" = "caps_lock", "caps");
    add_alias!("F1");
    add_alias!("F2");
    add_alias!("F3");
    add_alias!("F4");
    add_alias!("F5");
    add_alias!("F6");
    add_alias!("F7");
    add_alias!("F8");
    add_alias!("F9");
    add_alias!("F10");
    add_alias!("F11");
    add_alias!("F12");
    add_alias!("PrintScreen" = "print_screen", "pscr");
    add_alias!("ScrollLock" = "scroll_lock", "slck", "scrl");
    add_alias!("Pause" = "paus", "brk");
    add_alias!("Insert" = "ins");
    add_alias!("Home");
    add_alias!("PageUp" = "page_up", "pgup");
    add_alias!("Delete" = "del");
    add_alias!("End");
    add_alias!("PageDown" = "page_down", "pgdn");
    add_alias!("Right" = "rght");
    add_alias!("Left");
    add_alias!("Down");
    add_alias!("Up");
    add_alias!("NumLock" = "num_lock", "nlck", "num");
    add_alias!("KpSlash" = "kp_slash", "psls");
    add_alias!("KpAsterisk" = "kp_asterisk", "past");
    add_alias!("KpMinus" = "kp_minus", "pmns");
    add_alias!("KpPlus" = "kp_plus", "ppls");
    add_alias!("KpEnter" = "kp_enter", "pent");
    add_alias!("Kp1" = "kp_1", "p1");
    add_alias!("Kp2" = "kp_2", "p2");
    add_alias!("Kp3" = "kp_3", "p3");
    add_alias!("Kp4" = "kp_4", "p4");
    add_alias!("Kp5" = "kp_5", "p5");
    add_alias!("Kp6" = "kp_6", "p6");
    add_alias!("Kp7" = "kp_7", "p7");
    add_alias!("Kp8" = "kp_8", "p8");
    add_alias!("Kp9" = "kp_9", "p9");
    add_alias!("Kp0" = "kp_0", "p0");
    add_alias!("KpDot" = "kp_dot", "pdot");
    add_alias!("NonusBackslash" = "nonus_backslash", "nubs");
    add_alias!("Application" = "app");
    add_alias!("KbPower" = "kb_power");
    add_alias!("KpEqual" = "kp_equal", "peql");
    add_alias!("F13");
    add_alias!("F14");
    add_alias!("F15");
    add_alias!("F16");
    add_alias!("F17");
    add_alias!("F18");
    add_alias!("F19");
    add_alias!("F20");
    add_alias!("F21");
    add_alias!("F22");
    add_alias!("F23");
    add_alias!("F24");
    add_alias!("Execute" = "exec");
    add_alias!("Help");
    add_alias!("Menu");
    add_alias!("Select" = "slct");
    add_alias!("Stop");
    add_alias!("Again" = "agin");
    add_alias!("Undo");
    add_alias!("Cut");
    add_alias!("Copy");
    add_alias!("Paste" = "pste");
    add_alias!("Find");
    add_alias!("KbMute" = "kb_mute");
    add_alias!("KbVolumeUp" = "kb_volume_up");
    add_alias!("KbVolumeDown" = "kb_volume_down");
    add_alias!("LockingCapsLock" = "locking_caps_lock", "lcap");
    add_alias!("LockingNumLock" = "locking_num_lock", "lnum");
    add_alias!("LockingScrollLock" = "locking_scroll_lock", "lscr");
    add_alias!("KpComma" = "kp_comma", "pcmm");
    add_alias!("KpEqualAs400" = "kp_equal_as400");
    add_alias!("International1" = "international_1", "int1");
    add_alias!("International2" = "international_2", "int2");
    add_alias!("International3" = "international_3", "int3");
    add_alias!("International4" = "international_4", "int4");
    add_alias!("International5" = "international_5", "int5");
    add_alias!("International6" = "international_6", "int6");
    add_alias!("International7" = "international_7", "int7");
    add_alias!("International8" = "international_8", "int8");
    add_alias!("International9" = "international_9", "int9");
    add_alias!("Language1" = "language_1", "lng1");
    add_alias!("Language2" = "language_2", "lng2");
    add_alias!("Language3" = "language_3", "lng3");
    add_alias!("Language4" = "language_4", "lng4");
    add_alias!("Language5" = "language_5", "lng5");
    add_alias!("Language6" = "language_6", "lng6");
    add_alias!("Language7" = "language_7", "lng7");
    add_alias!("Language8" = "language_8", "lng8");
    add_alias!("Language9" = "language_9", "lng9");
    add_alias!("AlternateErase" = "alternate_erase", "eras");
    add_alias!("SystemRequest" = "system_request", "syrq");
    add_alias!("Cancel" = "cncl");
    add_alias!("Clear" = "clr");
    add_alias!("Prior" = "prir");
    add_alias!("Return" = "retn");
    add_alias!("Separator" = "sepr");
    add_alias!("Out");
    add_alias!("Oper");
    add_alias!("ClearAgain" = "clear_again", "clag");
    add_alias!("Crsel" = "crsl");
    add_alias!("Exsel" = "exsl");
    add_alias!("SystemPower" = "system_power", "pwr");
    add_alias!("SystemSleep" = "system_sleep", "slep");
    add_alias!("SystemWake" = "system_wake", "wake");
    add_alias!("AudioMute" = "audio_mute", "mute");
    add_alias!("AudioVolUp" = "audio_vol_up", "volu");
    add_alias!("AudioVolDown" = "audio_vol_down", "vold");
    add_alias!("MediaNextTrack" = "media_next_track", "mnxt");
    add_alias!("MediaPrevTrack" = "media_prev_track", "mprv");
    add_alias!("MediaStop" = "media_stop", "mstp");
    add_alias!("MediaPlayPause" = "media_play_pause", "mply");
    add_alias!("MediaSelect" = "media_select", "msel");
    add_alias!("MediaEject" = "media_eject", "ejct");
    add_alias!("Mail");
    add_alias!("Calculator" = "calc");
    add_alias!("MyComputer" = "my_computer", "mycm");
    add_alias!("WwwSearch" = "www_search", "wsch");
    add_alias!("WwwHome" = "www_home", "whom");
    add_alias!("WwwBack" = "www_back", "wbak");
    add_alias!("WwwForward" = "www_forward", "wfwd");
    add_alias!("WwwStop" = "www_stop", "wstp");
    add_alias!("WwwRefresh" = "www_refresh", "wref");
    add_alias!("WwwFavorites" = "www_favorites", "wfav");
    add_alias!("LCtrl" = "l_ctrl", "leftctrl", "left_ctrl", "lctl");
    add_alias!("LShift" = "l_shift", "leftshift", "left_shift", "lsft");
    add_alias!("LAlt" = "l_alt", "leftalt", "left_alt", "lopt");
    add_alias!("LGui" = "l_gui", "leftgui", "left_gui", "lcmd", "lwin");
    add_alias!("RCtrl" = "r_ctrl", "rightctrl", "right_ctrl", "rctl");
    add_alias!("RShift" = "r_shift", "rightshift", "right_shift", "rsft");
    add_alias!("RAlt" = "r_alt", "rightalt", "right_alt", "ropt", "algr");
    add_alias!("RGui" = "r_gui", "rightgui", "right_gui", "rcmd", "rwin");
    add_alias!("Fn0");
    add_alias!("Fn1");
    add_alias!("Fn2");
    add_alias!("Fn3");
    add_alias!("Fn4");
    add_alias!("Fn5");
    add_alias!("Fn6");
    add_alias!("Fn7");

    m
});
