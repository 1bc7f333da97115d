use std::fmt;

/// A single physical keyboard button.
///
/// A `Key` names a button, not the character it produces, so there are no
/// capital keys here. Any code is a valid `Key`; codes without a label render
/// as `Key(<code>)` and still work as watcher keys.
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Key(pub i32);

macro_rules! keys {
    ( $( $name:ident = $code:literal => $label:literal, )* ) => {
        impl Key {
            $( pub const $name: Key = Key($code); )*

            /// Every labelled key, `INVALID` included, in code order.
            pub const ALL: &'static [Key] = &[ $( Key::$name, )* ];

            pub fn label(self) -> Option<&'static str> {
                match self.0 {
                    $( $code => Some($label), )*
                    _ => None,
                }
            }
        }
    };
}

keys! {
    INVALID = 0 => "Invalid",

    // US layout punctuation and editing
    TILDE = 1 => "Tilde",
    DASH = 2 => "Dash",
    EQUALS = 3 => "Equals",
    SEMICOLON = 4 => "Semicolon",
    APOSTROPHE = 5 => "Apostrophe",
    COMMA = 6 => "Comma",
    PERIOD = 7 => "Period",
    FORWARD_SLASH = 8 => "ForwardSlash",
    BACK_SLASH = 9 => "BackSlash",
    BACKSPACE = 10 => "Backspace",
    TAB = 11 => "Tab",
    CAPS_LOCK = 12 => "CapsLock",
    SPACE = 13 => "Space",
    ENTER = 14 => "Enter",
    ESCAPE = 15 => "Escape",
    INSERT = 16 => "Insert",
    PRINT_SCREEN = 17 => "PrintScreen",
    DELETE = 18 => "Delete",
    PAGE_UP = 19 => "PageUp",
    PAGE_DOWN = 20 => "PageDown",
    HOME = 21 => "Home",
    END = 22 => "End",
    PAUSE = 23 => "Pause",
    SLEEP = 24 => "Sleep",
    CLEAR = 25 => "Clear",
    SELECT = 26 => "Select",
    PRINT = 27 => "Print",
    EXECUTE = 28 => "Execute",
    HELP = 29 => "Help",
    APPLICATIONS = 30 => "Applications",
    SCROLL_LOCK = 31 => "ScrollLock",
    PLAY = 32 => "Play",
    ZOOM = 33 => "Zoom",

    // Arrows
    ARROW_LEFT = 34 => "ArrowLeft",
    ARROW_RIGHT = 35 => "ArrowRight",
    ARROW_DOWN = 36 => "ArrowDown",
    ARROW_UP = 37 => "ArrowUp",

    // Lefties
    LEFT_BRACKET = 38 => "LeftBracket",
    LEFT_SHIFT = 39 => "LeftShift",
    LEFT_CTRL = 40 => "LeftCtrl",
    LEFT_SUPER = 41 => "LeftSuper",
    LEFT_ALT = 42 => "LeftAlt",

    // Righties
    RIGHT_BRACKET = 43 => "RightBracket",
    RIGHT_SHIFT = 44 => "RightShift",
    RIGHT_CTRL = 45 => "RightCtrl",
    RIGHT_SUPER = 46 => "RightSuper",
    RIGHT_ALT = 47 => "RightAlt",

    // Digits
    ZERO = 48 => "Zero",
    ONE = 49 => "One",
    TWO = 50 => "Two",
    THREE = 51 => "Three",
    FOUR = 52 => "Four",
    FIVE = 53 => "Five",
    SIX = 54 => "Six",
    SEVEN = 55 => "Seven",
    EIGHT = 56 => "Eight",
    NINE = 57 => "Nine",

    // Functions
    F1 = 58 => "F1",
    F2 = 59 => "F2",
    F3 = 60 => "F3",
    F4 = 61 => "F4",
    F5 = 62 => "F5",
    F6 = 63 => "F6",
    F7 = 64 => "F7",
    F8 = 65 => "F8",
    F9 = 66 => "F9",
    F10 = 67 => "F10",
    F11 = 68 => "F11",
    F12 = 69 => "F12",
    F13 = 70 => "F13",
    F14 = 71 => "F14",
    F15 = 72 => "F15",
    F16 = 73 => "F16",
    F17 = 74 => "F17",
    F18 = 75 => "F18",
    F19 = 76 => "F19",
    F20 = 77 => "F20",
    F21 = 78 => "F21",
    F22 = 79 => "F22",
    F23 = 80 => "F23",
    F24 = 81 => "F24",

    // Letters
    A = 82 => "A",
    B = 83 => "B",
    C = 84 => "C",
    D = 85 => "D",
    E = 86 => "E",
    F = 87 => "F",
    G = 88 => "G",
    H = 89 => "H",
    I = 90 => "I",
    J = 91 => "J",
    K = 92 => "K",
    L = 93 => "L",
    M = 94 => "M",
    N = 95 => "N",
    O = 96 => "O",
    P = 97 => "P",
    Q = 98 => "Q",
    R = 99 => "R",
    S = 100 => "S",
    T = 101 => "T",
    U = 102 => "U",
    V = 103 => "V",
    W = 104 => "W",
    X = 105 => "X",
    Y = 106 => "Y",
    Z = 107 => "Z",

    // Number pad
    NUM_LOCK = 108 => "NumLock",
    NUM_MULTIPLY = 109 => "NumMultiply",
    NUM_DIVIDE = 110 => "NumDivide",
    NUM_ADD = 111 => "NumAdd",
    NUM_SUBTRACT = 112 => "NumSubtract",
    NUM_ZERO = 113 => "NumZero",
    NUM_ONE = 114 => "NumOne",
    NUM_TWO = 115 => "NumTwo",
    NUM_THREE = 116 => "NumThree",
    NUM_FOUR = 117 => "NumFour",
    NUM_FIVE = 118 => "NumFive",
    NUM_SIX = 119 => "NumSix",
    NUM_SEVEN = 120 => "NumSeven",
    NUM_EIGHT = 121 => "NumEight",
    NUM_NINE = 122 => "NumNine",
    NUM_DECIMAL = 123 => "NumDecimal",
    NUM_COMMA = 124 => "NumComma",
    NUM_ENTER = 125 => "NumEnter",

    // Browser, media and launch
    BROWSER_BACK = 126 => "BrowserBack",
    BROWSER_FORWARD = 127 => "BrowserForward",
    BROWSER_REFRESH = 128 => "BrowserRefresh",
    BROWSER_STOP = 129 => "BrowserStop",
    BROWSER_SEARCH = 130 => "BrowserSearch",
    BROWSER_FAVORITES = 131 => "BrowserFavorites",
    BROWSER_HOME = 132 => "BrowserHome",
    MEDIA_NEXT = 133 => "MediaNext",
    MEDIA_PREVIOUS = 134 => "MediaPrevious",
    MEDIA_STOP = 135 => "MediaStop",
    MEDIA_PLAY_PAUSE = 136 => "MediaPlayPause",
    LAUNCH_MAIL = 137 => "LaunchMail",
    LAUNCH_MEDIA = 138 => "LaunchMedia",
    LAUNCH_APP_ONE = 139 => "LaunchAppOne",
    LAUNCH_APP_TWO = 140 => "LaunchAppTwo",

    // Asian and legacy terminal keys
    KANA = 141 => "Kana",
    KANJI = 142 => "Kanji",
    JUNJA = 143 => "Junja",
    ATTN = 144 => "Attn",
    CR_SEL = 145 => "CrSel",
    EX_SEL = 146 => "ExSel",
    ERASE_EOF = 147 => "EraseEOF",
}

impl Key {
    pub fn code(self) -> i32 {
        self.0
    }
    pub fn is_named(self) -> bool {
        self.label().is_some()
    }
    pub fn is_invalid(self) -> bool {
        self == Key::INVALID
    }
}
impl From<i32> for Key {
    fn from(code: i32) -> Key {
        Key(code)
    }
}
impl From<Key> for i32 {
    fn from(k: Key) -> i32 {
        k.0
    }
}
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "Key({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn labels() {
        assert_eq!(Key::INVALID.to_string(), "Invalid");
        assert_eq!(Key::ARROW_LEFT.to_string(), "ArrowLeft");
        assert_eq!(Key::NUM_COMMA.to_string(), "NumComma");
        assert_eq!(Key::F24.to_string(), "F24");
        assert_eq!(Key::ERASE_EOF.to_string(), "EraseEOF");
    }

    #[test]
    fn unnamed_codes_fall_back_to_numbers() {
        assert_eq!(Key::from(9999).to_string(), "Key(9999)");
        assert_eq!(Key(-3).to_string(), "Key(-3)");
        assert!(!Key(148).is_named());
        assert_eq!(Key(148).label(), None);
    }

    #[test]
    fn codes_follow_declaration_order() {
        assert_eq!(Key::ALL.len(), 148);
        for (i, k) in Key::ALL.iter().enumerate() {
            assert_eq!(k.code(), i as i32, "{} is out of order", k);
            assert!(k.is_named());
        }
        assert_eq!(Key::A.code(), 82);
        assert_eq!(Key::Z.code(), 107);
    }

    #[test]
    fn default_is_invalid() {
        assert!(Key::default().is_invalid());
        assert_eq!(Key::from(0), Key::INVALID);
    }
}
