//! Key symbols and the 4×4 keypad layout.
//!
//! Layout (row-major, as printed on the common membrane keypad):
//! ```text
//!         col0 col1 col2 col3
//! row0:    1    2    3    A
//! row1:    4    5    6    B
//! row2:    7    8    9    C
//! row3:    *    0    #    D
//! ```

/// Number of driven row lines.
pub const ROWS: usize = 4;

/// Number of sensed column lines.
pub const COLS: usize = 4;

/// One of the 16 symbols on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    /// Every key, in keymap order.
    pub const ALL: [Key; ROWS * COLS] = [
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::A,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::B,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::C,
        Key::Star,
        Key::Num0,
        Key::Hash,
        Key::D,
    ];

    /// The character printed on the key cap.
    pub const fn as_char(self) -> char {
        match self {
            Key::Num0 => '0',
            Key::Num1 => '1',
            Key::Num2 => '2',
            Key::Num3 => '3',
            Key::Num4 => '4',
            Key::Num5 => '5',
            Key::Num6 => '6',
            Key::Num7 => '7',
            Key::Num8 => '8',
            Key::Num9 => '9',
            Key::A => 'A',
            Key::B => 'B',
            Key::C => 'C',
            Key::D => 'D',
            Key::Star => '*',
            Key::Hash => '#',
        }
    }

    /// Look up a key by its cap character. Letters are case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|k| k.as_char() == c)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Key {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_char())
    }
}

/// The keypad layout, indexed `[row][column]`.
pub const KEYMAP: [[Key; COLS]; ROWS] = [
    [Key::Num1, Key::Num2, Key::Num3, Key::A],
    [Key::Num4, Key::Num5, Key::Num6, Key::B],
    [Key::Num7, Key::Num8, Key::Num9, Key::C],
    [Key::Star, Key::Num0, Key::Hash, Key::D],
];

/// Key at a matrix intersection, or `None` if out of range.
pub fn key_at(row: usize, col: usize) -> Option<Key> {
    KEYMAP.get(row).and_then(|r| r.get(col)).copied()
}

/// Matrix intersection `(row, column)` of a key.
pub fn position(key: Key) -> (usize, usize) {
    for (row, keys) in KEYMAP.iter().enumerate() {
        for (col, &k) in keys.iter().enumerate() {
            if k == key {
                return (row, col);
            }
        }
    }
    unreachable!("every key appears in KEYMAP")
}
