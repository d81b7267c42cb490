use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptor of the movement/mouse/jump inputs shown by the default overlay.
pub const FORWARD: &str = "key.forward";
pub const LEFT: &str = "key.left";
pub const BACK: &str = "key.back";
pub const RIGHT: &str = "key.right";
pub const ATTACK: &str = "key.attack";
pub const USE: &str = "key.use";
pub const JUMP: &str = "key.jump";

/// Prefix of raw keyboard inputs, e.g. `key.keyboard.left.shift`.
pub const KEYBOARD_PREFIX: &str = "key.keyboard.";

/// Stable string descriptor of a bindable input (key or mouse button).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputId(String);

impl InputId {
    pub fn new(descriptor: impl Into<String>) -> Self {
        InputId(descriptor.into())
    }

    /// Input for a raw keyboard key, e.g. `keyboard("Left Shift")` gives
    /// `key.keyboard.left.shift`.
    ///
    /// Punctuation is spelled out (`keyboard("Keypad /")` gives
    /// `key.keyboard.keypad.slash`) so `.` stays a word separator.
    pub fn keyboard(key_name: &str) -> Self {
        let words: Vec<String> = key_name.split_whitespace().flat_map(descriptor_words).collect();
        InputId(format!("{KEYBOARD_PREFIX}{}", words.join(".")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the seven inputs the default overlay shows.
    pub fn is_default_input(&self) -> bool {
        matches!(
            self.0.as_str(),
            FORWARD | LEFT | BACK | RIGHT | ATTACK | USE | JUMP
        )
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InputId {
    fn from(descriptor: &str) -> Self {
        InputId::new(descriptor)
    }
}

/// Splits one key-name token into descriptor words: runs of letters and
/// digits, and a word per punctuation character.
fn descriptor_words(token: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut run = String::new();

    for c in token.chars() {
        if c.is_alphanumeric() {
            run.extend(c.to_lowercase());
            continue;
        }
        if !run.is_empty() {
            words.push(std::mem::take(&mut run));
        }
        words.push(punctuation_word(c));
    }
    if !run.is_empty() {
        words.push(run);
    }

    words
}

fn punctuation_word(c: char) -> String {
    let word = match c {
        '.' => "period",
        ',' => "comma",
        '/' => "slash",
        '\\' => "backslash",
        ';' => "semicolon",
        ':' => "colon",
        '\'' => "apostrophe",
        '"' => "quote",
        '`' => "grave",
        '-' => "minus",
        '+' => "plus",
        '=' => "equal",
        '*' => "multiply",
        '[' => "left.bracket",
        ']' => "right.bracket",
        '(' => "left.paren",
        ')' => "right.paren",
        '#' => "hash",
        '&' => "ampersand",
        '!' => "exclaim",
        '?' => "question",
        '<' => "less",
        '>' => "greater",
        '_' => "underscore",
        '$' => "dollar",
        '%' => "percent",
        '^' => "caret",
        '@' => "at",
        _ => return format!("u{:04x}", c as u32),
    };
    word.to_string()
}

/// Capitalises the first letter of every word and lowercases the rest.
pub fn make_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c == ' ' {
            word_start = true;
            result.push(c);
        } else if word_start {
            result.extend(c.to_uppercase());
            word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Human readable name derived from a raw keyboard descriptor.
///
/// `key.keyboard.left.shift` becomes `Left Shift`. Returns `None` for
/// descriptors outside the keyboard namespace.
pub fn keyboard_key_name(input: &InputId) -> Option<String> {
    input
        .as_str()
        .strip_prefix(KEYBOARD_PREFIX)
        .map(|rest| make_sentence(&rest.replace('.', " ")))
}
