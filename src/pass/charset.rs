//! Character set building for password generation.

use std::fmt;

use tracing::{debug, warn};

use crate::settings::Settings;

const DIGITS: &str = "0123456789";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SPECIALS: &str = "~%^&*_-@!+#$";

/// A named group of characters that can be enabled for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Digit,
    Letter,
    Special,
}

impl CharacterClass {
    /// Every class, in alphabet assembly order.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Digit,
        CharacterClass::Letter,
        CharacterClass::Special,
    ];

    /// The classes switched on by the digit, letter and special flags.
    pub fn enabled(
        use_digits: bool,
        use_letters: bool,
        use_specials: bool,
    ) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .zip([use_digits, use_letters, use_specials])
            .filter_map(|(class, on)| on.then_some(class))
    }

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Digit => DIGITS,
            CharacterClass::Letter => LETTERS,
            CharacterClass::Special => SPECIALS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Digit => "digits",
            CharacterClass::Letter => "letters",
            CharacterClass::Special => "specials",
        }
    }
}

/// The pool of characters eligible for sampling, after exclusions.
///
/// Built once per run and shared read-only by every generation call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Concatenate the enabled classes, then drop every character in `exclude`.
    pub fn new(classes: impl IntoIterator<Item = CharacterClass>, exclude: &str) -> Self {
        let mut chars: Vec<char> = Vec::new();

        for class in classes {
            chars.extend(class.chars().chars());
            debug!("added {}", class.name());
        }

        if chars.is_empty() || exclude.is_empty() {
            return Self { chars };
        }

        let original_len = chars.len();
        chars.retain(|c| !exclude.contains(*c));

        if chars.is_empty() {
            warn!("all characters excluded");
        } else if chars.len() < original_len {
            debug!("excluded {} characters", original_len - chars.len());
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// A class is live when at least one of its characters survived exclusion.
    pub fn is_live(&self, class: CharacterClass) -> bool {
        self.chars.iter().any(|&c| class.contains(c))
    }

    pub fn live_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.is_live(class))
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the alphabet from explicit class flags.
pub fn build_alphabet(
    use_digits: bool,
    use_letters: bool,
    use_specials: bool,
    exclude: &str,
) -> Alphabet {
    Alphabet::new(
        CharacterClass::enabled(use_digits, use_letters, use_specials),
        exclude,
    )
}

/// Build the alphabet described by `settings`.
pub fn build(settings: &Settings) -> Alphabet {
    Alphabet::new(settings.enabled_classes(), &settings.exclude)
}
