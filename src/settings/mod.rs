//! Password generation settings.

use crate::logging::LogLevel;
use crate::pass::DEFAULT_MAX_ATTEMPTS;
use crate::pass::charset::CharacterClass;

/// Problems that stop the run before any password is generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("password length must be a positive number, got {0}")]
    NonPositiveLength(i64),

    #[error("password count must be a positive number, got {0}")]
    NonPositiveCount(i64),

    #[error("max attempts must be a positive number")]
    NonPositiveMaxAttempts,

    #[error("at least one character type must be selected")]
    NoCharacterClass,

    #[error("character set is empty after exclusions")]
    EmptyAlphabet,

    #[error("password length {length} is too short to include all {live} available character classes")]
    LengthTooShort { length: usize, live: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_digits: bool,
    pub use_letters: bool,
    pub use_specials: bool,
    pub exclude: String,
    pub log_level: LogLevel,
    pub max_attempts: usize,
}

impl Settings {
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::enabled(self.use_digits, self.use_letters, self.use_specials)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 18,
            number_of_passwords: 1,
            use_digits: true,
            use_letters: true,
            use_specials: true,
            exclude: String::new(),
            log_level: LogLevel::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Convert a signed flag value, rejecting zero and negatives.
pub(crate) fn positive(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&n| n > 0)
}
