//! Class coverage check for candidate passwords.

use super::charset::{Alphabet, CharacterClass};

/// Every class live in `alphabet` must be represented in `password`.
///
/// Classes with no characters left in the alphabet impose nothing, since no
/// draw could ever produce them.
pub fn is_valid(password: &str, alphabet: &Alphabet) -> bool {
    CharacterClass::ALL
        .into_iter()
        .all(|class| !alphabet.is_live(class) || is_represented(password, class))
}

fn is_represented(password: &str, class: CharacterClass) -> bool {
    password.chars().any(|c| class.contains(c))
}
