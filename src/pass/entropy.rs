//! Entropy estimate for the configured password shape.

use std::fmt;

use super::charset::Alphabet;

/// Bits of entropy in `length` uniform draws from `alphabet`.
///
/// Repeated characters count once per occurrence, matching how sampling
/// weights them. The class coverage rule trims a little off this figure, so
/// treat it as an upper bound.
pub fn entropy_bits(length: usize, alphabet: &Alphabet) -> f64 {
    if alphabet.is_empty() {
        return 0.0;
    }
    length as f64 * (alphabet.len() as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        })
    }
}
