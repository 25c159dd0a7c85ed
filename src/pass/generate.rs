//! Password generation.

use std::io::{self, Write};

use rand::Rng;
use tracing::{debug, error, trace};
use zeroize::{Zeroize, Zeroizing};

use super::charset::Alphabet;
use super::validate::is_valid;

/// Candidates drawn for a single password before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("empty character set")]
    EmptyAlphabet,

    #[error("a password of length {length} cannot contain all {live} available character classes")]
    LengthTooShort { length: usize, live: usize },

    #[error("no password satisfied the character class requirements after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

/// Produces passwords of a fixed length from a borrowed alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    alphabet: &'a Alphabet,
    length: usize,
    max_attempts: usize,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub failed: usize,
}

impl<'a> Generator<'a> {
    pub fn new(alphabet: &'a Alphabet, length: usize) -> Self {
        Self {
            alphabet,
            length,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate one password covering every live class of the alphabet.
    ///
    /// Candidates are drawn uniformly and discarded until one passes
    /// [`is_valid`], up to the configured attempt limit.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Zeroizing<String>, GenerateError> {
        if self.alphabet.is_empty() {
            return Err(GenerateError::EmptyAlphabet);
        }

        let live = self.alphabet.live_classes().count();
        if self.length < live {
            return Err(GenerateError::LengthTooShort {
                length: self.length,
                live,
            });
        }

        debug!("generating password of length {}", self.length);

        let chars = self.alphabet.as_slice();
        let mut candidate = Zeroizing::new(String::new());

        for attempt in 1..=self.max_attempts {
            candidate.clear();
            candidate.extend((0..self.length).map(|_| random_char(chars, rng)));

            if is_valid(&candidate, self.alphabet) {
                debug!(attempts = attempt, "password accepted");
                return Ok(candidate);
            }
            trace!(attempt, "candidate missing a character class, regenerating");
        }

        Err(GenerateError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Generate `count` passwords, writing each as one line to `out`.
///
/// A slot that fails is logged and skipped; the rest of the batch still runs.
pub fn generate_batch<R, W>(
    generator: &Generator<'_>,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<BatchSummary>
where
    R: Rng,
    W: Write,
{
    let mut summary = BatchSummary::default();
    let mut buf = Vec::new();

    for slot in 0..count {
        match generator.generate(rng) {
            Ok(pass) => {
                buf.extend_from_slice(pass.as_bytes());
                buf.push(b'\n');
                let written = out.write_all(&buf);
                buf.zeroize();
                written?;
                summary.written += 1;
            }
            Err(e) => {
                error!(slot, "generation failed: {e}");
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

#[inline]
fn random_char<R: Rng>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}
