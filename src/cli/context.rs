//! CLI context - bundles settings and the alphabet built from them.

use std::io::{self, Write};

use rand::Rng;
use tracing::{debug, info};

use crate::pass::charset::{self, Alphabet};
use crate::pass::entropy::{self, Strength};
use crate::pass::{BatchSummary, Generator, SecureBufWriter, generate_batch};
use crate::settings::{ConfigError, Settings};

/// Application context for one run.
#[derive(Debug)]
pub struct Context {
    pub settings: Settings,
    alphabet: Alphabet,
}

impl Context {
    /// Build the alphabet and reject configurations that cannot produce a
    /// single valid password.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let alphabet = charset::build(&settings);
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        debug!(size = alphabet.len(), "character set: {alphabet}");

        let live = alphabet.live_classes().count();
        if settings.pass_length < live {
            return Err(ConfigError::LengthTooShort {
                length: settings.pass_length,
                live,
            });
        }

        let bits = entropy::entropy_bits(settings.pass_length, &alphabet);
        info!("estimated entropy: {bits:.1} bits ({})", Strength::from_bits(bits));

        Ok(Self { settings, alphabet })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generate every requested password into `out`.
    pub fn generate_output<R: Rng, W: Write>(
        &self,
        rng: &mut R,
        out: W,
    ) -> io::Result<BatchSummary> {
        let generator = Generator::new(&self.alphabet, self.settings.pass_length)
            .max_attempts(self.settings.max_attempts);
        let mut out = SecureBufWriter::new(out);
        generate_batch(&generator, self.settings.number_of_passwords, rng, &mut out)
    }
}
