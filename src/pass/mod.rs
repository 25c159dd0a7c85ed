//! Password generation and output.

pub mod charset;
pub mod entropy;
mod generate;
mod output;
mod validate;

pub use generate::{BatchSummary, DEFAULT_MAX_ATTEMPTS, GenerateError, Generator, generate_batch};
pub use output::SecureBufWriter;
