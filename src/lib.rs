//! Random password generation with per-class coverage and character exclusion.

pub mod cli;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod settings;
