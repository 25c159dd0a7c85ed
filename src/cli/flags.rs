use clap::ArgAction;
use clap::builder::BoolishValueParser;

use crate::logging::LogLevel;
use crate::pass::DEFAULT_MAX_ATTEMPTS;
use crate::settings::{ConfigError, Settings, positive};

/// Generate random passwords from digits, letters and special characters.
///
/// Every enabled character class that survives exclusion appears at least
/// once in each password.
#[derive(Debug, clap::Parser)]
#[command(name = "passgen", version, about)]
pub struct CliFlags {
    /// Password length
    #[arg(short = 'L', long, default_value_t = 18, allow_negative_numbers = true)]
    pub length: i64,

    /// Use digits
    #[arg(
        short = 'd',
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true"
    )]
    pub digits: bool,

    /// Use letters
    #[arg(
        short = 'l',
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true"
    )]
    pub letters: bool,

    /// Use special characters
    #[arg(
        short = 's',
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value = "true",
        default_missing_value = "true"
    )]
    pub specials: bool,

    /// Number of passwords
    #[arg(short = 'c', long, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,

    /// Characters to exclude
    #[arg(short = 'e', long, default_value = "", allow_hyphen_values = true)]
    pub exclude: String,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "error")]
    pub log_level: String,

    /// Attempts per password before giving up on class coverage
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

impl TryFrom<CliFlags> for Settings {
    type Error = ConfigError;

    fn try_from(flags: CliFlags) -> Result<Self, Self::Error> {
        let log_level: LogLevel = flags
            .log_level
            .parse()
            .map_err(ConfigError::InvalidLogLevel)?;

        let pass_length =
            positive(flags.length).ok_or(ConfigError::NonPositiveLength(flags.length))?;
        let number_of_passwords =
            positive(flags.count).ok_or(ConfigError::NonPositiveCount(flags.count))?;

        if flags.max_attempts == 0 {
            return Err(ConfigError::NonPositiveMaxAttempts);
        }
        if !flags.digits && !flags.letters && !flags.specials {
            return Err(ConfigError::NoCharacterClass);
        }

        Ok(Settings {
            pass_length,
            number_of_passwords,
            use_digits: flags.digits,
            use_letters: flags.letters,
            use_specials: flags.specials,
            exclude: flags.exclude,
            log_level,
            max_attempts: flags.max_attempts,
        })
    }
}
