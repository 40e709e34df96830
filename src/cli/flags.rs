use std::path::PathBuf;

use clap::Parser;

use crate::history;
use crate::pass::{CharClass, GenerationConfig};
use crate::settings::Settings;

/// Generate passwords with at least one character from every selected class.
///
/// Run without arguments for the interactive form.
#[derive(Debug, Default, Parser)]
#[command(name = "passgen", version, about)]
pub struct CliFlags {
    /// Characters per password (widened to the number of enabled classes)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Exclude lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude special characters
    #[arg(long, conflicts_with = "special")]
    pub no_special: bool,

    /// Use CHARS as the special character set
    #[arg(long, value_name = "CHARS")]
    pub special: Option<String>,

    /// Append the batch to a history file [default from settings: passwords.txt]
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub output: Option<String>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings, entropy and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form
    #[arg(short, long)]
    pub interactive: bool,
}

impl CliFlags {
    /// Settings with these flags applied on top.
    pub fn to_config(&self, settings: &Settings) -> GenerationConfig {
        let mut config = settings.generation_config();

        if let Some(len) = self.length {
            config.length = len;
        }
        if let Some(num) = self.number {
            config.count = num;
        }

        for (off, class) in [
            (self.no_lower, CharClass::Lowercase),
            (self.no_upper, CharClass::Uppercase),
            (self.no_digits, CharClass::Digit),
            (self.no_special, CharClass::Special),
        ] {
            if off {
                config.classes.remove(&class);
            }
        }

        if let Some(ref chars) = self.special {
            config.special_chars = Some(chars.clone());
            config.classes.insert(CharClass::Special);
        }

        config
    }

    /// History file to append to, if `--output` was given.
    pub fn output_path(&self, settings: &Settings) -> Option<PathBuf> {
        self.output.as_deref().map(|path| {
            if path.is_empty() {
                history::resolve_path(&settings.output_file)
            } else {
                history::resolve_path(path)
            }
        })
    }
}
