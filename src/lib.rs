//! # passgen
//!
//! Password generator that guarantees at least one character from every
//! enabled class (lowercase, uppercase, digit, special), fills the rest from
//! the combined pool and shuffles with a cryptographic generator.
//!
//! ```no_run
//! use passgen::pass::{CharClass, GenerationConfig, generate};
//!
//! let config = GenerationConfig::new(16, 3)
//!     .with_classes([CharClass::Lowercase, CharClass::Digit]);
//! let batch = generate(&config)?;
//! for pass in &batch {
//!     println!("{pass}");
//! }
//! # Ok::<(), passgen::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod history;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

use std::process::ExitCode;

pub use error::{Error, Result};

use settings::Settings;

/// Entry point shared by the binary: interactive form when started bare on a
/// terminal, CLI otherwise.
pub fn run(args: Vec<String>) -> ExitCode {
    let settings = Settings::load().unwrap_or_else(|e| {
        cli::prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    });
    logging::init(&settings.log_level);

    let result = match args.len() {
        1 if cli::quiet::is_interactive() => tui::run(&settings),
        _ => cli::run(args, settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}
