//! Command-line front end.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::Result;
use crate::settings::Settings;

/// Run CLI mode with the full argument list (program name first).
pub fn run(args: Vec<String>, settings: Settings) -> Result<()> {
    Context::new(args, settings).run()
}
