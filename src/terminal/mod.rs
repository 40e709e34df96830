//! Terminal helpers for the interactive form.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::RawModeGuard;
