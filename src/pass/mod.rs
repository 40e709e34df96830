//! Password generation core.

pub mod charset;
mod config;
pub mod entropy;
mod generate;

pub use charset::{CharClass, Charset};
pub use config::{DEFAULT_LENGTH, DEFAULT_MAX_COUNT, GenerationConfig};
pub use generate::{Batch, generate, generate_with};
