//! Password generation.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use tracing::debug;
use zeroize::Zeroize;

use super::charset::Charset;
use super::config::GenerationConfig;
use crate::error::Result;

/// Passwords from one generation call.
///
/// Contents are zeroized on drop and redacted from `Debug`.
pub struct Batch {
    passwords: Vec<String>,
    requested_length: usize,
    effective_length: usize,
}

impl Batch {
    pub fn passwords(&self) -> &[String] {
        &self.passwords
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.passwords.iter()
    }

    pub const fn requested_length(&self) -> usize {
        self.requested_length
    }

    /// Length of every password in the batch.
    pub const fn effective_length(&self) -> usize {
        self.effective_length
    }

    /// Set once per batch when the requested length was too short for the
    /// enabled classes.
    pub const fn is_widened(&self) -> bool {
        self.effective_length > self.requested_length
    }

    /// Passwords joined with `\n`, without a trailing newline.
    pub fn joined(&self) -> String {
        self.passwords.join("\n")
    }
}

impl fmt::Debug for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("count", &self.passwords.len())
            .field("requested_length", &self.requested_length)
            .field("effective_length", &self.effective_length)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for Batch {
    fn drop(&mut self) {
        self.passwords.zeroize();
    }
}

/// Generate a batch using the thread-local cryptographic generator.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfig`] if the config fails validation.
/// No randomness is consumed in that case.
pub fn generate(config: &GenerationConfig) -> Result<Batch> {
    generate_with(config, &mut rand::rng())
}

/// Generate a batch from a caller-supplied cryptographic generator.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfig`] if the config fails validation.
pub fn generate_with<R: CryptoRng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Batch> {
    config.validate()?;

    let charset = config.charset();
    let pool = charset.combined();
    let length = config.effective_length();

    if config.is_widened() {
        debug!(
            requested = config.length,
            effective = length,
            classes = charset.class_count(),
            "Length widened to fit one character per class"
        );
    }

    let passwords = (0..config.count)
        .map(|_| password(&charset, &pool, length, rng))
        .collect();

    debug!(count = config.count, length, pool = pool.len(), "Batch generated");

    Ok(Batch {
        passwords,
        requested_length: config.length,
        effective_length: length,
    })
}

/// Build one password: a guaranteed character per class, the rest from the
/// combined pool, then a uniform shuffle.
///
/// Every pool must be non-empty and `length >= charset.class_count()`.
fn password<R: CryptoRng + ?Sized>(
    charset: &Charset,
    pool: &[char],
    length: usize,
    rng: &mut R,
) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(length);

    chars.extend(charset.pools().map(|class_pool| pick(class_pool, rng)));

    let fill = length - chars.len();
    chars.extend((0..fill).map(|_| pick(pool, rng)));

    chars.shuffle(rng);

    let pass: String = chars.iter().collect();
    chars.zeroize();
    pass
}

#[inline]
fn pick<R: CryptoRng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}
