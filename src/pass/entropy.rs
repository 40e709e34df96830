//! Entropy estimate for display.

/// Bits of entropy for `length` characters drawn from `pool_size` symbols.
pub fn bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Get entropy strength description.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
