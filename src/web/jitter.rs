//! Multiplicative jitter

use rand::Rng;

/// Scale `value` by a uniform factor in `[1 - factor, 1 + factor]`
///
/// A zero factor returns `value` untouched and draws nothing from `rng`.
pub fn fuzz<R: Rng + ?Sized>(rng: &mut R, value: f64, factor: f64) -> f64 {
    if factor == 0.0 {
        return value;
    }
    value * (1.0 + rng.gen_range(-factor..=factor))
}
