//! Deterministic randomness for nested-level spawning

/// Replacement seed when the host passes 0 (xorshift would stay at 0 forever)
pub const FALLBACK_SEED: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in `[lo, hi]`
#[inline]
pub fn random_range(state: &mut u32, lo: f64, hi: f64) -> f64 {
    let unit = xorshift32(state) as f64 / u32::MAX as f64;
    lo + (hi - lo) * unit
}

pub fn seed_or_fallback(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_stays_in_bounds() {
        let mut state = 7;
        for _ in 0..10_000 {
            let v = random_range(&mut state, -20.0, 20.0);
            assert!((-20.0..=20.0).contains(&v));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 99;
        let mut b = 99;
        for _ in 0..16 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn zero_seed_is_replaced() {
        assert_eq!(seed_or_fallback(0), FALLBACK_SEED);
        assert_eq!(seed_or_fallback(3), 3);
    }
}
