//! Uniform random source used by the scratch sampler.
//!
//! Sampling 20k arcs in one reset means tens of thousands of draws per frame,
//! so the hot path uses a small xorshift generator that is seeded once from
//! the platform entropy source (browser `crypto.getRandomValues` on wasm).

/// Yields independent uniform samples in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform in `[lo, hi)`.
    fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// xorshift64* generator. Not cryptographic, not reproducible across runs.
#[derive(Debug, Clone)]
pub struct FastRng {
    state: u64,
}

// Used only when the entropy source is unavailable; any non-zero value works.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

impl FastRng {
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 8];
        let seed = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(err) => {
                log::warn!("entropy source unavailable ({err}), using fixed seed");
                FALLBACK_SEED
            }
        };
        Self { state: if seed == 0 { FALLBACK_SEED } else { seed } }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl Default for FastRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl UniformSource for FastRng {
    fn next_unit(&mut self) -> f64 {
        // top 53 bits -> [0, 1)
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_samples_stay_in_half_open_interval() {
        let mut rng = FastRng::from_entropy();
        for _ in 0..50_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u), "sample {u} out of range");
        }
    }

    #[test]
    fn samples_cover_both_halves() {
        let mut rng = FastRng::from_entropy();
        let below = (0..10_000).filter(|_| rng.next_unit() < 0.5).count();
        assert!(below > 4_000 && below < 6_000, "skewed split: {below}");
    }

    #[test]
    fn next_range_respects_bounds() {
        let mut rng = FastRng::default();
        for _ in 0..1_000 {
            let v = rng.next_range(20.0, 55.0);
            assert!((20.0..55.0).contains(&v));
        }
    }
}
