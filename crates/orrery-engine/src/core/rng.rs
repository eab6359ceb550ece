//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no external rand crate.

use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// The seed is scrambled with one splitmix64 step so that small seeds
    /// (1, 2, 42...) do not start from a state with mostly-zero high bits.
    pub fn new(seed: u64) -> Self {
        let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        Rng {
            state: if z == 0 { 1 } else { z },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact in f32.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform angle in [0, 2π) radians.
    pub fn next_angle(&mut self) -> f32 {
        // TAU * (just under 1) can round up to TAU in f32
        let a = self.next_f32() * TAU;
        if a >= TAU { 0.0 } else { a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_f32(), rng2.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        let first = rng.next_f32();
        assert!((0.0..1.0).contains(&first));
        assert_ne!(rng.state, 0);
    }

    #[test]
    fn floats_and_angles_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f), "f = {f}");
            let a = rng.next_angle();
            assert!((0.0..TAU).contains(&a), "a = {a}");
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        assert_ne!(a.next_f32(), b.next_f32());
    }

    #[test]
    fn small_seeds_do_not_start_at_zero() {
        for seed in 0..64 {
            let mut rng = Rng::new(seed);
            assert_ne!(rng.next_f32(), 0.0, "seed {seed}");
        }
    }
}
