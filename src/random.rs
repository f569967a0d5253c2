//! Uniform draws feeding seed placement, candidate offsets and active-list selection.

use rand::Rng;

/// A source of uniformly distributed scalars.
///
/// Every [`rand::Rng`] is a `RandomSource`, so `rand::thread_rng()` gives the
/// default non-reproducible behaviour and a seeded `StdRng` gives repeatable runs.
pub trait RandomSource {
    /// Uniform real in `[min, max)`. Requires `min < max`.
    fn uniform_real(&mut self, min: f64, max: f64) -> f64;

    /// Uniform integer in `[min, max]`, both ends inclusive. Requires `min <= max`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        self.gen_range(min..max)
    }

    #[inline]
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        self.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_real_draws_stay_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = rng.uniform_real(2.5, 3.0);
            assert!((2.5..3.0).contains(&v), "draw {} escaped [2.5, 3.0)", v);
        }
    }

    #[test]
    fn test_int_draws_hit_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let v = rng.uniform_int(0, 3);
            assert!(v <= 3);
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every value in [0, 3] was drawn: {:?}", seen);
    }

    #[test]
    fn test_single_value_int_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(rng.uniform_int(5, 5), 5);
    }

    #[test]
    fn test_works_through_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let v = dyn_rng.uniform_real(0.0, 1.0);
        assert!((0.0..1.0).contains(&v));
    }
}
