//! Candidate offsets around an active sample.
//!
//! Both shells draw the angles and the radius independently and uniformly. This is
//! uniform in angle, not in area or volume, so candidates are slightly denser near
//! the inner radius. Bridson's paper makes the same approximation.

use std::f64::consts::{PI, TAU};

use crate::random::RandomSource;

/// Draws an offset vector whose length lies in `[inner, outer)`.
pub trait Shell<const D: usize> {
    fn offset<R: RandomSource + ?Sized>(&self, rng: &mut R, inner: f64, outer: f64) -> [f64; D];
}

/// Ring between two circles, used for 2D sampling.
#[derive(Clone, Copy, Debug, Default)]
pub struct Annulus;

impl Shell<2> for Annulus {
    #[inline]
    fn offset<R: RandomSource + ?Sized>(&self, rng: &mut R, inner: f64, outer: f64) -> [f64; 2] {
        let theta = rng.uniform_real(0.0, TAU);
        let radius = rng.uniform_real(inner, outer);
        [radius * theta.cos(), radius * theta.sin()]
    }
}

/// Region between two concentric spheres, used for 3D sampling.
#[derive(Clone, Copy, Debug, Default)]
pub struct SphericalShell;

impl Shell<3> for SphericalShell {
    #[inline]
    fn offset<R: RandomSource + ?Sized>(&self, rng: &mut R, inner: f64, outer: f64) -> [f64; 3] {
        let theta = rng.uniform_real(0.0, TAU);
        let phi = rng.uniform_real(0.0, PI);
        let radius = rng.uniform_real(inner, outer);
        let (sin_phi, cos_phi) = phi.sin_cos();
        [
            radius * theta.cos() * sin_phi,
            radius * theta.sin() * sin_phi,
            radius * cos_phi,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn length<const D: usize>(v: &[f64; D]) -> f64 {
        v.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    #[test]
    fn test_annulus_radius_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5_000 {
            let v = Annulus.offset(&mut rng, 2.0, 4.0);
            let len = length(&v);
            assert!(len >= 2.0 - 1e-9 && len < 4.0 + 1e-9, "offset length {} outside [2, 4)", len);
        }
    }

    #[test]
    fn test_spherical_shell_radius_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..5_000 {
            let v = SphericalShell.offset(&mut rng, 15.0, 30.0);
            let len = length(&v);
            assert!(len >= 15.0 - 1e-9 && len < 30.0 + 1e-9, "offset length {} outside [15, 30)", len);
        }
    }

    #[test]
    fn test_offsets_cover_all_directions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut octants = [false; 8];
        for _ in 0..2_000 {
            let v = SphericalShell.offset(&mut rng, 1.0, 2.0);
            let o = (v[0] > 0.0) as usize | ((v[1] > 0.0) as usize) << 1 | ((v[2] > 0.0) as usize) << 2;
            octants[o] = true;
        }
        assert!(octants.iter().all(|&o| o), "missing octants: {:?}", octants);

        let mut quadrants = [false; 4];
        for _ in 0..1_000 {
            let v = Annulus.offset(&mut rng, 1.0, 2.0);
            quadrants[(v[0] > 0.0) as usize | ((v[1] > 0.0) as usize) << 1] = true;
        }
        assert!(quadrants.iter().all(|&q| q));
    }
}
