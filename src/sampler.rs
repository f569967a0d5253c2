use crate::bounds::BoundingBox;
use crate::config::SamplerConfig;
use crate::error::SamplingError;
use crate::grid::SpatialGrid;
use crate::grid::d2::Grid2D;
use crate::grid::d3::Grid3D;
use crate::random::RandomSource;
use crate::shell::{Annulus, Shell, SphericalShell};

/// Poisson disk sampler for the plane.
pub type Sampler2D = PoissonSampler<2, Grid2D, Annulus>;
/// Poisson disk sampler for space.
pub type Sampler3D = PoissonSampler<3, Grid3D, SphericalShell>;

/// Counters collected during a single sampling run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleStats {
    /// Candidates drawn around active samples.
    pub candidates: usize,
    /// Candidates that fell outside the domain.
    pub out_of_bounds: usize,
    /// Candidates whose cell already held a sample.
    pub occupied: usize,
    /// Candidates closer than the minimum distance to a neighbour.
    pub too_close: usize,
    /// Samples accepted, including the seed.
    pub accepted: usize,
    /// Samples retired from the active list.
    pub retired: usize,
    /// Active-list selections.
    pub iterations: usize,
}

/// Dart-throwing Poisson disk sampler (Bridson, 2007) accelerated by a background grid.
///
/// The grid `G` bounds each validity check to a constant number of cells and the shell
/// `S` proposes candidates between `r` and `2r` from an active sample. A sampler can be
/// run repeatedly; every run starts from an empty grid and keeps its result until the
/// next call to [`generate`](Self::generate).
pub struct PoissonSampler<const D: usize, G: SpatialGrid<D>, S: Shell<D>> {
    config: SamplerConfig<D>,
    shell: S,
    grid: G,
    points: Vec<[f64; D]>,
    active: Vec<usize>,
    stats: SampleStats,
}

impl<const D: usize, G: SpatialGrid<D>, S: Shell<D> + Default> PoissonSampler<D, G, S> {
    /// Creates a sampler after checking `config` against the sampling preconditions.
    pub fn new(config: SamplerConfig<D>) -> Result<Self, SamplingError> {
        config.validate()?;
        let grid = G::new(&config.bounds, config.min_distance)?;
        Ok(Self {
            config,
            shell: S::default(),
            grid,
            points: Vec::new(),
            active: Vec::new(),
            stats: SampleStats::default(),
        })
    }
}

impl<const D: usize, G: SpatialGrid<D>, S: Shell<D>> PoissonSampler<D, G, S> {
    pub fn config(&self) -> &SamplerConfig<D> {
        &self.config
    }

    pub fn bounds(&self) -> &BoundingBox<D> {
        &self.config.bounds
    }

    /// Samples accepted by the last run, in acceptance order.
    pub fn points(&self) -> &[[f64; D]] {
        &self.points
    }

    pub fn into_points(self) -> Vec<[f64; D]> {
        self.points
    }

    /// The background grid as left by the last run.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }

    /// Runs the sampler and returns the accepted samples.
    ///
    /// The first sample is drawn uniformly from the domain. Afterwards an active sample
    /// is picked at random and up to `max_attempts` candidates are thrown around it; the
    /// first valid one is accepted, and if none is, the active sample is retired. The run
    /// ends when no active samples remain, which is bounded by the grid's cell count.
    pub fn generate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> &[[f64; D]] {
        let min_distance = self.config.min_distance;
        let max_attempts = self.config.max_attempts;
        let bounds = self.config.bounds;

        // Each run starts from an empty grid; cells are then written at most once.
        self.grid.clear();
        self.points.clear();
        self.active.clear();
        self.stats = SampleStats::default();

        let reach = self.grid.neighbor_reach(min_distance);
        let min_dist_sq = min_distance * min_distance;

        let mut seed = [0.0; D];
        for a in 0..D {
            seed[a] = rng.uniform_real(bounds.min[a], bounds.max[a]);
        }
        let seed_cell = self.grid.world_to_cell(&seed);
        self.accept(seed, seed_cell);

        while !self.active.is_empty() {
            self.stats.iterations += 1;
            let i = rng.uniform_int(0, self.active.len() - 1);
            let center = self.points[self.active[i]];

            let mut found = false;
            for _ in 0..max_attempts {
                self.stats.candidates += 1;

                let offset = self.shell.offset(rng, min_distance, 2.0 * min_distance);
                let mut candidate = center;
                for a in 0..D {
                    candidate[a] += offset[a];
                }

                if !bounds.contains(&candidate) {
                    self.stats.out_of_bounds += 1;
                    continue;
                }

                let cell = self.grid.world_to_cell(&candidate);
                if self.grid.get(cell).is_some() {
                    self.stats.occupied += 1;
                    continue;
                }

                let points = &self.points;
                let conflict = self.grid.any_neighbor(cell, reach, |j| {
                    distance_sq(&points[j], &candidate) < min_dist_sq
                });
                if conflict {
                    self.stats.too_close += 1;
                    continue;
                }

                self.accept(candidate, cell);
                found = true;
                break;
            }

            if !found {
                let retired = self.active.swap_remove(i);
                self.stats.retired += 1;
                log::trace!("retired sample {} after {} attempts", retired, max_attempts);
            }
        }

        log::debug!(
            "sampled {} points in {} iterations ({} candidates) on a {:?} grid",
            self.points.len(),
            self.stats.iterations,
            self.stats.candidates,
            self.grid.resolution()
        );

        &self.points
    }

    fn accept(&mut self, point: [f64; D], cell: [usize; D]) {
        let index = self.points.len();
        self.grid.set(index, cell);
        self.points.push(point);
        self.active.push(index);
        self.stats.accepted += 1;
    }
}

#[inline]
fn distance_sq<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    let mut sum = 0.0;
    for k in 0..D {
        let d = a[k] - b[k];
        sum += d * d;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sampler_2d(w: f64, h: f64, r: f64) -> Sampler2D {
        Sampler2D::new(SamplerConfig::new(BoundingBox::from_extent([w, h]), r)).unwrap()
    }

    #[test]
    fn test_distance_sq() {
        assert_eq!(distance_sq(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(distance_sq(&[1.0, 1.0, 1.0], &[1.0, 1.0, 3.0]), 4.0);
    }

    #[test]
    fn test_stats_are_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sampler = sampler_2d(50.0, 50.0, 3.0);
        let count = sampler.generate(&mut rng).len();
        let stats = *sampler.stats();

        assert_eq!(stats.accepted, count);
        // Every sample is eventually retired.
        assert_eq!(stats.retired, count);
        // Each iteration either accepts a candidate or retires a sample.
        assert_eq!(stats.iterations, (count - 1) + stats.retired);
        assert_eq!(
            stats.candidates,
            stats.out_of_bounds + stats.occupied + stats.too_close + (count - 1)
        );
    }

    #[test]
    fn test_grid_holds_every_sample_once() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sampler = sampler_2d(40.0, 30.0, 2.0);
        sampler.generate(&mut rng);

        let grid = sampler.grid();
        assert_eq!(grid.occupied(), sampler.points().len());
        for (i, p) in sampler.points().iter().enumerate() {
            assert_eq!(grid.get(grid.world_to_cell(p)), Some(i));
        }
        let registered = grid.cells.iter().filter(|c| c.is_some()).count();
        assert_eq!(registered, sampler.points().len());
    }

    #[test]
    fn test_grid_invariant_3d() {
        let mut rng = StdRng::seed_from_u64(6);
        let config = SamplerConfig::new(BoundingBox::from_extent([20.0, 20.0, 20.0]), 3.0);
        let mut sampler = Sampler3D::new(config).unwrap();
        sampler.generate(&mut rng);

        let grid = sampler.grid();
        assert_eq!(grid.occupied(), sampler.points().len());
        for (i, p) in sampler.points().iter().enumerate() {
            assert_eq!(grid.get(grid.world_to_cell(p)), Some(i));
        }
    }

    #[test]
    fn test_sampler_reuse_starts_fresh() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sampler = sampler_2d(30.0, 30.0, 2.0);

        let first = sampler.generate(&mut rng).to_vec();
        let second = sampler.generate(&mut rng).to_vec();

        assert!(!first.is_empty() && !second.is_empty());
        assert_ne!(first, second);
        assert_eq!(sampler.grid().occupied(), second.len());
        assert_eq!(sampler.stats().accepted, second.len());
    }

    #[test]
    fn test_single_attempt_still_terminates() {
        let mut rng = StdRng::seed_from_u64(10);
        let config = SamplerConfig::new(BoundingBox::from_extent([20.0, 20.0]), 1.0).with_max_attempts(1);
        let mut sampler = Sampler2D::new(config).unwrap();
        let points = sampler.generate(&mut rng);
        assert!(!points.is_empty());
        assert_eq!(sampler.stats().retired, sampler.stats().accepted);
    }

    #[test]
    fn test_offset_domain() {
        let mut rng = StdRng::seed_from_u64(12);
        let bounds = BoundingBox::new([-10.0, 100.0], [10.0, 120.0]);
        let mut sampler = Sampler2D::new(SamplerConfig::new(bounds, 2.0)).unwrap();
        let points = sampler.generate(&mut rng);
        assert!(points.len() > 1);
        assert!(points.iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SamplerConfig::new(BoundingBox::from_extent([10.0, 10.0]), 0.0);
        assert!(matches!(Sampler2D::new(config), Err(SamplingError::InvalidDistance(_))));
    }
}
