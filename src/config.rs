use crate::bounds::BoundingBox;
use crate::error::SamplingError;

/// Candidates tried around an active sample before it is retired. Bridson suggests 30.
pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// Parameters of a sampling run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplerConfig<const D: usize> {
    /// Domain the samples are drawn from, half-open on every axis.
    pub bounds: BoundingBox<D>,
    /// Minimum distance between any two samples.
    pub min_distance: f64,
    /// Candidates tried per active sample.
    pub max_attempts: usize,
}

impl<const D: usize> SamplerConfig<D> {
    pub fn new(bounds: BoundingBox<D>, min_distance: f64) -> Self {
        Self {
            bounds,
            min_distance,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<(), SamplingError> {
        self.bounds.validate()?;
        // Candidates are drawn out to twice the distance, which must stay finite too.
        if !(self.min_distance > 0.0) || !(2.0 * self.min_distance).is_finite() {
            return Err(SamplingError::InvalidDistance(self.min_distance));
        }
        if self.max_attempts == 0 {
            return Err(SamplingError::InvalidAttempts(self.max_attempts));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::new(BoundingBox::from_extent([1.0, 2.0]), 0.5);
        assert_eq!(config.max_attempts, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_distance() {
        let bounds = BoundingBox::from_extent([1.0, 1.0, 1.0]);
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = SamplerConfig::new(bounds, r).validate().unwrap_err();
            assert!(matches!(err, SamplingError::InvalidDistance(_)), "distance {} gave {:?}", r, err);
        }
    }

    #[test]
    fn test_rejects_distance_with_infinite_outer_radius() {
        let bounds = BoundingBox::from_extent([1.0, 1.0]);
        let err = SamplerConfig::new(bounds, f64::MAX).validate().unwrap_err();
        assert_eq!(err, SamplingError::InvalidDistance(f64::MAX));
        assert!(SamplerConfig::new(bounds, f64::MAX / 4.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let config = SamplerConfig::new(BoundingBox::from_extent([1.0, 1.0]), 0.1).with_max_attempts(0);
        assert_eq!(config.validate(), Err(SamplingError::InvalidAttempts(0)));
    }

    #[test]
    fn test_bounds_checked_first() {
        let config = SamplerConfig::new(BoundingBox::from_extent([-1.0, 1.0]), -1.0);
        assert!(matches!(config.validate(), Err(SamplingError::InvalidExtent { axis: 0, .. })));
    }
}
