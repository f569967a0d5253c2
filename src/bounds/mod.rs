use crate::error::SamplingError;

/// Generic bounding box for N-dimensional space.
///
/// Sampling treats the box as half-open: a point is inside when
/// `min[a] <= p[a] < max[a]` holds on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Box spanning `[0, extent)` on every axis.
    pub fn from_extent(extent: [f64; D]) -> Self {
        Self { min: [0.0; D], max: extent }
    }

    /// Side lengths of the box.
    pub fn extent(&self) -> [f64; D] {
        let mut extent = [0.0; D];
        for a in 0..D {
            extent[a] = self.max[a] - self.min[a];
        }
        extent
    }

    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|a| point[a] >= self.min[a] && point[a] < self.max[a])
    }

    /// Checks that every axis has finite bounds and a positive extent.
    pub fn validate(&self) -> Result<(), SamplingError> {
        for axis in 0..D {
            let (min, max) = (self.min[axis], self.max[axis]);
            if !min.is_finite() || !max.is_finite() {
                return Err(SamplingError::InvalidBounds { axis, min, max });
            }
            let value = max - min;
            if !(value > 0.0) || !value.is_finite() {
                return Err(SamplingError::InvalidExtent { axis, value });
            }
        }
        Ok(())
    }
}
