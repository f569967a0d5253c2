use crate::bounds::BoundingBox;
use crate::config::SamplerConfig;
use crate::sampler::Sampler3D;
use crate::wasm::utils::{entropy_rng, flatten, seeded_rng, to_js_points};
use js_sys::Array;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// Samples `[0, width) x [0, height) x [0, depth)` and returns the points flattened.
#[wasm_bindgen]
pub fn sample3d(
    width: f64,
    height: f64,
    depth: f64,
    min_distance: f64,
    max_attempts: usize,
) -> Result<Vec<f64>, JsError> {
    let points = crate::sample_3d(width, height, depth, min_distance, max_attempts)?;
    Ok(flatten(&points))
}

// --- Bounding Box ---

/// Represents an axis-aligned bounding box in 3D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> BoundingBox3D {
        BoundingBox3D {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }
}

impl From<BoundingBox3D> for BoundingBox<3> {
    fn from(b: BoundingBox3D) -> Self {
        Self {
            min: [b.min_x, b.min_y, b.min_z],
            max: [b.max_x, b.max_y, b.max_z],
        }
    }
}

// --- Sampler ---

#[wasm_bindgen(js_name = PoissonSampler3D)]
pub struct PoissonSampler3D {
    inner: Sampler3D,
    rng: StdRng,
}

#[wasm_bindgen(js_class = PoissonSampler3D)]
impl PoissonSampler3D {
    #[wasm_bindgen(constructor)]
    pub fn new(bounds: BoundingBox3D, min_distance: f64, max_attempts: usize) -> Result<PoissonSampler3D, JsError> {
        let config = SamplerConfig::new(bounds.into(), min_distance).with_max_attempts(max_attempts);
        Ok(PoissonSampler3D { inner: Sampler3D::new(config)?, rng: entropy_rng() })
    }
    /// Switches to a reproducible generator.
    pub fn seed(&mut self, seed: u64) { self.rng = seeded_rng(seed); }
    pub fn generate(&mut self) -> Vec<f64> { flatten(self.inner.generate(&mut self.rng)) }
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize { self.inner.points().len() }
    #[wasm_bindgen(getter)]
    pub fn min_distance(&self) -> f64 { self.inner.config().min_distance }
    pub fn get_point(&self, index: usize) -> Option<Vec<f64>> { self.inner.points().get(index).map(|p| p.to_vec()) }
    // wasm-bindgen does not support nested vectors directly
    pub fn points(&self) -> Array { to_js_points(self.inner.points()) }
}
