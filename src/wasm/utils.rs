use js_sys::Array;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generator used by the sampler classes until `seed` is called.
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Flattens points into `[x0, y0, (z0,) x1, ...]`.
pub fn flatten<const D: usize>(points: &[[f64; D]]) -> Vec<f64> {
    points.iter().flat_map(|p| p.iter().copied()).collect()
}

/// Converts points into a JS array of coordinate arrays.
pub fn to_js_points<const D: usize>(points: &[[f64; D]]) -> Array {
    let result = Array::new_with_length(points.len() as u32);
    for (i, p) in points.iter().enumerate() {
        let js_point = Array::new_with_length(D as u32);
        for (a, &c) in p.iter().enumerate() {
            js_point.set(a as u32, c.into());
        }
        result.set(i as u32, js_point.into());
    }
    result
}
