use bluedisk::{BoundingBox, SamplerConfig, Sampler3D};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bounds = BoundingBox::from_extent([500.0, 500.0, 500.0]);
    let mut sampler = Sampler3D::new(SamplerConfig::new(bounds, 25.0))?;

    let start = Instant::now();
    let count = sampler.generate(&mut rand::thread_rng()).len();
    let duration = start.elapsed();

    println!("generated {} samples in {:?}", count, duration);
    println!("{:?}", sampler.stats());
    Ok(())
}
