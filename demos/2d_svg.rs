use plotters::prelude::*;
use bluedisk::{BoundingBox, SamplerConfig, Sampler2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("2d_poisson_r2.svg", 2.0)?;
    run_example("2d_poisson_r5.svg", 5.0)?;
    Ok(())
}

fn run_example(filename: &str, min_distance: f64) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let bounds = BoundingBox::from_extent([100.0, 100.0]);
    let mut sampler = Sampler2D::new(SamplerConfig::new(bounds, min_distance))?;
    let mut rng = rand::thread_rng();
    let points: Vec<(f64, f64)> = sampler.generate(&mut rng).iter().map(|p| (p[0], p[1])).collect();

    // Draw bounding box
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        BLACK.stroke_width(2),
    )))?;

    // Draw the exclusion disk of radius r/2 around every sample; disks never overlap.
    let radius_px = (min_distance / 2.0 * 1024.0 / 100.0) as i32;
    chart.draw_series(points.iter().map(|&p| Circle::new(p, radius_px, BLUE.mix(0.1).filled())))?;
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 2, RED.filled())))?;

    root.present()?;
    println!("{} points with r = {}, output saved to {}", points.len(), min_distance, filename);
    println!("{:?}", sampler.stats());
    Ok(())
}
