//! Draws a simple closed path through random points and saves it as SVG.
//!
//! ```sh
//! RUST_LOG=hullpath=debug cargo run --example planar_cycle -- --points 1000 --draw-hulls
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hullpath::math::Point2;
use hullpath::operations::PlanarCycle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planar_cycle")]
#[command(about = "Render a non-crossing cycle through random points")]
struct Args {
    /// Number of random points in the unit square
    #[arg(long, default_value_t = 1000)]
    points: usize,

    /// Seed for reproducible point sets
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 3000)]
    size: u32,

    /// Output SVG file
    #[arg(long, default_value = "planar_hamiltonian_cycle.svg")]
    output: PathBuf,

    /// Also draw the nested convex hulls
    #[arg(long)]
    draw_hulls: bool,

    /// Skip the quadratic crossing check on the joined cycle
    #[arg(long)]
    skip_validation: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let coords: Vec<Point2> = (0..args.points)
        .map(|_| Point2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let result = PlanarCycle::new(coords)
        .with_validation(!args.skip_validation)
        .execute()
        .context("building planar cycle")?;
    tracing::info!(
        points = args.points,
        layers = result.layers.len(),
        "cycle built"
    );

    let scale = f64::from(args.size);
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
        args.size
    )?;
    writeln!(svg, r##"<rect width="100%" height="100%" fill="#FFFFFF"/>"##)?;
    if args.draw_hulls {
        for layer in result.layer_positions()? {
            write_polygon(&mut svg, &layer, scale, "#00FF00", 3.0)?;
        }
    }
    write_polygon(&mut svg, &result.positions()?, scale, "#000000", 2.0)?;
    writeln!(svg, "</svg>")?;

    std::fs::write(&args.output, svg)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!(output = %args.output.display(), "saved");
    Ok(())
}

fn write_polygon(
    svg: &mut String,
    points: &[Point2],
    scale: f64,
    stroke: &str,
    width: f64,
) -> std::fmt::Result {
    let coords: Vec<String> = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x * scale, p.y * scale))
        .collect();
    writeln!(
        svg,
        r#"<polygon points="{}" fill="none" stroke="{stroke}" stroke-width="{width}"/>"#,
        coords.join(" ")
    )
}
