//! Relax compare: time both backends on the same problem.
//!
//! Demonstrates:
//!   1. Parsing run selectors from strings
//!   2. Building a RunConfig per backend (with software fallback)
//!   3. Driving each run to completion through the step scheduler
//!   4. Comparing the two solved fields and rendering a frame
//!
//! Run with:
//!   cargo run --example compare -- [grid] [iterations] [colours]
//!
//! e.g. `RUST_LOG=relax_engine=debug cargo run --example compare -- 256 500 rgrey`

use relax::prelude::*;
use tracing_subscriber::EnvFilter;

// ─── Defaults ───────────────────────────────────────────────────

const DEFAULT_GRID: u32 = 128;
const DEFAULT_ITERATIONS: u64 = 500;
const SURFACE_HEIGHT: u32 = 512;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let grid_size = args.next().map(|s| s.parse()).transpose()?.unwrap_or(DEFAULT_GRID);
    let iterations = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(DEFAULT_ITERATIONS);
    let color_mapping: ColorMapping = args.next().as_deref().unwrap_or("rgb").parse()?;

    let mut fields = Vec::new();
    for backend in [Backend::Software, Backend::Accelerated] {
        let config = RunConfig {
            grid_size,
            iteration_budget: iterations,
            backend,
            color_mapping,
            surface_height: SURFACE_HEIGHT,
            ..RunConfig::default()
        }
        .clamp_to_surface();

        let mut driver = Driver::new();
        driver.start(config.run()?);
        let report = driver
            .run_to_completion()
            .ok_or("run ended without a report")?;
        println!(
            "{:<24} {} took {:.3} ms ({} iterations, mean step {} us, max step {} us)",
            report.solver,
            report.backend,
            report.elapsed.as_secs_f64() * 1e3,
            report.iterations,
            report.metrics.mean_step_us,
            report.metrics.max_step_us,
        );

        let solver = driver.solver().ok_or("solver dropped")?;
        fields.push(solver.readable_field().values());

        // Summarise the rendered frame along the row through both sources.
        let n = config.grid_size as usize;
        let pixels = solver.render(config.color_mapping);
        let mid = n / 2;
        let step = (n / 16).max(1);
        let row: Vec<String> = (0..n)
            .step_by(step)
            .map(|col| format!("{:3}", pixels[mid * n + col][0]))
            .collect();
        println!("  {} row {mid}: {}", config.color_mapping, row.join(" "));
    }

    let max_diff = fields[0]
        .iter()
        .zip(&fields[1])
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    println!("max |software - accelerated| = {max_diff:.3e}");
    Ok(())
}
