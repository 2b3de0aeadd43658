use crate::handlers::load;
use anyhow::{Context, Result, ensure};
use rupture::kernel::component::TimeStep;
use rupture::kernel::input::FaultInput;
use std::fs;
use std::path::Path;
use tracing::info;

/// Drives one fault through `steps` steps and prints the last output frame.
///
/// # Errors
/// Returns an error if loading, dispatch, initialization or any step fails.
pub fn run_fault(config_path: &Path, input_path: &Path, steps: usize, dt: f64) -> Result<()> {
    ensure!(dt.is_finite() && dt > 0.0, "--dt must be positive, got {dt}");

    let (config, _logger) = load(config_path)?;
    let raw = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;
    let input = FaultInput::from_json(&raw)?;

    let mut bundle = rupture::dispatch(&config).context("Dispatch failed")?;
    bundle.initialize(&input).context("Initialization failed")?;

    for n in 1..=steps {
        let step = TimeStep::nth(n, dt);
        bundle.evaluate(step).with_context(|| format!("Step {n} at t = {}", step.time))?;
    }
    info!(family = %bundle.family(), steps, "Run finished");

    let frame = bundle.write(TimeStep::nth(steps, dt).time)?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
