use crate::handlers::load;
use anyhow::{Context, Result};
use rupture::kernel::bundle::ComponentBundle;
use std::path::Path;

/// Dispatches the configuration and prints the component layout of the resulting bundle.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or dispatch fails.
pub fn check_config(path: &Path) -> Result<()> {
    let (config, _logger) = load(path)?;
    let bundle = rupture::dispatch(&config).context("Dispatch failed")?;
    print_layout(&bundle, config.friction_law);
    Ok(())
}

fn print_layout(bundle: &ComponentBundle, code: u32) {
    let family = bundle.family();
    println!("Friction law:    {} ({code})", family.law());
    println!("Family:          {family}");
    println!("Storage fields:  {}", bundle.fields());
    println!("Kernel requires: {}", bundle.kernel().required_fields());
    println!("Required input:  {}", bundle.initializer().required_parameters().join(", "));
    println!("Output:          {}", bundle.writer().quantities().join(", "));
}
