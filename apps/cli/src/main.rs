#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{check, list, run};
use crate::models::args::{Cli, Commands};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {} => list::list_laws(),
        Commands::Check { config } => check::check_config(&config)?,
        Commands::Run { config, input, steps, dt } => run::run_fault(&config, &input, steps, dt)?,
    }

    Ok(())
}
