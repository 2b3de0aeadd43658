//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rupture")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Select a friction law and drive its components over a fault")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every friction law with its code, registry policy and families
    List {},
    /// Dispatch a configuration and report the assembled components
    Check {
        /// Configuration file (TOML, YAML or JSON); `RUPTURE__*` variables override it
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Dispatch, initialize from a fault input and print the final output frame as JSON
    Run {
        #[arg(short, long)]
        config: PathBuf,

        /// Fault input JSON: `{ "num_points": N, "parameters": { name: [..] } }`
        #[arg(short, long)]
        input: PathBuf,

        /// Number of time steps
        #[arg(short, long, default_value_t = 100)]
        steps: usize,

        /// Time step in seconds
        #[arg(long, default_value_t = 1e-3)]
        dt: f64,
    },
}
