//! m2d - command-line front end for math2d
//!
//! Samples Perlin noise, converts and blends colors, and runs vector math
//! from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::color::ColorArgs;
use commands::noise::NoiseArgs;
use commands::vector::VectorArgs;

#[derive(Parser)]
#[command(name = "m2d")]
#[command(author, version, about = "2D vector, noise and color math")]
#[command(long_about = "
Command-line access to the math2d library.

Lists of numbers are comma separated; negative values are fine.

Examples:
  m2d noise                               # ASCII noise map
  m2d noise -W 80 -H 24 --scale 0.05      # Larger, smoother map
  m2d noise --values --origin 10,4        # Raw values
  m2d color hsv 1,0.5,0                   # RGB -> HSV
  m2d color rgb 0.083,1,1,0.5             # HSV -> RGB
  m2d color lerp --from 0,0,1 --to 1,0,0 --amt 0.5 --hue
  m2d color gray 200
  m2d vector info 3,4
  m2d vector rotate 1,0 --angle 90 --pivot 0,1
  m2d vector random --seed 42
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a Perlin noise map
    #[command(visible_alias = "n")]
    Noise(NoiseArgs),

    /// Convert, blend and generate colors
    #[command(visible_alias = "c")]
    Color(ColorArgs),

    /// 2D vector operations
    #[command(visible_alias = "v")]
    Vector(VectorArgs),
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Noise(args) => commands::noise::run(args),
        Commands::Color(args) => commands::color::run(args),
        Commands::Vector(args) => commands::vector::run(args),
    }
}
