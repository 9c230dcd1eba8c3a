//! Noise command.
//!
//! Samples Perlin noise over a grid and prints it as an ASCII shade map or
//! as raw values.

use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use tracing::debug;

use math2d::{Vector2D, utils2d};

use super::parse_vector;

/// Shade ramp from low to high.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Arguments for the `noise` command.
#[derive(Args)]
pub struct NoiseArgs {
    /// Columns to sample
    #[arg(short = 'W', long, default_value = "60")]
    pub width: usize,

    /// Rows to sample
    #[arg(short = 'H', long, default_value = "20")]
    pub height: usize,

    /// Noise-space distance between neighboring samples
    #[arg(short, long, default_value = "0.1")]
    pub scale: f64,

    /// Noise-space origin of the top-left sample (x,y)
    #[arg(long, allow_hyphen_values = true)]
    pub origin: Option<String>,

    /// Print numbers instead of a shade map
    #[arg(long)]
    pub values: bool,

    /// Remap raw noise into [0, 1] (with --values)
    #[arg(long)]
    pub unit: bool,
}

/// Run the noise command.
pub fn run(args: NoiseArgs) -> Result<()> {
    let origin = match &args.origin {
        Some(s) => parse_vector(s)?,
        None => Vector2D::ZERO,
    };
    debug!(
        width = args.width,
        height = args.height,
        scale = args.scale,
        %origin,
        "Sampling noise"
    );

    let out = if args.values {
        render_values(&sample_grid(args.width, args.height, args.scale, origin, args.unit))
    } else {
        render_ascii(&sample_grid(args.width, args.height, args.scale, origin, true))
    };
    print!("{}", out);
    Ok(())
}

/// Noise samples, one row per `Vec`. Rows are sampled in parallel.
///
/// `unit` selects [`utils2d::unit_noise`] over the raw [`utils2d::noise`].
pub fn sample_grid(
    width: usize,
    height: usize,
    scale: f64,
    origin: Vector2D,
    unit: bool,
) -> Vec<Vec<f64>> {
    let field: fn(f64, f64) -> f64 = if unit {
        utils2d::unit_noise
    } else {
        utils2d::noise
    };
    (0..height)
        .into_par_iter()
        .map(|row| {
            let y = origin.y + row as f64 * scale;
            (0..width)
                .map(|col| field(origin.x + col as f64 * scale, y))
                .collect()
        })
        .collect()
}

/// Character for a noise value in `[0, 1]`.
fn shade(unit: f64) -> char {
    let t = utils2d::constrain(unit, 0.0, 1.0);
    let idx = (t * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx] as char
}

/// Shade map of a unit grid, one text line per row.
pub fn render_ascii(grid: &[Vec<f64>]) -> String {
    let mut out = String::new();
    for row in grid {
        out.extend(row.iter().map(|&v| shade(v)));
        out.push('\n');
    }
    out
}

/// Space-separated values, one text line per row.
pub fn render_values(grid: &[Vec<f64>]) -> String {
    let mut out = String::new();
    for row in grid {
        let line: Vec<String> = row
            .iter()
            .map(|v| format!("{:.6}", v))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
