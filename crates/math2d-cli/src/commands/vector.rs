//! Vector command.
//!
//! Geometric queries and transformations on 2D vectors. Angles on the
//! command line are in degrees; y points down.

use anyhow::Result;
use clap::{Args, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use math2d::{Vector2D, utils2d};

use super::{format_vector, parse_vector};

/// Arguments for the `vector` command.
#[derive(Args)]
pub struct VectorArgs {
    #[command(subcommand)]
    pub op: VectorOp,
}

/// Vector operations.
#[derive(Subcommand)]
pub enum VectorOp {
    /// Magnitude, heading and normalized form
    Info {
        /// Vector as x,y
        #[arg(allow_hyphen_values = true)]
        v: String,
    },

    /// Rotate clockwise on screen, optionally around a pivot
    Rotate {
        /// Vector as x,y
        #[arg(allow_hyphen_values = true)]
        v: String,

        /// Angle in degrees
        #[arg(short, long, allow_hyphen_values = true)]
        angle: f64,

        /// Pivot point as x,y
        #[arg(long, allow_hyphen_values = true)]
        pivot: Option<String>,
    },

    /// Linear interpolation toward another vector
    Lerp {
        /// Start vector as x,y
        #[arg(allow_hyphen_values = true)]
        v: String,

        /// End vector as x,y
        #[arg(long, allow_hyphen_values = true)]
        to: String,

        /// Interpolation amount
        #[arg(long, default_value = "0.5", allow_hyphen_values = true)]
        amt: f64,
    },

    /// Reflect off a surface normal
    Reflect {
        /// Vector as x,y
        #[arg(allow_hyphen_values = true)]
        v: String,

        /// Surface normal as x,y
        #[arg(short, long, allow_hyphen_values = true)]
        normal: String,
    },

    /// Refract through a surface normal
    Refract {
        /// Vector as x,y (normalized internally)
        #[arg(allow_hyphen_values = true)]
        v: String,

        /// Surface normal as x,y (normalized internally)
        #[arg(short, long, allow_hyphen_values = true)]
        normal: String,

        /// Ratio of refractive indices
        #[arg(long, default_value = "1.0")]
        eta: f64,
    },

    /// Random unit vector
    Random {
        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Run the vector command.
pub fn run(args: VectorArgs) -> Result<()> {
    println!("{}", apply(&args.op)?);
    Ok(())
}

/// Evaluates a vector operation into printable text.
pub fn apply(op: &VectorOp) -> Result<String> {
    let out = match op {
        VectorOp::Info { v } => info(parse_vector(v)?),
        VectorOp::Rotate { v, angle, pivot } => {
            let v = parse_vector(v)?;
            let rad = utils2d::to_rad(*angle);
            let r = match pivot {
                Some(p) => v.rotate_around(parse_vector(p)?, rad),
                None => v.rotate(rad),
            };
            format_vector(r)
        }
        VectorOp::Lerp { v, to, amt } => {
            format_vector(parse_vector(v)?.lerp(parse_vector(to)?, *amt))
        }
        VectorOp::Reflect { v, normal } => {
            format_vector(parse_vector(v)?.reflect(parse_vector(normal)?))
        }
        VectorOp::Refract { v, normal, eta } => {
            let v = parse_vector(v)?.normalize();
            let n = parse_vector(normal)?.normalize();
            let r = v.refract(n, *eta);
            if r == Vector2D::ZERO {
                debug!(%v, %n, eta, "Total internal reflection");
            }
            format_vector(r)
        }
        VectorOp::Random { seed } => {
            let v = match seed {
                Some(s) => Vector2D::random_with(&mut StdRng::seed_from_u64(*s)),
                None => Vector2D::random(),
            };
            format_vector(v)
        }
    };
    Ok(out)
}

fn info(v: Vector2D) -> String {
    [
        format!("vector:     {}", format_vector(v)),
        format!("magnitude:  {:.6}", v.magnitude()),
        format!("heading:    {:.6} deg", utils2d::to_deg(v.heading())),
        format!("y-heading:  {:.6} deg", utils2d::to_deg(v.y_heading())),
        format!("normalized: {}", format_vector(v.normalize())),
        format!("perp:       {}", format_vector(v.perp())),
    ]
    .join("\n")
}
