//! Color command.
//!
//! RGB/HSV conversion, color blending and grayscale generation.

use anyhow::Result;
use clap::{Args, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use math2d::{Color, utils2d};

use super::{format_color, parse_color};

/// Arguments for the `color` command.
#[derive(Args)]
pub struct ColorArgs {
    #[command(subcommand)]
    pub op: ColorOp,
}

/// Color operations.
#[derive(Subcommand)]
pub enum ColorOp {
    /// Convert RGB(A) to HSV(A)
    Hsv {
        /// Color as r,g,b[,a] in [0, 1]
        #[arg(allow_hyphen_values = true)]
        color: String,
    },

    /// Convert HSV(A) to RGB(A)
    Rgb {
        /// Color as h,s,v[,a]; hue wraps outside [0, 1]
        #[arg(allow_hyphen_values = true)]
        color: String,
    },

    /// Blend two RGB(A) colors
    Lerp {
        /// Start color r,g,b[,a]
        #[arg(long)]
        from: String,

        /// End color r,g,b[,a]
        #[arg(long)]
        to: String,

        /// Blend amount (0 = from, 1 = to)
        #[arg(long, default_value = "0.5", allow_hyphen_values = true)]
        amt: f64,

        /// Blend through HSV along the shorter hue arc
        #[arg(long)]
        hue: bool,
    },

    /// Opaque gray from an 8-bit level, random if omitted
    Gray {
        /// Level in [0, 255]
        #[arg(allow_hyphen_values = true)]
        value: Option<f64>,

        /// Seed for the random level
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Run the color command.
pub fn run(args: ColorArgs) -> Result<()> {
    let c = apply(&args.op)?;
    println!("{}", format_color(c));
    Ok(())
}

/// Evaluates a color operation.
pub fn apply(op: &ColorOp) -> Result<Color> {
    let c = match op {
        ColorOp::Hsv { color } => utils2d::rgb_to_hsv(parse_color(color)?),
        ColorOp::Rgb { color } => utils2d::hsv_to_rgb(parse_color(color)?),
        ColorOp::Lerp { from, to, amt, hue } => {
            let a = parse_color(from)?;
            let b = parse_color(to)?;
            debug!(?a, ?b, amt, hue, "Blending colors");
            if *hue {
                utils2d::lerp_hue(a, b, *amt)
            } else {
                utils2d::lerp_rgb(a, b, *amt)
            }
        }
        ColorOp::Gray { value, seed } => match seed {
            Some(s) => utils2d::grayscale_with(*value, &mut StdRng::seed_from_u64(*s)),
            None => utils2d::grayscale(*value),
        },
    };
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_hsv() {
        let c = apply(&ColorOp::Hsv { color: "0,1,0".into() }).unwrap();
        assert!(close(c, [1.0 / 3.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_rgb() {
        let c = apply(&ColorOp::Rgb { color: "0,0,0.5,0.25".into() }).unwrap();
        assert!(close(c, [0.5, 0.5, 0.5, 0.25]));
    }

    #[test]
    fn test_lerp_modes() {
        let rgb = apply(&ColorOp::Lerp {
            from: "1,0,0".into(),
            to: "0,0,1".into(),
            amt: 0.5,
            hue: false,
        })
        .unwrap();
        assert!(close(rgb, [0.5, 0.0, 0.5, 1.0]));

        let hue = apply(&ColorOp::Lerp {
            from: "1,0,0".into(),
            to: "0,0,1".into(),
            amt: 0.5,
            hue: true,
        })
        .unwrap();
        assert!(close(hue, [1.0, 0.0, 1.0, 1.0]));
    }

    #[test]
    fn test_gray() {
        let c = apply(&ColorOp::Gray { value: Some(0.0), seed: None }).unwrap();
        assert_eq!(c, [0.0, 0.0, 0.0, 1.0]);

        let a = apply(&ColorOp::Gray { value: None, seed: Some(5) }).unwrap();
        let b = apply(&ColorOp::Gray { value: None, seed: Some(5) }).unwrap();
        assert_eq!(a, b);
    }

    #[derive(clap::Parser)]
    struct ColorCli {
        #[command(subcommand)]
        op: ColorOp,
    }

    #[test]
    fn test_negative_hue_argument() {
        use clap::Parser;

        let cli = ColorCli::try_parse_from(["color", "rgb", "-0.25,1,1"]).unwrap();
        assert!(matches!(&cli.op, ColorOp::Rgb { color } if color == "-0.25,1,1"));
        // -0.25 wraps to 0.75: blue-violet
        let c = apply(&cli.op).unwrap();
        assert!(close(c, [0.5, 0.0, 1.0, 1.0]));

        let cli = ColorCli::try_parse_from(["color", "hsv", "-0.5,0,0"]).unwrap();
        assert!(matches!(&cli.op, ColorOp::Hsv { color } if color == "-0.5,0,0"));
    }

    #[test]
    fn test_short_color_is_error() {
        assert!(apply(&ColorOp::Hsv { color: "0.5,0.5".into() }).is_err());
    }
}
