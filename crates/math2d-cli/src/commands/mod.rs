//! CLI command implementations

pub mod color;
pub mod noise;
pub mod vector;

use anyhow::{Context, Result};
use math2d::{Color, Vector2D, utils2d};

/// Parses a comma-separated list of numbers.
pub fn parse_list(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<f64>()
                .with_context(|| format!("Not a number: '{}'", p))
        })
        .collect()
}

/// Parses `x,y` into a vector.
pub fn parse_vector(s: &str) -> Result<Vector2D> {
    let values = parse_list(s)?;
    Vector2D::from_slice(&values).with_context(|| format!("Bad vector: '{}'", s))
}

/// Parses `c0,c1,c2[,alpha]` into a color; alpha defaults to 1.
pub fn parse_color(s: &str) -> Result<Color> {
    let mut values = parse_list(s)?;
    if values.len() == 3 {
        values.push(1.0);
    }
    utils2d::color_from_slice(&values).with_context(|| format!("Bad color: '{}'", s))
}

/// Formats a color as `[c0, c1, c2, a]` with fixed precision.
pub fn format_color(c: Color) -> String {
    format!("[{:.6}, {:.6}, {:.6}, {:.6}]", c[0], c[1], c[2], c[3])
}

/// Formats a vector as `[x, y]` with fixed precision.
pub fn format_vector(v: Vector2D) -> String {
    format!("[{:.6}, {:.6}]", v.x, v.y)
}
