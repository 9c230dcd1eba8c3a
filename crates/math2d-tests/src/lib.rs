//! Integration tests for math2d crates.
//!
//! Algebraic laws checked over seeded random samples, plus the behavior
//! of the `math2d` facade as a whole.
