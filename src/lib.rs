//! Vector, color and primitive arithmetic for a ray tracer.
//!
//! Everything under [`math`] and [`geometry`] is `Copy` plain data with no
//! allocation and no failure paths: degenerate input (normalizing a zero
//! vector, quantizing an unsaturated color) produces NaN or a saturated value
//! instead of an error. Enable the `strict_checks` feature to turn those cases
//! into debug assertions.

pub mod geometry;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod tonemap;
