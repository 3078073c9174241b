pub mod color;
mod misc;
mod vec;

pub use color::{to_display, DisplayColor, LinearColor};
pub use misc::clamp;
pub use vec::{cross, dot, reflect, Vec3};
