pub use crate::geometry::{Plane, Primitive, Ray, Sphere};
pub use crate::math::{clamp, cross, dot, reflect, to_display, DisplayColor, LinearColor, Vec3};
pub use crate::tonemap::{Converter, Tonemapper, MAUVE};
