use crate::math::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    // conventionally non-negative
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }
}
