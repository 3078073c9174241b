use crate::math::Vec3;

/// Infinite plane through `point`. `normal` is expected to be unit length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub const fn new(point: Vec3, normal: Vec3) -> Plane {
        Plane { point, normal }
    }
}
