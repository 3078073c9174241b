use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Point or direction in 3D space. Which one is up to the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

impl Vec3 {
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vec3) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Rescales to unit length in place and returns `self` for chaining.
    ///
    /// A zero vector is not guarded against: its components become NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let norm_squared = self.norm_squared();
        #[cfg(feature = "strict_checks")]
        debug_assert!(
            norm_squared > 0.0,
            "normalizing zero length vector {:?}",
            self
        );
        let nd_rcp = norm_squared.sqrt().recip();
        self.x *= nd_rcp;
        self.y *= nd_rcp;
        self.z *= nd_rcp;
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

#[inline(always)]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

/// Right handed: `cross(Vec3::X, Vec3::Y) == Vec3::Z`.
#[inline(always)]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Mirrors `v` about the surface normal `n`. `n` should be unit length,
/// otherwise the result is scaled along `n`.
#[inline(always)]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    let d = 2.0 * dot(v, n);
    Vec3::new(v.x - d * n.x, v.y - d * n.y, v.z - d * n.z)
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(a + b, Vec3::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(5.0, 1.5, 1.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_assign_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.25, -1.0, 4.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_normalize() {
        let mut v = Vec3::new(3.0, 0.0, 4.0);
        v.normalize();
        assert!(close(v, Vec3::new(0.6, 0.0, 0.8)));
        assert!((v.norm() - 1.0).abs() < 1e-6);

        // chained in place
        let mut w = Vec3::new(0.0, -2.0, 0.0);
        let n = *w.normalize();
        assert_eq!(n, -Vec3::Y);

        let ones = Vec3::new(1.0, 1.0, 1.0);
        assert!(close(ones.normalized() * 3f32.sqrt(), ones));
    }

    #[cfg(not(feature = "strict_checks"))]
    #[test]
    fn test_normalize_zero_vector_propagates_nan() {
        let mut v = Vec3::ZERO;
        v.normalize();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
        assert!(!v.is_finite());
    }

    #[cfg(all(feature = "strict_checks", debug_assertions))]
    #[test]
    #[should_panic(expected = "normalizing zero length vector")]
    fn test_normalize_zero_vector_asserts_with_strict_checks() {
        let mut v = Vec3::ZERO;
        v.normalize();
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(Vec3::X, Vec3::Y), 0.0);
        assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::Z), Vec3::X);
        assert_eq!(cross(Vec3::Z, Vec3::X), Vec3::Y);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 1.0);
        let c = cross(a, b);
        assert!(dot(c, a).abs() < 1e-5);
        assert!(dot(c, b).abs() < 1e-5);
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));

        // head on bounce reverses direction
        assert_eq!(reflect(-Vec3::Z, Vec3::Z), Vec3::Z);

        // grazing direction is untouched
        assert_eq!(reflect(Vec3::X, Vec3::Y), Vec3::X);

        let n = Vec3::new(1.0, 2.0, -0.5).normalized();
        let v = Vec3::new(0.3, -0.7, 0.2).normalized();
        let r = reflect(v, n);
        assert!((r.norm() - 1.0).abs() < 1e-5);
        assert!(close(reflect(r, n), v));
    }
}
