//! Plain data vocabulary for intersection code. Nothing here validates its
//! inputs; normalizing directions and normals is the caller's job.

mod plane;
mod ray;
mod sphere;

pub use plane::Plane;
pub use ray::Ray;
pub use sphere::Sphere;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Plane> for Primitive {
    fn from(data: Plane) -> Self {
        Primitive::Plane(data)
    }
}
