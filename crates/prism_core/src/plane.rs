//! Finite axis-aligned plane primitive.

use prism_math::{Ray, Vec3};

use crate::primitive::EPSILON;
use crate::Material;

/// Coordinate axis a plane is perpendicular to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis from its component index (0 = X, 1 = Y, 2 = Z).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The two axes spanning the plane perpendicular to this one.
    fn in_plane(self) -> [usize; 2] {
        let i = self.index();
        [(i + 1) % 3, (i + 2) % 3]
    }
}

/// A finite rectangle perpendicular to a coordinate axis.
///
/// `size` holds full extents per axis; the component along `axis` is
/// ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    position: Vec3,
    axis: Axis,
    size: Vec3,
    material: Material,
}

impl Plane {
    pub fn new(position: Vec3, axis: Axis, size: Vec3, material: Material) -> Self {
        Self {
            position,
            axis,
            size: size.abs(),
            material,
        }
    }

    /// Half of `size` on each axis.
    fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect a ray with a unit direction.
    ///
    /// Returns the hit distance and a normal facing against the ray.
    pub(crate) fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        let mut normal = self.axis.unit();

        let denom = normal.dot(ray.direction);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.position - ray.origin).dot(normal) / denom;
        if t < 0.0 {
            return None;
        }

        let local = ray.at(t) - self.position;
        let half = self.half_extents();
        for i in self.axis.in_plane() {
            if local[i].abs() > half[i] {
                return None;
            }
        }

        if denom > 0.0 {
            normal = -normal;
        }

        Some((t, normal))
    }
}
