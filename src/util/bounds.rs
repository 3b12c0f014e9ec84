//! Axis-aligned bounding boxes and bounding spheres for view fitting.
//!
//! The fit operation folds per-mesh boxes into a union box and frames the
//! derived sphere; an empty mesh set yields no box at all rather than a
//! degenerate infinite-extent one.

use glam::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Component-wise minimum corner.
    pub min: Vec3,
    /// Component-wise maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from its two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Fold an iterator of boxes into their union.
    ///
    /// Returns `None` for an empty iterator so callers handle the "nothing
    /// to fit" case explicitly instead of receiving an invalid box.
    pub fn from_boxes<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        boxes.into_iter().reduce(Self::union)
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Box size along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Sphere centered at the box center with radius `offset` times the
    /// largest axis size.
    #[must_use]
    pub fn bounding_sphere(&self, offset: f32) -> Sphere {
        Sphere {
            center: self.center(),
            radius: offset * self.size().max_element(),
        }
    }
}

/// Bounding sphere handed to the controller's animated fit transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

/// Anything that can report an axis-aligned bounding box.
///
/// Scene meshes implement this; the camera façade only ever sees the box.
pub trait Bounded {
    /// Axis-aligned bounding box of this object in world space.
    fn bounding_box(&self) -> Aabb;
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn bounding_box(&self) -> Aabb {
        (**self).bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_takes_componentwise_extremes() {
        let a = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let b = Aabb::new(Vec3::ZERO, Vec3::splat(3.0));
        let u = a.union(b);
        assert_eq!(u.min, Vec3::splat(-1.0));
        assert_eq!(u.max, Vec3::splat(3.0));
    }

    #[test]
    fn fold_matches_pairwise_union() {
        let boxes = [
            Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
            Aabb::new(Vec3::ZERO, Vec3::splat(3.0)),
        ];
        let u = Aabb::from_boxes(boxes).unwrap();
        assert_eq!(u.center(), Vec3::ONE);
        assert_eq!(u.size(), Vec3::splat(4.0));
    }

    #[test]
    fn empty_fold_yields_none() {
        assert!(Aabb::from_boxes(std::iter::empty()).is_none());
    }

    #[test]
    fn sphere_radius_scales_largest_axis() {
        let b = Aabb::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 2.0));
        let sphere = b.bounding_sphere(2.0);
        assert_eq!(sphere.center, Vec3::new(1.0, 0.5, 1.0));
        // Largest axis size is 4 (x), so radius = 2 * 4.
        assert_eq!(sphere.radius, 8.0);
    }
}
