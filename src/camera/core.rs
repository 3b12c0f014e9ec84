//! Camera pair: perspective and orthographic representations.
//!
//! Both cameras carry the same pose (eye, target, up) so either can become
//! the authoritative projection without a visible jump. The façade keeps
//! the inactive camera's pose mirrored from the active one.

use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Polymorphic capability shared by both cameras in the pair: pose access
/// and matrix production for the renderer.
pub trait ViewCamera {
    /// Eye (camera) position in world space.
    fn eye(&self) -> Vec3;
    /// Look-at target position.
    fn target(&self) -> Vec3;
    /// Replace the camera pose.
    fn set_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3);
    /// Look-at view matrix.
    fn view_matrix(&self) -> Mat4;
    /// Projection matrix ([0,1] depth range, wgpu/Vulkan convention).
    fn projection_matrix(&self) -> Mat4;
}

/// Perspective camera defined by pose and projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl PerspectiveCamera {
    /// Build a perspective camera from options and the viewport aspect.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: options.fovy,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Unit forward direction (eye toward target).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }
}

impl ViewCamera for PerspectiveCamera {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

/// Orthographic camera defined by pose, symmetric frustum extents, and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Left frustum extent.
    pub left: f32,
    /// Right frustum extent.
    pub right: f32,
    /// Top frustum extent.
    pub top: f32,
    /// Bottom frustum extent.
    pub bottom: f32,
    /// Zoom factor dividing the effective extents.
    pub zoom: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl OrthographicCamera {
    /// Build an orthographic camera from the nominal frustum size and the
    /// viewport aspect, split symmetrically around zero.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let height = options.frustum_size;
        let width = height * aspect;
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            left: -width / 2.0,
            right: width / 2.0,
            top: height / 2.0,
            bottom: -height / 2.0,
            zoom: 1.0,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Rewrite the frustum extents symmetrically around zero and reset the
    /// zoom, so the apparent scale matches a freshly projected view.
    pub fn set_extents(&mut self, width: f32, height: f32) {
        self.left = -width / 2.0;
        self.right = width / 2.0;
        self.top = height / 2.0;
        self.bottom = -height / 2.0;
        self.zoom = 1.0;
    }
}

impl ViewCamera for OrthographicCamera {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_pose(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.eye = eye;
        self.target = target;
        self.up = up;
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.left / self.zoom,
            self.right / self.zoom,
            self.bottom / self.zoom,
            self.top / self.zoom,
            self.znear,
            self.zfar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    #[test]
    fn initial_ortho_frustum_splits_nominal_size() {
        let options = CameraOptions::default();
        let ortho = OrthographicCamera::new(&options, 2.0);
        assert_eq!(ortho.top, 25.0);
        assert_eq!(ortho.bottom, -25.0);
        assert_eq!(ortho.right, 50.0);
        assert_eq!(ortho.left, -50.0);
        assert_eq!(ortho.zoom, 1.0);
    }

    #[test]
    fn set_extents_is_symmetric_and_resets_zoom() {
        let options = CameraOptions::default();
        let mut ortho = OrthographicCamera::new(&options, 1.0);
        ortho.zoom = 3.0;
        ortho.set_extents(14.0, 9.0);
        assert_eq!(ortho.left, -7.0);
        assert_eq!(ortho.right, 7.0);
        assert_eq!(ortho.top, 4.5);
        assert_eq!(ortho.bottom, -4.5);
        assert_eq!(ortho.zoom, 1.0);
    }

    #[test]
    fn forward_points_from_eye_to_target() {
        let options = CameraOptions::default();
        let persp = PerspectiveCamera::new(&options, 1.0);
        assert_eq!(persp.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn pose_round_trips_through_trait() {
        let options = CameraOptions::default();
        let mut persp = PerspectiveCamera::new(&options, 1.0);
        persp.set_pose(Vec3::ONE, Vec3::ZERO, Vec3::Y);
        assert_eq!(ViewCamera::eye(&persp), Vec3::ONE);
        assert_eq!(ViewCamera::target(&persp), Vec3::ZERO);
    }
}
