//! Seam to the underlying pointer/orbit controller.
//!
//! The actual controller implementation lives outside this crate (it owns
//! pointer-event handling and animated transitions). Navigation modes and
//! the camera façade drive it exclusively through [`PointerController`]:
//! get/set of the look-at target and position, the four button binding
//! codes, a constraint profile, and an awaitable fit-to-sphere transition.

use std::future::Future;

use glam::Vec3;

use crate::util::bounds::Sphere;

/// Binding codes understood by the pointer controller.
///
/// Each of the four pointer inputs (left/right/middle buttons and the
/// wheel) carries one of these codes; zero disables the input entirely.
pub mod action {
    /// No action bound.
    pub const NONE: u32 = 0;
    /// Orbit rotation around the look-at target.
    pub const ROTATE: u32 = 1;
    /// Pan parallel to the view plane.
    pub const TRUCK: u32 = 2;
    /// Dolly toward/away from the target.
    pub const DOLLY: u32 = 4;
    /// Orthographic zoom.
    pub const ZOOM: u32 = 8;
}

/// The four pointer-button binding codes as a fixed-shape record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtons {
    /// Left button binding.
    pub left: u32,
    /// Right button binding.
    pub right: u32,
    /// Middle button binding.
    pub middle: u32,
    /// Wheel binding.
    pub wheel: u32,
}

impl MouseButtons {
    /// All four bindings cleared; pointer input no longer moves the camera.
    pub const NONE: Self = Self {
        left: action::NONE,
        right: action::NONE,
        middle: action::NONE,
        wheel: action::NONE,
    };
}

/// Degrees of freedom, damping, and limits a navigation mode imposes on the
/// controller when it activates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlProfile {
    /// Lower polar-angle bound in radians (0 = straight down the +Y axis).
    pub min_polar_angle: f32,
    /// Upper polar-angle bound in radians.
    pub max_polar_angle: f32,
    /// Horizontal rotation speed multiplier (negative inverts).
    pub azimuth_rotate_speed: f32,
    /// Vertical rotation speed multiplier (negative inverts).
    pub polar_rotate_speed: f32,
    /// Pan speed multiplier.
    pub truck_speed: f32,
    /// Dolly speed multiplier.
    pub dolly_speed: f32,
    /// Minimum orbit distance.
    pub min_distance: f32,
    /// Maximum orbit distance.
    pub max_distance: f32,
    /// Motion smoothing factor.
    pub damping: f32,
}

impl Default for ControlProfile {
    /// Unconstrained orbit: full polar range, unit speeds, unbounded
    /// distance.
    fn default() -> Self {
        Self {
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI,
            azimuth_rotate_speed: 1.0,
            polar_rotate_speed: 1.0,
            truck_speed: 1.0,
            dolly_speed: 1.0,
            min_distance: 0.01,
            max_distance: f32::INFINITY,
            damping: 0.05,
        }
    }
}

/// Narrow interface to the shared pointer controller.
///
/// The façade is generic over this trait, so implementations pay no boxing
/// cost and `fit_to_sphere` can be a native async method.
pub trait PointerController {
    /// Current look-at target.
    fn target(&self) -> Vec3;
    /// Move the look-at target.
    fn set_target(&mut self, target: Vec3);
    /// Current camera position.
    fn position(&self) -> Vec3;
    /// Move the camera position.
    fn set_position(&mut self, position: Vec3);
    /// Current pointer-button bindings.
    fn mouse_buttons(&self) -> MouseButtons;
    /// Replace the pointer-button bindings.
    fn set_mouse_buttons(&mut self, buttons: MouseButtons);
    /// Reconfigure degrees of freedom, damping, and limits.
    fn apply_profile(&mut self, profile: &ControlProfile);
    /// Animated transition framing `sphere` in the viewport; the returned
    /// future resolves when the transition completes. When `transition` is
    /// `false` the controller jumps immediately.
    fn fit_to_sphere(
        &mut self,
        sphere: Sphere,
        transition: bool,
    ) -> impl Future<Output = ()>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Instrumented controller double shared by the camera tests.

    use super::{ControlProfile, MouseButtons, PointerController};
    use crate::util::bounds::Sphere;
    use glam::Vec3;

    /// Records every call the camera stack makes against it.
    pub(crate) struct RecordingControls {
        pub(crate) target: Vec3,
        pub(crate) position: Vec3,
        pub(crate) buttons: MouseButtons,
        pub(crate) profiles: Vec<ControlProfile>,
        pub(crate) fitted: Vec<(Sphere, bool)>,
    }

    impl RecordingControls {
        pub(crate) fn new() -> Self {
            Self {
                target: Vec3::ZERO,
                position: Vec3::new(0.0, 0.0, 10.0),
                buttons: MouseButtons {
                    left: super::action::ROTATE,
                    right: super::action::TRUCK,
                    middle: super::action::DOLLY,
                    wheel: super::action::DOLLY,
                },
                profiles: Vec::new(),
                fitted: Vec::new(),
            }
        }
    }

    impl PointerController for RecordingControls {
        fn target(&self) -> Vec3 {
            self.target
        }

        fn set_target(&mut self, target: Vec3) {
            self.target = target;
        }

        fn position(&self) -> Vec3 {
            self.position
        }

        fn set_position(&mut self, position: Vec3) {
            self.position = position;
        }

        fn mouse_buttons(&self) -> MouseButtons {
            self.buttons
        }

        fn set_mouse_buttons(&mut self, buttons: MouseButtons) {
            self.buttons = buttons;
        }

        fn apply_profile(&mut self, profile: &ControlProfile) {
            self.profiles.push(*profile);
        }

        async fn fit_to_sphere(&mut self, sphere: Sphere, transition: bool) {
            self.fitted.push((sphere, transition));
        }
    }
}
