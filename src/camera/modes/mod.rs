//! Navigation behaviors constraining how pointer input drives the camera.
//!
//! Each mode encapsulates the activation/deactivation side effects for one
//! behavior: the button bindings and constraint profile it pushes onto the
//! shared controller, plus any recentering of the look-at target. The
//! façade keeps exactly one mode active at a time and rebuilds the whole
//! set whenever a new world is bound.

mod first_person;
mod orbit;
mod plan;

use std::fmt;

pub use first_person::FirstPersonMode;
pub use orbit::OrbitMode;
pub use plan::PlanMode;

use crate::controls::PointerController;

/// Stable identifier for a navigation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavModeId {
    /// Free orbit around the look-at target.
    Orbit,
    /// First-person walk: rotation pivots at the eye.
    FirstPerson,
    /// Constrained top-down 2D plan view.
    Plan,
}

impl NavModeId {
    /// All identifiers, in registry construction order.
    pub const ALL: [Self; 3] = [Self::Orbit, Self::FirstPerson, Self::Plan];

    /// Identifier as a display string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orbit => "Orbit",
            Self::FirstPerson => "FirstPerson",
            Self::Plan => "Plan",
        }
    }
}

impl fmt::Display for NavModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single mode activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationOptions {
    /// Suppress automatic recentering of the look-at target during
    /// activation. Used only for the first activation after a world bind,
    /// to avoid visibly snapping the view.
    pub prevent_target_adjustment: bool,
}

/// One navigation behavior's activation/deactivation side effects on the
/// shared pointer controller.
///
/// Deactivation must leave the controller safe for the next mode to
/// reconfigure; it does not restore prior limits itself, since the next
/// activation establishes its own constraints.
pub trait NavigationMode<C: PointerController> {
    /// Stable identifier for registry lookups and equality checks.
    fn id(&self) -> NavModeId;

    /// Activate (`true`) or deactivate (`false`) this behavior.
    fn set_active(
        &mut self,
        controls: &mut C,
        active: bool,
        opts: &ActivationOptions,
    );
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::controls::testing::RecordingControls;
    use crate::controls::{action, PointerController};
    use crate::options::ControlOptions;

    fn activate<M: NavigationMode<RecordingControls>>(
        mode: &mut M,
        controls: &mut RecordingControls,
        prevent: bool,
    ) {
        let opts = ActivationOptions {
            prevent_target_adjustment: prevent,
        };
        mode.set_active(controls, true, &opts);
    }

    #[test]
    fn orbit_grants_full_rotation() {
        let mut controls = RecordingControls::new();
        let mut mode = OrbitMode::new(ControlOptions::default());
        activate(&mut mode, &mut controls, false);

        assert_eq!(controls.buttons.left, action::ROTATE);
        assert_eq!(controls.buttons.right, action::TRUCK);
        let profile = controls.profiles.last().unwrap();
        assert_eq!(profile.min_polar_angle, 0.0);
        assert_eq!(profile.max_polar_angle, std::f32::consts::PI);
    }

    #[test]
    fn orbit_pushes_degenerate_target_back_out() {
        let mut controls = RecordingControls::new();
        controls.position = Vec3::ZERO;
        controls.target = Vec3::new(0.0, 0.0, -0.01);
        let mut mode = OrbitMode::new(ControlOptions::default());
        activate(&mut mode, &mut controls, false);

        let distance = (controls.target - controls.position).length();
        assert!(distance > 1.0, "target still degenerate: {distance}");
    }

    #[test]
    fn orbit_suppression_leaves_target_alone() {
        let mut controls = RecordingControls::new();
        controls.position = Vec3::ZERO;
        controls.target = Vec3::new(0.0, 0.0, -0.01);
        let mut mode = OrbitMode::new(ControlOptions::default());
        activate(&mut mode, &mut controls, true);

        assert_eq!(controls.target, Vec3::new(0.0, 0.0, -0.01));
    }

    #[test]
    fn first_person_locks_panning_and_pins_target() {
        let mut controls = RecordingControls::new();
        controls.position = Vec3::new(0.0, 0.0, 10.0);
        controls.target = Vec3::ZERO;
        let mut mode = FirstPersonMode::new(ControlOptions::default());
        activate(&mut mode, &mut controls, false);

        assert_eq!(controls.buttons.right, action::NONE);
        assert_eq!(controls.buttons.wheel, action::DOLLY);
        let profile = controls.profiles.last().unwrap();
        assert_eq!(profile.min_distance, profile.max_distance);
        // Target glued just in front of the eye
        let distance = (controls.target - controls.position).length();
        assert!(distance < 0.1, "target not pinned: {distance}");
    }

    #[test]
    fn plan_locks_vertical_rotation_and_snaps_top_down() {
        let mut controls = RecordingControls::new();
        controls.position = Vec3::new(10.0, 0.0, 0.0);
        controls.target = Vec3::ZERO;
        let mut mode = PlanMode::new(ControlOptions::default());
        activate(&mut mode, &mut controls, false);

        assert_eq!(controls.buttons.left, action::TRUCK);
        assert_eq!(controls.buttons.wheel, action::ZOOM);
        let profile = controls.profiles.last().unwrap();
        assert_eq!(profile.min_polar_angle, profile.max_polar_angle);
        assert_eq!(profile.azimuth_rotate_speed, 0.0);
        // Eye moved directly above the target, preserving distance
        assert_eq!(controls.position(), Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn deactivation_touches_nothing() {
        let mut controls = RecordingControls::new();
        let before = controls.buttons;
        let mut mode = PlanMode::new(ControlOptions::default());
        let opts = ActivationOptions::default();
        mode.set_active(&mut controls, false, &opts);

        assert_eq!(controls.buttons, before);
        assert!(controls.profiles.is_empty());
    }

    #[test]
    fn ids_display_as_registry_keys() {
        assert_eq!(NavModeId::Orbit.to_string(), "Orbit");
        assert_eq!(NavModeId::FirstPerson.to_string(), "FirstPerson");
        assert_eq!(NavModeId::Plan.to_string(), "Plan");
    }
}
