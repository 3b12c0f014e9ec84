//! Free orbit: unconstrained rotation around the look-at target.

use glam::Vec3;

use super::{ActivationOptions, NavModeId, NavigationMode};
use crate::controls::{action, ControlProfile, MouseButtons, PointerController};
use crate::options::ControlOptions;

/// Distance the target is pushed out to when a degenerate (near-eye) target
/// is inherited from first-person navigation.
const ORBIT_TARGET_DISTANCE: f32 = 10.0;

/// Unconstrained orbit around the look-at target.
#[derive(Debug, Clone)]
pub struct OrbitMode {
    options: ControlOptions,
}

impl OrbitMode {
    /// Build an orbit mode with the given controller tuning.
    #[must_use]
    pub fn new(options: ControlOptions) -> Self {
        Self { options }
    }

    fn profile(&self) -> ControlProfile {
        ControlProfile {
            azimuth_rotate_speed: self.options.rotate_speed,
            polar_rotate_speed: self.options.rotate_speed,
            truck_speed: self.options.pan_speed,
            dolly_speed: self.options.zoom_speed,
            damping: self.options.damping,
            ..ControlProfile::default()
        }
    }
}

impl<C: PointerController> NavigationMode<C> for OrbitMode {
    fn id(&self) -> NavModeId {
        NavModeId::Orbit
    }

    fn set_active(
        &mut self,
        controls: &mut C,
        active: bool,
        opts: &ActivationOptions,
    ) {
        if !active {
            log::debug!("orbit mode deactivated");
            return;
        }
        controls.set_mouse_buttons(MouseButtons {
            left: action::ROTATE,
            right: action::TRUCK,
            middle: action::DOLLY,
            wheel: action::DOLLY,
        });
        controls.apply_profile(&self.profile());
        if !opts.prevent_target_adjustment {
            // A first-person hand-off leaves the target glued to the eye;
            // push it back out along the view ray so orbiting has a pivot.
            let eye = controls.position();
            let offset = controls.target() - eye;
            if offset.length() < 1.0 {
                let forward = offset.normalize_or(Vec3::NEG_Z);
                controls.set_target(eye + forward * ORBIT_TARGET_DISTANCE);
            }
        }
        log::debug!("orbit mode activated");
    }
}
