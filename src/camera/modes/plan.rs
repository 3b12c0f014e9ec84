//! Constrained 2D plan view: top-down, pan and zoom only.

use glam::Vec3;

use super::{ActivationOptions, NavModeId, NavigationMode};
use crate::controls::{action, ControlProfile, MouseButtons, PointerController};
use crate::options::ControlOptions;

/// Top-down plan navigation: vertical rotation is locked and movement stays
/// in the horizontal plane.
#[derive(Debug, Clone)]
pub struct PlanMode {
    options: ControlOptions,
}

impl PlanMode {
    /// Build a plan mode with the given controller tuning.
    #[must_use]
    pub fn new(options: ControlOptions) -> Self {
        Self { options }
    }

    fn profile(&self) -> ControlProfile {
        ControlProfile {
            // Collapse the polar range to straight-down and zero the rotate
            // speeds; pointer input can only pan and zoom.
            min_polar_angle: 0.0,
            max_polar_angle: 0.0,
            azimuth_rotate_speed: 0.0,
            polar_rotate_speed: 0.0,
            truck_speed: self.options.pan_speed,
            dolly_speed: self.options.zoom_speed,
            damping: self.options.damping,
            ..ControlProfile::default()
        }
    }
}

impl<C: PointerController> NavigationMode<C> for PlanMode {
    fn id(&self) -> NavModeId {
        NavModeId::Plan
    }

    fn set_active(
        &mut self,
        controls: &mut C,
        active: bool,
        opts: &ActivationOptions,
    ) {
        if !active {
            log::debug!("plan mode deactivated");
            return;
        }
        controls.set_mouse_buttons(MouseButtons {
            left: action::TRUCK,
            right: action::TRUCK,
            middle: action::ZOOM,
            wheel: action::ZOOM,
        });
        controls.apply_profile(&self.profile());
        if !opts.prevent_target_adjustment {
            // Snap the eye directly above the target, preserving the
            // current viewing distance.
            let target = controls.target();
            let height = (controls.position() - target).length().max(1.0);
            controls.set_position(target + Vec3::Y * height);
        }
        log::debug!("plan mode activated");
    }
}
