//! First-person walk: rotation pivots at the eye, the wheel walks forward.

use glam::Vec3;

use super::{ActivationOptions, NavModeId, NavigationMode};
use crate::controls::{action, ControlProfile, MouseButtons, PointerController};
use crate::options::ControlOptions;

/// How far in front of the eye the pivot target sits.
const EYE_TARGET_DISTANCE: f32 = 0.01;

/// First-person navigation: panning is locked and forward motion follows
/// the look direction.
#[derive(Debug, Clone)]
pub struct FirstPersonMode {
    options: ControlOptions,
}

impl FirstPersonMode {
    /// Build a first-person mode with the given controller tuning.
    #[must_use]
    pub fn new(options: ControlOptions) -> Self {
        Self { options }
    }

    fn profile(&self) -> ControlProfile {
        ControlProfile {
            // Inverted speeds so dragging looks around rather than
            // orbiting the pinned target.
            azimuth_rotate_speed: -self.options.rotate_speed,
            polar_rotate_speed: -self.options.rotate_speed,
            dolly_speed: self.options.zoom_speed,
            // Pinning the orbit distance turns dolly into forward motion
            // of the camera itself.
            min_distance: EYE_TARGET_DISTANCE,
            max_distance: EYE_TARGET_DISTANCE,
            damping: self.options.damping,
            ..ControlProfile::default()
        }
    }
}

impl<C: PointerController> NavigationMode<C> for FirstPersonMode {
    fn id(&self) -> NavModeId {
        NavModeId::FirstPerson
    }

    fn set_active(
        &mut self,
        controls: &mut C,
        active: bool,
        opts: &ActivationOptions,
    ) {
        if !active {
            log::debug!("first-person mode deactivated");
            return;
        }
        controls.set_mouse_buttons(MouseButtons {
            left: action::ROTATE,
            right: action::NONE,
            middle: action::NONE,
            wheel: action::DOLLY,
        });
        controls.apply_profile(&self.profile());
        if !opts.prevent_target_adjustment {
            // Glue the target just in front of the eye so rotation pivots
            // at the camera instead of a distant orbit center.
            let eye = controls.position();
            let forward =
                (controls.target() - eye).normalize_or(Vec3::NEG_Z);
            controls.set_target(eye + forward * EYE_TARGET_DISTANCE);
        }
        log::debug!("first-person mode activated");
    }
}
