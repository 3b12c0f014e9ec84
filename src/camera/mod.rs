//! Dual-projection camera system.
//!
//! Owns the perspective/orthographic camera pair, the navigation-mode
//! registry, and the projection manager behind a single façade the rest of
//! the viewer consumes.

/// Camera pair: perspective and orthographic representations.
pub mod core;
/// Navigation behaviors constraining how pointer input drives the camera.
pub mod modes;
/// Façade tying the pair, the mode registry, and projection together.
pub mod ortho_perspective;
/// Projection-kind selection and change broadcast.
pub mod projection;

pub use self::core::{OrthographicCamera, PerspectiveCamera, ViewCamera};
pub use ortho_perspective::{OrthoPerspectiveCamera, Viewport};
pub use projection::{Projection, ProjectionManager};
