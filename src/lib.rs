//! Dual-projection, multi-mode camera controller for interactive 3D
//! viewports.
//!
//! Navcam keeps a perspective and an orthographic camera mathematically
//! consistent with each other so an application can switch projection at any
//! moment without a visible jump, while a registry of navigation modes
//! (orbit, first-person, plan) reconfigures the shared pointer controller
//! for each behavior. The rest of the rendering pipeline consumes a single
//! logical "current camera" regardless of projection or mode.
//!
//! # Key entry points
//!
//! - [`camera::OrthoPerspectiveCamera`] - the façade owning both cameras,
//!   the mode registry, and the projection manager
//! - [`controls::PointerController`] - the narrow seam to the underlying
//!   pointer/orbit controller implementation
//! - [`options::Options`] - runtime configuration (projection parameters,
//!   controller tuning)
//!
//! # Architecture
//!
//! Application code calls into the façade, which delegates mode transitions
//! to [`camera::modes::NavigationMode`] instances and projection decisions
//! to [`camera::projection::ProjectionManager`]. The controller's state
//! (target, position, active camera object) is what the renderer reads each
//! frame. Everything is single-threaded and event-driven; only view fitting
//! suspends the caller, while it awaits the controller's animated
//! transition.

pub mod camera;
pub mod controls;
pub mod error;
pub mod options;
pub mod util;
