//! Math helpers shared across the camera stack.

/// Axis-aligned bounding boxes and bounding spheres for view fitting.
pub mod bounds;
