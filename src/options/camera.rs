use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and frustum parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees (perspective camera).
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Nominal orthographic frustum height before any world is bound.
    #[schemars(skip)]
    pub frustum_size: f32,
    /// Bounding-sphere padding applied by [`fit`](crate::camera::OrthoPerspectiveCamera::fit).
    #[schemars(title = "Fit Offset", range(min = 1.0, max = 3.0), extend("step" = 0.1))]
    pub fit_offset: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            frustum_size: 50.0,
            fit_offset: 1.5,
        }
    }
}
