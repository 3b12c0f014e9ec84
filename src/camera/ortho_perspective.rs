//! Façade tying the camera pair, the mode registry, and projection together.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::core::{OrthographicCamera, PerspectiveCamera, ViewCamera};
use super::modes::{
    ActivationOptions, FirstPersonMode, NavModeId, NavigationMode, OrbitMode,
    PlanMode,
};
use super::projection::{Projection, ProjectionManager};
use crate::controls::{MouseButtons, PointerController};
use crate::error::NavcamError;
use crate::options::Options;
use crate::util::bounds::{Aabb, Bounded};

/// Viewport size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Aspect ratio (width / height), guarding a zero height.
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

type ModeRegistry<C> = FxHashMap<NavModeId, Box<dyn NavigationMode<C>>>;

/// Dual-projection, multi-mode camera controller.
///
/// Owns both camera representations, the navigation-mode registry, the
/// projection manager, and the pointer controller. Exactly one camera is
/// active (driving the renderer) and exactly one mode is active at any
/// time; the inactive camera's pose is kept mirrored so projection switches
/// are seamless. All state is owned exclusively by this instance and
/// mutated from the UI event loop only; dropping the façade releases the
/// cameras, the registry, and the controller together.
pub struct OrthoPerspectiveCamera<C: PointerController> {
    persp: PerspectiveCamera,
    ortho: OrthographicCamera,
    projection: ProjectionManager,
    controls: C,
    modes: ModeRegistry<C>,
    current_mode: Option<NavModeId>,
    saved_buttons: Option<MouseButtons>,
    input_enabled: bool,
    viewport: Viewport,
    options: Options,
}

impl<C: PointerController> OrthoPerspectiveCamera<C> {
    /// Build the controller around an existing pointer controller.
    ///
    /// The mode registry stays empty until [`bind_world`] runs; the
    /// orthographic frustum starts from the nominal frustum size split by
    /// the initial aspect ratio.
    ///
    /// [`bind_world`]: Self::bind_world
    pub fn new(controls: C, viewport: Viewport, options: Options) -> Self {
        let aspect = viewport.aspect();
        Self {
            persp: PerspectiveCamera::new(&options.camera, aspect),
            ortho: OrthographicCamera::new(&options.camera, aspect),
            projection: ProjectionManager::new(),
            controls,
            modes: FxHashMap::default(),
            current_mode: None,
            saved_buttons: None,
            input_enabled: true,
            viewport,
            options,
        }
    }

    /// Underlying pointer controller.
    pub fn controls(&self) -> &C {
        &self.controls
    }

    /// Underlying pointer controller, mutably.
    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    /// Raw perspective camera, for tooling that needs its parameters.
    #[must_use]
    pub fn persp(&self) -> &PerspectiveCamera {
        &self.persp
    }

    /// Raw perspective camera, mutably.
    pub fn persp_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.persp
    }

    /// Raw orthographic camera, for tooling that needs its parameters.
    #[must_use]
    pub fn ortho(&self) -> &OrthographicCamera {
        &self.ortho
    }

    /// Raw orthographic camera, mutably.
    pub fn ortho_mut(&mut self) -> &mut OrthographicCamera {
        &mut self.ortho
    }

    /// Currently active projection kind.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection.current()
    }

    /// Projection manager, for registering change observers.
    pub fn projection_manager_mut(&mut self) -> &mut ProjectionManager {
        &mut self.projection
    }

    /// Camera object currently driving rendering and raycasting.
    #[must_use]
    pub fn current_camera(&self) -> &dyn ViewCamera {
        match self.projection.current() {
            Projection::Perspective => &self.persp,
            Projection::Orthographic => &self.ortho,
        }
    }

    /// Request a projection kind.
    ///
    /// Switching to the already-active kind is a no-op. On a change, the
    /// active pose is mirrored onto the newly authoritative camera first so
    /// the view does not jump, then the published camera reference swaps
    /// and projection observers fire.
    pub fn set_projection(&mut self, kind: Projection) {
        if kind == self.projection.current() {
            return;
        }
        self.mirror_pose(kind);
        let _changed = self.projection.set(kind);
    }

    /// Currently active navigation mode.
    ///
    /// # Errors
    ///
    /// [`NavcamError::NotInitialized`] if no world has ever been bound.
    pub fn mode(&self) -> Result<&dyn NavigationMode<C>, NavcamError> {
        let id = self.current_mode.ok_or(NavcamError::NotInitialized)?;
        let mode = self.modes.get(&id).ok_or(NavcamError::NotInitialized)?;
        Ok(mode.as_ref())
    }

    /// Switch to the navigation mode identified by `id`.
    ///
    /// Switching to the already-active mode is a no-op. Otherwise the old
    /// mode is deactivated and the requested one activated, without target
    /// suppression (only the first activation after a world bind uses it).
    ///
    /// # Errors
    ///
    /// [`NavcamError::NotInitialized`] if no world has ever been bound;
    /// [`NavcamError::UnknownMode`] if `id` is absent from the registry, in
    /// which case the previously active mode stays unchanged.
    pub fn set_mode(&mut self, id: NavModeId) -> Result<(), NavcamError> {
        if self.modes.is_empty() {
            return Err(NavcamError::NotInitialized);
        }
        if self.current_mode == Some(id) {
            return Ok(());
        }
        if !self.modes.contains_key(&id) {
            return Err(NavcamError::UnknownMode(id));
        }
        let opts = ActivationOptions::default();
        if let Some(prev) = self.current_mode {
            if let Some(mode) = self.modes.get_mut(&prev) {
                mode.set_active(&mut self.controls, false, &opts);
            }
        }
        if let Some(mode) = self.modes.get_mut(&id) {
            mode.set_active(&mut self.controls, true, &opts);
        }
        self.current_mode = Some(id);
        log::debug!("navigation mode set to {id}");
        Ok(())
    }

    /// React to a world change: rebuild the mode registry with fresh
    /// instances, enter orbit with target adjustment suppressed (so the
    /// view does not snap), and resync the orthographic frustum.
    pub fn bind_world(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.persp.aspect = viewport.aspect();
        self.modes = Self::build_modes(&self.options);
        let opts = ActivationOptions {
            prevent_target_adjustment: true,
        };
        if let Some(mode) = self.modes.get_mut(&NavModeId::Orbit) {
            mode.set_active(&mut self.controls, true, &opts);
        }
        self.current_mode = Some(NavModeId::Orbit);
        self.sync_ortho_frustum();
        log::info!("world bound: mode registry rebuilt, orbit active");
    }

    /// React to a viewport resize: update the perspective aspect and
    /// resync the orthographic frustum to match.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.persp.aspect = viewport.aspect();
        self.sync_ortho_frustum();
    }

    /// Per-frame update: pull the controller's pose into both cameras so
    /// the inactive one stays consistent with what the user sees.
    pub fn update(&mut self) {
        let eye = self.controls.position();
        let target = self.controls.target();
        self.persp.set_pose(eye, target, Vec3::Y);
        self.ortho.set_pose(eye, target, Vec3::Y);
    }

    /// Enable or disable pointer-driven camera movement.
    ///
    /// Disabling captures the four button bindings and zeroes them, leaving
    /// the camera otherwise functional for tools that need the pointer.
    /// Enabling restores the captured bindings verbatim; without a prior
    /// capture it is a no-op. A repeated disable keeps the original
    /// snapshot rather than capturing the zeroed bindings.
    pub fn set_user_input(&mut self, active: bool) {
        if active {
            if let Some(saved) = self.saved_buttons.take() {
                self.controls.set_mouse_buttons(saved);
            }
            self.input_enabled = true;
        } else {
            if self.saved_buttons.is_none() {
                self.saved_buttons = Some(self.controls.mouse_buttons());
            }
            self.controls.set_mouse_buttons(MouseButtons::NONE);
            self.input_enabled = false;
        }
    }

    /// Frame `meshes` in the viewport with the default fit offset from
    /// [`CameraOptions::fit_offset`](crate::options::CameraOptions).
    pub async fn fit<B: Bounded>(&mut self, meshes: &[B]) {
        let offset = self.options.camera.fit_offset;
        self.fit_with_offset(meshes, offset).await;
    }

    /// Frame `meshes` in the viewport.
    ///
    /// Folds each mesh's bounding box into a union box, frames the sphere
    /// centered on the box with radius `offset` times the largest box size,
    /// and suspends until the controller's animated transition completes.
    /// A no-op when user input is disabled or `meshes` is empty.
    ///
    /// The `&mut self` receiver serializes calls from safe code; if a
    /// caller drops the returned future mid-flight and starts another fit,
    /// the controller's own transition handling (latest wins) governs the
    /// outcome.
    pub async fn fit_with_offset<B: Bounded>(
        &mut self,
        meshes: &[B],
        offset: f32,
    ) {
        if !self.input_enabled {
            return;
        }
        let boxes = meshes.iter().map(Bounded::bounding_box);
        let Some(bounds) = Aabb::from_boxes(boxes) else {
            return;
        };
        let sphere = bounds.bounding_sphere(offset);
        log::debug!(
            "fitting view to sphere r={:.2} at {}",
            sphere.radius,
            sphere.center
        );
        self.controls.fit_to_sphere(sphere, true).await;
    }

    /// Reproject the perspective field of view into orthographic extents at
    /// the current look-at depth, so the orthographic view's apparent scale
    /// matches what the perspective view shows.
    fn sync_ortho_frustum(&mut self) {
        self.update();
        let forward = self.persp.forward();
        let depth = (self.persp.target - self.persp.eye).dot(forward);
        let height = depth * 2.0 * (self.persp.fovy.to_radians() / 2.0).tan();
        let width = height * self.viewport.aspect();
        self.ortho.set_extents(width, height);
        log::debug!("ortho frustum resynced to {width:.2} x {height:.2}");
    }

    /// Copy the active camera's pose onto the camera about to take over.
    fn mirror_pose(&mut self, kind: Projection) {
        match kind {
            Projection::Orthographic => {
                self.ortho.set_pose(
                    self.persp.eye,
                    self.persp.target,
                    self.persp.up,
                );
            }
            Projection::Perspective => {
                self.persp.set_pose(
                    self.ortho.eye,
                    self.ortho.target,
                    self.ortho.up,
                );
            }
        }
    }

    fn build_modes(options: &Options) -> ModeRegistry<C> {
        let mut modes: ModeRegistry<C> = FxHashMap::default();
        for id in NavModeId::ALL {
            let mode: Box<dyn NavigationMode<C>> = match id {
                NavModeId::Orbit => {
                    Box::new(OrbitMode::new(options.controls.clone()))
                }
                NavModeId::FirstPerson => {
                    Box::new(FirstPersonMode::new(options.controls.clone()))
                }
                NavModeId::Plan => {
                    Box::new(PlanMode::new(options.controls.clone()))
                }
            };
            let _prev = modes.insert(id, mode);
        }
        modes
    }
}
