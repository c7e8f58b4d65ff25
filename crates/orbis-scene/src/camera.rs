//! Orbit camera rig: fixed distance around the origin, continuous auto-rotation,
//! polar angle held inside a band that never reaches either pole.

use std::f64::consts::{FRAC_PI_4, TAU};

use glam::{Mat4, Vec2, Vec3};

use crate::error::{Control, SceneError};
use crate::viewport::Viewport;

/// Where the camera starts, looking at the origin.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 8.0);
/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 60.0;
/// Auto-rotate speed in orbit-control units (2.0 = one turn per 30 s at 60 ticks/s).
pub const AUTO_ROTATE_SPEED: f64 = 0.5;
/// Smallest polar angle from +Y.
pub const MIN_POLAR: f64 = FRAC_PI_4;
/// Largest polar angle from +Y.
pub const MAX_POLAR: f64 = 3.0 * FRAC_PI_4;
/// Drag sensitivity multiplier.
pub const ROTATE_SPEED: f64 = 1.0;
/// Near clip distance.
pub const NEAR: f32 = 0.1;
/// Far clip distance.
pub const FAR: f32 = 1000.0;

/// Radians of auto-rotation per tick at speed 1.
const AUTO_ROTATE_STEP: f64 = TAU / 60.0 / 60.0;

/// Camera state expressed in spherical coordinates around `target`.
#[derive(Clone, Debug)]
pub struct CameraRig {
    target: Vec3,
    distance: f64,
    azimuth: f64,
    polar: f64,
    fov_y: f32,
    viewport: Viewport,
    auto_rotate_speed: f64,
}

impl CameraRig {
    /// Place the rig at [`CAMERA_START`] for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        let offset = CAMERA_START.as_dvec3();
        let distance = offset.length();
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = -offset.x.atan2(offset.z);
        Self {
            target: Vec3::ZERO,
            distance,
            azimuth,
            polar: polar.clamp(MIN_POLAR, MAX_POLAR),
            fov_y: FOV_Y_DEGREES.to_radians(),
            viewport,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
        }
    }

    /// Advance the auto-rotation by `dt_ticks` and re-apply the polar clamp.
    /// Non-positive or non-finite steps are ignored.
    pub fn advance(&mut self, dt_ticks: f64) {
        if !dt_ticks.is_finite() || dt_ticks <= 0.0 {
            return;
        }
        self.azimuth += AUTO_ROTATE_STEP * self.auto_rotate_speed * dt_ticks;
        self.clamp_polar();
    }

    /// Orbit from a pointer drag measured in pixels.
    ///
    /// A drag across the full viewport height turns the camera one full
    /// revolution. Dragging right moves the camera the same way auto-rotation
    /// does; dragging down raises it. The polar clamp always applies.
    pub fn drag(&mut self, delta_px: Vec2) {
        let height = f64::from(self.viewport.height);
        let dx = f64::from(delta_px.x);
        let dy = f64::from(delta_px.y);
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.azimuth += TAU * dx / height * ROTATE_SPEED;
        self.polar -= TAU * dy / height * ROTATE_SPEED;
        self.clamp_polar();
    }

    /// Zoom is disabled; the distance never changes.
    pub fn zoom(&mut self, _delta: f32) -> Result<(), SceneError> {
        Err(SceneError::ControlDisabled(Control::Zoom))
    }

    /// Pan is disabled; the target never moves.
    pub fn pan(&mut self, _delta_px: Vec2) -> Result<(), SceneError> {
        Err(SceneError::ControlDisabled(Control::Pan))
    }

    /// Update the projection for a new viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Accumulated azimuth in radians, not wrapped.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Polar angle from +Y, always in `[MIN_POLAR, MAX_POLAR]`.
    pub fn polar(&self) -> f64 {
        self.polar
    }

    /// Distance from the target.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Look-at point.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Width / height of the current viewport.
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.aspect_ratio()
    }

    /// World-space eye position.
    ///
    /// Azimuth grows with auto-rotation and carries the eye from +Z toward -X.
    pub fn position(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.rem_euclid(TAU).sin_cos();
        let offset = glam::DVec3::new(
            -self.distance * sin_p * sin_a,
            self.distance * cos_p,
            self.distance * sin_p * cos_a,
        );
        self.target + offset.as_vec3()
    }

    /// Right-handed view matrix looking at the target with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Right-handed perspective projection with depth in `[0, 1]`.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio(), NEAR, FAR)
    }

    /// `projection * view`.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn clamp_polar(&mut self) {
        self.polar = self.polar.clamp(MIN_POLAR, MAX_POLAR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn rig() -> CameraRig {
        CameraRig::new(Viewport::new(1280, 720).unwrap())
    }

    #[test]
    fn test_starts_at_initial_position() {
        let cam = rig();
        assert!((cam.position() - CAMERA_START).length() < 1e-5);
        assert!((cam.polar() - FRAC_PI_2).abs() < 1e-12);
        assert!((cam.distance() - 8.0).abs() < 1e-12);
        assert_eq!(cam.azimuth(), 0.0);
    }

    #[test]
    fn test_fov_is_sixty_degrees() {
        let cam = rig();
        assert!((cam.fov_y() - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
    }

    #[test]
    fn test_auto_rotate_turns_once_per_two_minutes() {
        let mut cam = rig();
        // 120 s at 60 ticks/s with speed 0.5.
        for _ in 0..7200 {
            cam.advance(1.0);
        }
        assert!((cam.azimuth() - TAU).abs() < 1e-9);
        assert!((cam.position() - CAMERA_START).length() < 1e-3);
    }

    #[test]
    fn test_advance_ignores_invalid_steps() {
        let mut cam = rig();
        cam.advance(0.0);
        cam.advance(-4.0);
        cam.advance(f64::NAN);
        cam.advance(f64::INFINITY);
        assert_eq!(cam.azimuth(), 0.0);
    }

    #[test]
    fn test_drag_clamps_polar() {
        let mut cam = rig();
        cam.drag(Vec2::new(0.0, 10_000.0));
        assert!((cam.polar() - MIN_POLAR).abs() < 1e-12);
        cam.drag(Vec2::new(0.0, -50_000.0));
        assert!((cam.polar() - MAX_POLAR).abs() < 1e-12);
        cam.advance(3.0);
        assert!((MIN_POLAR..=MAX_POLAR).contains(&cam.polar()));
    }

    #[test]
    fn test_drag_never_reaches_poles() {
        let mut cam = rig();
        for step in [-900.0, 300.0, 2000.0, -10.0, 1e6, -1e6] {
            cam.drag(Vec2::new(step * 0.5, step));
            let up = (cam.position() - cam.target()).normalize().dot(Vec3::Y);
            assert!(up.abs() <= (MIN_POLAR.cos() as f32) + 1e-5);
        }
    }

    #[test]
    fn test_horizontal_drag_changes_azimuth() {
        let mut cam = rig();
        cam.drag(Vec2::new(360.0, 0.0));
        assert!((cam.azimuth() - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_and_pan_rejected() {
        let mut cam = rig();
        let before = cam.position();
        assert!(matches!(
            cam.zoom(5.0),
            Err(SceneError::ControlDisabled(Control::Zoom))
        ));
        assert!(matches!(
            cam.pan(Vec2::new(10.0, 10.0)),
            Err(SceneError::ControlDisabled(Control::Pan))
        ));
        assert_eq!(cam.position(), before);
        assert_eq!(cam.target(), Vec3::ZERO);
    }

    #[test]
    fn test_view_matrix_places_target_in_front() {
        let mut cam = rig();
        cam.advance(1234.0);
        let view_space = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(view_space.z < 0.0);
        assert!((view_space.z.abs() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_viewport_updates_aspect() {
        let mut cam = rig();
        cam.set_viewport(Viewport::new(800, 800).unwrap());
        assert!((cam.aspect_ratio() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_projection_combines_correctly() {
        let cam = rig();
        let expected = cam.projection_matrix() * cam.view_matrix();
        assert!(cam.view_projection_matrix().abs_diff_eq(expected, 1e-6));
    }
}
