use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use crate::extensions::easing::{ease, ease_vec3, Easing};

/// Camera settings, part of [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Initial eye position.
    pub position: [f32; 3],
    /// Initial look-at point.
    pub target: [f32; 3],
    /// Closest allowed eye-to-target distance.
    pub min_distance: f32,
    /// Farthest allowed eye-to-target distance.
    pub max_distance: f32,
    /// Duration of animated framing moves in seconds.
    pub transition_seconds: f32,
    /// Multiplier on the fitted distance (1.0 = sphere touches the frustum).
    pub fit_padding: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            position: [0.0, 60.0, 90.0],
            target: [0.0, 0.0, 0.0],
            min_distance: 5.0,
            max_distance: 200.0,
            transition_seconds: 0.7,
            fit_padding: 1.0,
        }
    }
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (w = 1).
    pub eye: [f32; 4],
}

/// An in-flight animated move of target and distance.
#[derive(Debug, Clone, Copy)]
struct CameraMove {
    from_target: Vec3,
    to_target: Vec3,
    from_distance: f32,
    to_distance: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

/// Perspective orbit camera: the eye sits on a sphere around `target`,
/// parameterised by azimuth (about +Y), elevation and distance.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera looks at.
    pub target: Vec3,
    /// Rotation around the Y axis (radians). 0 = eye on +Z.
    pub azimuth: f32,
    /// Angle above the XZ plane (radians).
    pub elevation: f32,
    /// Distance from target.
    pub distance: f32,
    /// Vertical field of view (radians).
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    min_distance: f32,
    max_distance: f32,
    transition_seconds: f32,
    fit_padding: f32,
    easing: Easing,
    transition: Option<CameraMove>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl OrbitCamera {
    const ORBIT_SENSITIVITY: f32 = 0.005;
    const ZOOM_SPEED: f32 = 0.1;
    const PAN_SPEED: f32 = 0.002;
    /// Keep just shy of the poles so look_at never degenerates.
    const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    pub fn from_config(config: &CameraConfig) -> Self {
        let min_distance = config.min_distance.max(0.01);
        let max_distance = config.max_distance.max(min_distance);
        let mut camera = Self {
            target: Vec3::from(config.target),
            azimuth: 0.0,
            elevation: 0.0,
            distance: min_distance,
            fov_y: config.fov_y_degrees.clamp(1.0, 179.0).to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            min_distance,
            max_distance,
            transition_seconds: config.transition_seconds.max(0.0),
            fit_padding: config.fit_padding.max(0.1),
            easing: Easing::CubicInOut,
            transition: None,
        };
        camera.set_position(Vec3::from(config.position));
        camera
    }

    /// Place the eye at `eye`, keeping the current target.
    pub fn set_position(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let len = offset.length();
        if len < 1e-6 {
            return;
        }
        self.distance = len.clamp(self.min_distance, self.max_distance);
        self.elevation = (offset.y / len).asin().clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self.azimuth = offset.x.atan2(offset.z);
    }

    /// Unit vector from target toward the eye.
    fn eye_direction(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.target + self.eye_direction() * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        let eye = self.position();
        CameraUniform {
            view_proj: (self.projection_matrix() * self.view_matrix()).to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
        }
    }

    /// Update aspect ratio from the viewport size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    // ── User controls (each cancels an in-flight framing move) ──────

    /// Orbit by pointer drag delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.transition = None;
        self.azimuth -= dx * Self::ORBIT_SENSITIVITY;
        self.elevation += dy * Self::ORBIT_SENSITIVITY;
        self.elevation = self.elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        self.transition = None;
        self.distance *= 1.0 - delta * Self::ZOOM_SPEED;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Pan the target in the view plane by a pixel delta.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.transition = None;
        let forward = -self.eye_direction();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let scale = self.distance * Self::PAN_SPEED;
        self.target += (-right * dx + up * dy) * scale;
    }

    // ── Framing ─────────────────────────────────────────────────────

    /// Distance at which a sphere of `radius` fills the narrower FOV axis,
    /// times the configured padding, clamped to the distance limits.
    pub fn fit_distance(&self, radius: f32) -> f32 {
        let half_v = self.fov_y / 2.0;
        let half_h = (half_v.tan() * self.aspect).atan();
        let half = half_v.min(half_h);
        let d = radius.max(0.0) / half.sin() * self.fit_padding;
        d.clamp(self.min_distance, self.max_distance)
    }

    /// Frame a bounding sphere: look at `center` from the fitted distance,
    /// keeping the current viewing direction. Replaces any in-flight move.
    /// Returns the target distance.
    pub fn fit_sphere(&mut self, center: Vec3, radius: f32, animated: bool) -> f32 {
        let to_distance = self.fit_distance(radius);
        if animated && self.transition_seconds > 0.0 {
            self.transition = Some(CameraMove {
                from_target: self.target,
                to_target: center,
                from_distance: self.distance,
                to_distance,
                elapsed: 0.0,
                duration: self.transition_seconds,
                easing: self.easing,
            });
        } else {
            self.transition = None;
            self.target = center;
            self.distance = to_distance;
        }
        to_distance
    }

    /// Advance an in-flight framing move.
    pub fn update(&mut self, dt: f32) {
        let Some(mut mv) = self.transition else { return };
        mv.elapsed += dt.max(0.0);
        let t = mv.elapsed / mv.duration;
        self.target = ease_vec3(mv.from_target, mv.to_target, t, mv.easing);
        self.distance = ease(mv.from_distance, mv.to_distance, t, mv.easing);
        self.transition = if mv.elapsed >= mv.duration { None } else { Some(mv) };
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Where the camera will end up once the current move settles.
    pub fn destination(&self) -> (Vec3, f32) {
        match self.transition {
            Some(mv) => (mv.to_target, mv.to_distance),
            None => (self.target, self.distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn default_starts_at_configured_eye() {
        let cam = OrbitCamera::default();
        assert!(approx(cam.position(), Vec3::new(0.0, 60.0, 90.0)), "{:?}", cam.position());
        assert!(approx(cam.target, Vec3::ZERO));
    }

    #[test]
    fn animated_fit_moves_smoothly() {
        let mut cam = OrbitCamera::default();
        let start = cam.target;
        let center = Vec3::new(20.0, 0.0, 0.0);
        let d = cam.fit_sphere(center, 1.0, true);

        assert!(cam.is_transitioning());
        // Nothing moves until time passes.
        assert!(approx(cam.target, start));

        cam.update(0.35);
        assert!(cam.target.x > 0.0 && cam.target.x < 20.0, "midway x = {}", cam.target.x);

        cam.update(1.0);
        assert!(!cam.is_transitioning());
        assert!(approx(cam.target, center));
        assert!((cam.distance - d).abs() < 1e-4);
    }

    #[test]
    fn instant_fit_snaps() {
        let mut cam = OrbitCamera::default();
        cam.fit_sphere(Vec3::new(0.0, 0.0, -35.0), 3.5, false);
        assert!(!cam.is_transitioning());
        assert!(approx(cam.target, Vec3::new(0.0, 0.0, -35.0)));
    }

    #[test]
    fn fit_keeps_view_direction() {
        let mut cam = OrbitCamera::default();
        let (az, el) = (cam.azimuth, cam.elevation);
        cam.fit_sphere(Vec3::new(10.0, 0.0, 10.0), 1.0, true);
        cam.update(5.0);
        assert_eq!(cam.azimuth, az);
        assert_eq!(cam.elevation, el);
    }

    #[test]
    fn newer_fit_supersedes() {
        let mut cam = OrbitCamera::default();
        cam.fit_sphere(Vec3::new(20.0, 0.0, 0.0), 1.0, true);
        cam.update(0.2);
        cam.fit_sphere(Vec3::new(-45.0, 0.0, 0.0), 3.0, true);
        assert_eq!(cam.destination().0, Vec3::new(-45.0, 0.0, 0.0));
        cam.update(10.0);
        assert!(approx(cam.target, Vec3::new(-45.0, 0.0, 0.0)));
    }

    #[test]
    fn user_orbit_cancels_fit() {
        let mut cam = OrbitCamera::default();
        cam.fit_sphere(Vec3::new(20.0, 0.0, 0.0), 1.0, true);
        cam.orbit(10.0, 0.0);
        assert!(!cam.is_transitioning());
    }

    #[test]
    fn fit_distance_respects_limits() {
        let cam = OrbitCamera::default();
        // Tiny body clamps to the minimum distance.
        assert_eq!(cam.fit_distance(0.4), cam.min_distance());
        // Huge body clamps to the maximum.
        assert_eq!(cam.fit_distance(1000.0), cam.max_distance());
        // Mid-size body: radius / sin(fov/2) for the narrower axis (vertical here).
        let expected = 3.5 / (22.5_f32.to_radians()).sin();
        assert!((cam.fit_distance(3.5) - expected).abs() < 1e-3);
    }

    #[test]
    fn zoom_clamps() {
        let mut cam = OrbitCamera::default();
        cam.zoom(100.0);
        assert!(cam.distance >= cam.min_distance());
        cam.zoom(-1000.0);
        assert!(cam.distance <= cam.max_distance());
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut cam = OrbitCamera::default();
        cam.orbit(0.0, 1.0e6);
        assert!(cam.elevation < std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn pan_moves_target_not_direction() {
        let mut cam = OrbitCamera::default();
        let az = cam.azimuth;
        cam.pan(100.0, 0.0);
        assert!(cam.target.length() > 0.0);
        assert_eq!(cam.azimuth, az);
    }

    #[test]
    fn uniform_eye_matches_position() {
        let cam = OrbitCamera::default();
        let u = cam.uniform();
        let p = cam.position();
        assert_eq!(u.eye, [p.x, p.y, p.z, 1.0]);
    }
}
