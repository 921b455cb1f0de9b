use foundation::math::Vec3;

use crate::camera::Camera;

/// Minimum camera distance from the globe center (sphere radii).
const MIN_DISTANCE: f64 = 1.2;

/// Maximum camera distance from the globe center (sphere radii).
const MAX_DISTANCE: f64 = 4.0;

/// Damping factor for angular velocity decay (per second).
const ANGULAR_DAMPING: f64 = 4.0;

/// Angular velocity below which inertia stops (radians per second).
const ANGULAR_VELOCITY_THRESHOLD: f64 = 0.001;

/// Zoom smoothing factor (higher = faster response).
const ZOOM_SMOOTHING: f64 = 8.0;

/// Distance gap below which the smooth zoom snaps to its target.
const ZOOM_SETTLE_EPS: f64 = 1e-4;

/// Pitch clamp keeping the orbit short of the poles.
const MAX_PITCH: f64 = std::f64::consts::FRAC_PI_2 - 0.01;

/// Damped orbit controller for the globe camera.
///
/// Rotation is yaw/pitch around the globe center with inertia after drag
/// release; zoom interpolates exponentially toward a clamped target
/// distance. Panning is not supported — the camera always looks at the
/// globe center.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitController {
    yaw_rad: f64,
    pitch_rad: f64,
    distance: f64,
    target_distance: f64,
    yaw_velocity: f64,
    pitch_velocity: f64,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            yaw_rad: 0.0,
            pitch_rad: 0.0,
            distance: 2.5,
            target_distance: 2.5,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a drag delta (radians) and records the angular velocity that
    /// drives inertia after release.
    pub fn on_drag(&mut self, delta_yaw_rad: f64, delta_pitch_rad: f64, dt_s: f64) {
        let dt = dt_s.max(1e-6);
        self.yaw_rad += delta_yaw_rad;
        self.pitch_rad = (self.pitch_rad + delta_pitch_rad).clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw_velocity = delta_yaw_rad / dt;
        self.pitch_velocity = delta_pitch_rad / dt;
    }

    /// Wheel zoom. Positive delta dollies out, negative dollies in; the
    /// distance target is clamped to the supported orbit range.
    pub fn on_wheel(&mut self, delta: f64) {
        let zoom_factor = (delta * 0.002).exp();
        self.target_distance = (self.target_distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advances damped motion by `dt_s` seconds. Returns `true` while motion
    /// is still in flight, in which case the caller should schedule another
    /// frame.
    pub fn update(&mut self, dt_s: f64) -> bool {
        let dt = dt_s.clamp(0.0, 0.1);
        let mut animating = false;

        if self.yaw_velocity.abs() > ANGULAR_VELOCITY_THRESHOLD
            || self.pitch_velocity.abs() > ANGULAR_VELOCITY_THRESHOLD
        {
            self.yaw_rad += self.yaw_velocity * dt;
            self.pitch_rad = (self.pitch_rad + self.pitch_velocity * dt).clamp(-MAX_PITCH, MAX_PITCH);

            let decay = (-ANGULAR_DAMPING * dt).exp();
            self.yaw_velocity *= decay;
            self.pitch_velocity *= decay;
            if self.yaw_velocity.abs() <= ANGULAR_VELOCITY_THRESHOLD
                && self.pitch_velocity.abs() <= ANGULAR_VELOCITY_THRESHOLD
            {
                self.yaw_velocity = 0.0;
                self.pitch_velocity = 0.0;
            }
            animating = true;
        }

        if (self.distance - self.target_distance).abs() > ZOOM_SETTLE_EPS {
            let alpha = 1.0 - (-ZOOM_SMOOTHING * dt).exp();
            self.distance += (self.target_distance - self.distance) * alpha;
            self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
            if (self.distance - self.target_distance).abs() <= ZOOM_SETTLE_EPS {
                self.distance = self.target_distance;
            }
            animating = true;
        }

        animating
    }

    /// Camera eye position on the orbit sphere around the globe center.
    pub fn eye_position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw_rad.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch_rad.sin_cos();
        Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        )
    }

    pub fn apply_to(&self, camera: &mut Camera) {
        camera.eye = self.eye_position();
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn yaw_rad(&self) -> f64 {
        self.yaw_rad
    }

    pub fn pitch_rad(&self) -> f64 {
        self.pitch_rad
    }
}
