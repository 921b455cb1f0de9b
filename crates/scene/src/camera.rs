use foundation::math::{Mat3, Mat4, Vec3};

/// Drawable surface size in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px: width_px.max(1.0),
            height_px: height_px.max(1.0),
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width_px / self.height_px
    }
}

/// Perspective camera orbiting the globe.
///
/// The label pipeline consumes this read-only each frame: view matrix for
/// the facing test, normal matrix for surface normals, view-projection for
/// screen placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f64,
    pub near: f64,
    pub far: f64,
    pub viewport: Viewport,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 2.5),
            target: Vec3::zero(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y_rad: 60f64.to_radians(),
            near: 0.1,
            far: 10.0,
            viewport: Viewport::new(1280.0, 720.0),
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, self.viewport.aspect(), self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix().mul(self.view_matrix())
    }

    /// Normal matrix of the world-to-view transform, for directions only.
    pub fn normal_matrix(&self) -> Mat3 {
        self.view_matrix().normal_matrix()
    }

    /// Adopts a new drawable size. Returns `true` when the size actually
    /// changed; the aspect ratio is derived, so projection adapts with it.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera, Viewport};
    use foundation::math::Vec3;

    #[test]
    fn viewport_guards_against_zero_sizes() {
        let v = Viewport::new(0.0, -5.0);
        assert_eq!(v.width_px, 1.0);
        assert_eq!(v.height_px, 1.0);
    }

    #[test]
    fn set_viewport_reports_changes_only() {
        let mut camera = Camera::default();
        assert!(!camera.set_viewport(Viewport::new(1280.0, 720.0)));
        assert!(camera.set_viewport(Viewport::new(800.0, 600.0)));
        assert_eq!(camera.viewport.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn default_camera_projects_straight_ahead_to_ndc_center() {
        let camera = Camera::default();
        let ndc = camera
            .view_proj()
            .project_point(Vec3::new(0.0, 0.0, 1.0))
            .expect("point in front of camera");
        assert!(ndc.x.abs() <= 1e-12);
        assert!(ndc.y.abs() <= 1e-12);
    }

    #[test]
    fn normal_matrix_keeps_directions_unit_length() {
        let camera = Camera {
            eye: Vec3::new(1.5, 0.8, -2.0),
            ..Camera::default()
        };
        let n = camera.normal_matrix();
        let dir = n.mul_vec3(Vec3::new(0.0, 0.0, 1.0));
        assert!((dir.length() - 1.0).abs() <= 1e-9);
    }
}
