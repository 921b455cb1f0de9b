use foundation::math::{Mat3, Mat4, Vec3};

use crate::settings::VisibilitySettings;

/// Outcome of the per-record visibility decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelVisibility {
    Visible,
    /// Failed the area gate.
    HiddenBySize,
    /// Facing away from the camera.
    HiddenByFacing,
    /// A direction vector was ill-defined this frame.
    HiddenDegenerate,
}

impl LabelVisibility {
    pub fn is_visible(self) -> bool {
        self == LabelVisibility::Visible
    }
}

/// Cosine between the label's outward surface normal and the camera-to-label
/// direction, both unit-length in view space.
///
/// For a sphere centered at the origin the anchor position doubles as the
/// outward normal; the normal matrix carries it into view space as a
/// direction. Values near -1 face the camera, values near +1 face away, and
/// the transition tracks the globe's limb. `None` when either vector is too
/// short to normalize.
pub fn facing_dot(world_position: Vec3, view: &Mat4, normal_matrix: &Mat3) -> Option<f64> {
    let surface_normal = normal_matrix.mul_vec3(world_position).normalize()?;
    let toward_label = view.transform_point3(world_position).normalize()?;
    Some(surface_normal.dot(toward_label))
}

/// Decides visibility for one record. Gates run in order and short-circuit:
/// the area gate first, then the backface gate.
pub fn classify(
    area: f64,
    world_position: Vec3,
    view: &Mat4,
    normal_matrix: &Mat3,
    settings: &VisibilitySettings,
) -> LabelVisibility {
    let large_enough = settings.min_area * settings.min_area;
    if area < large_enough {
        return LabelVisibility::HiddenBySize;
    }

    match facing_dot(world_position, view, normal_matrix) {
        None => LabelVisibility::HiddenDegenerate,
        Some(dot) if dot > settings.max_visible_dot => LabelVisibility::HiddenByFacing,
        Some(_) => LabelVisibility::Visible,
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelVisibility, classify, facing_dot};
    use crate::settings::VisibilitySettings;
    use foundation::math::{Mat3, Mat4, Vec3};
    use scene::Camera;

    fn default_view() -> (Mat4, Mat3) {
        let camera = Camera::default();
        (camera.view_matrix(), camera.normal_matrix())
    }

    fn settings(min_area: f64, max_visible_dot: f64) -> VisibilitySettings {
        VisibilitySettings {
            min_area,
            max_visible_dot,
        }
    }

    #[test]
    fn point_facing_the_camera_has_cosine_near_minus_one() {
        let (view, normal) = default_view();
        let dot = facing_dot(Vec3::new(0.0, 0.0, 1.0), &view, &normal).unwrap();
        assert!((dot + 1.0).abs() <= 1e-9);
    }

    #[test]
    fn point_on_the_far_side_has_cosine_near_plus_one() {
        let (view, normal) = default_view();
        let dot = facing_dot(Vec3::new(0.0, 0.0, -1.0), &view, &normal).unwrap();
        assert!((dot - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn small_area_is_hidden_before_the_facing_test_runs() {
        let (view, normal) = default_view();
        // min_area 20 squares to 400; an area of 399 fails the gate even for
        // a point dead ahead of the camera.
        let verdict = classify(
            399.0,
            Vec3::new(0.0, 0.0, 1.0),
            &view,
            &normal,
            &settings(20.0, -0.2),
        );
        assert_eq!(verdict, LabelVisibility::HiddenBySize);
    }

    #[test]
    fn large_area_passes_the_gate() {
        let (view, normal) = default_view();
        let verdict = classify(
            500.0,
            Vec3::new(0.0, 0.0, 1.0),
            &view,
            &normal,
            &settings(20.0, -0.2),
        );
        assert_eq!(verdict, LabelVisibility::Visible);
    }

    #[test]
    fn limb_point_is_hidden_at_default_threshold_but_not_above_its_cosine() {
        let (view, normal) = default_view();
        // A point near the globe's limb: positive cosine, short of +1.
        let p = Vec3::new(1.0, 0.0, 0.0);
        let dot = facing_dot(p, &view, &normal).unwrap();
        assert!(dot > 0.0 && dot < 1.0);

        let hidden = classify(500.0, p, &view, &normal, &settings(20.0, -0.2));
        assert_eq!(hidden, LabelVisibility::HiddenByFacing);

        let shown = classify(500.0, p, &view, &normal, &settings(20.0, dot + 0.05));
        assert_eq!(shown, LabelVisibility::Visible);
    }

    #[test]
    fn front_point_stays_visible_at_default_threshold() {
        let (view, normal) = default_view();
        // cosine -1 is not greater than -0.2, so the backface gate passes.
        let verdict = classify(
            500.0,
            Vec3::new(0.0, 0.0, 1.0),
            &view,
            &normal,
            &settings(20.0, -0.2),
        );
        assert_eq!(verdict, LabelVisibility::Visible);
    }

    #[test]
    fn raising_min_area_never_reveals_a_record() {
        let (view, normal) = default_view();
        let p = Vec3::new(0.0, 0.0, 1.0);
        let mut previously_hidden = false;
        for step in 0..=50 {
            let min_area = f64::from(step);
            let verdict = classify(450.0, p, &view, &normal, &settings(min_area, -0.2));
            let hidden = verdict == LabelVisibility::HiddenBySize;
            assert!(!previously_hidden || hidden, "area gate not monotonic at {min_area}");
            previously_hidden = hidden;
        }
        assert!(previously_hidden);
    }

    #[test]
    fn raising_max_visible_dot_never_hides_a_record() {
        let (view, normal) = default_view();
        let p = Vec3::new(1.0, 0.0, 0.0);
        let mut previously_visible = false;
        for step in 0..=40 {
            let max_visible_dot = -1.0 + 0.05 * f64::from(step);
            let verdict = classify(500.0, p, &view, &normal, &settings(0.0, max_visible_dot));
            let visible = verdict.is_visible();
            assert!(
                !previously_visible || visible,
                "facing gate not monotonic at {max_visible_dot}"
            );
            previously_visible = visible;
        }
        assert!(previously_visible);
    }

    #[test]
    fn degenerate_anchor_is_hidden_not_nan() {
        let (view, normal) = default_view();
        let verdict = classify(500.0, Vec3::zero(), &view, &normal, &settings(0.0, 1.0));
        assert_eq!(verdict, LabelVisibility::HiddenDegenerate);
    }
}
