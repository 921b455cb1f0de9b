use super::Vec3;

/// Exclusive upper bound of the label depth index.
pub const DEPTH_INDEX_RANGE: u32 = 100_000;

/// Map NDC x/y in `[-1, 1]` to pixel coordinates. Screen y grows downward
/// while NDC y grows upward, so the y axis is inverted.
pub fn ndc_to_screen(ndc: Vec3, viewport_width_px: f64, viewport_height_px: f64) -> (f64, f64) {
    let x = (ndc.x * 0.5 + 0.5) * viewport_width_px;
    let y = (-ndc.y * 0.5 + 0.5) * viewport_height_px;
    (x, y)
}

/// Map NDC z in `[-1, 1]` to an integer depth index in
/// `[0, DEPTH_INDEX_RANGE)`. Higher index = nearer the camera, so overlapping
/// labels can be stacked nearest-on-top.
pub fn depth_index(ndc: Vec3) -> u32 {
    let scaled = (-ndc.z * 0.5 + 0.5) * f64::from(DEPTH_INDEX_RANGE);
    scaled.floor().clamp(0.0, f64::from(DEPTH_INDEX_RANGE - 1)) as u32
}
