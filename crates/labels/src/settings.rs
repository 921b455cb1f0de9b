/// Tunables deciding which labels are shown.
///
/// Mutated by the settings collaborator between frames, read-only while a
/// frame runs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisibilitySettings {
    /// Length-like threshold (degrees); squared before comparison against a
    /// record's extent area.
    pub min_area: f64,
    /// Facing-cosine threshold in `[-1, 1]`. A label whose facing cosine
    /// exceeds it is hidden; raising it moves the visibility boundary from
    /// the front of the globe toward (and past) the terminator.
    pub max_visible_dot: f64,
}

/// Documented tuning range for [`VisibilitySettings::min_area`].
pub const MIN_AREA_RANGE: (f64, f64) = (0.0, 50.0);

/// Documented tuning range for [`VisibilitySettings::max_visible_dot`].
pub const MAX_VISIBLE_DOT_RANGE: (f64, f64) = (-1.0, 1.0);

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            min_area: 20.0,
            max_visible_dot: -0.2,
        }
    }
}
