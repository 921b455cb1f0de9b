use foundation::math::{depth_index, ndc_to_screen};
use scene::{Camera, CountryStore};

use crate::classifier::{LabelVisibility, classify};
use crate::settings::VisibilitySettings;
use crate::sink::LabelSink;

/// Tallies from one label pass, for diagnostics.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LabelPassStats {
    pub total: usize,
    pub visible: usize,
    pub hidden_by_size: usize,
    pub hidden_by_facing: usize,
    pub degenerate: usize,
}

/// Per-frame label state, parallel to the record array.
///
/// The store stays immutable; everything that changes per frame lives here,
/// recomputed in place on every pass and never carried across frames.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelFrame {
    visible: Vec<bool>,
    screen_px: Vec<(f64, f64)>,
    depth: Vec<u32>,
}

impl LabelFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Pixel anchor for a visible label; `None` while hidden.
    pub fn screen_position(&self, index: usize) -> Option<(f64, f64)> {
        if self.is_visible(index) {
            self.screen_px.get(index).copied()
        } else {
            None
        }
    }

    /// Depth index for a visible label; `None` while hidden.
    pub fn depth(&self, index: usize) -> Option<u32> {
        if self.is_visible(index) {
            self.depth.get(index).copied()
        } else {
            None
        }
    }

    /// Recomputes visibility and placement for every record.
    ///
    /// Camera-derived matrices are evaluated once per pass, not per record.
    /// Hidden records skip projection entirely; a record whose projection
    /// degenerates (eye-plane hit) is counted and hidden for the frame.
    pub fn update(
        &mut self,
        store: &CountryStore,
        camera: &Camera,
        settings: &VisibilitySettings,
    ) -> LabelPassStats {
        let count = store.len();
        self.visible.clear();
        self.visible.resize(count, false);
        self.screen_px.clear();
        self.screen_px.resize(count, (0.0, 0.0));
        self.depth.clear();
        self.depth.resize(count, 0);

        let view = camera.view_matrix();
        let normal_matrix = camera.normal_matrix();
        let view_proj = camera.view_proj();
        let viewport = camera.viewport;

        let mut stats = LabelPassStats {
            total: count,
            ..LabelPassStats::default()
        };

        for (index, record) in store.iter().enumerate() {
            match classify(
                record.area,
                record.world_position,
                &view,
                &normal_matrix,
                settings,
            ) {
                LabelVisibility::HiddenBySize => stats.hidden_by_size += 1,
                LabelVisibility::HiddenByFacing => stats.hidden_by_facing += 1,
                LabelVisibility::HiddenDegenerate => stats.degenerate += 1,
                LabelVisibility::Visible => {
                    match view_proj.project_point(record.world_position) {
                        Some(ndc) => {
                            self.screen_px[index] =
                                ndc_to_screen(ndc, viewport.width_px, viewport.height_px);
                            self.depth[index] = depth_index(ndc);
                            self.visible[index] = true;
                            stats.visible += 1;
                        }
                        None => stats.degenerate += 1,
                    }
                }
            }
        }

        stats
    }

    /// Pushes the pass results to the label-display collaborator. Hidden
    /// labels only receive the visibility flag.
    pub fn apply<S: LabelSink>(&self, sink: &mut S) {
        for index in 0..self.len() {
            if self.visible[index] {
                let (x, y) = self.screen_px[index];
                sink.set_visible(index, true);
                sink.set_screen_position(index, x, y);
                sink.set_z_order(index, self.depth[index]);
            } else {
                sink.set_visible(index, false);
            }
        }
    }
}
