use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use formats::{StoreBuildConfig, load_country_file};
use labels::{LabelSink, VisibilitySettings};
use runtime::{Frame, RedrawRequester, RedrawTrigger};
use scene::Viewport;

mod app;
use app::{GlobeApp, RenderSink};

/// Headless demo of the globe label pipeline: loads a country-info
/// document, nudges the camera, and runs coalesced frames until the damped
/// motion settles.
#[derive(Parser, Debug)]
#[command(name = "globe_viewer")]
struct Args {
    /// Path to the country-info JSON document.
    #[arg(long)]
    data: PathBuf,

    /// Length-like area threshold; squared before comparison.
    #[arg(long, default_value_t = 20.0)]
    min_area: f64,

    /// Facing-cosine threshold in [-1, 1].
    #[arg(long, default_value_t = -0.2, allow_negative_numbers = true)]
    max_visible_dot: f64,

    /// Drawable width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Drawable height in pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Upper bound on simulated frames.
    #[arg(long, default_value_t = 600)]
    max_frames: u32,
}

/// Single-shot redraw flag standing in for the platform's display-refresh
/// callback.
#[derive(Default)]
struct QueuedRedraw {
    scheduled: bool,
}

impl QueuedRedraw {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.scheduled)
    }
}

impl RedrawRequester for QueuedRedraw {
    fn request_redraw(&mut self) {
        self.scheduled = true;
    }
}

/// Label collaborator that keeps the latest numeric state per label, the
/// way the DOM layer would hold it in element styles.
#[derive(Default)]
struct LabelBoard {
    names: Vec<String>,
    visible: Vec<bool>,
    positions: Vec<(f64, f64)>,
    depths: Vec<u32>,
}

impl LabelBoard {
    fn ensure_len(&mut self, index: usize) {
        if self.names.len() <= index {
            let len = index + 1;
            self.names.resize(len, String::new());
            self.visible.resize(len, false);
            self.positions.resize(len, (0.0, 0.0));
            self.depths.resize(len, 0);
        }
    }

    /// Currently shown labels as (name, x, y, depth), nearest first.
    fn shown(&self) -> Vec<(&str, f64, f64, u32)> {
        let mut out: Vec<(&str, f64, f64, u32)> = self
            .names
            .iter()
            .enumerate()
            .filter(|(i, _)| self.visible[*i])
            .map(|(i, name)| {
                let (x, y) = self.positions[i];
                (name.as_str(), x, y, self.depths[i])
            })
            .collect();
        out.sort_by(|a, b| b.3.cmp(&a.3));
        out
    }
}

impl LabelSink for LabelBoard {
    fn set_text(&mut self, index: usize, text: &str) {
        self.ensure_len(index);
        self.names[index] = text.to_string();
    }

    fn set_visible(&mut self, index: usize, visible: bool) {
        self.ensure_len(index);
        self.visible[index] = visible;
    }

    fn set_screen_position(&mut self, index: usize, x_px: f64, y_px: f64) {
        self.ensure_len(index);
        self.positions[index] = (x_px, y_px);
    }

    fn set_z_order(&mut self, index: usize, depth: u32) {
        self.ensure_len(index);
        self.depths[index] = depth;
    }
}

/// Stand-in for the external renderer.
#[derive(Default)]
struct NullRenderer;

impl RenderSink for NullRenderer {
    fn submit(&mut self, frame: Frame) {
        debug!(frame = frame.index, "render submitted");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut app = GlobeApp::new(1.0 / 60.0);
    app.settings = VisibilitySettings {
        min_area: args.min_area,
        max_visible_dot: args.max_visible_dot,
    };

    let mut redraw = QueuedRedraw::default();
    let mut board = LabelBoard::default();
    let mut renderer = NullRenderer;

    // First frame is forced regardless of triggers.
    app.start(&mut redraw);

    match load_country_file(&args.data, &StoreBuildConfig::default()) {
        Ok((store, skipped)) => {
            for problem in &skipped {
                warn!("skipped country entry: {problem}");
            }
            info!(
                countries = store.len(),
                skipped = skipped.len(),
                "country data loaded"
            );
            app.attach_store(store, &mut board, &mut redraw);
        }
        Err(e) => {
            // The globe keeps rendering without labels; no automatic retry.
            warn!("country data unavailable: {e}");
        }
    }

    // Nudge the orbit so the damped motion and coalescing are exercised.
    app.controller.on_drag(0.015, 0.006, 1.0 / 60.0);
    app.request_redraw(RedrawTrigger::CameraChanged, &mut redraw);

    let surface = Viewport::new(args.width, args.height);
    let mut frames_run = 0u32;
    while frames_run < args.max_frames && redraw.take() {
        if app
            .run_frame(surface, &mut board, &mut renderer, &mut redraw)
            .is_some()
        {
            frames_run += 1;
        }
    }

    for event in app.bus_mut().drain() {
        debug!(frame = event.frame_index, kind = ?event.kind, "{}", event.detail);
    }

    let shown = board.shown();
    info!(frames = frames_run, visible = shown.len(), "simulation settled");
    for (name, x, y, depth) in shown {
        info!("{name}: ({x:.1}, {y:.1}) depth {depth}");
    }
}
