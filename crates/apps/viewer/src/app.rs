use labels::{LabelFrame, LabelSink, VisibilitySettings, announce_labels};
use runtime::{EventBus, EventKind, Frame, FramePump, RedrawRequester, RedrawTrigger};
use scene::{Camera, CountryStore, OrbitController, Viewport};

/// Boundary to the external rendering collaborator. Exactly one submission
/// per frame callback, after the labels are up to date.
pub trait RenderSink {
    fn submit(&mut self, frame: Frame);
}

/// Wires the globe pipeline together and runs the frame callback in its
/// fixed order: resize adaptation, camera-control update, label
/// recomputation, render submission.
pub struct GlobeApp {
    pub camera: Camera,
    pub controller: OrbitController,
    pub settings: VisibilitySettings,
    store: Option<CountryStore>,
    label_frame: LabelFrame,
    pump: FramePump,
    bus: EventBus,
}

impl GlobeApp {
    pub fn new(dt_s: f64) -> Self {
        Self {
            camera: Camera::default(),
            controller: OrbitController::new(),
            settings: VisibilitySettings::default(),
            store: None,
            label_frame: LabelFrame::new(),
            pump: FramePump::new(dt_s),
            bus: EventBus::new(),
        }
    }

    /// Schedules the unconditional startup frame.
    pub fn start<R: RedrawRequester>(&mut self, requester: &mut R) {
        self.pump.force_start(requester);
    }

    /// Adopts a freshly built store: announces label texts once, then asks
    /// for a re-evaluation. Replacing a store mid-session is not supported;
    /// the whole data set is adopted or discarded together.
    pub fn attach_store<S: LabelSink, R: RedrawRequester>(
        &mut self,
        store: CountryStore,
        sink: &mut S,
        requester: &mut R,
    ) {
        announce_labels(&store, sink);
        self.store = Some(store);
        self.pump.request(RedrawTrigger::DataLoaded, requester);
    }

    pub fn store(&self) -> Option<&CountryStore> {
        self.store.as_ref()
    }

    /// Feeds an external trigger (camera input, viewport resize, settings
    /// mutation) into the coalescer.
    pub fn request_redraw<R: RedrawRequester>(
        &mut self,
        trigger: RedrawTrigger,
        requester: &mut R,
    ) -> bool {
        self.pump.request(trigger, requester)
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Runs one frame callback if one is pending. `surface` is the current
    /// drawable size, polled by the caller right before the callback.
    pub fn run_frame<S, Rr, Rs>(
        &mut self,
        surface: Viewport,
        label_sink: &mut S,
        renderer: &mut Rs,
        requester: &mut Rr,
    ) -> Option<Frame>
    where
        S: LabelSink,
        Rr: RedrawRequester,
        Rs: RenderSink,
    {
        let frame = self.pump.take_frame()?;

        if self.camera.set_viewport(surface) {
            self.bus.emit(
                frame,
                EventKind::Resize,
                format!("{}x{}", surface.width_px, surface.height_px),
            );
        }

        if self.controller.update(frame.dt_s) {
            // Damped motion still in flight; keep the loop running.
            self.pump.request(RedrawTrigger::CameraChanged, requester);
            self.bus.emit(frame, EventKind::Camera, "motion in flight");
        }
        self.controller.apply_to(&mut self.camera);

        if let Some(store) = &self.store {
            let stats = self.label_frame.update(store, &self.camera, &self.settings);
            self.label_frame.apply(label_sink);
            self.bus.emit(
                frame,
                EventKind::Labels,
                format!(
                    "visible {} of {} (size {}, facing {}, degenerate {})",
                    stats.visible,
                    stats.total,
                    stats.hidden_by_size,
                    stats.hidden_by_facing,
                    stats.degenerate
                ),
            );
        }

        renderer.submit(frame);
        self.bus.emit(frame, EventKind::Render, "submitted");
        Some(frame)
    }
}
