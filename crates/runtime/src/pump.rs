use crate::frame::Frame;

/// Why a redraw was requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RedrawTrigger {
    DataLoaded,
    CameraChanged,
    ViewportResized,
    SettingsChanged,
}

/// Single-shot scheduling seam backed by the platform's display-refresh
/// primitive (requestAnimationFrame in a browser, a redraw request on a
/// native event loop). One call schedules at most one future frame callback.
pub trait RedrawRequester {
    fn request_redraw(&mut self);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PumpState {
    Idle,
    Pending,
}

/// Coalesces redraw triggers into at most one pending frame.
///
/// Any trigger while `Idle` schedules exactly one frame callback through the
/// [`RedrawRequester`]; triggers while a frame is already `Pending` are
/// no-ops. Taking the frame returns the pump to `Idle`, so the frame always
/// observes the camera/settings state current at execution time rather than
/// at trigger time.
#[derive(Debug)]
pub struct FramePump {
    state: PumpState,
    next: Frame,
    pending_cause: Option<RedrawTrigger>,
}

impl FramePump {
    pub fn new(dt_s: f64) -> Self {
        Self {
            state: PumpState::Idle,
            next: Frame::new(0, dt_s),
            pending_cause: None,
        }
    }

    /// Schedules the unconditional startup frame that establishes the first
    /// visible image. Behaves like a trigger with no cause.
    pub fn force_start<R: RedrawRequester>(&mut self, requester: &mut R) {
        if self.state == PumpState::Idle {
            self.state = PumpState::Pending;
            requester.request_redraw();
        }
    }

    /// Requests a re-evaluation. Returns `true` when this call scheduled a
    /// new frame callback and `false` when one was already pending.
    pub fn request<R: RedrawRequester>(
        &mut self,
        trigger: RedrawTrigger,
        requester: &mut R,
    ) -> bool {
        match self.state {
            PumpState::Idle => {
                self.state = PumpState::Pending;
                self.pending_cause = Some(trigger);
                requester.request_redraw();
                true
            }
            PumpState::Pending => false,
        }
    }

    /// First trigger that scheduled the currently pending frame, if any.
    /// Diagnostic only; coalesced follow-up triggers are not recorded.
    pub fn pending_cause(&self) -> Option<RedrawTrigger> {
        self.pending_cause
    }

    pub fn is_pending(&self) -> bool {
        self.state == PumpState::Pending
    }

    /// Consumes the pending frame, returning the pump to `Idle`. `None` for
    /// a spurious callback with nothing pending.
    pub fn take_frame(&mut self) -> Option<Frame> {
        match self.state {
            PumpState::Idle => None,
            PumpState::Pending => {
                self.state = PumpState::Idle;
                self.pending_cause = None;
                let frame = self.next;
                self.next = frame.next();
                Some(frame)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FramePump, RedrawRequester, RedrawTrigger};

    #[derive(Default)]
    struct CountingRequester {
        calls: usize,
    }

    impl RedrawRequester for CountingRequester {
        fn request_redraw(&mut self) {
            self.calls += 1;
        }
    }

    #[test]
    fn many_triggers_schedule_exactly_one_frame() {
        let mut pump = FramePump::new(1.0 / 60.0);
        let mut requester = CountingRequester::default();

        assert!(pump.request(RedrawTrigger::DataLoaded, &mut requester));
        assert!(!pump.request(RedrawTrigger::CameraChanged, &mut requester));
        assert!(!pump.request(RedrawTrigger::ViewportResized, &mut requester));
        assert!(!pump.request(RedrawTrigger::SettingsChanged, &mut requester));

        assert_eq!(requester.calls, 1);
        assert_eq!(pump.pending_cause(), Some(RedrawTrigger::DataLoaded));
    }

    #[test]
    fn take_frame_returns_pump_to_idle() {
        let mut pump = FramePump::new(0.1);
        let mut requester = CountingRequester::default();

        pump.request(RedrawTrigger::CameraChanged, &mut requester);
        let frame = pump.take_frame().expect("frame was pending");
        assert_eq!(frame.index, 0);
        assert!(!pump.is_pending());
        assert_eq!(pump.pending_cause(), None);
        assert_eq!(pump.take_frame(), None);

        // A later trigger schedules anew and advances the frame counter.
        assert!(pump.request(RedrawTrigger::CameraChanged, &mut requester));
        assert_eq!(requester.calls, 2);
        assert_eq!(pump.take_frame().expect("pending").index, 1);
    }

    #[test]
    fn force_start_fires_without_any_trigger() {
        let mut pump = FramePump::new(0.1);
        let mut requester = CountingRequester::default();

        pump.force_start(&mut requester);
        assert_eq!(requester.calls, 1);
        assert!(pump.is_pending());
        assert_eq!(pump.pending_cause(), None);

        // Idempotent while already pending.
        pump.force_start(&mut requester);
        assert_eq!(requester.calls, 1);
    }

    #[test]
    fn spurious_callback_yields_no_frame() {
        let mut pump = FramePump::new(0.1);
        assert_eq!(pump.take_frame(), None);
    }
}
