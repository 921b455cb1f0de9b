use crate::frame::Frame;

/// Category of a frame diagnostic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventKind {
    Load,
    Resize,
    Camera,
    Labels,
    Render,
}

/// Frame-stamped diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: EventKind,
    pub detail: String,
}

/// Collects diagnostics emitted while a frame callback runs, for logs and
/// tests. Not a pub/sub mechanism; consumers drain it between frames.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, frame: Frame, kind: EventKind, detail: impl Into<String>) {
        self.events.push(Event {
            frame_index: frame.index,
            kind,
            detail: detail.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
