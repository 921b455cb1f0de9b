use scene::CountryStore;

/// Boundary to the external label-display collaborator, e.g. absolutely
/// positioned DOM elements. Indices are store indices; the collaborator owns
/// the visual representation and the pipeline only writes numeric state
/// through this trait.
pub trait LabelSink {
    /// Written once per record, right after the store is built.
    fn set_text(&mut self, index: usize, text: &str);
    fn set_visible(&mut self, index: usize, visible: bool);
    fn set_screen_position(&mut self, index: usize, x_px: f64, y_px: f64);
    /// Depth index in `[0, 100000)`; higher stacks nearer the viewer.
    fn set_z_order(&mut self, index: usize, depth: u32);
}

/// Hands every record's display text to the sink, keyed by store index.
pub fn announce_labels<S: LabelSink>(store: &CountryStore, sink: &mut S) {
    for (index, record) in store.iter().enumerate() {
        sink.set_text(index, &record.name);
    }
}
