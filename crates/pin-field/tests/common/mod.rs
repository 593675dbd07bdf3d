//! Shared helpers for pin field integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use pin_field::{CellView, DecorationStyle, PinField, PinFieldConfig, Signal};

/// What the host would currently show for one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: Option<String>,
    pub overlay_visible: bool,
    pub animating: bool,
}

/// A view that applies directives to per-cell state, like a real host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingView {
    pub cells: Vec<ViewCell>,
    pub directive_count: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell_mut(&mut self, index: usize) -> &mut ViewCell {
        if self.cells.len() <= index {
            self.cells.resize_with(index + 1, ViewCell::default);
        }
        self.directive_count += 1;
        &mut self.cells[index]
    }

    /// Indices of cells whose indicator animation is running.
    pub fn animating(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.animating)
            .map(|(index, _)| index)
            .collect()
    }
}

impl CellView for RecordingView {
    fn set_cell_text(&mut self, index: usize, text: Option<&str>) {
        self.cell_mut(index).text = text.map(str::to_owned);
    }

    fn set_overlay_visible(&mut self, index: usize, visible: bool) {
        self.cell_mut(index).overlay_visible = visible;
    }

    fn start_indicator_animation(&mut self, index: usize) {
        self.cell_mut(index).animating = true;
    }

    fn stop_indicator_animation(&mut self, index: usize, keep_visible: bool) {
        let cell = self.cell_mut(index);
        cell.animating = false;
        if !keep_visible {
            cell.overlay_visible = false;
        }
    }
}

/// Build a field with a recording view.
pub fn build_field(capacity: usize, style: DecorationStyle) -> PinField<RecordingView> {
    let config = PinFieldConfig::new(capacity).with_decoration_style(style);
    PinField::build(config, RecordingView::new()).expect("valid config")
}

/// Collect every value a signal emits.
pub fn capture<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    signal.connect(move |value: &T| {
        received_clone.lock().push(value.clone());
    });
    received
}
