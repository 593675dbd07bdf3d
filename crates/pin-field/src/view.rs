//! The render interface the host's view layer implements.
//!
//! The widget never draws. It issues [`CellView`] directives keyed by cell
//! index, and the host applies them to whatever labels, image views or
//! overlay elements it created for each cell.

/// Render directives issued by a [`PinField`](crate::PinField).
pub trait CellView {
    /// Show `text` in the cell, or clear it when `None`.
    fn set_cell_text(&mut self, index: usize, text: Option<&str>);

    /// Show or hide the cell's decoration overlay.
    fn set_overlay_visible(&mut self, index: usize, visible: bool);

    /// Start the repeating opacity animation on the cell's overlay.
    fn start_indicator_animation(&mut self, index: usize);

    /// Remove the indicator animation. Unless `keep_visible` is set, the
    /// overlay is hidden as well.
    fn stop_indicator_animation(&mut self, index: usize, keep_visible: bool);
}

impl<V: CellView + ?Sized> CellView for &mut V {
    fn set_cell_text(&mut self, index: usize, text: Option<&str>) {
        (**self).set_cell_text(index, text);
    }

    fn set_overlay_visible(&mut self, index: usize, visible: bool) {
        (**self).set_overlay_visible(index, visible);
    }

    fn start_indicator_animation(&mut self, index: usize) {
        (**self).start_indicator_animation(index);
    }

    fn stop_indicator_animation(&mut self, index: usize, keep_visible: bool) {
        (**self).stop_indicator_animation(index, keep_visible);
    }
}

impl<V: CellView + ?Sized> CellView for Box<V> {
    fn set_cell_text(&mut self, index: usize, text: Option<&str>) {
        (**self).set_cell_text(index, text);
    }

    fn set_overlay_visible(&mut self, index: usize, visible: bool) {
        (**self).set_overlay_visible(index, visible);
    }

    fn start_indicator_animation(&mut self, index: usize) {
        (**self).start_indicator_animation(index);
    }

    fn stop_indicator_animation(&mut self, index: usize, keep_visible: bool) {
        (**self).stop_indicator_animation(index, keep_visible);
    }
}

/// A recorded [`CellView`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    SetCellText { index: usize, text: Option<String> },
    SetOverlayVisible { index: usize, visible: bool },
    StartIndicator { index: usize },
    StopIndicator { index: usize, keep_visible: bool },
}

impl Directive {
    /// Cell the directive targets.
    pub fn index(&self) -> usize {
        match self {
            Self::SetCellText { index, .. }
            | Self::SetOverlayVisible { index, .. }
            | Self::StartIndicator { index }
            | Self::StopIndicator { index, .. } => *index,
        }
    }

    /// Replay the directive onto a view.
    pub fn apply<V: CellView + ?Sized>(&self, view: &mut V) {
        match self {
            Self::SetCellText { index, text } => view.set_cell_text(*index, text.as_deref()),
            Self::SetOverlayVisible { index, visible } => {
                view.set_overlay_visible(*index, *visible)
            }
            Self::StartIndicator { index } => view.start_indicator_animation(*index),
            Self::StopIndicator {
                index,
                keep_visible,
            } => view.stop_indicator_animation(*index, *keep_visible),
        }
    }
}

/// A [`CellView`] that queues directives for later replay.
///
/// Useful when the host's view objects are only reachable at a later point
/// in its frame, and for inspecting what a field rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveBuffer {
    directives: Vec<Directive>,
}

impl DirectiveBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directives queued so far.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Number of queued directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Take all queued directives.
    pub fn drain(&mut self) -> Vec<Directive> {
        std::mem::take(&mut self.directives)
    }

    /// Apply and clear all queued directives, in order.
    pub fn flush_into<V: CellView + ?Sized>(&mut self, view: &mut V) {
        for directive in self.directives.drain(..) {
            directive.apply(view);
        }
    }
}

impl CellView for DirectiveBuffer {
    fn set_cell_text(&mut self, index: usize, text: Option<&str>) {
        self.directives.push(Directive::SetCellText {
            index,
            text: text.map(str::to_owned),
        });
    }

    fn set_overlay_visible(&mut self, index: usize, visible: bool) {
        self.directives
            .push(Directive::SetOverlayVisible { index, visible });
    }

    fn start_indicator_animation(&mut self, index: usize) {
        self.directives.push(Directive::StartIndicator { index });
    }

    fn stop_indicator_animation(&mut self, index: usize, keep_visible: bool) {
        self.directives.push(Directive::StopIndicator {
            index,
            keep_visible,
        });
    }
}
