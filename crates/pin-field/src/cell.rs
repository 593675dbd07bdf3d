//! Per-cell records.

use crate::animation::IndicatorPulse;

/// What a cell should look like, derived from the cursor and configuration.
///
/// Never stored; recomputed on demand by
/// [`PinField::cell_visual`](crate::PinField::cell_visual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellVisual {
    /// The cell holds an entered character.
    pub filled: bool,
    /// The active indicator is running on this cell.
    pub shows_active_indicator: bool,
}

/// One cell of the field and the state of its decoration handle, as last
/// rendered through the host's [`CellView`](crate::CellView).
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    index: usize,
    /// Text currently displayed (after echo masking).
    display: Option<String>,
    filled: bool,
    overlay_visible: bool,
    indicator: Option<IndicatorPulse>,
}

impl Cell {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            display: None,
            filled: false,
            overlay_visible: false,
            indicator: None,
        }
    }

    /// Position of this cell in the row.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cell holds an entered character.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Text shown in the cell; `None` when empty or echo is disabled.
    pub fn display_text(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Whether the decoration overlay is shown.
    #[inline]
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// The running indicator animation, if any.
    pub fn indicator(&self) -> Option<&IndicatorPulse> {
        self.indicator.as_ref()
    }

    /// Whether the indicator animation is running on this cell.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.indicator.is_some()
    }

    /// The visual state this record currently represents.
    pub fn visual(&self) -> CellVisual {
        CellVisual {
            filled: self.filled,
            shows_active_indicator: self.is_animating(),
        }
    }

    pub(crate) fn set_content(&mut self, filled: bool, display: Option<String>) {
        self.filled = filled;
        self.display = display;
    }

    pub(crate) fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    pub(crate) fn start_indicator(&mut self, pulse: IndicatorPulse) {
        self.indicator = Some(pulse);
    }

    pub(crate) fn stop_indicator(&mut self) -> Option<IndicatorPulse> {
        self.indicator.take()
    }
}
