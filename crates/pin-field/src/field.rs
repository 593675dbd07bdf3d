//! The segmented PIN/password entry widget.
//!
//! # Example
//!
//! ```
//! use pin_field::{DecorationStyle, DirectiveBuffer, PinField, PinFieldConfig};
//!
//! let config = PinFieldConfig::new(4).with_decoration_style(DecorationStyle::BottomLine);
//! let mut field = PinField::build(config, DirectiveBuffer::new()).unwrap();
//!
//! field.value_changed.connect(|value| {
//!     println!("value is now {value}");
//! });
//!
//! field.insert_character('1');
//! field.insert_character('2');
//! assert_eq!(field.value(), "12");
//! assert_eq!(field.active_indicator(), Some(2));
//!
//! field.delete_backward();
//! assert_eq!(field.value(), "1");
//! ```

use std::time::Instant;

use unicode_segmentation::UnicodeSegmentation;

use pin_field_core::logging::{span_names, targets};
use pin_field_core::{PerfSpan, Signal};

use crate::cell::{Cell, CellVisual};
use crate::config::PinFieldConfig;
use crate::decoration::{Decoration, DecorationController};
use crate::entry::EntryState;
use crate::error::Result;
use crate::keyboard::{KeyInput, KeyboardHint};
use crate::layout::{CellLayout, TextMeasure};
use crate::view::CellView;

/// How the widget takes keyboard focus from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusPolicy {
    /// The widget does not take focus.
    NoFocus,
    /// Focus by click or tap only.
    ClickFocus,
    /// Focus by click, tap or tab navigation.
    #[default]
    StrongFocus,
}

impl FocusPolicy {
    /// Whether focus may be taken by a click or tap.
    pub fn accepts_click_focus(self) -> bool {
        matches!(self, Self::ClickFocus | Self::StrongFocus)
    }

    /// Whether focus may be taken by tab navigation.
    pub fn accepts_tab_focus(self) -> bool {
        matches!(self, Self::StrongFocus)
    }
}

/// A fixed-count row of single-character cells.
///
/// The widget owns the entered value, the cursor and one [`Cell`] record per
/// slot. The host delivers key events and receives render directives through
/// its [`CellView`].
///
/// # Signals
///
/// - `value_changed`: Emitted with the new value after every accepted insert
///   or delete. Never emitted for a rejected operation.
/// - `editing_finished`: Emitted when Enter is pressed.
/// - `activation_requested`: Emitted when the host reports a tap, so it can
///   focus the widget and present its keyboard.
pub struct PinField<V: CellView> {
    config: PinFieldConfig,
    entry: EntryState,
    cells: Vec<Cell>,
    decorations: DecorationController,
    view: V,
    focus_policy: FocusPolicy,
    needs_repaint: bool,

    // Signals

    /// Signal emitted when the entered value changes.
    pub value_changed: Signal<String>,

    /// Signal emitted when Enter is pressed.
    pub editing_finished: Signal<()>,

    /// Signal emitted when the widget is tapped.
    pub activation_requested: Signal<()>,
}

impl<V: CellView> PinField<V> {
    /// Validate `config`, set up every cell through `view` and start the
    /// indicator on the first cell.
    ///
    /// This is the only initialization step; the field is ready for input
    /// once it returns.
    pub fn build(config: PinFieldConfig, mut view: V) -> Result<Self> {
        let _span = PerfSpan::new(span_names::BUILD);
        config.validate()?;

        let capacity = config.capacity();
        let decoration = Decoration::resolve(config.decoration_style(), config.has_placeholder_glyph());
        let decorations = DecorationController::new(decoration, config.echo_mode());

        let mut cells: Vec<Cell> = (0..capacity).map(Cell::new).collect();
        decorations.setup(&mut view, &mut cells);
        decorations.start_indicator(&mut view, &mut cells[0], Instant::now());

        tracing::debug!(target: targets::ENTRY, capacity, ?decoration, "pin field built");

        Ok(Self {
            config,
            entry: EntryState::new(capacity),
            cells,
            decorations,
            view,
            focus_policy: FocusPolicy::default(),
            needs_repaint: true,
            value_changed: Signal::new(),
            editing_finished: Signal::new(),
            activation_requested: Signal::new(),
        })
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Enter one character at the cursor.
    ///
    /// Returns `false`, changing nothing and emitting nothing, when the
    /// field is already full. Any character is accepted regardless of the
    /// keyboard hint.
    pub fn insert_character(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_grapheme(ch.encode_utf8(&mut buf))
    }

    /// Enter text delivered by the host, one grapheme cluster per cell.
    ///
    /// Stops at the first cluster that does not fit. Returns how many
    /// clusters were accepted; each one emits `value_changed`.
    pub fn insert_text(&mut self, text: &str) -> usize {
        let mut accepted = 0;
        for grapheme in text.graphemes(true) {
            if !self.insert_grapheme(grapheme) {
                break;
            }
            accepted += 1;
        }
        accepted
    }

    fn insert_grapheme(&mut self, grapheme: &str) -> bool {
        let Some(index) = self.entry.push(grapheme) else {
            return false;
        };

        let cell = &mut self.cells[index];
        self.decorations.fill(&mut self.view, cell, grapheme);
        self.decorations.stop_indicator(&mut self.view, cell, true);

        let cursor = self.entry.cursor();
        if cursor < self.capacity() {
            self.decorations
                .start_indicator(&mut self.view, &mut self.cells[cursor], Instant::now());
        }

        self.needs_repaint = true;
        tracing::trace!(target: targets::ENTRY, index, cursor, "character inserted");
        self.value_changed.emit(self.entry.value().to_owned());
        true
    }

    /// Remove the last entered character.
    ///
    /// Returns `false`, changing nothing and emitting nothing, when the
    /// field is empty.
    pub fn delete_backward(&mut self) -> bool {
        let outgoing = self.entry.cursor();
        let Some(index) = self.entry.pop() else {
            return false;
        };

        if outgoing < self.capacity() {
            self.decorations
                .stop_indicator(&mut self.view, &mut self.cells[outgoing], true);
        }

        let cell = &mut self.cells[index];
        self.decorations.clear(&mut self.view, cell);
        self.decorations
            .start_indicator(&mut self.view, cell, Instant::now());

        self.needs_repaint = true;
        tracing::trace!(target: targets::ENTRY, index, "character deleted");
        self.value_changed.emit(self.entry.value().to_owned());
        true
    }

    /// Route a key event. Returns whether the widget consumed it.
    ///
    /// Character and Backspace keys are always consumed, even when the
    /// field is full or empty and nothing changes.
    pub fn handle_key(&mut self, key: &KeyInput) -> bool {
        match key {
            KeyInput::Character(text) => {
                self.insert_text(text);
                true
            }
            KeyInput::Backspace => {
                self.delete_backward();
                true
            }
            KeyInput::Enter => {
                self.editing_finished.emit(());
                true
            }
            KeyInput::Escape | KeyInput::Other => false,
        }
    }

    /// Report a tap on the widget.
    ///
    /// Emits `activation_requested` unless the focus policy refuses click
    /// focus. Returns whether the signal was emitted.
    pub fn activate(&mut self) -> bool {
        if !self.focus_policy.accepts_click_focus() {
            return false;
        }
        self.activation_requested.emit(());
        true
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The entered text.
    pub fn value(&self) -> &str {
        self.entry.value()
    }

    /// Whether any character has been entered.
    pub fn has_text(&self) -> bool {
        self.entry.has_text()
    }

    /// Index of the next cell to fill; equals the number of entered cells.
    pub fn cursor(&self) -> usize {
        self.entry.cursor()
    }

    /// Number of cells.
    pub fn capacity(&self) -> usize {
        self.entry.capacity()
    }

    /// Whether every cell is filled.
    pub fn is_full(&self) -> bool {
        self.entry.is_full()
    }

    /// The configuration the field was built with.
    pub fn config(&self) -> &PinFieldConfig {
        &self.config
    }

    /// The decoration rendered in every cell.
    pub fn decoration(&self) -> Decoration {
        self.decorations.decoration()
    }

    /// Keyboard the host should present.
    pub fn keyboard_hint(&self) -> KeyboardHint {
        self.config.keyboard_hint()
    }

    /// Always true: the widget receives text input.
    pub fn accepts_text_input(&self) -> bool {
        true
    }

    /// The focus policy.
    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Set the focus policy.
    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Whether an accepted edit happened since the last [`clear_repaint`](Self::clear_repaint).
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Acknowledge a repaint.
    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Cells
    // =========================================================================

    /// The expected visual state of the cell at `index`, derived from the
    /// cursor and decoration.
    pub fn cell_visual(&self, index: usize) -> Option<CellVisual> {
        if index >= self.capacity() {
            return None;
        }
        let cursor = self.cursor();
        Some(CellVisual {
            filled: index < cursor,
            shows_active_indicator: index == cursor && self.decoration().animates(),
        })
    }

    /// Derived visual state of every cell.
    pub fn cell_visuals(&self) -> Vec<CellVisual> {
        (0..self.capacity())
            .filter_map(|index| self.cell_visual(index))
            .collect()
    }

    /// The rendered record of the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// All cell records, left to right.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Index of the cell whose indicator is running.
    pub fn active_indicator(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_animating)
    }

    /// Current indicator opacity of the cell at `index`, or `None` if no
    /// indicator runs there.
    pub fn indicator_opacity(&self, index: usize, now: Instant) -> Option<f32> {
        self.cells
            .get(index)?
            .indicator()
            .map(|pulse| pulse.opacity_at_instant(now))
    }

    /// Compute cell geometry for a row `available_width` wide.
    pub fn layout<M: TextMeasure + ?Sized>(&self, measure: &M, available_width: f32) -> CellLayout {
        CellLayout::compute(&self.config, measure, available_width)
    }

    // =========================================================================
    // View
    // =========================================================================

    /// The host view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the host view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Tear the widget down, handing back the view.
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V: CellView + std::fmt::Debug> std::fmt::Debug for PinField<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinField")
            .field("config", &self.config)
            .field("entry", &self.entry)
            .field("decoration", &self.decoration())
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(PinField<crate::view::DirectiveBuffer>: Send, Sync);
