//! Cell decoration policy.
//!
//! The decoration is chosen once, when the field is built, and never changes:
//!
//! 1. A configured placeholder glyph wins. Every cell shows the placeholder
//!    image and the indicator animates its opacity. Any line or box style is
//!    ignored.
//! 2. Otherwise a box outline is drawn around every cell. The box has no
//!    indicator animation.
//! 3. Otherwise a top, middle or bottom line spans every cell and the
//!    indicator animates the line.
//! 4. Otherwise nothing is drawn and indicator requests are ignored.
//!
//! [`DecorationController`] turns cursor transitions into [`CellView`]
//! directives and keeps each [`Cell`] record in step with what it issued.
//! Only the cells involved in a transition are touched.

use std::time::Instant;

use pin_field_core::logging::targets;

use crate::animation::IndicatorPulse;
use crate::cell::Cell;
use crate::config::{DecorationStyle, EchoMode};
use crate::view::CellView;

/// Where a line decoration sits within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEdge {
    /// Along the top edge.
    Top,
    /// Through the vertical center.
    Middle,
    /// Along the bottom edge.
    Bottom,
}

/// The decoration actually rendered in every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decoration {
    /// No overlay.
    #[default]
    None,
    /// A placeholder image filling the cell.
    PlaceholderGlyph,
    /// A rectangular outline around the cell.
    BoxOutline,
    /// A 1-unit line spanning the cell's width.
    Line(LineEdge),
}

impl Decoration {
    /// Pick the decoration for a style and placeholder setting.
    pub fn resolve(style: DecorationStyle, has_placeholder_glyph: bool) -> Self {
        if has_placeholder_glyph {
            return Self::PlaceholderGlyph;
        }
        match style {
            DecorationStyle::None => Self::None,
            DecorationStyle::TopLine => Self::Line(LineEdge::Top),
            DecorationStyle::MiddleLine => Self::Line(LineEdge::Middle),
            DecorationStyle::BottomLine => Self::Line(LineEdge::Bottom),
            DecorationStyle::BoxOutline => Self::BoxOutline,
        }
    }

    /// Whether cells carry an overlay element.
    #[inline]
    pub fn has_overlay(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the active indicator animates this decoration.
    #[inline]
    pub fn animates(self) -> bool {
        matches!(self, Self::PlaceholderGlyph | Self::Line(_))
    }
}

/// Issues decoration and content directives for cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationController {
    decoration: Decoration,
    echo_mode: EchoMode,
}

impl DecorationController {
    /// A controller for the given decoration and echo mode.
    pub fn new(decoration: Decoration, echo_mode: EchoMode) -> Self {
        Self {
            decoration,
            echo_mode,
        }
    }

    /// The decoration in use.
    #[inline]
    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Bring every cell to its empty, undecorated-by-indicator state.
    ///
    /// Called once while building the field.
    pub fn setup<V: CellView + ?Sized>(&self, view: &mut V, cells: &mut [Cell]) {
        for cell in cells.iter_mut() {
            view.set_cell_text(cell.index(), None);
            cell.set_content(false, None);
            if self.decoration.has_overlay() {
                view.set_overlay_visible(cell.index(), true);
                cell.set_overlay_visible(true);
            }
        }
        tracing::debug!(
            target: targets::DECORATION,
            decoration = ?self.decoration,
            cells = cells.len(),
            "decorations set up"
        );
    }

    /// Show an entered character in `cell`, masked per the echo mode.
    pub fn fill<V: CellView + ?Sized>(&self, view: &mut V, cell: &mut Cell, text: &str) {
        let display = match self.echo_mode {
            EchoMode::Normal => Some(text.to_owned()),
            EchoMode::Password(mask) => Some(mask.to_string()),
            EchoMode::NoEcho => None,
        };
        view.set_cell_text(cell.index(), display.as_deref());
        cell.set_content(true, display);
    }

    /// Remove the character from `cell`.
    pub fn clear<V: CellView + ?Sized>(&self, view: &mut V, cell: &mut Cell) {
        view.set_cell_text(cell.index(), None);
        cell.set_content(false, None);
    }

    /// Start the indicator on `cell`, showing its overlay first.
    ///
    /// Does nothing for decorations without an indicator.
    pub fn start_indicator<V: CellView + ?Sized>(&self, view: &mut V, cell: &mut Cell, now: Instant) {
        if !self.decoration.animates() {
            tracing::trace!(target: targets::DECORATION, index = cell.index(), "no indicator for decoration");
            return;
        }
        view.set_overlay_visible(cell.index(), true);
        cell.set_overlay_visible(true);
        view.start_indicator_animation(cell.index());
        cell.start_indicator(IndicatorPulse::started_at(now));
        tracing::trace!(target: targets::DECORATION, index = cell.index(), "indicator started");
    }

    /// Stop the indicator on `cell` if it is running.
    ///
    /// The overlay is hidden unless `keep_visible` is set.
    pub fn stop_indicator<V: CellView + ?Sized>(&self, view: &mut V, cell: &mut Cell, keep_visible: bool) {
        if cell.stop_indicator().is_none() {
            return;
        }
        view.stop_indicator_animation(cell.index(), keep_visible);
        if !keep_visible {
            cell.set_overlay_visible(false);
        }
        tracing::trace!(target: targets::DECORATION, index = cell.index(), keep_visible, "indicator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Directive, DirectiveBuffer};

    const STYLES: [DecorationStyle; 5] = [
        DecorationStyle::None,
        DecorationStyle::TopLine,
        DecorationStyle::MiddleLine,
        DecorationStyle::BottomLine,
        DecorationStyle::BoxOutline,
    ];

    #[test]
    fn test_placeholder_overrides_every_style() {
        for style in STYLES {
            assert_eq!(Decoration::resolve(style, true), Decoration::PlaceholderGlyph);
        }
    }

    #[test]
    fn test_resolve_without_placeholder() {
        assert_eq!(Decoration::resolve(DecorationStyle::None, false), Decoration::None);
        assert_eq!(
            Decoration::resolve(DecorationStyle::TopLine, false),
            Decoration::Line(LineEdge::Top)
        );
        assert_eq!(
            Decoration::resolve(DecorationStyle::MiddleLine, false),
            Decoration::Line(LineEdge::Middle)
        );
        assert_eq!(
            Decoration::resolve(DecorationStyle::BottomLine, false),
            Decoration::Line(LineEdge::Bottom)
        );
        assert_eq!(
            Decoration::resolve(DecorationStyle::BoxOutline, false),
            Decoration::BoxOutline
        );
    }

    #[test]
    fn test_animates() {
        assert!(Decoration::PlaceholderGlyph.animates());
        assert!(Decoration::Line(LineEdge::Bottom).animates());
        assert!(!Decoration::BoxOutline.animates());
        assert!(!Decoration::None.animates());
        assert!(Decoration::BoxOutline.has_overlay());
        assert!(!Decoration::None.has_overlay());
    }

    #[test]
    fn test_setup_shows_overlays() {
        let controller = DecorationController::new(Decoration::BoxOutline, EchoMode::Normal);
        let mut cells: Vec<Cell> = (0..3).map(Cell::new).collect();
        let mut view = DirectiveBuffer::new();
        controller.setup(&mut view, &mut cells);

        assert!(cells.iter().all(Cell::is_overlay_visible));
        let shown = view
            .directives()
            .iter()
            .filter(|d| matches!(d, Directive::SetOverlayVisible { visible: true, .. }))
            .count();
        assert_eq!(shown, 3);
    }

    #[test]
    fn test_setup_without_overlay() {
        let controller = DecorationController::new(Decoration::None, EchoMode::Normal);
        let mut cells: Vec<Cell> = (0..2).map(Cell::new).collect();
        let mut view = DirectiveBuffer::new();
        controller.setup(&mut view, &mut cells);

        assert!(cells.iter().all(|c| !c.is_overlay_visible()));
        assert!(view
            .directives()
            .iter()
            .all(|d| matches!(d, Directive::SetCellText { text: None, .. })));
    }

    #[test]
    fn test_start_indicator_ignored_without_animation() {
        for decoration in [Decoration::None, Decoration::BoxOutline] {
            let controller = DecorationController::new(decoration, EchoMode::Normal);
            let mut cell = Cell::new(0);
            let mut view = DirectiveBuffer::new();
            controller.start_indicator(&mut view, &mut cell, Instant::now());
            assert!(view.is_empty());
            assert!(!cell.is_animating());
        }
    }

    #[test]
    fn test_start_then_stop_indicator() {
        let controller =
            DecorationController::new(Decoration::Line(LineEdge::Bottom), EchoMode::Normal);
        let mut cell = Cell::new(1);
        let mut view = DirectiveBuffer::new();

        controller.start_indicator(&mut view, &mut cell, Instant::now());
        assert!(cell.is_animating());
        assert!(cell.is_overlay_visible());

        controller.stop_indicator(&mut view, &mut cell, false);
        assert!(!cell.is_animating());
        assert!(!cell.is_overlay_visible());

        assert_eq!(
            view.drain(),
            vec![
                Directive::SetOverlayVisible {
                    index: 1,
                    visible: true
                },
                Directive::StartIndicator { index: 1 },
                Directive::StopIndicator {
                    index: 1,
                    keep_visible: false
                },
            ]
        );

        // Stopping again issues nothing.
        controller.stop_indicator(&mut view, &mut cell, true);
        assert!(view.is_empty());
    }

    #[test]
    fn test_fill_respects_echo_mode() {
        let cases = [
            (EchoMode::Normal, Some("7")),
            (EchoMode::Password('*'), Some("*")),
            (EchoMode::NoEcho, None),
        ];
        for (echo_mode, expected) in cases {
            let controller = DecorationController::new(Decoration::None, echo_mode);
            let mut cell = Cell::new(0);
            let mut view = DirectiveBuffer::new();
            controller.fill(&mut view, &mut cell, "7");
            assert!(cell.is_filled());
            assert_eq!(cell.display_text(), expected);
            assert_eq!(
                view.drain(),
                vec![Directive::SetCellText {
                    index: 0,
                    text: expected.map(str::to_owned)
                }]
            );
        }
    }
}
