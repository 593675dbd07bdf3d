//! Cell sizing and placement.
//!
//! All cells share one width: the widest digit glyph in the configured font,
//! or the placeholder width hint when that is larger. The gap between cells
//! is the explicit spacing when one is set, otherwise whatever is left of the
//! available width once the cells are placed, split over the `capacity - 1`
//! gaps.

use pin_field_core::logging::{span_names, targets};
use pin_field_core::PerfSpan;

use crate::config::{Font, PinFieldConfig};
use crate::decoration::{Decoration, LineEdge};

/// Thickness of line decorations.
pub const LINE_THICKNESS: f32 = 1.0;

/// Glyphs measured to find the cell width.
const MEASURED_GLYPHS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Text measurement supplied by the host's font system.
pub trait TextMeasure {
    /// Advance width of `text` set in `font`.
    fn text_width(&self, text: &str, font: &Font) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &Font) -> f32,
{
    fn text_width(&self, text: &str, font: &Font) -> f32 {
        self(text, font)
    }
}

/// An axis-aligned rectangle in the widget's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Computed geometry for a row of cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    capacity: usize,
    cell_width: f32,
    spacing: f32,
}

impl CellLayout {
    /// Measure the font and compute cell width and spacing for a row that is
    /// `available_width` wide.
    ///
    /// Automatic spacing can come out negative when the row is too narrow;
    /// it is returned as computed.
    pub fn compute<M: TextMeasure + ?Sized>(
        config: &PinFieldConfig,
        measure: &M,
        available_width: f32,
    ) -> Self {
        let _span = PerfSpan::new(span_names::LAYOUT);
        let capacity = config.capacity();

        let glyph_width = MEASURED_GLYPHS
            .iter()
            .map(|glyph| measure.text_width(glyph, config.font()))
            .fold(0.0_f32, f32::max);
        let cell_width = glyph_width.max(config.placeholder_width());

        let spacing = if config.spacing() > 0.0 {
            config.spacing()
        } else {
            let gaps = capacity.saturating_sub(1).max(1) as f32;
            (available_width - cell_width * capacity as f32) / gaps
        };

        if spacing < 0.0 {
            tracing::warn!(
                target: targets::LAYOUT,
                available_width,
                cell_width,
                spacing,
                "cells overflow the available width"
            );
        }
        tracing::trace!(target: targets::LAYOUT, cell_width, spacing, "layout computed");

        Self {
            capacity,
            cell_width,
            spacing,
        }
    }

    /// Width shared by all cells.
    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Gap between neighboring cells.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Number of cells laid out.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total width the cells and gaps occupy.
    pub fn total_width(&self) -> f32 {
        let n = self.capacity as f32;
        self.cell_width * n + self.spacing * (n - 1.0)
    }

    /// Frame of the cell at `index` for a row of the given height.
    pub fn cell_rect(&self, index: usize, height: f32) -> Rect {
        let x = index as f32 * (self.cell_width + self.spacing);
        Rect::new(x, 0.0, self.cell_width, height)
    }

    /// Frames of all cells, left to right.
    pub fn cell_rects(&self, height: f32) -> Vec<Rect> {
        (0..self.capacity)
            .map(|index| self.cell_rect(index, height))
            .collect()
    }

    /// Frame of the decoration overlay of the cell at `index`.
    pub fn overlay_rect(&self, index: usize, height: f32, decoration: Decoration) -> Option<Rect> {
        let cell = self.cell_rect(index, height);
        match decoration {
            Decoration::None => None,
            Decoration::PlaceholderGlyph | Decoration::BoxOutline => Some(cell),
            Decoration::Line(edge) => {
                let y = match edge {
                    LineEdge::Top => 0.0,
                    LineEdge::Middle => (height - LINE_THICKNESS) / 2.0,
                    LineEdge::Bottom => height - LINE_THICKNESS,
                };
                Some(Rect::new(cell.x, y, cell.width, LINE_THICKNESS))
            }
        }
    }
}
