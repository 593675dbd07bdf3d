//! Configuration for the entry widget.
//!
//! A [`PinFieldConfig`] is assembled once, validated, and then fixed for the
//! lifetime of the widget. It can be built in code with the `with_*` builder
//! methods, or loaded from an inspector-style property table
//! ([`InspectorProperties`]) such as a TOML document produced by a designer
//! tool.
//!
//! # Example
//!
//! ```
//! use pin_field::{DecorationStyle, EchoMode, PinFieldConfig};
//!
//! let config = PinFieldConfig::new(4)
//!     .with_decoration_style(DecorationStyle::BottomLine)
//!     .with_echo_mode(EchoMode::Password('*'));
//! assert!(config.validate().is_ok());
//!
//! let loaded = PinFieldConfig::from_toml_str("input_count = 4\nborder_type = 3").unwrap();
//! assert_eq!(loaded.decoration_style(), DecorationStyle::BottomLine);
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::keyboard::KeyboardHint;
use pin_field_core::logging::targets;

/// Default number of cells.
pub const DEFAULT_CAPACITY: usize = 6;

/// Largest accepted number of cells.
pub const MAX_CAPACITY: usize = 256;

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 18.0;

/// Default mask shown in password echo mode.
pub const DEFAULT_MASK_CHAR: char = '•';

/// An RGBA color, components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
}

/// Font used for cell text, measured by the host's [`TextMeasure`](crate::TextMeasure).
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name; `"system"` selects the platform UI font.
    pub family: String,
    /// Point size.
    pub size: f32,
}

impl Font {
    /// Create a font from a family name and size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The platform UI font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new("system", size)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(DEFAULT_FONT_SIZE)
    }
}

/// How each cell is decorated when no placeholder glyph is configured.
///
/// The integer codes match the inspector property: `0` none, `1` top line,
/// `2` middle line, `3` bottom line, `4` box outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecorationStyle {
    /// No decoration overlay.
    #[default]
    None,
    /// A 1-unit line along the top edge of each cell.
    TopLine,
    /// A 1-unit line through the vertical center of each cell.
    MiddleLine,
    /// A 1-unit line along the bottom edge of each cell.
    BottomLine,
    /// A rectangular outline around each cell.
    BoxOutline,
}

impl DecorationStyle {
    /// The inspector integer code for this style.
    pub fn raw_value(self) -> i64 {
        match self {
            Self::None => 0,
            Self::TopLine => 1,
            Self::MiddleLine => 2,
            Self::BottomLine => 3,
            Self::BoxOutline => 4,
        }
    }
}

impl TryFrom<i64> for DecorationStyle {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::TopLine),
            2 => Ok(Self::MiddleLine),
            3 => Ok(Self::BottomLine),
            4 => Ok(Self::BoxOutline),
            other => Err(Error::UnrecognizedDecorationStyle(other)),
        }
    }
}

/// Echo mode determines what a filled cell displays.
///
/// The stored value is always the typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EchoMode {
    /// Display characters as entered (default).
    #[default]
    Normal,
    /// Display the given mask character instead of the typed one.
    Password(char),
    /// Display nothing; the cell still counts as filled.
    NoEcho,
}

/// Validated configuration of a pin field.
#[derive(Debug, Clone, PartialEq)]
pub struct PinFieldConfig {
    capacity: usize,
    font: Font,
    text_color: Color,
    decoration_color: Color,
    decoration_style: DecorationStyle,
    has_placeholder_glyph: bool,
    spacing: f32,
    placeholder_width: f32,
    keyboard_hint: KeyboardHint,
    echo_mode: EchoMode,
}

impl Default for PinFieldConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PinFieldConfig {
    /// Create a configuration with the given cell count and defaults for
    /// everything else. Call [`validate`](Self::validate) (or build a
    /// [`PinField`](crate::PinField)) to check it.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            font: Font::default(),
            text_color: Color::BLACK,
            decoration_color: Color::GREEN,
            decoration_style: DecorationStyle::None,
            has_placeholder_glyph: false,
            spacing: 0.0,
            placeholder_width: 0.0,
            keyboard_hint: KeyboardHint::NumberPad,
            echo_mode: EchoMode::Normal,
        }
    }

    /// Parse a TOML document of inspector properties.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let properties: InspectorProperties = toml::from_str(source)?;
        Self::try_from(properties)
    }

    /// Check every field, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::warn!(target: targets::CONFIG, error = %err, "invalid pin field configuration");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if !(2..=MAX_CAPACITY).contains(&self.capacity) {
            return Err(Error::invalid_capacity(self.capacity));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::InvalidSpacing {
                spacing: self.spacing,
            });
        }
        if !self.placeholder_width.is_finite() || self.placeholder_width < 0.0 {
            return Err(Error::InvalidPlaceholderWidth {
                width: self.placeholder_width,
            });
        }
        if !self.font.size.is_finite() || self.font.size <= 0.0 {
            return Err(Error::InvalidFontSize {
                size: self.font.size,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set the font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the color of lines, outlines and placeholder tint.
    pub fn with_decoration_color(mut self, color: Color) -> Self {
        self.decoration_color = color;
        self
    }

    /// Set the decoration style.
    pub fn with_decoration_style(mut self, style: DecorationStyle) -> Self {
        self.decoration_style = style;
        self
    }

    /// Set whether each cell shows a placeholder image.
    pub fn with_placeholder_glyph(mut self, has_glyph: bool) -> Self {
        self.has_placeholder_glyph = has_glyph;
        self
    }

    /// Set an explicit gap between cells. `0` computes it from the width.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the placeholder image width. `0` derives it from font metrics.
    pub fn with_placeholder_width(mut self, width: f32) -> Self {
        self.placeholder_width = width;
        self
    }

    /// Set the keyboard hint passed on to the host.
    pub fn with_keyboard_hint(mut self, hint: KeyboardHint) -> Self {
        self.keyboard_hint = hint;
        self
    }

    /// Set the echo mode.
    pub fn with_echo_mode(mut self, mode: EchoMode) -> Self {
        self.echo_mode = mode;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of cells.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cell text font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Cell text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Decoration color.
    pub fn decoration_color(&self) -> Color {
        self.decoration_color
    }

    /// Configured decoration style. See [`Decoration::resolve`](crate::Decoration::resolve)
    /// for how it interacts with the placeholder glyph.
    #[inline]
    pub fn decoration_style(&self) -> DecorationStyle {
        self.decoration_style
    }

    /// Whether each cell shows a placeholder image.
    #[inline]
    pub fn has_placeholder_glyph(&self) -> bool {
        self.has_placeholder_glyph
    }

    /// Explicit cell spacing, `0` for automatic.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Placeholder width hint, `0` to derive from font metrics.
    pub fn placeholder_width(&self) -> f32 {
        self.placeholder_width
    }

    /// Keyboard hint. Cosmetic; input is never filtered by it.
    pub fn keyboard_hint(&self) -> KeyboardHint {
        self.keyboard_hint
    }

    /// Echo mode.
    #[inline]
    pub fn echo_mode(&self) -> EchoMode {
        self.echo_mode
    }
}

/// Raw inspector-style properties, as authored in a designer tool.
///
/// Every field is optional. Integer and string encodings are checked when
/// converting into a [`PinFieldConfig`]; an unknown `border_type` is an error
/// rather than a silent fallback to no decoration.
///
/// ```toml
/// input_count = 4
/// border_type = 3
/// font_size = 22.0
/// keyboard_type = "number_pad"
/// password_char = "*"
/// border_color = { r = 1.0, g = 0.0, b = 0.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorProperties {
    pub input_count: i64,
    pub font_family: Option<String>,
    pub font_size: f32,
    pub text_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_type: i64,
    pub placeholder_image: bool,
    pub text_spacing: f32,
    pub image_width: f32,
    pub keyboard_type: Option<String>,
    pub password_char: Option<char>,
    pub no_echo: bool,
}

impl Default for InspectorProperties {
    fn default() -> Self {
        Self {
            input_count: DEFAULT_CAPACITY as i64,
            font_family: None,
            font_size: DEFAULT_FONT_SIZE,
            text_color: None,
            border_color: None,
            border_type: 0,
            placeholder_image: false,
            text_spacing: 0.0,
            image_width: 0.0,
            keyboard_type: None,
            password_char: None,
            no_echo: false,
        }
    }
}

impl TryFrom<InspectorProperties> for PinFieldConfig {
    type Error = Error;

    fn try_from(properties: InspectorProperties) -> Result<Self> {
        let capacity = usize::try_from(properties.input_count)
            .map_err(|_| Error::invalid_capacity(properties.input_count))?;
        let decoration_style = DecorationStyle::try_from(properties.border_type)?;
        let keyboard_hint = match properties.keyboard_type.as_deref() {
            Some(name) => name.parse()?,
            None => KeyboardHint::NumberPad,
        };
        let echo_mode = match (properties.no_echo, properties.password_char) {
            (true, _) => EchoMode::NoEcho,
            (false, Some(mask)) => EchoMode::Password(mask),
            (false, None) => EchoMode::Normal,
        };
        let font = match properties.font_family {
            Some(family) => Font::new(family, properties.font_size),
            None => Font::system(properties.font_size),
        };

        let config = PinFieldConfig::new(capacity)
            .with_font(font)
            .with_text_color(properties.text_color.unwrap_or(Color::BLACK))
            .with_decoration_color(properties.border_color.unwrap_or(Color::GREEN))
            .with_decoration_style(decoration_style)
            .with_placeholder_glyph(properties.placeholder_image)
            .with_spacing(properties.text_spacing)
            .with_placeholder_width(properties.image_width)
            .with_keyboard_hint(keyboard_hint)
            .with_echo_mode(echo_mode);
        config.validate()?;
        Ok(config)
    }
}

static_assertions::assert_impl_all!(PinFieldConfig: Send, Sync);
