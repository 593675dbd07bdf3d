//! Error types for the entry widget.

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or building a [`PinField`](crate::PinField).
///
/// Typing into a full field or deleting from an empty one is not an error;
/// those operations are silent no-ops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cell count must be between 2 and [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    #[error("Invalid capacity {capacity}: a pin field needs 2 to 256 cells")]
    InvalidCapacity { capacity: i64 },

    /// Decoration style integer outside the known range.
    #[error("Unrecognized decoration style {0} (expected 0 to 4)")]
    UnrecognizedDecorationStyle(i64),

    /// Explicit cell spacing was negative or not finite.
    #[error("Invalid cell spacing {spacing}: must be finite and not negative")]
    InvalidSpacing { spacing: f32 },

    /// Placeholder width hint was negative or not finite.
    #[error("Invalid placeholder width {width}: must be finite and not negative")]
    InvalidPlaceholderWidth { width: f32 },

    /// Font size was zero, negative or not finite.
    #[error("Invalid font size {size}: must be finite and positive")]
    InvalidFontSize { size: f32 },

    /// Keyboard hint name not recognized.
    #[error("Unrecognized keyboard hint '{0}'")]
    UnrecognizedKeyboardHint(String),

    /// Configuration document could not be parsed.
    #[error("Failed to parse pin field configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a capacity error.
    pub fn invalid_capacity(capacity: impl TryInto<i64>) -> Self {
        Self::InvalidCapacity {
            capacity: capacity.try_into().unwrap_or(i64::MAX),
        }
    }
}
