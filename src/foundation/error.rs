/// Convenience result type used across buildcard.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Structural problems (unknown style, invalid build fields) abort a render before any pixels are
/// produced. Photo and font problems are normally recovered inside the engine; the matching
/// variants only escape from the low-level loaders that the recovery paths wrap.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Style tag is not present in the style registry.
    #[error("unsupported style: {0}")]
    UnsupportedStyle(String),

    /// Caller-supplied build data violates a field contract.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// Source photo is missing, unreadable or not a decodable raster image.
    #[error("photo unreadable: {0}")]
    PhotoUnreadable(String),

    /// A font candidate could not be loaded.
    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    /// Internal raster invariant was violated.
    #[error("render error: {0}")]
    Render(String),

    /// Engine configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::UnsupportedStyle`] value.
    pub fn unsupported_style(tag: impl Into<String>) -> Self {
        Self::UnsupportedStyle(tag.into())
    }

    /// Build a [`CardError::InvalidField`] value.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Build a [`CardError::PhotoUnreadable`] value.
    pub fn photo_unreadable(msg: impl Into<String>) -> Self {
        Self::PhotoUnreadable(msg.into())
    }

    /// Build a [`CardError::FontUnavailable`] value.
    pub fn font_unavailable(msg: impl Into<String>) -> Self {
        Self::FontUnavailable(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
