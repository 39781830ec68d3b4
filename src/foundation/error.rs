//! Typed engine errors, stable machine codes, and the JSON error envelope.

use serde::Serialize;

/// Crate-wide result alias.
pub type CrewframeResult<T> = Result<T, CrewframeError>;

/// Typed engine errors with stable machine-readable codes.
///
/// Validation-class errors are detected before any drawing work begins.
/// [`CrewframeError::Render`] wraps unexpected failures at the compositor
/// boundary; the cause is preserved for logs and never leaked into the
/// caller-facing envelope beyond its display string.
#[derive(thiserror::Error, Debug)]
pub enum CrewframeError {
    /// Client-caused input error (missing field, bad hex, bad dimensions, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Roster length does not match the boat class seat count.
    #[error("roster size mismatch: boat class seats {expected}, roster has {actual}")]
    RosterSizeMismatch {
        /// Seat count required by the boat class.
        expected: usize,
        /// Member names actually supplied.
        actual: usize,
    },

    /// No template variant is registered under the requested id.
    #[error("template not found: {0:?}")]
    TemplateNotFound(String),

    /// A club preset was referenced but does not exist.
    #[error("club preset not found: {0:?}")]
    PresetNotFound(String),

    /// A stored club logo was referenced but does not exist.
    #[error("club icon not found: {0:?}")]
    IconNotFound(String),

    /// Uploaded icon bytes are not decodable as a supported image format.
    #[error("unsupported icon format: {0}")]
    UnsupportedIconFormat(String),

    /// Unexpected failure during drawing or encoding.
    #[error("render failure: {0}")]
    Render(#[source] anyhow::Error),

    /// Catch-all for failures outside the pipeline proper (lock poisoning,
    /// collaborator I/O).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrewframeError {
    /// Shorthand for [`CrewframeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap an internal drawing/encoding failure, preserving the cause chain.
    pub fn render(cause: impl Into<anyhow::Error>) -> Self {
        Self::Render(cause.into())
    }

    /// Stable machine-readable code for the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::RosterSizeMismatch { .. } => "roster_size_mismatch",
            Self::TemplateNotFound(_) => "template_not_found",
            Self::PresetNotFound(_) => "preset_not_found",
            Self::IconNotFound(_) => "icon_not_found",
            Self::UnsupportedIconFormat(_) => "unsupported_icon_format",
            Self::Render(_) => "render_failure",
            Self::Other(_) => "internal_error",
        }
    }

    /// Return `true` when the error is caller-correctable (4xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Render(_) | Self::Other(_))
    }

    /// Convert into the caller-facing JSON envelope.
    ///
    /// Internal failures keep their stable code but an opaque message; the
    /// cause chain stays in the logs.
    pub fn to_envelope(&self) -> ErrorEnvelope {
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            "image generation failed".to_owned()
        };
        ErrorEnvelope {
            code: self.code(),
            message,
        }
    }
}

/// Small JSON error body returned to the request layer in place of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    /// Stable machine-readable code, see [`CrewframeError::code`].
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
