/// Convenience result type used across bmpseq.
pub type BmpseqResult<T> = Result<T, BmpseqError>;

/// Top-level error taxonomy used by the library APIs.
///
/// [`BmpseqError::Decode`] marks per-image structural problems (bad
/// signature, unsupported plane count / bit depth / compression, truncated
/// pixel data). The batch runner treats those as a skip for that one image;
/// every other variant is a real failure.
#[derive(thiserror::Error, Debug)]
pub enum BmpseqError {
    /// Invalid user-provided options or internal buffer mismatch.
    #[error("validation error: {0}")]
    Validation(String),

    /// Structurally invalid or unsupported bitmap data.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BmpseqError {
    /// Build a [`BmpseqError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BmpseqError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Whether this error means "skip this image, keep the batch going".
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
