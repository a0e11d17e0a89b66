use thiserror::Error;

/// A height report that can never be a valid box size.
///
/// The registry is left untouched when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("item height must be non-negative, got {height}")]
    NegativeHeight { height: f32 },
    #[error("item height must be finite, got {height}")]
    NonFiniteHeight { height: f32 },
}

/// An item sequence that cannot be laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Two entries share an id. Positions are indexes into the rejected sequence.
    #[error("duplicate item id at position {duplicate} (first seen at position {first})")]
    DuplicateItemId { first: usize, duplicate: usize },
}

pub(crate) fn validate_height(height: f32) -> Result<f32, ValidationError> {
    if !height.is_finite() {
        return Err(ValidationError::NonFiniteHeight { height });
    }
    if height < 0.0 {
        return Err(ValidationError::NegativeHeight { height });
    }
    Ok(height)
}
