use thiserror::Error;

/// Errors that may occur when evaluating moist-air properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    ///
    /// For example, a dry-bulb temperature beyond the range of the
    /// saturation-pressure correlation.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is non-physical.
    ///
    /// For example, a vapor pressure at or above the total pressure.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation produced a non-finite or otherwise unusable value.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
