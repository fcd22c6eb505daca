//! Error types for the stippling engine and grid construction.

/// Errors raised before any stippling output is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StippleError {
    /// The image (or kernel domain) must be square.
    #[error("expected a square image, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The wrapped kernel splits the domain in half and needs an even size.
    #[error("image size must be even, got {size}")]
    OddSize { size: usize },

    /// Kernel spread must be a positive finite number.
    #[error("sigma must be positive and finite, got {sigma}")]
    InvalidSigma { sigma: f32 },

    /// A flat buffer does not match the requested dimensions.
    #[error("buffer holds {actual} elements, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// An image value, scaled by the content bias, is NaN or infinite.
    #[error("energy at ({row}, {col}) is not finite; check image values and content_bias")]
    NonFiniteEnergy { row: usize, col: usize },

    /// Every remaining cell reached +inf before the sample budget was spent.
    #[error("no unsampled position left (iteration {iteration})")]
    Exhausted { iteration: usize },

    /// The energy minimum landed on a position that was already sampled.
    #[error("position ({row}, {col}) selected twice (iteration {iteration})")]
    DuplicateSample {
        row: usize,
        col: usize,
        iteration: usize,
    },
}
