/// Error returned when converting a slice of the wrong length into a fixed-size [`Vector`].
///
/// [`Vector`]: crate::Vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} elements, got {actual}")]
pub struct DimensionMismatch {
    /// The dimension of the target type.
    pub expected: usize,
    /// The length of the provided slice.
    pub actual: usize,
}
