//! Error types for leaving the `Maybe` context.
//!
//! Absence is not an error inside a chain. It only becomes one at the
//! boundary where a caller insists on a plain value, which is what
//! [`AbsentValueError`] reports.

/// Represents an attempt to extract a value from an `Empty` container.
///
/// # Examples
///
/// ```rust
/// use monadkit::error::AbsentValueError;
///
/// let error = AbsentValueError {
///     operation: "Maybe::try_into_value",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "Maybe::try_into_value: expected a present value but found Empty"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentValueError {
    /// The name of the operation that observed the absence.
    pub operation: &'static str,
}

impl AbsentValueError {
    /// Creates an error for the named operation.
    #[inline]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: expected a present value but found Empty",
            self.operation
        )
    }
}

impl std::error::Error for AbsentValueError {}
