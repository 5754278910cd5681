//! Error types for bitkit operations

/// Errors that can occur during bitkit operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitkitError {
    /// Bit offset lies outside a bit-addressable slice
    BitOffsetOutOfRange,
    /// Segment window does not fit inside its backing array
    SegmentOutOfBounds,
    /// Object-level comparison received an incompatible buffer type
    TypeMismatch,
    /// Sort was invoked without a comparison function
    MissingComparison,
    /// Process-wide hash seed was already established with another value
    SeedAlreadyInitialized,
    /// Requested scratch buffer size is not representable by the pool
    InvalidPoolSize,
}

/// Broad classification of a [`BitkitError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// An index or window was out of range
    Bounds,
    /// Operands had incompatible concrete types
    Type,
    /// A required argument was absent or malformed
    Argument,
    /// Process-level configuration was used incorrectly
    Configuration,
}

impl BitkitError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            BitkitError::BitOffsetOutOfRange | BitkitError::SegmentOutOfBounds => {
                ErrorCategory::Bounds
            }
            BitkitError::TypeMismatch => ErrorCategory::Type,
            BitkitError::MissingComparison | BitkitError::InvalidPoolSize => {
                ErrorCategory::Argument
            }
            BitkitError::SeedAlreadyInitialized => ErrorCategory::Configuration,
        }
    }

    /// Whether the error is a bounds violation
    pub const fn is_bounds_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Bounds)
    }
}

impl core::fmt::Display for BitkitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BitkitError::BitOffsetOutOfRange => "Bit offset out of range",
            BitkitError::SegmentOutOfBounds => "Segment exceeds backing array",
            BitkitError::TypeMismatch => "Incompatible buffer type",
            BitkitError::MissingComparison => "Comparison function is missing",
            BitkitError::SeedAlreadyInitialized => "Hash seed already initialized",
            BitkitError::InvalidPoolSize => "Invalid scratch buffer size",
        };
        write!(f, "{msg}")
    }
}

/// Result type for bitkit operations
pub type Result<T> = core::result::Result<T, BitkitError>;
