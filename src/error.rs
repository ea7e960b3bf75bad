/// Invalid simulation input.
///
/// Every variant describes input the caller can correct; none of them leave
/// a simulator in a half-updated state. There are no internal failure modes,
/// so this enum is the only error a caller will ever see.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// Reference string holds no pages.
    #[error("Reference string is empty")]
    EmptyReferenceString,

    /// Frame count is not a non-negative integer.
    #[error("Invalid frame count: {0:?}")]
    InvalidCapacity(String),

    /// Requested reference string length is not a non-negative integer.
    #[error("Invalid reference string length: {0:?}")]
    InvalidLength(String),

    /// Requested reference string length is above the generator limit.
    #[error("Reference string length {len} exceeds maximum of {max}")]
    LengthExceeded {
        /// Requested length.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Policy name does not match any known replacement policy.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// Session was asked to start before a policy was selected.
    #[error("No replacement policy selected")]
    NoPolicySelected,
}

/// Simulation result type.
pub type SimResult<T> = Result<T, SimError>;
