//! Error types for the kairos-clock crate.

/// Error type for all fallible operations in the kairos-clock crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Returned when a time string does not match the `HH[:.]mm[[:.]ss[.u]]`
    /// grammar, or when a matched field is out of range (hours above 23,
    /// minutes or seconds above 59).
    #[error("time string is not in expected format \"HH[:.]mm[[:.]ss[.u]]\": {input:?}")]
    InvalidFormat {
        /// The rejected input string.
        input: String,
    },
}
