//! Error types shared by every module in the crate
//!
//! All computations here are pure and deterministic, so a failed call will
//! fail again on the same input. Errors therefore carry enough context to
//! fix the call site rather than to drive a retry.

use thiserror::Error;

/// A specialized Result type for DSP operations
pub type Result<T> = std::result::Result<T, DspError>;

/// Error type for DSP operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    /// A parameter is outside its documented domain
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        arg: &'static str,
        /// What the parameter must satisfy
        reason: &'static str,
    },

    /// The input is structurally valid but has no defined result
    /// (e.g. peak normalization of an all-zero signal)
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),
}

impl DspError {
    /// Shorthand used by argument checks throughout the crate
    pub(crate) fn invalid(arg: &'static str, reason: &'static str) -> Self {
        DspError::InvalidArgument { arg, reason }
    }
}
