//! Error types for oxpix

use thiserror::Error;

/// Result type for oxpix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxpix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A buffer is smaller than the requested element count
    #[error("buffer `{param}` is too small: need at least {required} elements, got {actual}")]
    SizeMismatch {
        /// Name of the offending parameter
        param: &'static str,
        /// Minimum required length
        required: usize,
        /// Actual length supplied by the caller
        actual: usize,
    },

    /// A planar component buffer cannot hold the declared element count
    #[error("component {component} holds {actual} samples, fewer than the declared count {count}")]
    ComponentTooSmall {
        /// Component index (0-3)
        component: usize,
        /// Declared logical count
        count: usize,
        /// Actual component capacity
        actual: usize,
    },

    /// An RGB working-space matrix could not be derived (degenerate primaries)
    #[error("working space `{0}` has degenerate primaries")]
    DegeneratePrimaries(&'static str),

    /// The configured LMS adaptation matrix is not invertible
    #[error("LMS adaptation matrix is singular")]
    SingularAdaptationMatrix,
}

/// Check that a slice can hold `count` elements, naming the parameter on failure.
#[inline]
pub(crate) fn check_len<T>(slice: &[T], param: &'static str, count: usize) -> Result<()> {
    if slice.len() < count {
        return Err(Error::SizeMismatch {
            param,
            required: count,
            actual: slice.len(),
        });
    }
    Ok(())
}
