//! Error taxonomy for the control surface.

use thiserror::Error;

use crate::parse::MAX_INPUT;

/// Errors reported by control-point operations.
///
/// Rejected writes never mutate shared state; the timer engine is never made
/// aware of them. Registration failures are fatal at startup and prevent the
/// service from becoming operational. Cancellation contention is resolved by
/// blocking until the in-flight firing returns, so it has no variant here.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Input exceeds the fixed buffer bound of [`MAX_INPUT`] bytes.
    #[error("input of {0} bytes exceeds the {MAX_INPUT} byte limit")]
    InputTooLarge(usize),

    /// Input is not a valid base-10 integer for the target field.
    #[error("input is not a valid base-10 integer")]
    InvalidFormat,

    /// A control point could not be registered (duplicate or empty name).
    #[error("control point `{0}` could not be registered")]
    RegistrationFailure(&'static str),

    /// No control point is registered under the requested name.
    #[error("no control point named `{0}`")]
    NotFound(String),

    /// The control point is write-only.
    #[error("control point `{0}` does not support reads")]
    NotReadable(&'static str),

    /// The control point is read-only.
    #[error("control point `{0}` does not support writes")]
    NotWritable(&'static str),
}
