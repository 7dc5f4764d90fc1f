//! Fault capture at the invocation point of a computation.
//!
//! The panic hook is left in place and runs before the unwind is caught.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::cause::Cause;
use super::error::Panic;

/// Runs a fallible computation once, turning an error return or a panic into a [`Cause`].
pub(crate) fn capture<T, E, F>(computation: F) -> Result<T, Cause>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(error.into()),
        Err(payload) => {
            let cause = Panic::cause_from_payload(payload);
            #[cfg(feature = "tracing")]
            tracing::debug!(cause = %cause, "captured panic as failure");
            Err(cause)
        }
    }
}

/// Runs a computation that can only fail by panicking.
pub(crate) fn capture_value<T, F>(computation: F) -> Result<T, Cause>
where
    F: FnOnce() -> T,
{
    capture(|| Ok::<T, std::convert::Infallible>(computation()))
}
