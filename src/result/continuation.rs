//! Side-effecting steps that may fail without changing a result's value.
//!
//! A [`Continuation`] is what [`Result::then_with`] runs: a single step whose
//! only observable outcome is whether it failed.
//!
//! # Examples
//!
//! ```rust
//! use valuekit::result::{Continuation, Result};
//!
//! let audit = || Ok::<(), std::fmt::Error>(());
//! assert_eq!(audit.call(Result::ok("kept")), Result::ok("kept"));
//!
//! let rejected = || Err::<(), _>(std::fmt::Error);
//! assert!(rejected.call(Result::ok("kept")).is_err());
//! ```

use std::result::Result as StdResult;

use super::capture::capture;
use super::cause::Cause;
use super::value::Result;

/// A single side-effecting step.
///
/// Every `FnOnce() -> std::result::Result<(), E>` closure with `E: Into<Cause>`
/// is a continuation.
pub trait Continuation {
    /// The error the step may fail with.
    type Error: Into<Cause>;

    /// Runs the step.
    ///
    /// # Errors
    ///
    /// Returns the step's own error when it fails.
    fn run(self) -> StdResult<(), Self::Error>;

    /// Runs the step with fault capture and threads `current` through.
    ///
    /// Returns `current` unchanged if the step succeeds, or a new `Err` holding
    /// the failure (an error return or a panic) otherwise.
    fn call<T>(self, current: Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        match capture(|| self.run()) {
            Ok(()) => current,
            Err(cause) => Result::Err(cause),
        }
    }
}

impl<F, E> Continuation for F
where
    F: FnOnce() -> StdResult<(), E>,
    E: Into<Cause>,
{
    type Error = E;

    #[inline]
    fn run(self) -> StdResult<(), E> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Panic;
    use rstest::rstest;
    use std::fmt;

    struct Audit {
        allowed: bool,
    }

    impl Continuation for Audit {
        type Error = fmt::Error;

        fn run(self) -> StdResult<(), fmt::Error> {
            if self.allowed { Ok(()) } else { Err(fmt::Error) }
        }
    }

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    fn test_custom_continuation(#[case] allowed: bool, #[case] expect_err: bool) {
        let result = Audit { allowed }.call(Result::ok(1));
        assert_eq!(result.is_err(), expect_err);
    }

    #[rstest]
    fn test_call_keeps_existing_failure_when_step_succeeds() {
        let failed: Result<i32> = Result::failure(Panic::new("earlier"));
        let result = (|| Ok::<(), fmt::Error>(())).call(failed.clone());
        assert_eq!(result, failed);
    }

    #[rstest]
    fn test_call_captures_panicking_step() {
        let result = (|| -> StdResult<(), fmt::Error> { panic!("step exploded") }).call(Result::ok(1));
        let cause = result.cause().unwrap();
        assert_eq!(cause.downcast_ref::<Panic>().unwrap().message(), "step exploded");
    }
}
