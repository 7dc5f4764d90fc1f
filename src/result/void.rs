//! The result type for operations that produce no value.
//!
//! [`ResultVoid`] mirrors [`Result`] without a success payload. Its success
//! variant is a unit variant, so every successful void result is equal to
//! every other one; [`ResultVoid::shared_ok`] hands out a single `'static`
//! instance for callers that want to share a reference.
//!
//! # Examples
//!
//! ```rust
//! use valuekit::result::{Result, ResultVoid};
//!
//! let saved = ResultVoid::of(|| Ok::<(), std::fmt::Error>(()));
//! let loaded: Result<i32> = saved.inject(|| Ok::<_, std::fmt::Error>(42));
//! assert_eq!(loaded, Result::ok(42));
//! ```

use std::error::Error;
use std::fmt;
use std::result::Result as StdResult;

use super::capture::capture;
use super::cause::Cause;
use super::error::{UncheckedError, UnwrapError};
use super::value::Result;

static SUCCESS_VOID: ResultVoid = ResultVoid::SuccessVoid;

/// The outcome of an operation that produces no value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ResultVoid {
    /// The operation succeeded.
    SuccessVoid,
    /// The operation failed with a cause.
    ErrVoid(Cause),
}

impl ResultVoid {
    /// Returns the successful void result.
    #[inline]
    pub const fn ok() -> Self {
        Self::SuccessVoid
    }

    /// Returns a reference to the shared successful void result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::ResultVoid;
    ///
    /// assert!(std::ptr::eq(ResultVoid::shared_ok(), ResultVoid::shared_ok()));
    /// ```
    #[inline]
    pub fn shared_ok() -> &'static Self {
        &SUCCESS_VOID
    }

    /// Wraps an already known failure.
    #[inline]
    pub fn error(cause: impl Into<Cause>) -> Self {
        Self::ErrVoid(cause.into())
    }

    /// Runs a fallible action once and captures its outcome.
    pub fn of<E, F>(action: F) -> Self
    where
        F: FnOnce() -> StdResult<(), E>,
        E: Into<Cause>,
    {
        match capture(action) {
            Ok(()) => Self::SuccessVoid,
            Err(cause) => Self::ErrVoid(cause),
        }
    }

    /// Like [`ResultVoid::of`], for an action failing with a boxed dynamic error.
    pub fn of_boxed<F>(action: F) -> Self
    where
        F: FnOnce() -> StdResult<(), Box<dyn Error + Send + Sync + 'static>>,
    {
        match capture(|| action().map_err(Cause::from_boxed)) {
            Ok(()) => Self::SuccessVoid,
            Err(cause) => Self::ErrVoid(cause),
        }
    }

    /// Returns `true` if this is `SuccessVoid`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::SuccessVoid)
    }

    /// Returns `true` if this is `ErrVoid`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::ErrVoid(_))
    }

    /// Returns a reference to the cause if this is `ErrVoid`.
    #[inline]
    pub const fn cause_ref(&self) -> Option<&Cause> {
        match self {
            Self::SuccessVoid => None,
            Self::ErrVoid(cause) => Some(cause),
        }
    }

    /// Dispatches to exactly one of `on_success` and `on_error`.
    pub fn match_with<S, F>(self, on_success: S, on_error: F)
    where
        S: FnOnce(),
        F: FnOnce(Cause),
    {
        match self {
            Self::SuccessVoid => on_success(),
            Self::ErrVoid(cause) => on_error(cause),
        }
    }

    /// Replaces a failure with the result of `function`.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> Self,
    {
        match self {
            Self::SuccessVoid => Self::SuccessVoid,
            Self::ErrVoid(cause) => function(cause),
        }
    }

    /// Runs `action` if this is `SuccessVoid`.
    pub fn on_success<F>(&self, action: F)
    where
        F: FnOnce(),
    {
        if self.is_success() {
            action();
        }
    }

    /// Invokes `consumer` with the cause if this is `ErrVoid`.
    pub fn on_error<F>(&self, consumer: F)
    where
        F: FnOnce(&Cause),
    {
        if let Self::ErrVoid(cause) = self {
            consumer(cause);
        }
    }

    /// Invokes `consumer` only if the cause is an `E`, returning `self` unchanged.
    ///
    /// Matching is on the exact concrete type; the `source()` chain of a
    /// wrapper error is not searched.
    pub fn on_error_of<E, F>(self, consumer: F) -> Self
    where
        E: Error + 'static,
        F: FnOnce(&E),
    {
        if let Some(error) = self.cause_ref().and_then(Cause::downcast_ref::<E>) {
            consumer(error);
        }
        self
    }

    /// Runs `action` for its effect.
    ///
    /// A failing action turns `SuccessVoid` into `ErrVoid`; a succeeding one
    /// leaves it as it is. On `ErrVoid` the action is never run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::ResultVoid;
    ///
    /// let failed = ResultVoid::ok().and_then(|| Err::<(), _>(std::fmt::Error));
    /// assert!(failed.is_err());
    /// ```
    pub fn and_then<E, F>(self, action: F) -> Self
    where
        F: FnOnce() -> StdResult<(), E>,
        E: Into<Cause>,
    {
        match self {
            Self::SuccessVoid => Self::of(action),
            Self::ErrVoid(cause) => Self::ErrVoid(cause),
        }
    }

    /// Re-enters the value-bearing type.
    ///
    /// `SuccessVoid` runs `computation` like [`Result::of`]; `ErrVoid` yields
    /// `Err` with the same cause and never runs it.
    pub fn inject<T, E, F>(self, computation: F) -> Result<T>
    where
        F: FnOnce() -> StdResult<T, E>,
        E: Into<Cause>,
    {
        match self {
            Self::SuccessVoid => Result::of(computation),
            Self::ErrVoid(cause) => Result::Err(cause),
        }
    }

    /// Returns `Ok(())`, or the cause wrapped in an [`UnwrapError`].
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is `ErrVoid`.
    pub fn or_else_throw(self) -> StdResult<(), UnwrapError> {
        match self {
            Self::SuccessVoid => Ok(()),
            Self::ErrVoid(cause) => Err(UnwrapError::new(cause)),
        }
    }

    /// Asserts that the operation did not fail.
    ///
    /// # Panics
    ///
    /// Panics with an [`UncheckedError`] payload if this is `ErrVoid`.
    pub fn or_else_throw_unchecked(self) {
        if let Self::ErrVoid(cause) = self {
            #[cfg(feature = "tracing")]
            tracing::debug!(cause = %cause, "unchecked unwrap of a failed void result");
            std::panic::panic_any(UncheckedError::new(cause));
        }
    }

    /// Converts into a `Result<()>` of the same state.
    #[inline]
    pub fn to_result(self) -> Result<()> {
        match self {
            Self::SuccessVoid => Result::Success(()),
            Self::ErrVoid(cause) => Result::Err(cause),
        }
    }
}

impl Default for ResultVoid {
    fn default() -> Self {
        Self::SuccessVoid
    }
}

impl fmt::Debug for ResultVoid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuccessVoid => formatter.write_str("SuccessVoid"),
            Self::ErrVoid(cause) => formatter.debug_tuple("ErrVoid").field(cause).finish(),
        }
    }
}

impl<E> From<StdResult<(), E>> for ResultVoid
where
    E: Into<Cause>,
{
    fn from(result: StdResult<(), E>) -> Self {
        match result {
            Ok(()) => Self::SuccessVoid,
            Err(error) => Self::ErrVoid(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_default_is_success() {
        assert_eq!(ResultVoid::default(), ResultVoid::ok());
    }

    #[rstest]
    fn test_and_then_on_err_never_runs_action() {
        let ran = Cell::new(false);
        let failed = ResultVoid::error(fmt::Error);
        let result = failed.clone().and_then(|| {
            ran.set(true);
            Ok::<(), fmt::Error>(())
        });
        assert!(!ran.get());
        assert_eq!(result, failed);
    }

    #[rstest]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", ResultVoid::ok()), "SuccessVoid");
        assert_eq!(
            format!("{:?}", ResultVoid::error(fmt::Error)),
            "ErrVoid(Cause(Error))"
        );
    }

    #[rstest]
    fn test_from_std_result() {
        assert_eq!(ResultVoid::from(Ok::<(), fmt::Error>(())), ResultVoid::ok());
        assert!(ResultVoid::from(Err::<(), _>(fmt::Error)).is_err());
    }
}
