//! The value-bearing result type.
//!
//! [`Result<T>`] is either `Success(T)` or `Err(Cause)`. Every combinator takes
//! the result by value and returns a new one; nothing is mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use valuekit::result::Result;
//!
//! let parsed = Result::of(|| "21".parse::<i32>())
//!     .map(|n| n * 2)
//!     .flat_map(|n| if n > 0 { Result::ok(n) } else { Result::failure(std::fmt::Error) });
//! assert_eq!(parsed, Result::ok(42));
//!
//! let failed = Result::of(|| "x".parse::<i32>()).map(|n| n * 2);
//! assert!(failed.is_err());
//! ```

use std::error::Error;
use std::fmt;
use std::result::Result as StdResult;
use std::sync::Arc;

use super::capture::{capture, capture_value};
use super::cause::Cause;
use super::continuation::Continuation;
use super::error::{UncheckedError, UnexpectedError, UnwrapError};
use super::void::ResultVoid;
use crate::control::Either;

/// The outcome of an operation that produces a value of type `T` or fails with a [`Cause`].
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Result::ok(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Result::ok) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use valuekit::result::Result;
///
/// let success: Result<i32> = Result::ok(5);
/// let recovered = success.clone().recover(|_| Result::ok(-1));
/// assert_eq!(recovered, success);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Result<T> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with a cause.
    Err(Cause),
}

impl<T> Result<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps an already known value.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an already known failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// let failed: Result<i32> = Result::failure(std::fmt::Error);
    /// assert!(failed.is_err());
    /// ```
    #[inline]
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Self::Err(cause.into())
    }

    /// Runs a fallible computation once and captures its outcome.
    ///
    /// An `Err` return and a panic both become `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    /// use std::num::ParseIntError;
    ///
    /// assert_eq!(Result::of(|| "7".parse::<i32>()), Result::ok(7));
    ///
    /// let failed = Result::of(|| "seven".parse::<i32>());
    /// assert!(failed.cause().unwrap().is::<ParseIntError>());
    /// ```
    #[inline]
    pub fn of<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E>,
        E: Into<Cause>,
    {
        capture(computation).into()
    }

    /// Like [`Result::of`], for a computation failing with a boxed dynamic error.
    ///
    /// The box is stored through [`Cause::from_boxed`], so typed handlers still
    /// see the concrete error inside it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    /// use std::error::Error;
    /// use std::num::ParseIntError;
    ///
    /// let failed = Result::of_boxed(|| -> std::result::Result<i32, Box<dyn Error + Send + Sync>> {
    ///     Ok("x".parse::<i32>()?)
    /// });
    /// assert!(failed.cause().unwrap().is::<ParseIntError>());
    /// ```
    pub fn of_boxed<F>(computation: F) -> Self
    where
        F: FnOnce() -> StdResult<T, Box<dyn Error + Send + Sync + 'static>>,
    {
        capture(|| computation().map_err(Cause::from_boxed)).into()
    }

    /// Runs a computation that can only fail by panicking and captures its outcome.
    ///
    /// The installed panic hook still runs before the panic is captured, so
    /// the default hook prints its usual message to stderr even though the
    /// caller only receives an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// assert_eq!(Result::catching(|| 2 + 2), Result::ok(4));
    /// assert!(Result::<i32>::catching(|| panic!("boom")).is_err());
    /// ```
    #[inline]
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        capture_value(computation).into()
    }

    /// Converts a present value into `Success`, or an absent one into `Err`
    /// with a cause produced on demand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// assert_eq!(Result::from_option(Some(1), || std::fmt::Error), Result::ok(1));
    /// assert!(Result::<i32>::from_option(None, || std::fmt::Error).is_err());
    /// ```
    pub fn from_option<C, F>(option: Option<T>, cause: F) -> Self
    where
        F: FnOnce() -> C,
        C: Into<Cause>,
    {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Err(cause().into()),
        }
    }

    /// Converts an [`Either`], treating the left arm as the cause.
    #[inline]
    pub fn from_either<L>(either: Either<L, T>) -> Self
    where
        L: Into<Cause>,
    {
        either.fold(|cause| Self::Err(cause.into()), Self::Success)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is an `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns a reference to the value if this is a `Success`.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the cause if this is an `Err`.
    #[inline]
    pub const fn cause_ref(&self) -> Option<&Cause> {
        match self {
            Self::Success(_) => None,
            Self::Err(cause) => Some(cause),
        }
    }

    /// Converts into the success value, discarding any cause.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into the cause, discarding any success value.
    #[inline]
    pub fn cause(self) -> Option<Cause> {
        match self {
            Self::Success(_) => None,
            Self::Err(cause) => Some(cause),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// A panic inside `function` becomes `Err`. On `Err` the function is never
    /// invoked and the cause passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// assert_eq!(Result::ok(3).map(|n| n * n), Result::ok(9));
    /// assert!(Result::ok(0).map(|n: i32| 10 / n).is_err());
    /// ```
    pub fn map<U, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Result::catching(move || function(value)),
            Self::Err(cause) => Result::Err(cause),
        }
    }

    /// Chains a function that itself returns a result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Result::ok(n / 2) } else { Result::failure(std::fmt::Error) };
    /// assert_eq!(Result::ok(8).flat_map(halve), Result::ok(4));
    /// assert!(Result::ok(3).flat_map(halve).is_err());
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Err(cause) => Result::Err(cause),
        }
    }

    /// Runs a fallible computation built from the success value, capturing
    /// its outcome like [`Result::of`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// let parsed = Result::ok("12").and_then(|text| text.parse::<u8>());
    /// assert_eq!(parsed, Result::ok(12));
    /// ```
    pub fn and_then<U, E, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> StdResult<U, E>,
        E: Into<Cause>,
    {
        match self {
            Self::Success(value) => Result::of(move || function(value)),
            Self::Err(cause) => Result::Err(cause),
        }
    }

    /// Runs a side-effecting step that may fail, keeping the original value.
    ///
    /// If the step fails the outcome is a new `Err` with that cause. If it
    /// succeeds, `self` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// let checked = Result::ok(5).then_with(|n| {
    ///     let n = *n;
    ///     move || if n > 0 { Ok(()) } else { Err(std::fmt::Error) }
    /// });
    /// assert_eq!(checked, Result::ok(5));
    /// ```
    pub fn then_with<C, F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> C,
        C: Continuation,
    {
        match self {
            Self::Success(value) => {
                let continuation = function(&value);
                continuation.call(Self::Success(value))
            }
            Self::Err(cause) => Self::Err(cause),
        }
    }

    /// Replaces a failure with the result of `function`. A success is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// let failed: Result<i32> = Result::failure(std::fmt::Error);
    /// assert_eq!(failed.recover(|_| Result::ok(-1)), Result::ok(-1));
    /// ```
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Cause) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Err(cause) => function(cause),
        }
    }

    /// Combines two results with a binary operator.
    ///
    /// If either side is `Err` the combination is `Err`; when both are, the
    /// left (`self`) cause wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// assert_eq!(Result::ok(2).reduce(Result::ok(3), |a, b| a + b), Result::ok(5));
    /// ```
    pub fn reduce<F>(self, other: Self, operator: F) -> Self
    where
        F: FnOnce(T, T) -> T,
    {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => {
                Self::catching(move || operator(left, right))
            }
            (Self::Err(cause), _) | (Self::Success(_), Self::Err(cause)) => Self::Err(cause),
        }
    }

    /// Keeps the success value only when `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// assert_eq!(Result::ok(4).maybe(|n| n % 2 == 0), Result::ok(Some(4)));
    /// assert_eq!(Result::ok(3).maybe(|n| n % 2 == 0), Result::ok(None));
    /// ```
    pub fn maybe<P>(self, predicate: P) -> Result<Option<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Result::Success(Some(value))
                } else {
                    Result::Success(None)
                }
            }
            Self::Err(cause) => Result::Err(cause),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes `consumer` with the value if this is a `Success`.
    pub fn on_success<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            consumer(value);
        }
    }

    /// Invokes `consumer` with the cause if this is an `Err`.
    pub fn on_error<F>(&self, consumer: F)
    where
        F: FnOnce(&Cause),
    {
        if let Self::Err(cause) = self {
            consumer(cause);
        }
    }

    /// Invokes `consumer` only if this is an `Err` whose cause is an `E`.
    ///
    /// Matching is on the exact concrete type. A wrapper error such as
    /// [`UnwrapError`] is matched by its own type, not by the errors in its
    /// `source()` chain.
    ///
    /// Returns `self` unchanged, so several typed handlers can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    /// use std::num::ParseIntError;
    ///
    /// let mut handled = Vec::new();
    /// Result::of(|| "x".parse::<i32>())
    ///     .on_error_of::<std::fmt::Error, _>(|_| handled.push("fmt"))
    ///     .on_error_of::<ParseIntError, _>(|_| handled.push("parse"));
    /// assert_eq!(handled, vec!["parse"]);
    /// ```
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

    /// Dispatches to exactly one of the two consumers.
    pub fn match_with<S, F>(self, on_success: S, on_error: F)
    where
        S: FnOnce(T),
        F: FnOnce(Cause),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Err(cause) => on_error(cause),
        }
    }

    /// Eliminates the result by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    ///
    /// let text = Result::ok(7).fold(|n| n.to_string(), |cause| cause.to_string());
    /// assert_eq!(text, "7");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_error: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Cause) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Err(cause) => on_error(cause),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the value, or computes a fallback from the cause.
    #[inline]
    pub fn or_else_get<F>(self, function: F) -> T
    where
        F: FnOnce(Cause) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Err(cause) => function(cause),
        }
    }

    /// Returns the value, or the cause wrapped in an [`UnwrapError`] the caller must handle.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is an `Err`.
    pub fn or_else_throw(self) -> StdResult<T, UnwrapError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Err(cause) => Err(UnwrapError::new(cause)),
        }
    }

    /// Returns the value, or the cause typed as `E`.
    ///
    /// # Errors
    ///
    /// Returns the typed cause if this is an `Err` whose cause is an `E`.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnexpectedError`] payload if the cause is not an `E`,
    /// or is a boxed `E` still shared with a clone (see [`Cause::downcast`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Result;
    /// use std::num::ParseIntError;
    ///
    /// let failed = Result::of(|| "x".parse::<i32>());
    /// assert!(failed.or_else_throw_as::<ParseIntError>().is_err());
    /// ```
    pub fn or_else_throw_as<E>(self) -> StdResult<T, Arc<E>>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Err(cause) => match cause.downcast::<E>() {
                Ok(error) => Err(error),
                Err(cause) => {
                    let expected = std::any::type_name::<E>();
                    #[cfg(feature = "tracing")]
                    tracing::debug!(expected, cause = %cause, "typed unwrap met an unexpected cause");
                    std::panic::panic_any(UnexpectedError::new(expected, cause))
                }
            },
        }
    }

    /// Returns the value, asserting that the result cannot have failed.
    ///
    /// # Panics
    ///
    /// Panics with an [`UncheckedError`] payload if this is an `Err`.
    pub fn or_else_throw_unchecked(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Err(cause) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(cause = %cause, "unchecked unwrap of a failed result");
                std::panic::panic_any(UncheckedError::new(cause))
            }
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into an [`Either`]: `Success` to `Right`, `Err` to `Left`.
    #[inline]
    pub fn to_either(self) -> Either<Cause, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Err(cause) => Either::Left(cause),
        }
    }

    /// Discards the success value, keeping the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::{Result, ResultVoid};
    ///
    /// assert_eq!(Result::ok(1).to_void(), ResultVoid::ok());
    /// ```
    #[inline]
    pub fn to_void(self) -> ResultVoid {
        match self {
            Self::Success(_) => ResultVoid::SuccessVoid,
            Self::Err(cause) => ResultVoid::ErrVoid(cause),
        }
    }

    /// Converts into a standard library result.
    ///
    /// # Errors
    ///
    /// Returns the cause if this is an `Err`.
    #[inline]
    pub fn into_std(self) -> StdResult<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Err(cause) => Err(cause),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Result<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Err(cause) => formatter.debug_tuple("Err").field(cause).finish(),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T>
where
    E: Into<Cause>,
{
    #[inline]
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Err(error.into()),
        }
    }
}

impl<T> From<Result<T>> for StdResult<T, Cause> {
    #[inline]
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}

impl<L, R> From<Either<L, R>> for Result<R>
where
    L: Into<Cause>,
{
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        Self::from_either(either)
    }
}

impl<T> From<Result<T>> for Either<Cause, T> {
    #[inline]
    fn from(result: Result<T>) -> Self {
        result.to_either()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Panic;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_on_err_never_invokes_function() {
        let called = Cell::new(false);
        let failed: Result<i32> = Result::failure(fmt::Error);
        let mapped = failed.clone().map(|n| {
            called.set(true);
            n + 1
        });
        assert!(!called.get());
        assert_eq!(mapped, failed);
    }

    #[rstest]
    fn test_map_captures_panic() {
        let mapped = Result::ok(1).map(|_: i32| -> i32 { panic!("bad map") });
        let cause = mapped.cause().unwrap();
        assert_eq!(cause.downcast_ref::<Panic>().unwrap().message(), "bad map");
    }

    #[rstest]
    fn test_and_then_short_circuits() {
        let called = Cell::new(false);
        let failed: Result<i32> = Result::failure(fmt::Error);
        let chained = failed.and_then(|n| {
            called.set(true);
            Ok::<_, fmt::Error>(n)
        });
        assert!(!called.get());
        assert!(chained.cause_ref().unwrap().is::<fmt::Error>());
    }

    #[rstest]
    fn test_then_with_failure_replaces_result() {
        let checked = Result::ok(5).then_with(|_| || Err::<(), _>(fmt::Error));
        assert!(checked.cause_ref().unwrap().is::<fmt::Error>());
    }

    #[rstest]
    fn test_then_with_on_err_never_builds_continuation() {
        let called = Cell::new(false);
        let failed: Result<i32> = Result::failure(fmt::Error);
        let result = failed.clone().then_with(|_| {
            called.set(true);
            || Ok::<(), fmt::Error>(())
        });
        assert!(!called.get());
        assert_eq!(result, failed);
    }

    #[rstest]
    fn test_reduce_prefers_left_error() {
        let left: Result<i32> = Result::failure(Panic::new("left"));
        let right: Result<i32> = Result::failure(Panic::new("right"));
        let combined = left.clone().reduce(right, |a, b| a + b);
        assert_eq!(combined, left);
    }

    #[rstest]
    fn test_reduce_with_right_error() {
        let right: Result<i32> = Result::failure(Panic::new("right"));
        assert_eq!(Result::ok(1).reduce(right.clone(), |a, b| a + b), right);
    }

    #[rstest]
    fn test_maybe_on_err_never_evaluates_predicate() {
        let failed: Result<i32> = Result::failure(fmt::Error);
        let result = failed.maybe(|_| panic!("predicate evaluated"));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_or_else_variants() {
        let failed: Result<i32> = Result::failure(fmt::Error);
        assert_eq!(failed.clone().or_else(0), 0);
        assert_eq!(failed.or_else_get(|cause| cause.to_string().len() as i32), 45);
        assert_eq!(Result::ok(1).or_else(0), 1);
    }

    #[rstest]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", Result::ok(1)), "Success(1)");
        let failed: Result<i32> = Result::failure(fmt::Error);
        assert_eq!(format!("{failed:?}"), "Err(Cause(Error))");
    }

    #[rstest]
    fn test_std_result_conversion_roundtrip() {
        let result: Result<i32> = Ok::<_, fmt::Error>(3).into();
        assert_eq!(result, Result::ok(3));
        let std: StdResult<i32, Cause> = result.into();
        assert_eq!(std, Ok(3));
    }
}
