//! Result values for composing operations that may fail.
//!
//! This module provides two closed sum types:
//!
//! - [`Result<T>`]: `Success(T)` or `Err(Cause)`
//! - [`ResultVoid`]: `SuccessVoid` or `ErrVoid(Cause)`
//!
//! together with combinators that chain, recover, match and fold them. A
//! failure is always a value: errors returned by a wrapped computation and
//! panics raised inside it are captured at the invocation point and stored
//! as a [`Cause`]. Errors only surface at the unwrap points the caller picks
//! (`or_else_throw`, `or_else_throw_as`, `or_else_throw_unchecked`).
//!
//! Results are immutable; every combinator returns a new value.
//!
//! Capturing a panic does not silence the panic hook: with the default hook a
//! captured panic still prints `thread ... panicked at` to stderr.
//!
//! # Examples
//!
//! ```rust
//! use valuekit::result::{self, Result};
//! use std::num::ParseIntError;
//!
//! let port = Result::of(|| "8080".parse::<u16>())
//!     .maybe(|port| *port >= 1024)
//!     .map(|port| port.unwrap_or(8080));
//! assert_eq!(port, Result::ok(8080));
//!
//! let mut logged = Vec::new();
//! Result::of(|| "http".parse::<u16>())
//!     .on_error_of::<ParseIntError, _>(|error| logged.push(error.to_string()))
//!     .on_error(|cause| logged.push(format!("failed: {cause}")));
//! assert_eq!(logged.len(), 2);
//!
//! let squares = result::apply_over(1..=3, |n| Ok::<_, ParseIntError>(n * n), 0, |acc, n| acc + n);
//! assert_eq!(squares, Result::ok(14));
//! ```

mod capture;
mod cause;
mod continuation;
mod error;
mod fold;
mod value;
mod void;

pub use cause::Cause;
pub use continuation::Continuation;
pub use error::{Panic, UncheckedError, UnexpectedError, UnwrapError};
pub use fold::{apply_over, apply_over_each, flat_apply_over};
pub use value::Result;
pub use void::ResultVoid;

/// Wraps an already known value. Shorthand for [`Result::ok`].
#[inline]
pub const fn ok<T>(value: T) -> Result<T> {
    Result::Success(value)
}

/// Returns the successful void result. Shorthand for [`ResultVoid::ok`].
#[inline]
pub const fn ok_void() -> ResultVoid {
    ResultVoid::SuccessVoid
}

/// Runs a fallible computation and captures its outcome. Shorthand for [`Result::of`].
#[inline]
pub fn of<T, E, F>(computation: F) -> Result<T>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: Into<Cause>,
{
    Result::of(computation)
}

/// Runs a fallible action and captures its outcome. Shorthand for [`ResultVoid::of`].
#[inline]
pub fn of_void<E, F>(action: F) -> ResultVoid
where
    F: FnOnce() -> std::result::Result<(), E>,
    E: Into<Cause>,
{
    ResultVoid::of(action)
}

/// Wraps an already known failure of an operation without a value.
///
/// # Examples
///
/// ```rust
/// use valuekit::result;
///
/// let failed = result::error(std::fmt::Error);
/// assert!(failed.cause_ref().unwrap().is::<std::fmt::Error>());
/// ```
#[inline]
pub fn error(cause: impl Into<Cause>) -> ResultVoid {
    ResultVoid::ErrVoid(cause.into())
}

static_assertions::assert_impl_all!(Cause: Send, Sync, Clone);
static_assertions::assert_impl_all!(Result<i32>: Send, Sync, Clone, Eq, std::hash::Hash);
static_assertions::assert_impl_all!(ResultVoid: Send, Sync, Clone, Eq, std::hash::Hash);
static_assertions::assert_impl_all!(UnwrapError: std::error::Error, Send, Sync);
