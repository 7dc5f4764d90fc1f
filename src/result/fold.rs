//! Fail-fast folding of sequences into a single result.
//!
//! Each function pulls elements strictly in order and stops at the first
//! failing transformation. The accumulated value is then discarded and the
//! failing element's cause is returned; the remaining elements are never
//! pulled from the iterator. An empty sequence yields `Success(zero)`.
//!
//! # Examples
//!
//! ```rust
//! use valuekit::result::{Result, apply_over};
//!
//! let sum = apply_over([1, 2, 3], |n| Ok::<_, std::fmt::Error>(n * n), 0, |acc, n| acc + n);
//! assert_eq!(sum, Result::ok(14));
//! ```

use std::result::Result as StdResult;

use super::capture::{capture, capture_value};
use super::cause::Cause;
use super::value::Result;
use super::void::ResultVoid;

/// Applies a fallible `function` to every element and folds the outputs with `accumulator`.
///
/// An error return or a panic from `function` (or a panic from `accumulator`)
/// stops the fold.
///
/// # Examples
///
/// ```rust
/// use valuekit::result::apply_over;
///
/// let parsed = apply_over(["1", "x", "3"], |text| text.parse::<i32>(), 0, |acc, n| acc + n);
/// assert!(parsed.is_err());
/// ```
pub fn apply_over<I, O, A, E, F, G>(
    sequence: I,
    mut function: F,
    zero: A,
    mut accumulator: G,
) -> Result<A>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> StdResult<O, E>,
    G: FnMut(A, O) -> A,
    E: Into<Cause>,
{
    let mut accumulated = zero;
    for (index, element) in sequence.into_iter().enumerate() {
        let folded = capture(|| function(element))
            .and_then(|output| capture_value(|| accumulator(accumulated, output)));
        match folded {
            Ok(next) => accumulated = next,
            Err(cause) => return short_circuit(index, cause),
        }
    }
    Result::Success(accumulated)
}

/// Runs a fallible `consumer` on every element, stopping at the first failure.
///
/// # Examples
///
/// ```rust
/// use valuekit::result::{ResultVoid, apply_over_each};
///
/// let mut seen = Vec::new();
/// let outcome = apply_over_each([1, 2, 3], |n| {
///     seen.push(n);
///     Ok::<(), std::fmt::Error>(())
/// });
/// assert_eq!(outcome, ResultVoid::ok());
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn apply_over_each<I, E, F>(sequence: I, consumer: F) -> ResultVoid
where
    I: IntoIterator,
    F: FnMut(I::Item) -> StdResult<(), E>,
    E: Into<Cause>,
{
    apply_over(sequence, consumer, (), |(), ()| ()).to_void()
}

/// Like [`apply_over`], for a `function` that already returns a [`Result`].
///
/// # Examples
///
/// ```rust
/// use valuekit::result::{Result, flat_apply_over};
///
/// let total = flat_apply_over(vec![2, 4], |n| Result::ok(n / 2), 0, |acc, n| acc + n);
/// assert_eq!(total, Result::ok(3));
/// ```
pub fn flat_apply_over<I, O, A, F, G>(
    sequence: I,
    mut function: F,
    zero: A,
    mut accumulator: G,
) -> Result<A>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<O>,
    G: FnMut(A, O) -> A,
{
    let mut accumulated = zero;
    for (index, element) in sequence.into_iter().enumerate() {
        let folded = capture_value(|| function(element))
            .and_then(Result::into_std)
            .and_then(|output| capture_value(|| accumulator(accumulated, output)));
        match folded {
            Ok(next) => accumulated = next,
            Err(cause) => return short_circuit(index, cause),
        }
    }
    Result::Success(accumulated)
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn short_circuit<A>(index: usize, cause: Cause) -> Result<A> {
    #[cfg(feature = "tracing")]
    tracing::trace!(index, cause = %cause, "fold short-circuited");
    Result::Err(cause)
}

/// Collects results into a `Result<Vec<T>>`, stopping at the first `Err`.
///
/// # Examples
///
/// ```rust
/// use valuekit::result::Result;
///
/// let all: Result<Vec<i32>> = vec![Result::ok(1), Result::ok(2)].into_iter().collect();
/// assert_eq!(all, Result::ok(vec![1, 2]));
/// ```
impl<T> FromIterator<Result<T>> for Result<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Result<T>>>(iter: I) -> Self {
        flat_apply_over(iter, |result| result, Vec::new(), |mut values, value| {
            values.push(value);
            values
        })
    }
}
