//! # valuekit
//!
//! Value-holding abstractions for composing operations without panicking
//! or checking for absent values.
//!
//! ## Overview
//!
//! - **Result**: [`result::Result`] (`Success` / `Err`) and
//!   [`result::ResultVoid`] (`SuccessVoid` / `ErrVoid`) with combinators for
//!   chaining, recovery, matching and fail-fast folding
//! - **Control Structures**: [`control::Either`], the two-armed union results
//!   convert to and from
//!
//! ## Feature Flags
//!
//! - `control`: the `Either` collaborator
//! - `result`: Result and `ResultVoid` (enables `control`)
//! - `tracing`: diagnostic events for captured panics and short-circuited folds
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use valuekit::prelude::*;
//!
//! let total = apply_over(["1", "2", "3"], |text| text.parse::<i32>(), 0, |acc, n| acc + n)
//!     .recover(|_| Result::ok(0));
//! assert_eq!(total, Result::ok(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Note that importing the prelude shadows `std::result::Result` with
/// [`result::Result`].
///
/// # Usage
///
/// ```rust
/// use valuekit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "result")]
    pub use crate::result::{
        Cause, Continuation, Result, ResultVoid, apply_over, apply_over_each, flat_apply_over,
    };
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "result")]
pub mod result;
