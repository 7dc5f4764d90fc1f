//! Collaborator types results convert to and from.
//!
//! - [`Either`]: a value that can be one of two types
//!
//! # Examples
//!
//! ```rust
//! use valuekit::control::Either;
//!
//! let either: Either<String, i32> = Ok(7).into();
//! assert_eq!(either.right(), Some(7));
//! ```

mod either;

pub use either::Either;
