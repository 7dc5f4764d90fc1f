//! The opaque error value carried by failing results.
//!
//! A [`Cause`] wraps any `std::error::Error + Send + Sync + 'static` behind a
//! shared pointer. Failing results never inspect the concrete type of their
//! cause unless the caller asks for it explicitly through [`Cause::is`],
//! [`Cause::downcast_ref`] or [`Cause::downcast`].
//!
//! # Examples
//!
//! ```rust
//! use valuekit::result::Cause;
//! use std::num::ParseIntError;
//!
//! let error: ParseIntError = "x".parse::<i32>().unwrap_err();
//! let cause = Cause::new(error);
//!
//! assert!(cause.is::<ParseIntError>());
//! assert!(!cause.is::<std::fmt::Error>());
//! assert_eq!(cause.to_string(), "invalid digit found in string");
//! ```

use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A type-erased, shareable error value.
///
/// `Cause` does not implement [`std::error::Error`] itself; every error type
/// converts into it with `From`/`?`. Use [`Cause::from_boxed`] for a
/// `Box<dyn Error + Send + Sync>`, and [`Cause::as_error`] when a `&dyn Error`
/// is needed.
///
/// # Equality
///
/// Two causes are equal when they share the same allocation, or when they hold
/// the same concrete type and render identical `Display` and `Debug` output.
/// Boxed causes compare as one type among themselves. Hashing covers the
/// stored type and the `Display` rendering.
///
/// # Examples
///
/// ```rust
/// use valuekit::result::Cause;
///
/// let first = Cause::new(std::fmt::Error);
/// let second = Cause::new(std::fmt::Error);
/// assert_eq!(first, second);
/// ```
#[derive(Clone)]
pub struct Cause {
    error: Arc<dyn Error + Send + Sync + 'static>,
    // Same allocation as `error`, kept to recover `Arc<E>` without unsafe code.
    any: Arc<dyn Any + Send + Sync + 'static>,
}

// A boxed error stored as it was handed over.
struct Boxed(Box<dyn Error + Send + Sync + 'static>);

impl fmt::Display for Boxed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

impl fmt::Debug for Boxed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl Error for Boxed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl Cause {
    /// Wraps an error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Cause;
    ///
    /// let cause = Cause::new(std::fmt::Error);
    /// assert!(cause.is::<std::fmt::Error>());
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let shared = Arc::new(error);
        Self {
            error: shared.clone(),
            any: shared,
        }
    }

    /// Wraps a boxed, dynamically typed error without re-boxing it.
    ///
    /// Type checks look through the box at the concrete error inside.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Cause;
    /// use std::error::Error;
    /// use std::num::ParseIntError;
    ///
    /// let boxed: Box<dyn Error + Send + Sync> = Box::new("x".parse::<i32>().unwrap_err());
    /// let cause = Cause::from_boxed(boxed);
    /// assert!(cause.is::<ParseIntError>());
    /// ```
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::from_shared_box(Arc::new(Boxed(error)))
    }

    fn from_shared_box(boxed: Arc<Boxed>) -> Self {
        Self {
            error: boxed.clone(),
            any: boxed,
        }
    }

    /// Returns `true` if the wrapped error is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.as_error().is::<E>()
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Cause;
    ///
    /// let cause = Cause::new(std::fmt::Error);
    /// assert!(cause.downcast_ref::<std::fmt::Error>().is_some());
    /// assert!(cause.downcast_ref::<std::io::Error>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    /// Recovers the typed error, or returns the cause unchanged on a type mismatch.
    ///
    /// The error is shared with every clone of this cause, hence the `Arc`.
    /// A cause built with [`Cause::from_boxed`] only gives up its error while
    /// no clone of it is alive; otherwise it is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the wrapped error is not an `E`, or when it is
    /// a boxed `E` still shared with a clone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::Cause;
    ///
    /// let cause = Cause::new(std::fmt::Error);
    /// let typed = cause.downcast::<std::fmt::Error>().unwrap();
    /// assert_eq!(*typed, std::fmt::Error);
    /// ```
    pub fn downcast<E>(self) -> Result<Arc<E>, Self>
    where
        E: Error + Send + Sync + 'static,
    {
        if !self.is::<E>() {
            return Err(self);
        }
        let Self { error, any } = self;
        match any.downcast::<Boxed>() {
            Ok(boxed) => {
                drop(error);
                match Arc::try_unwrap(boxed) {
                    Ok(Boxed(inner)) => inner
                        .downcast::<E>()
                        .map(Arc::from)
                        .map_err(Self::from_boxed),
                    Err(shared) => Err(Self::from_shared_box(shared)),
                }
            }
            Err(any) => any.downcast::<E>().map_err(|any| Self { error, any }),
        }
    }

    /// Returns the wrapped error as a trait object.
    ///
    /// For a boxed cause this is the error inside the box.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match self.any.downcast_ref::<Boxed>() {
            Some(boxed) => boxed.0.as_ref(),
            None => self.error.as_ref(),
        }
    }

    /// Returns `true` if both causes share the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.any, &other.any)
    }

    fn stored_type(&self) -> TypeId {
        Any::type_id(&*self.any)
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Cause {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.stored_type() == other.stored_type()
            && self.error.to_string() == other.error.to_string()
            && format!("{:?}", self.error) == format!("{:?}", other.error)
    }
}

impl Eq for Cause {}

impl Hash for Cause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stored_type().hash(state);
        self.error.to_string().hash(state);
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, formatter)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Cause").field(&self.error).finish()
    }
}
