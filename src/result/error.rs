//! Error types raised at unwrap points and produced by fault capture.
//!
//! Combinators never fail by panicking on the expected failure path: a failure
//! is a value. Errors only surface at the unwrap points the caller chooses:
//!
//! - [`UnwrapError`] is returned by `or_else_throw` and must be handled.
//! - [`UnexpectedError`] is the panic payload of `or_else_throw_as` when the
//!   cause is not of the requested type.
//! - [`UncheckedError`] is the panic payload of `or_else_throw_unchecked`.
//!
//! [`Panic`] is the cause stored when a captured computation panics with a
//! payload that is not already a [`Cause`] or one of the types above.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::cause::Cause;

/// The failure returned by the handled unwrap of a failing result.
///
/// # Examples
///
/// ```rust
/// use valuekit::result::{Result, UnwrapError};
///
/// let failed: Result<i32> = Result::failure(std::fmt::Error);
/// let error: UnwrapError = failed.or_else_throw().unwrap_err();
/// assert!(error.cause().is::<std::fmt::Error>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    cause: Cause,
}

impl UnwrapError {
    /// Creates an unwrap error around a cause.
    pub const fn new(cause: Cause) -> Self {
        Self { cause }
    }

    /// Returns the wrapped cause.
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Consumes the error, returning the wrapped cause.
    pub fn into_cause(self) -> Cause {
        self.cause
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "result failed: {}", self.cause)
    }
}

impl Error for UnwrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_error())
    }
}

/// Panic payload raised when the caller asserted that a result could not fail.
///
/// # Examples
///
/// ```rust
/// use valuekit::result::{Result, UncheckedError};
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// let failed: Result<i32> = Result::failure(std::fmt::Error);
/// let payload = catch_unwind(AssertUnwindSafe(|| failed.or_else_throw_unchecked())).unwrap_err();
/// assert!(payload.downcast_ref::<UncheckedError>().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncheckedError {
    cause: Cause,
}

impl UncheckedError {
    /// Creates an unchecked error around a cause.
    pub const fn new(cause: Cause) -> Self {
        Self { cause }
    }

    /// Returns the wrapped cause.
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl fmt::Display for UncheckedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unchecked unwrap of a failed result: {}", self.cause)
    }
}

impl Error for UncheckedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_error())
    }
}

/// Panic payload raised by a typed unwrap whose cause has a different type.
///
/// This signals a logic error in the caller's assumption about which failures
/// are possible at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedError {
    expected: &'static str,
    cause: Cause,
}

impl UnexpectedError {
    /// Creates an unexpected error for a cause that did not match `expected`.
    pub const fn new(expected: &'static str, cause: Cause) -> Self {
        Self { expected, cause }
    }

    /// Returns the name of the type the caller expected.
    pub const fn expected(&self) -> &'static str {
        self.expected
    }

    /// Returns the wrapped cause.
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl fmt::Display for UnexpectedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unexpected error (expected {}): {}",
            self.expected, self.cause
        )
    }
}

impl Error for UnexpectedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.cause.as_error())
    }
}

type Payload = Arc<Mutex<Option<Box<dyn Any + Send + 'static>>>>;

/// A panic captured while running a computation.
///
/// String payloads become the message. Any other payload is kept inside the
/// panic and can be taken back with [`Panic::take_payload`].
///
/// # Examples
///
/// ```rust
/// use valuekit::result::{Panic, Result};
///
/// let result: Result<i32> = Result::catching(|| panic!("boom"));
/// let cause = result.cause().unwrap();
/// assert_eq!(cause.downcast_ref::<Panic>().unwrap().message(), "boom");
/// ```
#[derive(Clone)]
pub struct Panic {
    message: String,
    payload: Option<Payload>,
}

impl Panic {
    /// Creates a panic cause with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            payload: None,
        }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the panic still holds a payload of type `P`.
    pub fn payload_is<P>(&self) -> bool
    where
        P: Any,
    {
        self.payload.as_ref().is_some_and(|payload| {
            lock(payload)
                .as_ref()
                .is_some_and(|value| value.as_ref().is::<P>())
        })
    }

    /// Takes the payload out of the panic if it is a `P`.
    ///
    /// The payload is shared by every clone of this panic, so only the first
    /// successful call gets it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valuekit::result::{Panic, Result};
    ///
    /// let result = Result::<i32>::catching(|| std::panic::panic_any(404_u16));
    /// let cause = result.cause().unwrap();
    /// let panic = cause.downcast_ref::<Panic>().unwrap();
    /// assert_eq!(panic.take_payload::<u16>(), Some(404));
    /// assert_eq!(panic.take_payload::<u16>(), None);
    /// ```
    pub fn take_payload<P>(&self) -> Option<P>
    where
        P: Any,
    {
        let mut slot = lock(self.payload.as_ref()?);
        match slot.take()?.downcast::<P>() {
            Ok(value) => Some(*value),
            Err(other) => {
                *slot = Some(other);
                None
            }
        }
    }

    /// Converts a `catch_unwind` payload into a cause.
    ///
    /// Payloads that already carry a typed error of this module, or a [`Cause`],
    /// are kept as they are. String payloads become a [`Panic`] message; any
    /// other payload is stored in the [`Panic`].
    pub fn cause_from_payload(payload: Box<dyn Any + Send + 'static>) -> Cause {
        let payload = match payload.downcast::<Cause>() {
            Ok(cause) => return *cause,
            Err(payload) => payload,
        };
        let payload = match typed_payload::<UnwrapError>(payload) {
            Ok(cause) => return cause,
            Err(payload) => payload,
        };
        let payload = match typed_payload::<UncheckedError>(payload) {
            Ok(cause) => return cause,
            Err(payload) => payload,
        };
        let payload = match typed_payload::<UnexpectedError>(payload) {
            Ok(cause) => return cause,
            Err(payload) => payload,
        };
        if let Some(message) = payload.downcast_ref::<&str>() {
            return Cause::new(Self::new(*message));
        }
        if let Some(message) = payload.downcast_ref::<String>() {
            return Cause::new(Self::new(message.clone()));
        }
        Cause::new(Self {
            message: "Unknown panic".to_string(),
            payload: Some(Arc::new(Mutex::new(Some(payload)))),
        })
    }
}

fn typed_payload<E>(payload: Box<dyn Any + Send + 'static>) -> Result<Cause, Box<dyn Any + Send>>
where
    E: Error + Send + Sync + 'static,
{
    payload.downcast::<E>().map(|error| Cause::new(*error))
}

fn lock(payload: &Payload) -> MutexGuard<'_, Option<Box<dyn Any + Send + 'static>>> {
    payload.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PartialEq for Panic {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for Panic {}

impl Hash for Panic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Panic")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl Error for Panic {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unwrap_error_display() {
        let error = UnwrapError::new(Cause::new(fmt::Error));
        assert_eq!(
            format!("{error}"),
            "result failed: an error occurred when formatting an argument"
        );
    }

    #[rstest]
    fn test_unwrap_error_source_is_cause() {
        let error = UnwrapError::new(Cause::new(fmt::Error));
        let source = error.source().unwrap();
        assert!(source.is::<fmt::Error>());
    }

    #[rstest]
    fn test_unexpected_error_display() {
        let error = UnexpectedError::new("core::fmt::Error", Cause::new(Panic::new("x")));
        assert_eq!(
            format!("{error}"),
            "unexpected error (expected core::fmt::Error): panicked: x"
        );
        assert_eq!(error.expected(), "core::fmt::Error");
    }

    #[rstest]
    fn test_unchecked_error_display() {
        let error = UncheckedError::new(Cause::new(Panic::new("x")));
        assert_eq!(
            format!("{error}"),
            "unchecked unwrap of a failed result: panicked: x"
        );
    }

    #[rstest]
    #[case(Box::new("static message"), "static message")]
    #[case(Box::new(String::from("owned message")), "owned message")]
    #[case(Box::new(42_u8), "Unknown panic")]
    fn test_cause_from_payload_reads_message(
        #[case] payload: Box<dyn Any + Send>,
        #[case] expected: &str,
    ) {
        let cause = Panic::cause_from_payload(payload);
        assert_eq!(cause.downcast_ref::<Panic>().unwrap().message(), expected);
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Refused(u8);

    impl fmt::Display for Refused {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "refused {}", self.0)
        }
    }

    impl Error for Refused {}

    #[rstest]
    fn test_cause_from_payload_stores_unknown_typed_payload() {
        let cause = Panic::cause_from_payload(Box::new(Refused(2)));
        let panic = cause.downcast_ref::<Panic>().unwrap();
        assert_eq!(panic.message(), "Unknown panic");
        assert!(panic.payload_is::<Refused>());
        assert!(!panic.payload_is::<String>());
        assert_eq!(panic.take_payload::<Refused>(), Some(Refused(2)));
        assert_eq!(panic.take_payload::<Refused>(), None);
    }

    #[rstest]
    fn test_cause_from_payload_keeps_unwrap_error() {
        let original = Cause::new(fmt::Error);
        let cause = Panic::cause_from_payload(Box::new(UnwrapError::new(original.clone())));
        assert_eq!(
            cause.downcast_ref::<UnwrapError>().unwrap().cause(),
            &original
        );
    }

    #[rstest]
    fn test_panic_equality_ignores_payload() {
        let stored = Panic::cause_from_payload(Box::new(Refused(1)));
        let panic = stored.downcast_ref::<Panic>().unwrap();
        assert_eq!(panic, &Panic::new("Unknown panic"));
        assert_eq!(
            format!("{panic:?}"),
            "Panic { message: \"Unknown panic\", .. }"
        );
    }

    #[rstest]
    fn test_cause_from_payload_keeps_typed_payloads() {
        let original = Cause::new(fmt::Error);
        let cause = Panic::cause_from_payload(Box::new(original.clone()));
        assert!(cause.ptr_eq(&original));

        let cause = Panic::cause_from_payload(Box::new(UncheckedError::new(original.clone())));
        assert_eq!(
            cause.downcast_ref::<UncheckedError>().unwrap().cause(),
            &original
        );
    }
}
