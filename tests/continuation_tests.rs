//! Tests for the Continuation adapter used by `Result::then_with`.
//!
//! A continuation is a side-effecting step. Running it through `call`
//! threads the current result through unchanged on success and replaces it
//! with a failure otherwise.

#![cfg(feature = "result")]

use rstest::rstest;
use std::cell::RefCell;
use std::fmt;
use valuekit::result::{Cause, Continuation, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct WriteRejected;

impl fmt::Display for WriteRejected {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("write rejected")
    }
}

impl std::error::Error for WriteRejected {}

/// A step that appends an entry to a journal unless the journal is sealed.
struct Journal<'a> {
    entries: &'a RefCell<Vec<String>>,
    entry: String,
    sealed: bool,
}

impl Continuation for Journal<'_> {
    type Error = WriteRejected;

    fn run(self) -> std::result::Result<(), WriteRejected> {
        if self.sealed {
            return Err(WriteRejected);
        }
        self.entries.borrow_mut().push(self.entry);
        Ok(())
    }
}

#[rstest]
fn call_returns_current_result_when_step_succeeds() {
    let entries = RefCell::new(Vec::new());
    let step = Journal {
        entries: &entries,
        entry: "opened".to_string(),
        sealed: false,
    };
    assert_eq!(step.call(Result::ok(1)), Result::ok(1));
    assert_eq!(entries.into_inner(), vec!["opened".to_string()]);
}

#[rstest]
fn call_replaces_result_when_step_fails() {
    let entries = RefCell::new(Vec::new());
    let step = Journal {
        entries: &entries,
        entry: "opened".to_string(),
        sealed: true,
    };
    assert_eq!(
        step.call(Result::ok(1)),
        Result::Err(Cause::new(WriteRejected))
    );
    assert!(entries.into_inner().is_empty());
}

#[rstest]
fn then_with_builds_continuation_from_value() {
    let entries = RefCell::new(Vec::new());
    let result = Result::ok("order-17").then_with(|id| Journal {
        entries: &entries,
        entry: format!("shipped {id}"),
        sealed: false,
    });
    assert_eq!(result, Result::ok("order-17"));
    assert_eq!(entries.into_inner(), vec!["shipped order-17".to_string()]);
}

#[rstest]
fn closure_is_a_continuation() {
    let step = || Err::<(), _>(WriteRejected);
    assert!(step.run().is_err());
}
