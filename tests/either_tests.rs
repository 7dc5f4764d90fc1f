//! Unit tests for the Either collaborator.
//!
//! Either is the two-armed union results convert to and from:
//! - `Left(L)`: conventionally the cause of a failure
//! - `Right(R)`: conventionally the value of a success

#![cfg(feature = "control")]

use rstest::rstest;
use valuekit::control::Either;

// =============================================================================
// Type Checking and Extraction
// =============================================================================

#[rstest]
fn either_left_is_left() {
    let value: Either<i32, String> = Either::Left(42);
    assert!(value.is_left());
    assert!(!value.is_right());
    assert_eq!(value.left(), Some(42));
}

#[rstest]
fn either_right_is_right() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert!(value.is_right());
    assert_eq!(value.clone().left(), None);
    assert_eq!(value.right(), Some("hello".to_string()));
}

// =============================================================================
// Mapping and Folding
// =============================================================================

#[rstest]
#[case(Either::Left(42), Either::Left(84))]
#[case(Either::Right("hello".to_string()), Either::Right("hello".to_string()))]
fn either_map_left(#[case] value: Either<i32, String>, #[case] expected: Either<i32, String>) {
    assert_eq!(value.map_left(|x| x * 2), expected);
}

#[rstest]
#[case(Either::Right("hello".to_string()), Either::Right(5))]
#[case(Either::Left(42), Either::Left(42))]
fn either_map_right(#[case] value: Either<i32, String>, #[case] expected: Either<i32, usize>) {
    assert_eq!(value.map_right(|s| s.len()), expected);
}

#[rstest]
fn either_fold_eliminates_both_arms() {
    let left: Either<i32, String> = Either::Left(42);
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    assert_eq!(right.fold(|x| x.to_string(), |s| s), "hello");
}

#[rstest]
fn either_swap_twice_is_identity() {
    let value: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(value.clone().swap().swap(), value);
}

// =============================================================================
// Traits
// =============================================================================

#[rstest]
fn either_debug_output() {
    let left: Either<i32, String> = Either::Left(1);
    let right: Either<i32, String> = Either::Right("x".to_string());
    assert_eq!(format!("{left:?}"), "Left(1)");
    assert_eq!(format!("{right:?}"), "Right(\"x\")");
}
