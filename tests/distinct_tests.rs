//! Unit tests for the distinct slice helpers.

#![cfg(feature = "ordered")]

use quotient::ordered::{distinct, distinct_by};
use rstest::rstest;

#[rstest]
fn test_distinct_keeps_first_occurrence_order() {
    assert_eq!(distinct(&[5, 3, 5, 1, 3, 5]), vec![5, 3, 1]);
}

#[rstest]
fn test_distinct_on_empty_slice() {
    assert_eq!(distinct::<i32>(&[]), Vec::<i32>::new());
}

#[rstest]
fn test_distinct_on_all_unique_slice_is_identity() {
    let input = vec!["a", "b", "c"];
    assert_eq!(distinct(&input), input);
}

#[rstest]
fn test_distinct_with_string_elements() {
    let input = ["one".to_string(), "two".to_string(), "one".to_string()];
    assert_eq!(distinct(&input), vec!["one".to_string(), "two".to_string()]);
}

#[rstest]
fn test_distinct_by_keeps_last_value_at_first_position() {
    let words = ["apple", "avocado", "banana", "cherry"];
    let kept = distinct_by(&words, |word| word.as_bytes()[0]);

    assert_eq!(kept, vec!["avocado", "banana", "cherry"]);
}

#[rstest]
fn test_distinct_by_with_derived_numeric_key() {
    let numbers = [1, 11, 21, 2, 12];
    // Keyed by last digit: 21 is the last write for key 1, 12 for key 2.
    let kept = distinct_by(&numbers, |n| n % 10);

    assert_eq!(kept, vec![21, 12]);
}
