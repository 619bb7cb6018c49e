//! Single-criterion checks against one record.
//!
//! Every predicate is pure. A missing (or NaN) numeric field never satisfies
//! a threshold.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use stockterm_types::{finite, Action, StockRecord};

use crate::filter::ScoreRange;

/// Case-insensitive substring match on code and name. Empty query matches
/// all; whitespace in the query is significant.
pub fn text_matches(record: &StockRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.code.as_str().to_lowercase().contains(&needle)
        || record.name().to_lowercase().contains(&needle)
}

/// Empty selection matches everything, otherwise exact membership.
pub fn member_of<T, Q>(value: &Q, selected: &BTreeSet<T>) -> bool
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    selected.is_empty() || selected.contains(value)
}

/// Membership for the optional recommendation; a record without one only
/// passes an empty selection.
pub fn action_in(action: Option<Action>, selected: &BTreeSet<Action>) -> bool {
    selected.is_empty() || action.is_some_and(|a| selected.contains(&a))
}

pub fn at_least(value: Option<f64>, threshold: f64) -> bool {
    finite(value).is_some_and(|v| v >= threshold)
}

pub fn above(value: Option<f64>, threshold: f64) -> bool {
    finite(value).is_some_and(|v| v > threshold)
}

pub fn below(value: Option<f64>, threshold: f64) -> bool {
    finite(value).is_some_and(|v| v < threshold)
}

/// `value < other`, both present.
pub fn below_field(value: Option<f64>, other: Option<f64>) -> bool {
    match (finite(value), finite(other)) {
        (Some(v), Some(o)) => v < o,
        _ => false,
    }
}

/// Inclusive range check on the score.
pub fn score_within(record: &StockRecord, range: &ScoreRange) -> bool {
    finite(record.score).is_some_and(|s| range.contains(s))
}
