//! Sum-type case discrimination.
//!
//! A payload-less case has no children, so nothing structural tells two such
//! values apart. Every sum value therefore exposes an explicit [`Tag`] for its
//! active case, and [`discriminant`] is the only place that reads it.
//!
//! Two sum values hold the same case when
//!
//! - both are payload-less and their discriminants match, or
//! - both carry a payload and their case labels match.
//!
//! A payload-less value never matches a payload-bearing one.
//!
//! [`Tag`]: crate::Tag

use crate::capability::ComparableEnum;
use crate::engine::children_equal;
use crate::error::{abort, EqualError};
use crate::reflect::{Child, Reflect};

/// Stable index of the active case.
///
/// Fails for a value that exposes no tag.
pub fn discriminant(value: &dyn Reflect) -> Result<u32, EqualError> {
    value
        .tag()
        .map(|tag| tag.index)
        .ok_or_else(|| EqualError::DiscriminantUnavailable {
            type_name: value.type_name().to_string(),
        })
}

/// Name of the active case.
pub fn case_label(value: &dyn Reflect) -> Result<&'static str, EqualError> {
    value
        .tag()
        .map(|tag| tag.name)
        .ok_or_else(|| EqualError::DiscriminantUnavailable {
            type_name: value.type_name().to_string(),
        })
}

/// Whether `a` and `b` hold the same case. Payloads are not inspected.
pub fn same_case(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    same_case_with(a, &a.children(), b, &b.children())
}

/// Full comparison of two sum values: same case, then
/// [`ComparableEnum::payloads_equal`] on the associated values.
///
/// This is what [`sum_type!`](crate::sum_type) binds `Comparable::equals` to.
pub fn equal_cases<T: ComparableEnum>(a: &T, b: &T) -> bool {
    let lhs = a.children();
    let rhs = b.children();
    if !same_case_with(a, &lhs, b, &rhs) {
        tracing::trace!(type_name = a.type_name(), "active cases differ");
        return false;
    }
    if lhs.is_empty() {
        return true;
    }
    T::payloads_equal(&lhs, &rhs)
}

/// Default payload comparison: equal arity, then each associated value
/// through its capability or, lacking one, structurally.
pub fn default_payloads_equal(lhs: &[Child<'_>], rhs: &[Child<'_>]) -> bool {
    children_equal(lhs, rhs)
}

fn same_case_with(a: &dyn Reflect, lhs: &[Child<'_>], b: &dyn Reflect, rhs: &[Child<'_>]) -> bool {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => unwrap_or_abort(discriminant(a)) == unwrap_or_abort(discriminant(b)),
        (false, false) => unwrap_or_abort(case_label(a)) == unwrap_or_abort(case_label(b)),
        _ => false,
    }
}

fn unwrap_or_abort<T>(result: Result<T, EqualError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => abort(err),
    }
}
