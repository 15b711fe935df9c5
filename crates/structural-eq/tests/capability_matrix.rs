//! Capability declaration rules and the fatal diagnostics.

mod common;

use std::any::Any;

use structural_eq::{
    check_declaration, equal, equal_values, record, Category, Child, Comparable, DynComparable,
    EqualError, Reflect, Tag,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A collection that wrongly declares the capability.
#[derive(Debug)]
struct Stack(Vec<i64>);

impl Reflect for Stack {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.0.iter().map(|item| Child::unlabeled(item)).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl Comparable for Stack {}

/// A nullable wrapper that wrongly declares the capability.
struct Maybe<T>(Option<T>);

impl<T: Reflect> Reflect for Maybe<T> {
    fn category(&self) -> Category {
        Category::Nullable
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.0.iter().map(|item| Child::unlabeled(item)).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl<T: Reflect> Comparable for Maybe<T> {}

/// Reflected, but never opted in.
#[derive(Debug)]
struct Unregistered {
    value: i64,
}

impl Reflect for Unregistered {
    fn category(&self) -> Category {
        Category::Record
    }

    fn children(&self) -> Vec<Child<'_>> {
        vec![Child::labeled("value", &self.value)]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A sum type that opted into the record comparison.
#[derive(Debug)]
enum Switch {
    On,
    Off,
}

impl Reflect for Switch {
    fn category(&self) -> Category {
        Category::Sum
    }

    fn children(&self) -> Vec<Child<'_>> {
        Vec::new()
    }

    fn tag(&self) -> Option<Tag> {
        Some(match self {
            Switch::On => Tag::new(0, "On"),
            Switch::Off => Tag::new(1, "Off"),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl Comparable for Switch {}

record! {
    #[derive(Debug)]
    struct Holder {
        inner: Unregistered,
    }
}
impl Comparable for Holder {}

record! {
    #[derive(Debug)]
    struct StackHolder {
        stack: Stack,
    }
}
impl Comparable for StackHolder {}

// ---------------------------------------------------------------------------
// Declaration guard
// ---------------------------------------------------------------------------

#[test]
fn sequence_declaring_capability_is_reported() {
    assert_eq!(
        check_declaration(&Stack(vec![])),
        Err(EqualError::ProtectedShape {
            type_name: "Stack".to_string(),
            category: Category::Sequence,
        })
    );
}

#[test]
fn nullable_declaring_capability_is_reported_without_generics() {
    let err = check_declaration(&Maybe(Some(1u8))).unwrap_err();
    assert_eq!(
        err,
        EqualError::ProtectedShape {
            type_name: "Maybe".to_string(),
            category: Category::Nullable,
        }
    );
    assert!(!err.to_string().contains('<'));
}

#[test]
fn std_shapes_pass_the_guard() {
    assert!(check_declaration(&Some(1)).is_ok());
    assert!(check_declaration(&vec![1]).is_ok());
    assert!(check_declaration(&std::collections::BTreeMap::<u8, u8>::new()).is_ok());
    assert!(check_declaration(&Switch::On).is_ok());
}

#[test]
#[should_panic(expected = "Stack must not implement Comparable")]
fn comparing_protected_capability_aborts() {
    equal(&Stack(vec![1]), &Stack(vec![1]));
}

#[test]
#[should_panic(expected = "Maybe must not implement Comparable")]
fn comparing_protected_nullable_aborts() {
    equal(&Maybe(None::<u8>), &Maybe(None));
}

#[test]
#[should_panic(expected = "Stack must not implement Comparable")]
fn nested_protected_capability_aborts() {
    equal(
        &StackHolder { stack: Stack(vec![]) },
        &StackHolder { stack: Stack(vec![]) },
    );
}

// ---------------------------------------------------------------------------
// Unhandled shapes
// ---------------------------------------------------------------------------

#[test]
#[should_panic(expected = "must implement Comparable")]
fn unregistered_nested_record_aborts() {
    equal(
        &Holder {
            inner: Unregistered { value: 1 },
        },
        &Holder {
            inner: Unregistered { value: 1 },
        },
    );
}

#[test]
#[should_panic(expected = "Unregistered must implement Comparable")]
fn unregistered_top_level_record_aborts() {
    equal(&Unregistered { value: 1 }, &Unregistered { value: 2 });
}

#[test]
#[should_panic(expected = "must implement Comparable")]
fn unregistered_values_inside_collections_abort() {
    equal(
        &vec![Unregistered { value: 1 }],
        &vec![Unregistered { value: 1 }],
    );
}

#[test]
fn empty_collections_never_reach_their_elements() {
    assert!(equal(&Vec::<Unregistered>::new(), &Vec::new()));
    assert!(equal(&None::<Unregistered>, &None));
}

// ---------------------------------------------------------------------------
// Sum types declared as records
// ---------------------------------------------------------------------------

#[test]
#[should_panic(expected = "should implement ComparableEnum instead")]
fn sum_type_using_record_comparison_aborts() {
    equal(&Switch::On, &Switch::Off);
}

// ---------------------------------------------------------------------------
// Erased comparisons
// ---------------------------------------------------------------------------

#[test]
fn different_runtime_types_compare_unequal() {
    assert!(!equal_values(&1i64, &1u64));
    assert!(!equal_values(&"a".to_string(), &"a"));
    assert!(equal_values(&1i64, &1i64));
}
