//! `serde_json` documents as reflected values.
//!
//! A [`Value`] is a sum type whose cases are the six JSON kinds, so values of
//! different kinds are never equal and no coercion takes place (`1` is not
//! `"1"`, `null` is not `false`). Objects compare without regard to key order,
//! arrays element by element.

use std::any::Any;

use serde_json::{Map, Number, Value};

use crate::capability::{Comparable, ComparableEnum, DynComparable};
use crate::reflect::{Category, Child, Reflect, Tag};
use crate::sum;

const NULL: Tag = Tag::new(0, "null");
const BOOL: Tag = Tag::new(1, "bool");
const NUMBER: Tag = Tag::new(2, "number");
const STRING: Tag = Tag::new(3, "string");
const ARRAY: Tag = Tag::new(4, "array");
const OBJECT: Tag = Tag::new(5, "object");

impl Reflect for Value {
    fn category(&self) -> Category {
        Category::Sum
    }

    fn children(&self) -> Vec<Child<'_>> {
        match self {
            Value::Null => Vec::new(),
            Value::Bool(b) => vec![Child::unlabeled(b)],
            Value::Number(n) => vec![Child::unlabeled(n)],
            Value::String(s) => vec![Child::unlabeled(s)],
            Value::Array(items) => vec![Child::unlabeled(items)],
            Value::Object(map) => vec![Child::unlabeled(map)],
        }
    }

    fn tag(&self) -> Option<Tag> {
        Some(match self {
            Value::Null => NULL,
            Value::Bool(_) => BOOL,
            Value::Number(_) => NUMBER,
            Value::String(_) => STRING,
            Value::Array(_) => ARRAY,
            Value::Object(_) => OBJECT,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl Comparable for Value {
    fn equals(&self, other: &Self) -> bool {
        sum::equal_cases(self, other)
    }
}

impl ComparableEnum for Value {}

impl Reflect for Number {
    fn category(&self) -> Category {
        Category::Primitive
    }

    fn children(&self) -> Vec<Child<'_>> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl Comparable for Number {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Reflect for Map<String, Value> {
    fn category(&self) -> Category {
        Category::Map
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.iter()
            .map(|(key, value)| Child::entry(key, value))
            .collect()
    }

    fn lookup(&self, key: &dyn Reflect) -> Option<Child<'_>> {
        let key = key.as_any().downcast_ref::<String>()?;
        self.get_key_value(key)
            .map(|(key, value)| Child::entry(key, value))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Deep equality of two JSON documents.
///
/// ```
/// use serde_json::json;
/// use structural_eq::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [1, 2]}), &json!({"b": [1, 2], "a": 1})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    crate::equal(a, b)
}
