//! Leaf types that come with the capability: text, numbers, booleans.

use std::any::Any;

use crate::capability::{Comparable, DynComparable};
use crate::reflect::{Category, Child, Reflect};

macro_rules! primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
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
    )*};
}

macro_rules! exact {
    ($($ty:ty),* $(,)?) => {$(
        impl Comparable for $ty {
            fn equals(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

// NaN equals NaN so that every value equals itself.
macro_rules! float {
    ($($ty:ty),* $(,)?) => {$(
        impl Comparable for $ty {
            fn equals(&self, other: &Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }
        }
    )*};
}

primitive!(
    (),
    bool,
    char,
    String,
    &'static str,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

exact!(
    (),
    bool,
    char,
    String,
    &'static str,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

float!(f32, f64);
