//! Callables. The engine never looks inside them.

use std::any::Any;

use crate::reflect::{Category, Child, Reflect};

macro_rules! function_shape {
    () => {
        fn category(&self) -> Category {
            Category::Function
        }

        fn children(&self) -> Vec<Child<'_>> {
            Vec::new()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    };
}

macro_rules! function {
    ($($arg:ident),*) => {
        impl<R: 'static, $($arg: 'static),*> Reflect for fn($($arg),*) -> R {
            function_shape!();
        }

        impl<R: 'static, $($arg: 'static),*> Reflect for Box<dyn Fn($($arg),*) -> R> {
            function_shape!();
        }

        impl<R: 'static, $($arg: 'static),*> Reflect for Box<dyn Fn($($arg),*) -> R + Send + Sync> {
            function_shape!();
        }
    };
}

function!();
function!(A);
function!(A, B);
function!(A, B, C);
