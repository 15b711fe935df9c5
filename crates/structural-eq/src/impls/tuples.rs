//! Tuples compare position by position.

use std::any::Any;

use crate::reflect::{Category, Child, Reflect};

macro_rules! tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn category(&self) -> Category {
                Category::Tuple
            }

            fn children(&self) -> Vec<Child<'_>> {
                vec![$(Child::unlabeled(&self.$idx)),+]
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

tuple!(A 0);
tuple!(A 0, B 1);
tuple!(A 0, B 1, C 2);
tuple!(A 0, B 1, C 2, D 3);
tuple!(A 0, B 1, C 2, D 3, E 4);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
