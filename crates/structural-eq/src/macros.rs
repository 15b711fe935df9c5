//! Declaration macros that synthesize [`Reflect`](crate::Reflect)
//! descriptors.
//!
//! Both macros take an ordinary item definition, emit it unchanged, and add
//! the descriptor plus a `PartialEq` impl that calls
//! [`Comparable::equals`](crate::Comparable::equals). The item must therefore
//! not derive `PartialEq` itself. Generic items are not supported; write the
//! `Reflect` impl by hand for those.

/// Declares a struct whose fields the engine can see.
///
/// The struct still has to opt in with `impl Comparable for T {}`, optionally
/// overriding `equals`.
///
/// ```
/// use structural_eq::{record, Comparable};
///
/// record! {
///     #[derive(Debug)]
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///     }
/// }
/// impl Comparable for Point {}
///
/// record! {
///     #[derive(Debug)]
///     pub struct Meters(pub f64);
/// }
/// impl Comparable for Meters {}
///
/// assert_eq!(Point { x: 1, y: 2 }, Point { x: 1, y: 2 });
/// assert_ne!(Meters(1.0), Meters(2.0));
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Reflect for $name {
            fn category(&self) -> $crate::Category {
                $crate::Category::Record
            }

            fn children(&self) -> ::std::vec::Vec<$crate::Child<'_>> {
                ::std::vec![$($crate::Child::labeled(::std::stringify!($field), &self.$field)),*]
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_comparable(&self) -> ::std::option::Option<&dyn $crate::DynComparable> {
                ::std::option::Option::Some(self)
            }
        }

        $crate::__comparable_partial_eq!($name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident (
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field_ty:ty
            ),* $(,)?
        );
    ) => {
        $(#[$meta])*
        $vis struct $name (
            $(
                $(#[$field_meta])*
                $field_vis $field_ty,
            )*
        );

        impl $crate::Reflect for $name {
            fn category(&self) -> $crate::Category {
                $crate::Category::Record
            }

            fn children(&self) -> ::std::vec::Vec<$crate::Child<'_>> {
                $crate::__positional_children!(self, $name, [$($field_ty),*])
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_comparable(&self) -> ::std::option::Option<&dyn $crate::DynComparable> {
                ::std::option::Option::Some(self)
            }
        }

        $crate::__comparable_partial_eq!($name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::Reflect for $name {
            fn category(&self) -> $crate::Category {
                $crate::Category::Record
            }

            fn children(&self) -> ::std::vec::Vec<$crate::Child<'_>> {
                ::std::vec::Vec::new()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_comparable(&self) -> ::std::option::Option<&dyn $crate::DynComparable> {
                ::std::option::Option::Some(self)
            }
        }

        $crate::__comparable_partial_eq!($name);
    };
}

/// Declares an enum the engine compares case by case.
///
/// Cases get stable tags in declaration order. `Comparable` is implemented
/// by the macro; the enum opts in with `impl ComparableEnum for T {}`,
/// optionally overriding `payloads_equal`.
///
/// ```
/// use structural_eq::{sum_type, ComparableEnum};
///
/// sum_type! {
///     #[derive(Debug)]
///     pub enum Event {
///         Started,
///         Stopped,
///         Moved(i32, i32),
///         Renamed { from: String, to: String },
///     }
/// }
/// impl ComparableEnum for Event {}
///
/// assert_eq!(Event::Started, Event::Started);
/// assert_ne!(Event::Started, Event::Stopped);
/// assert_ne!(Event::Moved(1, 2), Event::Moved(2, 1));
/// assert_eq!(
///     Event::Renamed { from: "a".into(), to: "b".into() },
///     Event::Renamed { from: "a".into(), to: "b".into() },
/// );
/// ```
#[macro_export]
macro_rules! sum_type {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple_ty:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple_ty),* ) )?
                $( { $($field: $field_ty),* } )?,
            )*
        }

        impl $crate::Reflect for $name {
            fn category(&self) -> $crate::Category {
                $crate::Category::Sum
            }

            fn children(&self) -> ::std::vec::Vec<$crate::Child<'_>> {
                match self {
                    $(
                        $name::$variant { .. } => $crate::__variant_children!(
                            self,
                            $name::$variant
                            $( ( $($tuple_ty),* ) )?
                            $( { $($field),* } )?
                        ),
                    )*
                }
            }

            fn tag(&self) -> ::std::option::Option<$crate::Tag> {
                const CASES: &[&str] = &[$(::std::stringify!($variant)),*];
                let name = match self {
                    $( $name::$variant { .. } => ::std::stringify!($variant), )*
                };
                let index = CASES.iter().position(|case| *case == name).unwrap_or_default();
                ::std::option::Option::Some($crate::Tag::new(index as u32, name))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_comparable(&self) -> ::std::option::Option<&dyn $crate::DynComparable> {
                ::std::option::Option::Some(self)
            }
        }

        impl $crate::Comparable for $name {
            fn equals(&self, other: &Self) -> bool {
                $crate::sum::equal_cases(self, other)
            }
        }

        $crate::__comparable_partial_eq!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __comparable_partial_eq {
    ($name:ident) => {
        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::Comparable::equals(self, other)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_children {
    ($value:expr, $enum_name:ident :: $variant:ident) => {
        ::std::vec::Vec::new()
    };
    ($value:expr, $enum_name:ident :: $variant:ident ( $($ty:ty),* )) => {
        $crate::__positional_children!($value, $enum_name::$variant, [$($ty),*])
    };
    ($value:expr, $enum_name:ident :: $variant:ident { $($field:ident),* }) => {
        match $value {
            $enum_name::$variant { $($field),* } => {
                ::std::vec![$($crate::Child::labeled(::std::stringify!($field), $field)),*]
            }
            #[allow(unreachable_patterns)]
            _ => ::std::vec::Vec::new(),
        }
    };
}

/// Binds positional fields to names from a fixed pool, one per field type.
#[doc(hidden)]
#[macro_export]
macro_rules! __positional_children {
    (@bind $value:expr, $($path:ident)::+, [$head:ty $(, $tail:ty)*], [$($bound:ident)*], [$next:ident $($pool:ident)*]) => {
        $crate::__positional_children!(@bind $value, $($path)::+, [$($tail),*], [$($bound)* $next], [$($pool)*])
    };
    (@bind $value:expr, $($path:ident)::+, [], [$($bound:ident)*], [$($pool:ident)*]) => {
        match $value {
            $($path)::+ ( $($bound),* ) => ::std::vec![$($crate::Child::unlabeled($bound)),*],
            #[allow(unreachable_patterns)]
            _ => ::std::vec::Vec::new(),
        }
    };
    ($value:expr, $($path:ident)::+, [$($ty:ty),*]) => {
        $crate::__positional_children!(
            @bind $value, $($path)::+, [$($ty),*], [],
            [__f0 __f1 __f2 __f3 __f4 __f5 __f6 __f7 __f8 __f9 __f10 __f11 __f12 __f13 __f14 __f15]
        )
    };
}
