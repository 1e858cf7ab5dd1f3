//! # Ordering Derivation
//!
//! Derives the comparison operators from a single strict relation.
//!
//! | Capability             | Requires                       | Derives                         |
//! |------------------------|--------------------------------|---------------------------------|
//! | `less_than_comparable` | `<` (and `>` when `U != T`)    | `<=`, `>=`, `>`, reversed forms |
//! | `equality_comparable`  | `==`                           | `!=`, reversed `==`             |
//! | `equivalent`           | `<` (and `>` when `U != T`)    | `==`                            |
//! | `partially_ordered`    | `<`, `==`                      | `<=`, `>=`, `>`, reversed forms |
//! | `totally_ordered`      | `<`, `==`                      | both of the first two           |
//!
//! Every derived impl is emitted by [`__derive_ordering!`](crate::__derive_ordering)
//! from `#[derive(Operators)]`. The primitives sit in `for<'__op>` where-clauses,
//! so adopting a capability never fails; a missing primitive is reported where
//! the derived comparison is used.
//!
//! `PartialOrd<U>` requires `PartialEq<U>`, so the ordering impls only
//! resolve once the matching equality exists (hand-written, derived, or
//! provided by `equality_comparable` / `equivalent`).

use core::cmp::Ordering;

use crate::primitives::{GreaterThan, LessThan};

/// `partial_cmp` for `less_than_comparable`: values that are neither less
/// nor greater are treated as equivalent.
#[doc(hidden)]
#[inline(always)]
pub fn strict_weak_cmp(less: bool, greater: bool) -> Option<Ordering> {
    Some(if less {
        Ordering::Less
    } else if greater {
        Ordering::Greater
    } else {
        Ordering::Equal
    })
}

/// `partial_cmp` for `partially_ordered`: values that are neither less,
/// greater, nor equal are incomparable.
#[doc(hidden)]
#[inline(always)]
pub fn partial_order_cmp(less: bool, greater: bool, equal: bool) -> Option<Ordering> {
    if less {
        Some(Ordering::Less)
    } else if greater {
        Some(Ordering::Greater)
    } else if equal {
        Some(Ordering::Equal)
    } else {
        None
    }
}

/// Equivalence from the strict relation alone: neither `x < y` nor `x > y`.
#[doc(hidden)]
#[inline(always)]
pub fn equivalent_by<T, U>(x: &T, y: &U) -> bool
where
    T: LessThan<U> + GreaterThan<U> + ?Sized,
    U: ?Sized,
{
    !x.less_than(y) && !x.greater_than(y)
}

// =============================================================================
// Capability Traits
// =============================================================================

/// Types whose comparison operators against `U` are available.
pub trait LessThanComparable<U: ?Sized = Self>: PartialOrd<U> {}
impl<T: PartialOrd<U> + ?Sized, U: ?Sized> LessThanComparable<U> for T {}

/// Types comparable for equality against `U`.
pub trait EqualityComparable<U: ?Sized = Self>: PartialEq<U> {}
impl<T: PartialEq<U> + ?Sized, U: ?Sized> EqualityComparable<U> for T {}

/// Both of the above.
pub trait TotallyOrdered<U: ?Sized = Self>: LessThanComparable<U> + EqualityComparable<U> {}
impl<T: LessThanComparable<U> + EqualityComparable<U> + ?Sized, U: ?Sized> TotallyOrdered<U> for T {}

// =============================================================================
// Bridge Macro
// =============================================================================

/// Internal bridge - DO NOT USE DIRECTLY.
/// Use `#[derive(Operators)]` or `operators!` instead.
///
/// One invocation emits exactly one impl:
///
/// ```text
/// __derive_ordering!(<rule> <form> [impl generics] [where predicates] T)
/// __derive_ordering!(<rule> <form> [impl generics] [where predicates] T ; U)
/// ```
///
/// `form` is `homogeneous` (`T` against itself), `forward` (`T` against `U`)
/// or `reflected` (`U` against `T`).
#[macro_export]
#[doc(hidden)]
macro_rules! __derive_ordering {
    // ---- less_than_comparable ----------------------------------------------
    (less_than_comparable homogeneous [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* ::core::cmp::PartialOrd for $T
        where
            for<'__op> $T: $crate::LessThan + ::core::cmp::PartialEq,
            $($w)*
        {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ordering::strict_weak_cmp(
                    <$T as $crate::LessThan>::less_than(self, other),
                    <$T as $crate::LessThan>::less_than(other, self),
                )
            }
            #[inline]
            fn lt(&self, other: &Self) -> bool {
                <$T as $crate::LessThan>::less_than(self, other)
            }
            #[inline]
            fn gt(&self, other: &Self) -> bool {
                <$T as $crate::LessThan>::less_than(other, self)
            }
            #[inline]
            fn le(&self, other: &Self) -> bool {
                !<$T as $crate::LessThan>::less_than(other, self)
            }
            #[inline]
            fn ge(&self, other: &Self) -> bool {
                !<$T as $crate::LessThan>::less_than(self, other)
            }
        }
    };
    (less_than_comparable forward [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        impl $($g)* ::core::cmp::PartialOrd<$U> for $T
        where
            for<'__op> $T: $crate::LessThan<$U> + $crate::GreaterThan<$U> + ::core::cmp::PartialEq<$U>,
            $($w)*
        {
            #[inline]
            fn partial_cmp(&self, other: &$U) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ordering::strict_weak_cmp(
                    <$T as $crate::LessThan<$U>>::less_than(self, other),
                    <$T as $crate::GreaterThan<$U>>::greater_than(self, other),
                )
            }
            #[inline]
            fn lt(&self, other: &$U) -> bool {
                <$T as $crate::LessThan<$U>>::less_than(self, other)
            }
            #[inline]
            fn gt(&self, other: &$U) -> bool {
                <$T as $crate::GreaterThan<$U>>::greater_than(self, other)
            }
            #[inline]
            fn le(&self, other: &$U) -> bool {
                !<$T as $crate::GreaterThan<$U>>::greater_than(self, other)
            }
            #[inline]
            fn ge(&self, other: &$U) -> bool {
                !<$T as $crate::LessThan<$U>>::less_than(self, other)
            }
        }
    };
    (less_than_comparable reflected [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        impl $($g)* ::core::cmp::PartialOrd<$T> for $U
        where
            for<'__op> $T: $crate::LessThan<$U> + $crate::GreaterThan<$U>,
            for<'__op> $U: ::core::cmp::PartialEq<$T>,
            $($w)*
        {
            #[inline]
            fn partial_cmp(&self, other: &$T) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ordering::strict_weak_cmp(
                    <$T as $crate::GreaterThan<$U>>::greater_than(other, self),
                    <$T as $crate::LessThan<$U>>::less_than(other, self),
                )
            }
            #[inline]
            fn lt(&self, other: &$T) -> bool {
                <$T as $crate::GreaterThan<$U>>::greater_than(other, self)
            }
            #[inline]
            fn gt(&self, other: &$T) -> bool {
                <$T as $crate::LessThan<$U>>::less_than(other, self)
            }
            #[inline]
            fn le(&self, other: &$T) -> bool {
                !<$T as $crate::LessThan<$U>>::less_than(other, self)
            }
            #[inline]
            fn ge(&self, other: &$T) -> bool {
                !<$T as $crate::GreaterThan<$U>>::greater_than(other, self)
            }
        }
    };

    // ---- equality_comparable (reflected `==`; `!=` is PartialEq::ne) ------
    (equality_comparable reflected [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        impl $($g)* ::core::cmp::PartialEq<$T> for $U
        where
            for<'__op> $T: ::core::cmp::PartialEq<$U>,
            $($w)*
        {
            #[inline]
            fn eq(&self, other: &$T) -> bool {
                <$T as ::core::cmp::PartialEq<$U>>::eq(other, self)
            }
        }
    };

    // ---- equivalent --------------------------------------------------------
    (equivalent homogeneous [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* ::core::cmp::PartialEq for $T
        where
            for<'__op> $T: $crate::LessThan,
            $($w)*
        {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                !<$T as $crate::LessThan>::less_than(self, other)
                    && !<$T as $crate::LessThan>::less_than(other, self)
            }
        }
    };
    (equivalent forward [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        impl $($g)* ::core::cmp::PartialEq<$U> for $T
        where
            for<'__op> $T: $crate::LessThan<$U> + $crate::GreaterThan<$U>,
            $($w)*
        {
            #[inline]
            fn eq(&self, other: &$U) -> bool {
                $crate::ordering::equivalent_by::<$T, $U>(self, other)
            }
        }
    };

    // ---- partially_ordered -------------------------------------------------
    (partially_ordered homogeneous [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* ::core::cmp::PartialOrd for $T
        where
            for<'__op> $T: $crate::LessThan + ::core::cmp::PartialEq,
            $($w)*
        {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ordering::partial_order_cmp(
                    <$T as $crate::LessThan>::less_than(self, other),
                    <$T as $crate::LessThan>::less_than(other, self),
                    <$T as ::core::cmp::PartialEq>::eq(self, other),
                )
            }
            #[inline]
            fn lt(&self, other: &Self) -> bool {
                <$T as $crate::LessThan>::less_than(self, other)
            }
            #[inline]
            fn gt(&self, other: &Self) -> bool {
                <$T as $crate::LessThan>::less_than(other, self)
            }
            #[inline]
            fn le(&self, other: &Self) -> bool {
                <$T as $crate::LessThan>::less_than(self, other)
                    || <$T as ::core::cmp::PartialEq>::eq(self, other)
            }
            #[inline]
            fn ge(&self, other: &Self) -> bool {
                <$T as $crate::LessThan>::less_than(other, self)
                    || <$T as ::core::cmp::PartialEq>::eq(self, other)
            }
        }
    };
    (partially_ordered forward [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        impl $($g)* ::core::cmp::PartialOrd<$U> for $T
        where
            for<'__op> $T: $crate::LessThan<$U> + $crate::GreaterThan<$U> + ::core::cmp::PartialEq<$U>,
            $($w)*
        {
            #[inline]
            fn partial_cmp(&self, other: &$U) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ordering::partial_order_cmp(
                    <$T as $crate::LessThan<$U>>::less_than(self, other),
                    <$T as $crate::GreaterThan<$U>>::greater_than(self, other),
                    <$T as ::core::cmp::PartialEq<$U>>::eq(self, other),
                )
            }
            #[inline]
            fn lt(&self, other: &$U) -> bool {
                <$T as $crate::LessThan<$U>>::less_than(self, other)
            }
            #[inline]
            fn gt(&self, other: &$U) -> bool {
                <$T as $crate::GreaterThan<$U>>::greater_than(self, other)
            }
            #[inline]
            fn le(&self, other: &$U) -> bool {
                <$T as $crate::LessThan<$U>>::less_than(self, other)
                    || <$T as ::core::cmp::PartialEq<$U>>::eq(self, other)
            }
            #[inline]
            fn ge(&self, other: &$U) -> bool {
                <$T as $crate::GreaterThan<$U>>::greater_than(self, other)
                    || <$T as ::core::cmp::PartialEq<$U>>::eq(self, other)
            }
        }
    };
    (partially_ordered reflected [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        impl $($g)* ::core::cmp::PartialOrd<$T> for $U
        where
            for<'__op> $T: $crate::LessThan<$U> + $crate::GreaterThan<$U> + ::core::cmp::PartialEq<$U>,
            for<'__op> $U: ::core::cmp::PartialEq<$T>,
            $($w)*
        {
            #[inline]
            fn partial_cmp(&self, other: &$T) -> ::core::option::Option<::core::cmp::Ordering> {
                $crate::ordering::partial_order_cmp(
                    <$T as $crate::GreaterThan<$U>>::greater_than(other, self),
                    <$T as $crate::LessThan<$U>>::less_than(other, self),
                    <$T as ::core::cmp::PartialEq<$U>>::eq(other, self),
                )
            }
            #[inline]
            fn lt(&self, other: &$T) -> bool {
                <$T as $crate::GreaterThan<$U>>::greater_than(other, self)
            }
            #[inline]
            fn gt(&self, other: &$T) -> bool {
                <$T as $crate::LessThan<$U>>::less_than(other, self)
            }
            #[inline]
            fn le(&self, other: &$T) -> bool {
                <$T as $crate::GreaterThan<$U>>::greater_than(other, self)
                    || <$T as ::core::cmp::PartialEq<$U>>::eq(other, self)
            }
            #[inline]
            fn ge(&self, other: &$T) -> bool {
                <$T as $crate::LessThan<$U>>::less_than(other, self)
                    || <$T as ::core::cmp::PartialEq<$U>>::eq(other, self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_weak_cmp() {
        assert_eq!(strict_weak_cmp(true, false), Some(Ordering::Less));
        assert_eq!(strict_weak_cmp(false, true), Some(Ordering::Greater));
        assert_eq!(strict_weak_cmp(false, false), Some(Ordering::Equal));
    }

    #[test]
    fn test_partial_order_cmp_incomparable() {
        assert_eq!(partial_order_cmp(false, false, true), Some(Ordering::Equal));
        assert_eq!(partial_order_cmp(false, false, false), None);
    }

    #[test]
    fn test_equivalent_by() {
        assert!(equivalent_by(&3, &3));
        assert!(!equivalent_by(&3, &4));
        // NaN is equivalent to everything under the strict relation
        assert!(equivalent_by(&f64::NAN, &1.0));
    }

    #[test]
    fn test_std_types_satisfy_capabilities() {
        fn total<T: TotallyOrdered + ?Sized>(_: &T) {}
        total(&1u32);
        total("str");
    }
}
