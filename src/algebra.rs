//! # Composite Capabilities and Algebraic Bundles
//!
//! Pure unions of the Tier 0 capabilities. None of these adds logic; each is a
//! blanket-implemented trait so generic code can ask for "a ring over `U`"
//! instead of listing operator traits.
//!
//! ```text
//! Tier 1   additive = addable + subtractable
//!          multiplicative = multipliable + dividable
//!          integer_multiplicative = multiplicative + modable
//!          arithmetic = additive + multiplicative
//!          integer_arithmetic = additive + integer_multiplicative
//!          bitwise = xorable + andable + orable
//!          shiftable = left_shiftable + right_shiftable
//!
//! Tier 2   ring = additive + multipliable (+ rsubtractable when U != T)
//!          field = ring + dividable (+ rdividable when U != T)
//!          euclidean ring = ring + dividable + modable (+ reversed forms)
//!          ordered_* = * + totally_ordered
//!          operators = totally_ordered + integer_arithmetic + bitwise
//!                      (+ unit_steppable when U == T)
//! ```
//!
//! The reversed forms live on `U` (`impl Sub<T> for U`), so they are not part
//! of these bounds; `#[derive(Operators)]` still derives them.

use crate::arith::{
    Addable, Andable, Dividable, LeftShiftable, Modable, Multipliable, Orable, RightShiftable,
    Subtractable, Xorable,
};
use crate::ordering::TotallyOrdered;

/// Define a capability bundle: a trait with the given supertraits and a
/// blanket impl for every type that satisfies them.
macro_rules! bundle {
    ($(#[$meta:meta])* $name:ident = $($bound:tt)+) => {
        $(#[$meta])*
        pub trait $name<U = Self>: $($bound)+ {}
        impl<T, U> $name<U> for T where T: $($bound)+ {}
    };
}

// =============================================================================
// Tier 1
// =============================================================================

bundle! {
    /// `+` and `-` against `U`.
    Additive = Addable<U> + Subtractable<U>
}

bundle! {
    /// `*` and `/` against `U`.
    Multiplicative = Multipliable<U> + Dividable<U>
}

bundle! {
    /// `*`, `/` and `%` against `U`.
    IntegerMultiplicative = Multiplicative<U> + Modable<U>
}

bundle! {
    Arithmetic = Additive<U> + Multiplicative<U>
}

bundle! {
    IntegerArithmetic = Additive<U> + IntegerMultiplicative<U>
}

bundle! {
    /// `^`, `&` and `|` against `U`.
    Bitwise = Xorable<U> + Andable<U> + Orable<U>
}

bundle! {
    /// `<<` and `>>` by `U`.
    Shiftable = LeftShiftable<U> + RightShiftable<U>
}

// =============================================================================
// Tier 2
// =============================================================================

bundle! {
    /// A ring acting on `U`: addition, subtraction and multiplication.
    RingOperators = Additive<U> + Multipliable<U>
}

bundle! {
    OrderedRingOperators = RingOperators<U> + TotallyOrdered<U>
}

bundle! {
    /// A ring with full division.
    FieldOperators = RingOperators<U> + Dividable<U>
}

bundle! {
    OrderedFieldOperators = FieldOperators<U> + TotallyOrdered<U>
}

bundle! {
    /// A ring with integer division and remainder.
    EuclideanRingOperators = RingOperators<U> + Dividable<U> + Modable<U>
}

bundle! {
    OrderedEuclideanRingOperators = EuclideanRingOperators<U> + TotallyOrdered<U>
}

/// Historical spelling of [`EuclideanRingOperators`].
pub use EuclideanRingOperators as EuclidianRingOperators;
/// Historical spelling of [`OrderedEuclideanRingOperators`].
pub use OrderedEuclideanRingOperators as OrderedEuclidianRingOperators;

bundle! {
    /// Everything a number-like type is expected to support against `U`.
    ///
    /// For `U == T` the derive also adds `unit_steppable`; that part is
    /// expressed by [`UnitSteppable`](crate::UnitSteppable) separately.
    Operators = TotallyOrdered<U> + IntegerArithmetic<U> + Bitwise<U>
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_sum<T: RingOperators + Copy>(a: T, b: T, c: T) -> T {
        a * b + c - b
    }

    #[test]
    fn test_builtin_rings() {
        assert_eq!(ring_sum(2i32, 3, 4), 7);
        assert_eq!(ring_sum(0.5f64, 2.0, 1.0), 0.0);
    }

    #[test]
    fn test_builtin_bundles() {
        fn euclid<T: OrderedEuclideanRingOperators>() {}
        fn euclid_alias<T: EuclidianRingOperators>() {}
        fn field<T: OrderedFieldOperators>() {}
        fn number<T: Operators + Shiftable<u32>>() {}

        euclid::<i64>();
        euclid_alias::<u8>();
        field::<f32>();
        number::<u16>();
    }
}
