//! # Arithmetic Derivation
//!
//! One capability per binary operator, each needing a single compound
//! assignment primitive. The binary form is built as "take `x`, apply
//! `x op= y`, return `x`".
//!
//! | Family           | Operator | Primitive     | Commutative |
//! |------------------|----------|---------------|-------------|
//! | `addable`        | `+`      | `AddAssign`   | yes         |
//! | `subtractable`   | `-`      | `SubAssign`   | no          |
//! | `multipliable`   | `*`      | `MulAssign`   | yes         |
//! | `dividable`      | `/`      | `DivAssign`   | no          |
//! | `modable`        | `%`      | `RemAssign`   | no          |
//! | `xorable`        | `^`      | `BitXorAssign`| yes         |
//! | `andable`        | `&`      | `BitAndAssign`| yes         |
//! | `orable`         | `\|`     | `BitOrAssign` | yes         |
//! | `left_shiftable` | `<<`     | `ShlAssign`   | no          |
//! | `right_shiftable`| `>>`     | `ShrAssign`   | no          |
//!
//! ## Directions
//!
//! ```text
//! forward   T op U -> T   every family
//! commuted  U op T -> T   commutative families, heterogeneous form only
//! reversed  U op T -> T   r-prefixed capabilities (rsubtractable, ...)
//! ```
//!
//! `commuted` takes the `T` operand and applies `op=` with the `U` operand,
//! which is only right when the operation commutes. Nothing checks that.
//!
//! `reversed` converts the `U` operand into `T` (`T: From<U>`) and applies
//! `op=` with the `T` operand.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

// =============================================================================
// Capability Traits
// =============================================================================

// Apply $mac to each (Capability, Operator) pair.
macro_rules! for_each_family {
    ($mac:ident) => {
        $mac!(Addable, Add, "`T + U`");
        $mac!(Subtractable, Sub, "`T - U`");
        $mac!(Multipliable, Mul, "`T * U`");
        $mac!(Dividable, Div, "`T / U`");
        $mac!(Modable, Rem, "`T % U`");
        $mac!(Xorable, BitXor, "`T ^ U`");
        $mac!(Andable, BitAnd, "`T & U`");
        $mac!(Orable, BitOr, "`T | U`");
        $mac!(LeftShiftable, Shl, "`T << U`");
        $mac!(RightShiftable, Shr, "`T >> U`");
    };
}

macro_rules! define_family {
    ($cap:ident, $Op:ident, $doc:literal) => {
        paste::paste! {
            #[doc = "Types supporting " $doc " alongside its compound assignment."]
            pub trait $cap<U = Self>: Sized + $Op<U, Output = Self> + [<$Op Assign>]<U> {}

            impl<T, U> $cap<U> for T where T: $Op<U, Output = T> + [<$Op Assign>]<U> {}
        }
    };
}

for_each_family!(define_family);

// =============================================================================
// Bridge Macro
// =============================================================================

/// Internal bridge - DO NOT USE DIRECTLY.
/// Use `#[derive(Operators)]` or `operators!` instead.
///
/// ```text
/// __derive_binary!(<direction> <Op> <op> [impl generics] [where predicates] T ; U)
/// ```
///
/// `Op`/`op` name the operator trait and method (`Add add`); the compound
/// assignment is found by appending `Assign` / `_assign`.
#[macro_export]
#[doc(hidden)]
macro_rules! __derive_binary {
    (forward $Op:ident $op:ident [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        $crate::paste::paste! {
            impl $($g)* ::core::ops::$Op<$U> for $T
            where
                for<'__op> $T: ::core::ops::[<$Op Assign>]<$U>,
                $($w)*
            {
                type Output = $T;

                #[inline]
                fn $op(self, rhs: $U) -> $T {
                    let mut lhs = self;
                    ::core::ops::[<$Op Assign>]::[<$op _assign>](&mut lhs, rhs);
                    lhs
                }
            }
        }
    };
    (commuted $Op:ident $op:ident [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        $crate::paste::paste! {
            impl $($g)* ::core::ops::$Op<$T> for $U
            where
                for<'__op> $T: ::core::ops::[<$Op Assign>]<$U>,
                $($w)*
            {
                type Output = $T;

                #[inline]
                fn $op(self, rhs: $T) -> $T {
                    let mut lhs = rhs;
                    ::core::ops::[<$Op Assign>]::[<$op _assign>](&mut lhs, self);
                    lhs
                }
            }
        }
    };
    (reversed $Op:ident $op:ident [$($g:tt)*] [$($w:tt)*] $T:ty ; $U:ty) => {
        $crate::paste::paste! {
            impl $($g)* ::core::ops::$Op<$T> for $U
            where
                for<'__op> $T: ::core::convert::From<$U> + ::core::ops::[<$Op Assign>]<$T>,
                $($w)*
            {
                type Output = $T;

                #[inline]
                fn $op(self, rhs: $T) -> $T {
                    let mut lhs = <$T as ::core::convert::From<$U>>::from(self);
                    ::core::ops::[<$Op Assign>]::[<$op _assign>](&mut lhs, rhs);
                    lhs
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Cents(i64);

    impl SubAssign for Cents {
        fn sub_assign(&mut self, rhs: Self) {
            self.0 -= rhs.0;
        }
    }

    impl SubAssign<i64> for Cents {
        fn sub_assign(&mut self, rhs: i64) {
            self.0 -= rhs;
        }
    }

    impl From<i64> for Cents {
        fn from(v: i64) -> Self {
            Cents(v)
        }
    }

    crate::__derive_binary!(forward Sub sub [] [] Cents ; Cents);
    crate::__derive_binary!(forward Sub sub [] [] Cents ; i64);
    crate::__derive_binary!(reversed Sub sub [] [] Cents ; i64);

    #[test]
    fn test_forward_and_reversed_directions() {
        assert_eq!(Cents(10) - Cents(3), Cents(7));
        assert_eq!(Cents(10) - 4i64, Cents(6));
        // reversed: 100 - Cents(30) == Cents(100) - Cents(30)
        assert_eq!(100i64 - Cents(30), Cents(70));
    }

    #[test]
    fn test_std_types_satisfy_families() {
        fn needs<T: Addable + Subtractable + Modable + Xorable + LeftShiftable<u32>>() {}
        needs::<u64>();
    }
}
