//! Strict ordering relations.
//!
//! `PartialOrd` cannot be implemented from `<` alone, so the single relation
//! the ordering capabilities start from lives in its own trait.

/// The strict relation `self < other`.
///
/// This is the only primitive the homogeneous ordering capabilities need;
/// `x > y` is derived as `y < x`.
pub trait LessThan<U: ?Sized = Self> {
    fn less_than(&self, other: &U) -> bool;
}

/// The strict relation `self > other`.
///
/// Only needed for heterogeneous pairs, where `T > U` cannot be spelled as
/// `U < T` without a second impl on the foreign type.
pub trait GreaterThan<U: ?Sized = Self> {
    fn greater_than(&self, other: &U) -> bool;
}

macro_rules! impl_order_for {
    ($($t:ty),* $(,)?) => {$(
        impl LessThan for $t {
            #[inline(always)]
            fn less_than(&self, other: &Self) -> bool { *self < *other }
        }
        impl GreaterThan for $t {
            #[inline(always)]
            fn greater_than(&self, other: &Self) -> bool { *self > *other }
        }
    )*};
}

impl_order_for! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, char, bool,
}
