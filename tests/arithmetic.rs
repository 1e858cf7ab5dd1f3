//! Binary operators from compound assignment.

use core::ops::{AddAssign, DivAssign, MulAssign, RemAssign, ShlAssign, ShrAssign, SubAssign};
use tola_ops::{Operators, RightShiftable, Shiftable, operators};

#[derive(Debug, Clone, Copy, PartialEq, Operators)]
#[operators(additive, additive(i64), multipliable(i64), rsubtractable(i64))]
struct Cents(i64);

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cents {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl AddAssign<i64> for Cents {
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl SubAssign<i64> for Cents {
    fn sub_assign(&mut self, rhs: i64) {
        self.0 -= rhs;
    }
}

impl MulAssign<i64> for Cents {
    fn mul_assign(&mut self, rhs: i64) {
        self.0 *= rhs;
    }
}

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Cents(value)
    }
}

#[test]
fn test_forward_forms() {
    assert_eq!(Cents(10) + Cents(5), Cents(15));
    assert_eq!(Cents(10) - Cents(5), Cents(5));
    assert_eq!(Cents(10) + 5i64, Cents(15));
    assert_eq!(Cents(10) - 5i64, Cents(5));
    assert_eq!(Cents(10) * 3i64, Cents(30));
}

#[test]
fn test_commuted_forms() {
    assert_eq!(5i64 + Cents(10), Cents(15));
    assert_eq!(3i64 * Cents(10), Cents(30));
}

#[test]
fn test_reversed_subtraction() {
    // 100 - x, not x - 100.
    assert_eq!(100i64 - Cents(30), Cents(70));
    assert_eq!(Cents(30) - 100i64, Cents(-70));
}

#[test]
fn test_identity_element() {
    let zero = Cents(0);
    for a in [Cents(-3), Cents(0), Cents(42)] {
        assert_eq!(a + zero, a);
        assert_eq!(a - zero, a);
        assert_eq!(a + 0i64, a);
    }
}

#[test]
fn test_homogeneous_matches_heterogeneous() {
    for (x, y) in [(7i64, 2i64), (-4, 9)] {
        assert_eq!(Cents(x) + Cents(y), Cents(x) + y);
        assert_eq!(Cents(x) - Cents(y), Cents(x) - y);
    }
}

#[test]
fn test_operands_are_not_mutated() {
    let a = Cents(1);
    let b = a + Cents(2);
    assert_eq!(a, Cents(1));
    assert_eq!(b, Cents(3));
}

// ============================================================================
// Remaining families through operators!
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Word(u32);

impl DivAssign for Word {
    fn div_assign(&mut self, rhs: Self) {
        self.0 /= rhs.0;
    }
}

impl RemAssign for Word {
    fn rem_assign(&mut self, rhs: Self) {
        self.0 %= rhs.0;
    }
}

impl ShlAssign<u32> for Word {
    fn shl_assign(&mut self, rhs: u32) {
        self.0 <<= rhs;
    }
}

operators! {
    Word: dividable, modable, left_shiftable(u32);
}

#[test]
fn test_declared_by_path() {
    assert_eq!(Word(17) / Word(5), Word(3));
    assert_eq!(Word(17) % Word(5), Word(2));
    assert_eq!(Word(1) << 4u32, Word(16));
}

// ============================================================================
// Shifts and the remaining reversed families
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Operators)]
#[operators(shiftable, shiftable(u32), right_shiftable(u8), modable)]
#[operators(rmodable(u32), rleft_shiftable(u32), rright_shiftable(u32))]
struct Lane(u32);

impl ShlAssign for Lane {
    fn shl_assign(&mut self, rhs: Self) {
        self.0 <<= rhs.0;
    }
}

impl ShrAssign for Lane {
    fn shr_assign(&mut self, rhs: Self) {
        self.0 >>= rhs.0;
    }
}

impl ShlAssign<u32> for Lane {
    fn shl_assign(&mut self, rhs: u32) {
        self.0 <<= rhs;
    }
}

impl ShrAssign<u32> for Lane {
    fn shr_assign(&mut self, rhs: u32) {
        self.0 >>= rhs;
    }
}

impl ShrAssign<u8> for Lane {
    fn shr_assign(&mut self, rhs: u8) {
        self.0 >>= rhs;
    }
}

impl RemAssign for Lane {
    fn rem_assign(&mut self, rhs: Self) {
        self.0 %= rhs.0;
    }
}

impl From<u32> for Lane {
    fn from(value: u32) -> Self {
        Lane(value)
    }
}

#[test]
fn test_shift_forms() {
    fn shifts<T: Shiftable + Shiftable<u32> + RightShiftable<u8>>() {}
    shifts::<Lane>();

    assert_eq!(Lane(1) << Lane(3), Lane(8));
    assert_eq!(Lane(16) >> Lane(2), Lane(4));
    assert_eq!(Lane(1) << 4u32, Lane(16));
    assert_eq!(Lane(32) >> 5u32, Lane(1));
    assert_eq!(Lane(0x80) >> 7u8, Lane(1));
}

#[test]
fn test_reversed_remainder_and_shifts() {
    // u op Lane is Lane::from(u) op Lane.
    assert_eq!(17u32 % Lane(5), Lane(2));
    assert_eq!(Lane(17) % Lane(5), Lane(2));
    assert_eq!(5u32 % Lane(17), Lane(5));
    assert_eq!(1u32 << Lane(4), Lane(16));
    assert_eq!(256u32 >> Lane(4), Lane(16));
    assert_eq!(Lane(4) >> 1u32, Lane(2));
}

// ============================================================================
// Lazy preconditions
// ============================================================================

/// Adopts subtraction without `SubAssign`; only `+` is ever used.
#[derive(Debug, Clone, Copy, PartialEq, Operators)]
#[operators(additive)]
struct OnlyAdds(u8);

impl AddAssign for OnlyAdds {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[test]
fn test_missing_primitive_is_fine_until_used() {
    assert_eq!(OnlyAdds(2) + OnlyAdds(3), OnlyAdds(5));
}
