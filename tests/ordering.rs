//! Ordering derivation through `#[derive(Operators)]`.
//!
//! 1. Single-relation properties (homogeneous)
//! 2. Equivalence from `<` alone
//! 3. Heterogeneous pairs and their reflected forms
//! 4. Partial orders with incomparable values
//! 5. Heterogeneous partial orders and equivalence
//! 6. Cross-type path instantiated with U = T

use core::cmp::Ordering;
use tola_ops::{GreaterThan, LessThan, Operators};

// ============================================================================
// PART 1: SINGLE RELATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Operators)]
#[operators(less_than_comparable)]
struct Rank(u32);

impl LessThan for Rank {
    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

#[test]
fn test_single_relation_properties() {
    let (a, b) = (Rank(1), Rank(2));
    assert!(a < b);
    assert!(!(a > b));
    assert!(a <= b);
    assert!(!(a >= b));
    assert!(b > a);
    assert!(!(b < a));
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
    assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
    assert!(a <= a && a >= a);
}

#[test]
fn test_comparison_operators_feed_std_algorithms() {
    let mut ranks = vec![Rank(3), Rank(1), Rank(2)];
    ranks.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    assert_eq!(ranks, [Rank(1), Rank(2), Rank(3)]);
}

// ============================================================================
// PART 2: EQUIVALENCE
// ============================================================================

/// Compares by length only, so equivalence is coarser than field equality.
#[derive(Debug, Clone, Copy, Operators)]
#[operators(equivalent, less_than_comparable)]
struct ByLen(&'static str);

impl LessThan for ByLen {
    fn less_than(&self, other: &Self) -> bool {
        self.0.len() < other.0.len()
    }
}

#[test]
fn test_equivalence_from_strict_relation() {
    let (a, b, c) = (ByLen("ab"), ByLen("cd"), ByLen("xyz"));
    assert!(!(a < b) && !(b < a));
    assert!(a == b);
    assert!(a < c);
    assert!(a != c);
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
}

// ============================================================================
// PART 3: HETEROGENEOUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Operators)]
#[operators(totally_ordered, totally_ordered(i64))]
struct Money(i64);

impl LessThan for Money {
    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl LessThan<i64> for Money {
    fn less_than(&self, other: &i64) -> bool {
        self.0 < *other
    }
}

impl GreaterThan<i64> for Money {
    fn greater_than(&self, other: &i64) -> bool {
        self.0 > *other
    }
}

impl PartialEq<i64> for Money {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

#[test]
fn test_forward_heterogeneous() {
    let m = Money(5);
    assert!(m < 7i64);
    assert!(m > 3i64);
    assert!(m <= 5i64 && m >= 5i64);
    assert!(m == 5i64);
    assert!(m != 6i64);
}

#[test]
fn test_reflected_heterogeneous() {
    let m = Money(5);
    assert!(3i64 < m);
    assert!(7i64 > m);
    assert!(5i64 <= m && 5i64 >= m);
    assert!(5i64 == m);
    assert!(6i64 != m);
    assert_eq!(9i64.partial_cmp(&m), Some(Ordering::Greater));
}

#[test]
fn test_heterogeneous_matches_homogeneous() {
    for (x, y) in [(1i64, 2i64), (2, 2), (3, 2)] {
        let (a, b) = (Money(x), Money(y));
        assert_eq!(a < b, a < y);
        assert_eq!(a <= b, a <= y);
        assert_eq!(a > b, a > y);
        assert_eq!(a >= b, a >= y);
        assert_eq!(a.partial_cmp(&b), a.partial_cmp(&y));
    }
}

// ============================================================================
// PART 4: PARTIAL ORDER
// ============================================================================

/// Subset order on bit sets.
#[derive(Debug, Clone, Copy, PartialEq, Operators)]
#[operators(partially_ordered)]
struct Bits(u8);

impl LessThan for Bits {
    fn less_than(&self, other: &Self) -> bool {
        self.0 != other.0 && self.0 & other.0 == self.0
    }
}

#[test]
fn test_partial_order_incomparable() {
    let (a, b) = (Bits(0b01), Bits(0b10));
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));

    let whole = Bits(0b11);
    assert!(a < whole);
    assert!(a <= whole);
    assert!(whole >= b);
    assert!(a <= a);
    assert_eq!(whole.partial_cmp(&whole), Some(Ordering::Equal));
}

// ============================================================================
// PART 5: HETEROGENEOUS PARTIAL ORDER AND EQUIVALENCE
// ============================================================================

/// Subset order between a mask and raw bits.
#[derive(Debug, Clone, Copy, Operators)]
#[operators(partially_ordered(u8), equality_comparable(u8))]
struct Mask(u8);

impl LessThan<u8> for Mask {
    fn less_than(&self, other: &u8) -> bool {
        self.0 != *other && self.0 & *other == self.0
    }
}

impl GreaterThan<u8> for Mask {
    fn greater_than(&self, other: &u8) -> bool {
        self.0 != *other && self.0 & *other == *other
    }
}

impl PartialEq<u8> for Mask {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

#[test]
fn test_heterogeneous_partial_order_forward() {
    let m = Mask(0b01);
    assert!(m < 0b11u8);
    assert!(m <= 0b11u8);
    assert!(m <= 0b01u8 && m >= 0b01u8);
    assert!(m > 0b00u8);
    assert_eq!(m.partial_cmp(&0b01u8), Some(Ordering::Equal));
    assert_eq!(m.partial_cmp(&0b10u8), None);
    assert!(!(m < 0b10u8) && !(m > 0b10u8) && !(m <= 0b10u8) && !(m >= 0b10u8));
}

#[test]
fn test_heterogeneous_partial_order_reflected() {
    let m = Mask(0b01);
    assert!(0b11u8 > m);
    assert!(0b11u8 >= m);
    assert!(0b00u8 < m);
    assert!(0b01u8 <= m && 0b01u8 >= m);
    assert!(0b01u8 == m);
    assert_eq!(0b11u8.partial_cmp(&m), Some(Ordering::Greater));
    assert_eq!(0b10u8.partial_cmp(&m), None);
    assert!(!(0b10u8 < m) && !(0b10u8 > m) && !(0b10u8 <= m) && !(0b10u8 >= m));
}

/// A decade compared against a year: equivalent when the year falls inside.
#[derive(Debug, Clone, Copy, Operators)]
#[operators(equivalent(u32))]
struct Decade(u32);

impl LessThan<u32> for Decade {
    fn less_than(&self, year: &u32) -> bool {
        self.0 < year / 10
    }
}

impl GreaterThan<u32> for Decade {
    fn greater_than(&self, year: &u32) -> bool {
        self.0 > year / 10
    }
}

#[test]
fn test_heterogeneous_equivalence() {
    let nineties = Decade(199);
    assert!(nineties == 1990u32);
    assert!(nineties == 1999u32);
    assert!(nineties != 2000u32);
    assert!(nineties != 1989u32);
}

// ============================================================================
// PART 6: CROSS-TYPE PATH WITH U = T
// ============================================================================

/// Same relation as `Rank`, but its `PartialOrd` comes from the
/// heterogeneous arm applied to itself.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Mirror(u32);

impl LessThan for Mirror {
    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl GreaterThan for Mirror {
    fn greater_than(&self, other: &Self) -> bool {
        self.0 > other.0
    }
}

tola_ops::__derive_ordering!(less_than_comparable forward [] [] Mirror ; Mirror);

#[test]
fn test_cross_type_path_matches_homogeneous_path() {
    for (x, y) in [(1u32, 2u32), (2, 2), (3, 2)] {
        let (a, b) = (Rank(x), Rank(y));
        let (p, q) = (Mirror(x), Mirror(y));
        assert_eq!(a < b, p < q);
        assert_eq!(a <= b, p <= q);
        assert_eq!(a > b, p > q);
        assert_eq!(a >= b, p >= q);
        assert_eq!(a.partial_cmp(&b), p.partial_cmp(&q));
    }
}
