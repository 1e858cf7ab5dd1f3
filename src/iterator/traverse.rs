//! Generic traversal over cursor pairs.
//!
//! `distance` and `advance` dispatch on the cursor's category tag: the
//! random-access tag jumps in one step, the others walk.

use core::ops::{AddAssign, Deref, Sub, SubAssign};

use super::IteratorTraits;
use super::tags::{BidirectionalTag, ForwardTag, InputTag, RandomAccessTag};
use crate::primitives::{PreDecrement, PreIncrement};

/// Counting strategy of a category.
pub trait Measure<I: IteratorTraits> {
    fn distance(first: &I, last: &I) -> I::Distance;
}

/// Moving strategy of a category.
pub trait Advance<I: IteratorTraits> {
    fn advance(it: &mut I, n: I::Distance);
}

/// Number of steps from `first` to `last`.
#[inline]
pub fn distance<I>(first: &I, last: &I) -> I::Distance
where
    I: IteratorTraits,
    I::Category: Measure<I>,
{
    <I::Category as Measure<I>>::distance(first, last)
}

/// Move `it` by `n` steps.
///
/// # Panics
///
/// Panics if `n` is negative and the category cannot step backwards.
#[inline]
pub fn advance<I>(it: &mut I, n: I::Distance)
where
    I: IteratorTraits,
    I::Category: Advance<I>,
{
    <I::Category as Advance<I>>::advance(it, n)
}

macro_rules! stepping {
    ($($tag:ty),*) => {$(
        impl<I> Measure<I> for $tag
        where
            I: IteratorTraits + PartialEq + PreIncrement + Clone,
            I::Distance: Default + AddAssign + From<u8>,
        {
            fn distance(first: &I, last: &I) -> I::Distance {
                let mut it = first.clone();
                let mut n = <I::Distance as Default>::default();
                while it != *last {
                    it.increment();
                    n += <I::Distance as From<u8>>::from(1);
                }
                n
            }
        }

        impl<I> Advance<I> for $tag
        where
            I: IteratorTraits + PreIncrement,
            I::Distance: Default + PartialOrd + SubAssign + From<u8>,
        {
            fn advance(it: &mut I, mut n: I::Distance) {
                let zero = <I::Distance as Default>::default();
                assert!(!(n < zero), "cannot move a forward-only cursor backwards");
                while n > zero {
                    it.increment();
                    n -= <I::Distance as From<u8>>::from(1);
                }
            }
        }
    )*};
}

stepping!(InputTag, ForwardTag);

impl<I> Measure<I> for BidirectionalTag
where
    I: IteratorTraits + PartialEq + PreIncrement + Clone,
    I::Distance: Default + AddAssign + From<u8>,
{
    fn distance(first: &I, last: &I) -> I::Distance {
        <ForwardTag as Measure<I>>::distance(first, last)
    }
}

impl<I> Advance<I> for BidirectionalTag
where
    I: IteratorTraits + PreIncrement + PreDecrement,
    I::Distance: Default + PartialOrd + AddAssign + SubAssign + From<u8>,
{
    fn advance(it: &mut I, mut n: I::Distance) {
        let zero = <I::Distance as Default>::default();
        while n > zero {
            it.increment();
            n -= <I::Distance as From<u8>>::from(1);
        }
        while n < zero {
            it.decrement();
            n += <I::Distance as From<u8>>::from(1);
        }
    }
}

impl<I> Measure<I> for RandomAccessTag
where
    I: IteratorTraits + Clone + Sub<Output = <I as IteratorTraits>::Distance>,
{
    #[inline]
    fn distance(first: &I, last: &I) -> I::Distance {
        last.clone() - first.clone()
    }
}

impl<I> Advance<I> for RandomAccessTag
where
    I: IteratorTraits + AddAssign<<I as IteratorTraits>::Distance>,
{
    #[inline]
    fn advance(it: &mut I, n: I::Distance) {
        *it += n;
    }
}

// =============================================================================
// Walk
// =============================================================================

/// Rust iterator over the half-open cursor range `[first, last)`.
///
/// Yields the dereferenced values by clone. Double-ended when the cursor can
/// step backwards.
#[derive(Debug, Clone)]
pub struct Walk<I> {
    front: I,
    back: I,
}

/// Walk the half-open range `[first, last)`.
#[inline]
pub fn walk<I>(first: I, last: I) -> Walk<I> {
    Walk { front: first, back: last }
}

impl<I> Iterator for Walk<I>
where
    I: PartialEq + PreIncrement + Deref,
    I::Target: Clone,
{
    type Item = I::Target;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = (*self.front).clone();
        self.front.increment();
        Some(item)
    }
}

impl<I> DoubleEndedIterator for Walk<I>
where
    I: PartialEq + PreIncrement + PreDecrement + Deref,
    I::Target: Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement();
        Some((*self.back).clone())
    }
}
