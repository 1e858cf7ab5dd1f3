//! Concept bundles as blanket-implemented traits.
//!
//! A cursor satisfies a concept once it has the primitives and has adopted
//! the capabilities (usually through one `*_iterator_helper` derive).

use core::ops::Deref;

use crate::algebra::Additive;
use crate::primitives::{PreDecrement, PreIncrement};
use crate::unary::{Decrementable, Dereferenceable, Incrementable, Subscriptable};

/// Single-pass readable cursor: `==`, `++x`, `*x` and their derived forms.
pub trait InputIteratable: PartialEq + PreIncrement + Deref + Incrementable + Dereferenceable {}
impl<I> InputIteratable for I where I: PartialEq + PreIncrement + Deref + Incrementable + Dereferenceable {}

/// Write-only cursor: only stepping is meaningful.
pub trait OutputIteratable: PreIncrement + Incrementable {}
impl<I> OutputIteratable for I where I: PreIncrement + Incrementable {}

/// Multi-pass cursor. Same primitives as [`InputIteratable`].
pub trait ForwardIteratable: InputIteratable {}
impl<I: InputIteratable> ForwardIteratable for I {}

/// Cursor that can also step backwards.
pub trait BidirectionalIteratable: ForwardIteratable + PreDecrement + Decrementable {}
impl<I> BidirectionalIteratable for I where I: ForwardIteratable + PreDecrement + Decrementable {}

/// Cursor that can jump by a distance `D`, compare positions and index.
pub trait RandomAccessIteratable<D>:
    BidirectionalIteratable + PartialOrd + Additive<D> + Subscriptable<D>
{
}
impl<I, D> RandomAccessIteratable<D> for I where
    I: BidirectionalIteratable + PartialOrd + Additive<D> + Subscriptable<D>
{
}
