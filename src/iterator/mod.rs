//! # Iterator-Concept Bundles
//!
//! Capability sets matching the classic cursor categories, plus the
//! associated-type metadata generic traversal code reads.
//!
//! A *cursor* is a position into a sequence: compared with `==`, advanced
//! with [`PreIncrement`](crate::PreIncrement), read through
//! [`Deref`](core::ops::Deref). Pairs of cursors `[first, last)` become Rust
//! iterators with [`walk`].
//!
//! ```text
//! input          equality + incrementable + dereferenceable
//! output         incrementable
//! forward        input (multi-pass, no new primitives)
//! bidirectional  forward + decrementable
//! random access  bidirectional + less_than_comparable
//!                + additive(T, D) + subscriptable(T, D)
//! ```
//!
//! - `tags.rs`: category tags and their refinement markers.
//! - `concepts.rs`: the bundle traits.
//! - `traverse.rs`: `distance`, `advance`, `walk`.

pub mod concepts;
pub mod tags;
pub mod traverse;

pub use concepts::{
    BidirectionalIteratable, ForwardIteratable, InputIteratable, OutputIteratable,
    RandomAccessIteratable,
};
pub use tags::{
    BidirectionalCategory, BidirectionalTag, ForwardCategory, ForwardTag, InputCategory, InputTag,
    IteratorCategory, OutputTag, RandomAccessCategory, RandomAccessTag,
};
pub use traverse::{Advance, Measure, Walk, advance, distance, walk};

/// Associated-type metadata of a cursor.
///
/// Derived by the `*_iterator_helper` capabilities; the output helper sets
/// every type but the category to `()`.
pub trait IteratorTraits {
    type Category: IteratorCategory;
    type Value: ?Sized;
    type Distance;
    type Pointer;
    type Reference;
}

/// Write slot of an output cursor.
///
/// Derived by `output_iterator_helper`: the slot is the cursor itself, and
/// so is the result of pre-increment, so `*it++ = v` becomes
/// `it.increment().output()` followed by the cursor's own write method.
pub trait OutputProxy {
    fn output(&mut self) -> &mut Self;
}

/// Internal bridge - DO NOT USE DIRECTLY.
/// Use `#[derive(Operators)]` or `operators!` instead.
///
/// ```text
/// __derive_iterator_traits!([impl generics] [where predicates] T ; Category, Value, Distance, Pointer, Reference)
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __derive_iterator_traits {
    ([$($g:tt)*] [$($w:tt)*] $T:ty ; $C:ty, $V:ty, $D:ty, $P:ty, $R:ty) => {
        impl $($g)* $crate::iterator::IteratorTraits for $T where $($w)* {
            type Category = $C;
            type Value = $V;
            type Distance = $D;
            type Pointer = $P;
            type Reference = $R;
        }
    };
}
