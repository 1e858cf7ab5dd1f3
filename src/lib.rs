#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default. Only toggles `#![no_std]`; every item here is core-only.

//! # tola-ops
//!
//! Operator derivation from a minimal set of primitives.
//!
//! **Write `<`, `==` and `+=`; get the rest.**
//!
//! ## Architecture
//!
//! A host type hand-writes a few canonical operations (the *primitives*) and
//! adopts *capabilities*. Each capability derives a fixed family of
//! operators from those primitives, as plain trait impls on the operand
//! types. Capabilities compose into bundles; bundles compose into algebraic
//! structures and iterator concepts.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - LessThan, GreaterThan, PreIncrement, PreDecrement              |
//! |  - std: PartialEq, XxxAssign, Deref, Add<I>                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Derivation bridges                                      |
//! |  - ordering (PartialOrd / PartialEq), arith (binary operators)    |
//! |  - unary (post-step, member access, subscript)                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Bundles                                                 |
//! |  - algebra (ring, field, euclidean ring, operators)               |
//! |  - iterator (concepts, metadata, distance / advance / walk)       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - #[derive(Operators)] + #[operators(...)], operators! { }       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Diamonds are merged by the front end: a capability reached through two
//! bundles is derived once.
//!
//! ## Quick Start
//!
//! ```
//! use core::ops::{AddAssign, SubAssign};
//! use tola_ops::{LessThan, Operators};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Operators)]
//! #[operators(totally_ordered, additive)]
//! struct Vec2 {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl LessThan for Vec2 {
//!     fn less_than(&self, other: &Self) -> bool {
//!         (self.x, self.y) < (other.x, other.y)
//!     }
//! }
//!
//! impl AddAssign for Vec2 {
//!     fn add_assign(&mut self, rhs: Self) {
//!         self.x += rhs.x;
//!         self.y += rhs.y;
//!     }
//! }
//!
//! impl SubAssign for Vec2 {
//!     fn sub_assign(&mut self, rhs: Self) {
//!         self.x -= rhs.x;
//!         self.y -= rhs.y;
//!     }
//! }
//!
//! let a = Vec2 { x: 1, y: 2 };
//! let b = Vec2 { x: 3, y: 4 };
//! let c = Vec2 { x: 2, y: 0 };
//! assert_eq!(a + b, Vec2 { x: 4, y: 6 });
//! assert!(a < c);
//! assert!(!(c <= a));
//! ```
//!
//! ## Diagnostics
//!
//! A missing primitive is reported where the derived operator is used:
//!
//! ```compile_fail
//! use tola_ops::Operators;
//!
//! #[derive(Clone, Copy, PartialEq, Operators)]
//! #[operators(subtractable)]
//! struct Meters(f64);
//!
//! // No `SubAssign` for `Meters`.
//! let _ = Meters(2.0) - Meters(1.0);
//! ```
//!
//! Two different derivations of one impl are rejected:
//!
//! ```compile_fail
//! use tola_ops::Operators;
//!
//! #[derive(PartialEq, Operators)]
//! #[operators(totally_ordered, partially_ordered)]
//! struct Score(i32);
//! ```
//!
//! Reversed capabilities need an operand distinct from the type itself:
//!
//! ```compile_fail
//! use tola_ops::Operators;
//!
//! #[derive(Clone, Operators)]
//! #[operators(rsubtractable(Score))]
//! struct Score(i32);
//! ```

// Allow `::tola_ops` to work inside the crate itself
extern crate self as tola_ops;

// Re-export paste for the __derive_binary! bridge
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Derivation bridges
// =============================================================================
pub mod arith;
pub mod ordering;
pub mod unary;

// =============================================================================
// Layer 2: Bundles
// =============================================================================
pub mod algebra;
pub mod iterator;

// =============================================================================
// Re-exports
// =============================================================================
pub use primitives::{GreaterThan, LessThan, PreDecrement, PreIncrement};
pub use ordering::{EqualityComparable, LessThanComparable, TotallyOrdered};
pub use arith::{
    Addable, Andable, Dividable, LeftShiftable, Modable, Multipliable, Orable, RightShiftable,
    Subtractable, Xorable,
};
pub use unary::{Decrementable, Dereferenceable, Incrementable, Subscriptable, UnitSteppable};
pub use algebra::{
    Additive, Arithmetic, Bitwise, EuclideanRingOperators, EuclidianRingOperators, FieldOperators,
    IntegerArithmetic, IntegerMultiplicative, Multiplicative, Operators, OrderedEuclideanRingOperators,
    OrderedEuclidianRingOperators, OrderedFieldOperators, OrderedRingOperators, RingOperators,
    Shiftable,
};
pub use iterator::{
    BidirectionalIteratable, ForwardIteratable, InputIteratable, IteratorTraits, OutputIteratable,
    OutputProxy, RandomAccessIteratable,
};

// Derive macro and trait share the name `Operators` (different namespaces).
pub use macros::{Operators, operators};

/// Primitives, capability traits and the derive.
pub mod prelude {
    pub use crate::primitives::{GreaterThan, LessThan, PreDecrement, PreIncrement};
    pub use crate::unary::{Decrementable, Dereferenceable, Incrementable, Subscriptable};
    pub use crate::iterator::{IteratorTraits, OutputProxy, advance, distance, walk};
    pub use macros::{Operators, operators};
}
