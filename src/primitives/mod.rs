//! # Layer 0: Primitives
//!
//! The canonical operations a host type supplies by hand. Everything else in
//! the crate is derived from these.
//!
//! Most primitives are standard traits:
//!
//! | Operation  | Primitive                                  |
//! |------------|--------------------------------------------|
//! | `x == y`   | [`PartialEq<U>`](core::cmp::PartialEq)     |
//! | `x op= y`  | `core::ops::{Add, Sub, ...}Assign<U>`      |
//! | `*x`       | [`Deref`](core::ops::Deref)                |
//! | `x + n`    | [`Add<I>`](core::ops::Add)                 |
//!
//! The rest have no operator in Rust and are defined here:
//! - `order.rs`: strict relations [`LessThan`] and [`GreaterThan`].
//! - `step.rs`: in-place stepping [`PreIncrement`] and [`PreDecrement`].

pub mod order;
pub mod step;

pub use order::{GreaterThan, LessThan};
pub use step::{PreDecrement, PreIncrement};
