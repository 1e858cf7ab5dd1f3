//! Derivation engine behind the front-end macros.
//!
//! - `catalog`: every capability, its arguments and its parts.
//! - `resolve`: flattening, merging and conflict detection.
//! - `emit`: bridge-macro calls for resolved derivations.

pub mod catalog;
pub mod emit;
pub mod resolve;

pub use resolve::{Resolver, Target};
