//! Procedural macros for tola-ops
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Operators)]` | struct/enum | Derive operators listed in `#[operators(...)]` |
//! | `operators! {}` | - | Same, for foreign declarations or explicit generics |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Copy, PartialEq, Operators)]
//! #[operators(totally_ordered, additive, multipliable(f64))]
//! struct Meters(f64);
//!
//! operators! {
//!     impl<'a, V: Clone> Cursor<'a, V>: forward_iterator_helper(value = V);
//! }
//! ```
//!
//! Both expand to calls of the hidden `__derive_*!` bridges in `tola_ops`,
//! one call per derived impl.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

/// Derive operators from primitives.
///
/// Capabilities are listed in one or more `#[operators(...)]` attributes:
///
/// ```ignore
/// #[derive(Clone, PartialEq, Operators)]
/// #[operators(totally_ordered, totally_ordered(i64))]
/// #[operators(ring_operators(i64), unit_steppable)]
/// struct Money(i64);
/// ```
///
/// Generics and where-clauses of the type are carried onto every impl.
#[proc_macro_derive(Operators, attributes(operators))]
pub fn derive_operators(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_operators(input).into()
}

/// Derive operators for types given by path.
///
/// ```ignore
/// operators! {
///     Money: totally_ordered, additive;
///     impl<T: Copy> Wrapper<T>: equality_comparable(T);
/// }
/// ```
#[proc_macro]
pub fn operators(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::OperatorsInput);
    user::expand_operators(input).into()
}
