//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Operators)]` | on struct/enum | Derive operators from `#[operators(...)]` |
//! | `operators!` | function macro | Same, for types declared elsewhere |

mod operators;

pub use operators::{OperatorsInput, expand_derive_operators, expand_operators};
