// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: capability list parsing and type identity helpers

mod parse_utils;

pub use parse_utils::*;
