//! # Access / Unary Derivation
//!
//! Capabilities adopted with an empty impl; every derived method is a
//! default body whose preconditions sit on the method itself, so adopting a
//! capability compiles even before the primitive exists.
//!
//! ```ignore
//! impl Incrementable for Cursor {}          // adopt
//! let before = cursor.post_increment();     // needs PreIncrement + Clone here
//! ```

use core::ops::{Add, Deref};

use crate::primitives::{PreDecrement, PreIncrement};

/// Post-increment (`x++`) from pre-increment.
pub trait Incrementable {
    /// Copy before mutating, advance, return the copy.
    #[inline]
    fn post_increment(&mut self) -> Self
    where
        Self: PreIncrement + Clone,
    {
        let copy = self.clone();
        self.increment();
        copy
    }
}

/// Post-decrement (`x--`) from pre-decrement.
pub trait Decrementable {
    #[inline]
    fn post_decrement(&mut self) -> Self
    where
        Self: PreDecrement + Clone,
    {
        let copy = self.clone();
        self.decrement();
        copy
    }
}

/// Member access through a handle that dereferences to its target.
pub trait Dereferenceable {
    /// The dereferenced value, for reaching its members.
    #[inline]
    fn member(&self) -> &<Self as Deref>::Target
    where
        Self: Deref,
    {
        self.deref()
    }

    /// Address of the dereferenced value.
    #[inline]
    fn address(&self) -> *const <Self as Deref>::Target
    where
        Self: Deref,
    {
        core::ptr::from_ref(self.deref())
    }
}

/// Indexing as offset-then-dereference: `x.at(n)` is `*(x + n)`.
///
/// The cursor moved by `n` is a temporary, so the target is returned by
/// clone rather than by reference.
pub trait Subscriptable<I> {
    #[inline]
    fn at(&self, n: I) -> <Self as Deref>::Target
    where
        Self: Clone + Add<I, Output = Self> + Deref,
        <Self as Deref>::Target: Clone,
    {
        (*(self.clone() + n)).clone()
    }
}

/// Both stepping capabilities.
pub trait UnitSteppable: Incrementable + Decrementable {}
impl<T: Incrementable + Decrementable + ?Sized> UnitSteppable for T {}

// =============================================================================
// Bridge Macro
// =============================================================================

/// Internal bridge - DO NOT USE DIRECTLY.
/// Use `#[derive(Operators)]` or `operators!` instead.
///
/// ```text
/// __derive_unary!(<capability> [impl generics] [where predicates] T)
/// __derive_unary!(subscriptable [impl generics] [where predicates] T ; I)
/// ```
///
/// `self_proxy` is the output-iterator override: the write slot and
/// pre-increment both yield the iterator itself.
#[macro_export]
#[doc(hidden)]
macro_rules! __derive_unary {
    (incrementable [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* $crate::Incrementable for $T where $($w)* {}
    };
    (decrementable [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* $crate::Decrementable for $T where $($w)* {}
    };
    (dereferenceable [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* $crate::Dereferenceable for $T where $($w)* {}
    };
    (subscriptable [$($g:tt)*] [$($w:tt)*] $T:ty ; $I:ty) => {
        impl $($g)* $crate::Subscriptable<$I> for $T where $($w)* {}
    };
    (self_proxy [$($g:tt)*] [$($w:tt)*] $T:ty) => {
        impl $($g)* $crate::iterator::OutputProxy for $T where $($w)* {
            #[inline(always)]
            fn output(&mut self) -> &mut $T {
                self
            }
        }

        impl $($g)* $crate::PreIncrement for $T where $($w)* {
            #[inline(always)]
            fn increment(&mut self) -> &mut $T {
                self
            }
        }
    };
}
