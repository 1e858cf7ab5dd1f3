//! Token emission: one bridge-macro call per derivation.
//!
//! Every call has the shape
//!
//! ```text
//! ::tola_ops::__derive_xxx!(<selectors> [impl generics] [where predicates,] T ; U)
//! ```
//!
//! and expands to exactly one impl in the user's crate.

use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;

use super::resolve::{Derivation, Direction, Form, Target};

fn ident(name: &str) -> Ident {
    Ident::new(name, Span::call_site())
}

/// `[impl generics] [where predicates,]` for the target.
fn generics_brackets(target: &Target) -> TokenStream2 {
    let (impl_generics, _, where_clause) = target.generics.split_for_impl();
    let predicates = where_clause.into_iter().flat_map(|w| w.predicates.iter());
    quote! { [#impl_generics] [#(#predicates,)*] }
}

fn form_ident(form: Form) -> Ident {
    ident(match form {
        Form::Homogeneous => "homogeneous",
        Form::Forward => "forward",
        Form::Reflected => "reflected",
    })
}

fn direction_ident(direction: Direction) -> Ident {
    ident(match direction {
        Direction::Forward => "forward",
        Direction::Commuted => "commuted",
        Direction::Reversed => "reversed",
    })
}

/// Bridge call for a single derivation.
pub fn derivation(target: &Target, derivation: &Derivation) -> TokenStream2 {
    let bounds = generics_brackets(target);
    let ty = &target.ty;

    match derivation {
        Derivation::Ordering { rule, form, operand } => {
            let arm = ident(rule.arm());
            let form_tokens = form_ident(*form);
            match form {
                Form::Homogeneous => quote! {
                    ::tola_ops::__derive_ordering!(#arm #form_tokens #bounds #ty);
                },
                Form::Forward | Form::Reflected => quote! {
                    ::tola_ops::__derive_ordering!(#arm #form_tokens #bounds #ty ; #operand);
                },
            }
        }
        Derivation::Binary { op, direction, operand } => {
            let dir = direction_ident(*direction);
            let op_trait = ident(op.trait_name);
            let method = ident(op.method);
            quote! {
                ::tola_ops::__derive_binary!(#dir #op_trait #method #bounds #ty ; #operand);
            }
        }
        Derivation::Unary { rule, index } => {
            let arm = ident(rule.arm());
            match index {
                Some(index) => quote! {
                    ::tola_ops::__derive_unary!(#arm #bounds #ty ; #index);
                },
                None => quote! {
                    ::tola_ops::__derive_unary!(#arm #bounds #ty);
                },
            }
        }
        Derivation::SelfProxy => quote! {
            ::tola_ops::__derive_unary!(self_proxy #bounds #ty);
        },
        Derivation::Metadata(meta) => {
            let tag = ident(meta.category.tag());
            let (value, distance, pointer, reference) =
                (&meta.value, &meta.distance, &meta.pointer, &meta.reference);
            quote! {
                ::tola_ops::__derive_iterator_traits!(
                    #bounds #ty ;
                    ::tola_ops::iterator::#tag, #value, #distance, #pointer, #reference
                );
            }
        }
    }
}
