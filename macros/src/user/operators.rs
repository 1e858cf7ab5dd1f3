//! `#[derive(Operators)]` and `operators! { ... }`
//!
//! Both front ends build a [`Target`] and a capability list, then hand them
//! to the resolver.

use proc_macro2::TokenStream as TokenStream2;
use syn::{
    DeriveInput, Generics, Token, Type,
    parse::{Parse, ParseStream},
    parse_quote,
};

use crate::common::{CapSpec, parse_cap_list_until_semi, parse_comma_separated};
use crate::inner::{Resolver, Target};

fn resolve(target: &Target, caps: &[CapSpec]) -> syn::Result<TokenStream2> {
    let mut resolver = Resolver::new(target);
    for cap in caps {
        resolver.request(cap);
    }
    resolver.finish()
}

// =============================================================================
// #[derive(Operators)]
// =============================================================================

pub fn expand_derive_operators(input: DeriveInput) -> TokenStream2 {
    derive(input).unwrap_or_else(|err| err.to_compile_error())
}

fn derive(input: DeriveInput) -> syn::Result<TokenStream2> {
    let mut caps = Vec::new();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("operators")) {
        caps.extend(attr.parse_args_with(parse_comma_separated::<CapSpec>)?);
    }
    if caps.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Operators)] needs at least one #[operators(...)] attribute",
        ));
    }

    let ident = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let ty: Type = parse_quote!(#ident #ty_generics);
    let target = Target { generics: input.generics.clone(), ty };
    resolve(&target, &caps)
}

// =============================================================================
// operators! { Type: caps; impl<G> Type<G>: caps; }
// =============================================================================

struct Declaration {
    target: Target,
    caps: Vec<CapSpec>,
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let generics = if input.peek(Token![impl]) {
            input.parse::<Token![impl]>()?;
            input.parse::<Generics>()?
        } else {
            Generics::default()
        };
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let caps = parse_cap_list_until_semi(input)?;
        Ok(Declaration { target: Target { generics, ty }, caps })
    }
}

pub struct OperatorsInput {
    declarations: Vec<Declaration>,
}

impl Parse for OperatorsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut declarations = Vec::new();
        while !input.is_empty() {
            declarations.push(input.parse()?);
            if input.is_empty() {
                break;
            }
            input.parse::<Token![;]>()?;
        }
        Ok(OperatorsInput { declarations })
    }
}

/// Each declaration is resolved on its own; errors from all of them are
/// reported together.
pub fn expand_operators(input: OperatorsInput) -> TokenStream2 {
    let mut output = TokenStream2::new();
    let mut errors: Option<syn::Error> = None;
    for declaration in &input.declarations {
        match resolve(&declaration.target, &declaration.caps) {
            Ok(tokens) => output.extend(tokens),
            Err(err) => match &mut errors {
                Some(all) => all.combine(err),
                None => errors = Some(err),
            },
        }
    }
    match errors {
        Some(err) => err.to_compile_error(),
        None => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_carries_generics() {
        let input: DeriveInput = parse_quote! {
            #[operators(additive, equality_comparable(i64))]
            #[operators(totally_ordered)]
            struct Wrap<T: Copy> where T: Default { inner: T }
        };
        let out = expand_derive_operators(input).to_string().replace(' ', "");
        assert!(out.contains("forwardAddadd[<T:Copy>][T:Default,]Wrap<T>;Wrap<T>"), "{out}");
        assert!(out.contains("equality_comparablereflected"));
        assert!(out.contains("less_than_comparablehomogeneous"));
    }

    #[test]
    fn test_derive_without_attribute_is_an_error() {
        let input: DeriveInput = parse_quote! { struct Bare; };
        let out = expand_derive_operators(input).to_string();
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn test_function_like_declarations() {
        let input: OperatorsInput = parse_quote! {
            Meters: additive, totally_ordered;
            impl<'a, V: Clone> Cursor<'a, V>: input_iterator_helper(value = V);
        };
        assert_eq!(input.declarations.len(), 2);
        assert_eq!(input.declarations[1].caps.len(), 1);

        let out = expand_operators(input).to_string().replace(' ', "");
        assert!(out.contains("[][]Meters"));
        assert!(out.contains("[<'a,V:Clone>][]Cursor<'a,V>"));
        assert!(!out.contains("compile_error"));
    }
}
