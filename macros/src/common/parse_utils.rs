//! Common parsing utilities
//!
//! Shared parsing helpers for the capability list syntax used by both
//! `#[operators(...)]` and `operators! { ... }`.

use proc_macro2::Span;
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Generics, Ident, Token, Type,
};

// =============================================================================
// Capability Spec: `name`, `name(Type)`, `name(key = Type, ...)`
// =============================================================================

/// One argument inside a capability's parentheses.
#[derive(Clone)]
pub enum CapArg {
    /// `i64`
    Positional(Type),
    /// `value = i64`
    Named(Ident, Type),
}

impl Parse for CapArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident) && input.peek2(Token![=]) {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            Ok(CapArg::Named(key, input.parse()?))
        } else {
            Ok(CapArg::Positional(input.parse()?))
        }
    }
}

/// A requested capability with its raw arguments.
#[derive(Clone)]
pub struct CapSpec {
    pub name: Ident,
    pub args: Vec<CapArg>,
}

impl CapSpec {
    pub fn span(&self) -> Span {
        self.name.span()
    }

    pub fn positional(&self) -> impl Iterator<Item = &Type> {
        self.args.iter().filter_map(|arg| match arg {
            CapArg::Positional(ty) => Some(ty),
            CapArg::Named(..) => None,
        })
    }

    pub fn named(&self) -> impl Iterator<Item = (&Ident, &Type)> {
        self.args.iter().filter_map(|arg| match arg {
            CapArg::Named(key, ty) => Some((key, ty)),
            CapArg::Positional(_) => None,
        })
    }
}

impl Parse for CapSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let args = if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            parse_comma_separated(&content)?
        } else {
            Vec::new()
        };
        Ok(CapSpec { name, args })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

/// Parse a comma-separated capability list that stops before a `;`.
pub fn parse_cap_list_until_semi(input: ParseStream) -> syn::Result<Vec<CapSpec>> {
    let mut caps = vec![input.parse::<CapSpec>()?];
    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        if input.is_empty() || input.peek(Token![;]) {
            break;
        }
        caps.push(input.parse()?);
    }
    Ok(caps)
}

// =============================================================================
// Type Identity
// =============================================================================

/// Whitespace-free token string of a type, used to decide whether two
/// operand types are the same.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

/// `Self` written as an operand.
pub fn is_self_type(ty: &Type) -> bool {
    type_key(ty) == "Self"
}

/// The impl's own type parameter, when `ty` is that parameter alone or
/// behind references.
///
/// Such an operand can't be the `Self` of a `core::ops` impl whose
/// parameter is the local type: `impl Add<W<T>> for T` is rejected by the
/// orphan rules (E0210).
pub fn uncovered_param<'g>(generics: &'g Generics, ty: &Type) -> Option<&'g Ident> {
    match ty {
        Type::Reference(r) => uncovered_param(generics, &r.elem),
        Type::Paren(p) => uncovered_param(generics, &p.elem),
        Type::Group(g) => uncovered_param(generics, &g.elem),
        Type::Path(p) if p.qself.is_none() => {
            let ident = p.path.get_ident()?;
            generics.type_params().map(|param| &param.ident).find(|param| *param == ident)
        }
        _ => None,
    }
}
