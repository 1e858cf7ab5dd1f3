//! Capability resolution.
//!
//! Flattens requested capabilities into derivations (one derivation = one
//! impl), depth-first in declaration order:
//!
//! - identical derivations reached through several paths are kept once;
//! - two different derivations of the same impl are a conflict, reported
//!   at the later capability with both paths.
//!
//! All problems are collected and returned as one combined `syn::Error`.

use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::{Generics, Ident, Type, parse_quote};

use super::catalog::{
    self, Arity, BinaryOp, Category, Entry, Operand, OrderRule, Rule, Shape, UnaryRule, When,
};
use super::emit;
use crate::common::{CapSpec, is_self_type, type_key, uncovered_param};

// =============================================================================
// Model
// =============================================================================

/// The type receiving the derived impls, with its generics.
pub struct Target {
    pub generics: Generics,
    pub ty: Type,
}

/// Which side of an ordering pair the impl is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    /// `T` against `T`.
    Homogeneous,
    /// `impl Trait<U> for T`.
    Forward,
    /// `impl Trait<T> for U`.
    Reflected,
}

/// Which side of a binary operator the impl is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// `T op U` via `T op= U`.
    Forward,
    /// `U op T` via `T op= U` (commutative families only).
    Commuted,
    /// `U op T` via `T::from(U) op= T`.
    Reversed,
}

/// Associated types of an iterator helper.
pub struct Metadata {
    pub category: Category,
    pub value: Type,
    pub distance: Type,
    pub pointer: Type,
    pub reference: Type,
}

pub enum Derivation {
    Ordering { rule: OrderRule, form: Form, operand: Type },
    Binary { op: BinaryOp, direction: Direction, operand: Type },
    Unary { rule: UnaryRule, index: Option<Type> },
    SelfProxy,
    Metadata(Metadata),
}

impl Derivation {
    /// Identity of the impl this derivation produces: `Trait<Param> for Self`.
    pub fn key(&self, target: &Target) -> String {
        let t = type_key(&target.ty);
        match self {
            Derivation::Ordering { rule, form, operand } => {
                let trait_name = match rule {
                    OrderRule::LessThanComparable | OrderRule::PartiallyOrdered => "PartialOrd",
                    OrderRule::EqualityComparable | OrderRule::Equivalent => "PartialEq",
                };
                let u = type_key(operand);
                match form {
                    Form::Homogeneous => format!("{trait_name}<{t}> for {t}"),
                    Form::Forward => format!("{trait_name}<{u}> for {t}"),
                    Form::Reflected => format!("{trait_name}<{t}> for {u}"),
                }
            }
            Derivation::Binary { op, direction, operand } => {
                let u = type_key(operand);
                match direction {
                    Direction::Forward => format!("{}<{u}> for {t}", op.trait_name),
                    Direction::Commuted | Direction::Reversed => {
                        format!("{}<{t}> for {u}", op.trait_name)
                    }
                }
            }
            Derivation::Unary { rule, index: Some(index) } => {
                format!("{}<{}> for {t}", rule.trait_name(), type_key(index))
            }
            Derivation::Unary { rule, index: None } => format!("{} for {t}", rule.trait_name()),
            Derivation::SelfProxy => format!("OutputProxy for {t}"),
            Derivation::Metadata(_) => format!("IteratorTraits for {t}"),
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

struct Resolved {
    key: String,
    /// Emitted tokens; equal fingerprints mean identical derivations.
    fingerprint: String,
    path: String,
    tokens: TokenStream2,
}

pub struct Resolver<'a> {
    target: &'a Target,
    resolved: Vec<Resolved>,
    errors: Option<syn::Error>,
}

impl<'a> Resolver<'a> {
    pub fn new(target: &'a Target) -> Self {
        Resolver { target, resolved: Vec::new(), errors: None }
    }

    /// Resolve one capability as written by the user.
    pub fn request(&mut self, spec: &CapSpec) {
        let name = spec.name.to_string();
        let Some(entry) = catalog::lookup(&name) else {
            self.error(syn::Error::new(spec.span(), format!("unknown capability `{name}`")));
            return;
        };

        if let Shape::Helper(category) = entry.shape {
            self.helper(entry, category, spec);
            return;
        }

        match self.bind(entry, spec) {
            Ok(operand) => self.expand(entry, operand, &name, spec.span()),
            Err(err) => self.error(err),
        }
    }

    /// All derived impls, or every problem found.
    pub fn finish(self) -> syn::Result<TokenStream2> {
        match self.errors {
            Some(err) => Err(err),
            None => Ok(self.resolved.into_iter().map(|r| r.tokens).collect()),
        }
    }

    fn error(&mut self, err: syn::Error) {
        match &mut self.errors {
            Some(all) => all.combine(err),
            None => self.errors = Some(err),
        }
    }

    fn primary(&self) -> Type {
        self.target.ty.clone()
    }

    fn is_homogeneous(&self, operand: &Type) -> bool {
        is_self_type(operand) || type_key(operand) == type_key(&self.target.ty)
    }

    /// Check the arguments against the capability's arity and pick the operand.
    fn bind(&self, entry: &Entry, spec: &CapSpec) -> syn::Result<Type> {
        let name = entry.name;
        if let Some((key, _)) = spec.named().next() {
            return Err(syn::Error::new(
                key.span(),
                format!("`{name}` takes no `key = Type` arguments"),
            ));
        }
        let mut positional = spec.positional();
        let first = positional.next().cloned();
        if let Some(extra) = positional.next() {
            return Err(syn::Error::new_spanned(extra, format!("`{name}` takes at most one operand")));
        }

        match (entry.arity, first) {
            (Arity::None, None) => Ok(self.primary()),
            (Arity::None, Some(ty)) => Err(syn::Error::new_spanned(
                ty,
                format!("`{name}` takes no operand"),
            )),
            (Arity::Optional, operand) => Ok(self.normalize(operand)),
            (Arity::Required | Arity::Distinct, None) => Err(syn::Error::new(
                spec.span(),
                format!("`{name}` requires an operand type, e.g. `{name}(i64)`"),
            )),
            (Arity::Required, Some(ty)) => Ok(self.normalize(Some(ty))),
            (Arity::Distinct, Some(ty)) if self.is_homogeneous(&ty) => Err(syn::Error::new_spanned(
                ty,
                format!(
                    "`{name}` needs an operand type distinct from `{}`",
                    type_key(&self.target.ty)
                ),
            )),
            (Arity::Distinct, Some(ty)) => match uncovered_param(&self.target.generics, &ty) {
                Some(param) => Err(syn::Error::new_spanned(
                    ty,
                    format!(
                        "`{name}` cannot take the type parameter `{param}` as operand: \
                         it would implement an operator for `{param}` itself, \
                         which the orphan rules forbid"
                    ),
                )),
                None => Ok(ty),
            },
            (Arity::Keywords, _) => Ok(self.primary()),
        }
    }

    /// `Self` and omitted operands both mean the primary type.
    fn normalize(&self, operand: Option<Type>) -> Type {
        match operand {
            Some(ty) if !is_self_type(&ty) => ty,
            _ => self.primary(),
        }
    }

    fn expand(&mut self, entry: &Entry, operand: Type, path: &str, span: Span) {
        match entry.shape {
            Shape::Leaf(rule) => self.leaf(rule, operand, path, span),
            Shape::Bundle(parts) => {
                let homogeneous = self.is_homogeneous(&operand);
                for part in parts {
                    let applies = match part.when {
                        When::Always => true,
                        When::Homogeneous => homogeneous,
                        When::Heterogeneous => !homogeneous,
                    };
                    if !applies {
                        continue;
                    }
                    let Some(child) = catalog::lookup(part.name) else {
                        self.error(syn::Error::new(span, format!("unknown capability `{}`", part.name)));
                        continue;
                    };
                    let child_operand = match part.operand {
                        Operand::Inherit => operand.clone(),
                        Operand::Primary => self.primary(),
                    };
                    let child_path = format!("{path} > {}", part.name);
                    self.expand(child, child_operand, &child_path, span);
                }
            }
            Shape::Helper(_) => {
                self.error(syn::Error::new(span, format!("`{}` cannot be nested", entry.name)));
            }
        }
    }

    fn leaf(&mut self, rule: Rule, operand: Type, path: &str, span: Span) {
        let homogeneous = self.is_homogeneous(&operand);
        // A type parameter operand only gets the `T op U` side.
        let foreign_side = uncovered_param(&self.target.generics, &operand).is_none();
        match rule {
            Rule::Order(rule) if homogeneous => {
                // `!=` on a single type is PartialEq's default `ne`.
                if rule != OrderRule::EqualityComparable {
                    let operand = self.primary();
                    self.push(Derivation::Ordering { rule, form: Form::Homogeneous, operand }, path, span);
                }
            }
            Rule::Order(rule) => {
                let forms: &[Form] = match rule {
                    OrderRule::LessThanComparable | OrderRule::PartiallyOrdered => {
                        &[Form::Forward, Form::Reflected]
                    }
                    OrderRule::EqualityComparable => &[Form::Reflected],
                    OrderRule::Equivalent => &[Form::Forward],
                };
                for &form in forms {
                    if form == Form::Reflected && !foreign_side {
                        continue;
                    }
                    let operand = operand.clone();
                    self.push(Derivation::Ordering { rule, form, operand }, path, span);
                }
            }
            Rule::Binary { op, commutative } => {
                let operand = if homogeneous { self.primary() } else { operand };
                if commutative && !homogeneous && foreign_side {
                    let commuted = operand.clone();
                    self.push(
                        Derivation::Binary { op, direction: Direction::Forward, operand },
                        path,
                        span,
                    );
                    self.push(
                        Derivation::Binary { op, direction: Direction::Commuted, operand: commuted },
                        path,
                        span,
                    );
                } else {
                    self.push(Derivation::Binary { op, direction: Direction::Forward, operand }, path, span);
                }
            }
            Rule::Reversed(_) if !foreign_side => {}
            Rule::Reversed(op) => {
                self.push(Derivation::Binary { op, direction: Direction::Reversed, operand }, path, span);
            }
            Rule::Unary(rule) => {
                let index = (rule == UnaryRule::Subscriptable).then_some(operand);
                self.push(Derivation::Unary { rule, index }, path, span);
            }
        }
    }

    fn helper(&mut self, entry: &Entry, category: Category, spec: &CapSpec) {
        let name = entry.name;
        let path = spec.name.to_string();
        let span = spec.span();

        if let Some(ty) = spec.positional().next() {
            self.error(syn::Error::new_spanned(
                ty,
                format!("`{name}` takes `key = Type` arguments, e.g. `{name}(value = u8)`"),
            ));
            return;
        }

        let metadata = if category == Category::Output {
            if let Some((key, _)) = spec.named().next() {
                self.error(syn::Error::new(key.span(), format!("`{name}` takes no arguments")));
                return;
            }
            let unit: Type = parse_quote!(());
            Metadata {
                category,
                value: unit.clone(),
                distance: unit.clone(),
                pointer: unit.clone(),
                reference: unit,
            }
        } else {
            match helper_metadata(name, category, spec) {
                Ok(metadata) => metadata,
                Err(err) => {
                    self.error(err);
                    return;
                }
            }
        };

        let concept_operand = match category {
            Category::RandomAccess => metadata.distance.clone(),
            _ => self.primary(),
        };
        match catalog::lookup(category.concept()) {
            Some(concept) => {
                let concept_path = format!("{path} > {}", concept.name);
                self.expand(concept, concept_operand, &concept_path, span);
            }
            None => self.error(syn::Error::new(span, format!("unknown capability `{}`", category.concept()))),
        }
        if category == Category::Output {
            self.push(Derivation::SelfProxy, &path, span);
        }
        self.push(Derivation::Metadata(metadata), &path, span);
    }

    fn push(&mut self, derivation: Derivation, path: &str, span: Span) {
        let key = derivation.key(self.target);
        let tokens = emit::derivation(self.target, &derivation);
        let fingerprint = tokens.to_string();

        if let Some(existing) = self.resolved.iter().find(|r| r.key == key) {
            if existing.fingerprint != fingerprint {
                let message = format!(
                    "conflicting derivations of `{key}`: `{}` and `{path}`",
                    existing.path
                );
                self.error(syn::Error::new(span, message));
            }
            return;
        }
        self.resolved.push(Resolved { key, fingerprint, path: path.to_string(), tokens });
    }
}

const HELPER_KEYS: [&str; 4] = ["value", "distance", "pointer", "reference"];

/// Read `value`, `distance`, `pointer`, `reference`, filling the defaults.
fn helper_metadata(name: &str, category: Category, spec: &CapSpec) -> syn::Result<Metadata> {
    let mut slots: [Option<Type>; 4] = Default::default();
    for (key, ty) in spec.named() {
        let Some(index) = HELPER_KEYS.iter().position(|k| key == k) else {
            return Err(unknown_key(key));
        };
        if slots[index].is_some() {
            return Err(syn::Error::new(key.span(), format!("duplicate key `{key}`")));
        }
        slots[index] = Some(ty.clone());
    }

    let [value, distance, pointer, reference] = slots;
    let Some(value) = value else {
        return Err(syn::Error::new(
            spec.span(),
            format!("`{name}` requires `value = Type`"),
        ));
    };
    Ok(Metadata {
        category,
        distance: distance.unwrap_or_else(|| parse_quote!(isize)),
        pointer: pointer.unwrap_or_else(|| parse_quote!(*const #value)),
        reference: reference.unwrap_or_else(|| value.clone()),
        value,
    })
}

fn unknown_key(key: &Ident) -> syn::Error {
    syn::Error::new(
        key.span(),
        format!(
            "unknown key `{key}`, expected one of {}",
            HELPER_KEYS.map(|k| format!("`{k}`")).join(", ")
        ),
    )
}
