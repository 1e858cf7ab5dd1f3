//! Capability catalog.
//!
//! Every capability name the front end accepts, what it requires of its
//! operand, and what it is made of. Leaves name a derivation rule; bundles
//! list their parts; helpers pair an iterator concept with metadata.
//!
//! ```text
//! ordered_ring_operators
//! ├── ring_operators
//! │   ├── additive ── addable, subtractable
//! │   ├── rsubtractable          (heterogeneous only)
//! │   └── multipliable
//! └── totally_ordered ── less_than_comparable, equality_comparable
//! ```

/// An operator family: `core::ops` trait and method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryOp {
    pub trait_name: &'static str,
    pub method: &'static str,
}

const fn op(trait_name: &'static str, method: &'static str) -> BinaryOp {
    BinaryOp { trait_name, method }
}

pub const ADD: BinaryOp = op("Add", "add");
pub const SUB: BinaryOp = op("Sub", "sub");
pub const MUL: BinaryOp = op("Mul", "mul");
pub const DIV: BinaryOp = op("Div", "div");
pub const REM: BinaryOp = op("Rem", "rem");
pub const XOR: BinaryOp = op("BitXor", "bitxor");
pub const AND: BinaryOp = op("BitAnd", "bitand");
pub const OR: BinaryOp = op("BitOr", "bitor");
pub const SHL: BinaryOp = op("Shl", "shl");
pub const SHR: BinaryOp = op("Shr", "shr");

/// Ordering rules, named after the bridge macro arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderRule {
    LessThanComparable,
    EqualityComparable,
    Equivalent,
    PartiallyOrdered,
}

impl OrderRule {
    pub fn arm(self) -> &'static str {
        match self {
            OrderRule::LessThanComparable => "less_than_comparable",
            OrderRule::EqualityComparable => "equality_comparable",
            OrderRule::Equivalent => "equivalent",
            OrderRule::PartiallyOrdered => "partially_ordered",
        }
    }
}

/// Unary / access rules, named after the bridge macro arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryRule {
    Incrementable,
    Decrementable,
    Dereferenceable,
    Subscriptable,
}

impl UnaryRule {
    pub fn arm(self) -> &'static str {
        match self {
            UnaryRule::Incrementable => "incrementable",
            UnaryRule::Decrementable => "decrementable",
            UnaryRule::Dereferenceable => "dereferenceable",
            UnaryRule::Subscriptable => "subscriptable",
        }
    }

    /// Name of the capability trait the rule adopts.
    pub fn trait_name(self) -> &'static str {
        match self {
            UnaryRule::Incrementable => "Incrementable",
            UnaryRule::Decrementable => "Decrementable",
            UnaryRule::Dereferenceable => "Dereferenceable",
            UnaryRule::Subscriptable => "Subscriptable",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Order(OrderRule),
    Binary { op: BinaryOp, commutative: bool },
    Reversed(BinaryOp),
    Unary(UnaryRule),
}

/// Iterator categories, mapped to the tag types in `tola_ops::iterator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Input,
    Output,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Category {
    pub fn tag(self) -> &'static str {
        match self {
            Category::Input => "InputTag",
            Category::Output => "OutputTag",
            Category::Forward => "ForwardTag",
            Category::Bidirectional => "BidirectionalTag",
            Category::RandomAccess => "RandomAccessTag",
        }
    }

    /// The concept bundle the helper composes with the metadata.
    pub fn concept(self) -> &'static str {
        match self {
            Category::Input => "input_iteratable",
            Category::Output => "output_iteratable",
            Category::Forward => "forward_iteratable",
            Category::Bidirectional => "bidirectional_iteratable",
            Category::RandomAccess => "random_access_iteratable",
        }
    }
}

/// Which operand a bundle passes to one of its parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The bundle's own `(T, U)`.
    Inherit,
    /// `(T, T)`.
    Primary,
}

/// When a part applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum When {
    Always,
    Homogeneous,
    Heterogeneous,
}

#[derive(Clone, Copy, Debug)]
pub struct Part {
    pub name: &'static str,
    pub operand: Operand,
    pub when: When,
}

// Struct literals keep the nested part lists promotable to `'static`.
macro_rules! part {
    ($name:literal) => {
        Part { name: $name, operand: Operand::Inherit, when: When::Always }
    };
    ($name:literal, $operand:ident, $when:ident) => {
        Part { name: $name, operand: Operand::$operand, when: When::$when }
    };
}

/// What a capability accepts inside its parentheses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// No arguments.
    None,
    /// An optional operand type, defaulting to the primary type.
    Optional,
    /// A mandatory type (index or distance).
    Required,
    /// A mandatory operand type distinct from the primary type.
    Distinct,
    /// `key = Type` arguments.
    Keywords,
}

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Leaf(Rule),
    Bundle(&'static [Part]),
    Helper(Category),
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub shape: Shape,
}

const fn leaf(name: &'static str, arity: Arity, rule: Rule) -> Entry {
    Entry { name, aliases: &[], arity, shape: Shape::Leaf(rule) }
}

const fn bundle(name: &'static str, arity: Arity, parts: &'static [Part]) -> Entry {
    Entry { name, aliases: &[], arity, shape: Shape::Bundle(parts) }
}

const fn helper(name: &'static str, alias: &'static [&'static str], category: Category) -> Entry {
    Entry { name, aliases: alias, arity: Arity::Keywords, shape: Shape::Helper(category) }
}

const fn binary(name: &'static str, op: BinaryOp, commutative: bool) -> Entry {
    leaf(name, Arity::Optional, Rule::Binary { op, commutative })
}

const fn reversed(name: &'static str, op: BinaryOp) -> Entry {
    leaf(name, Arity::Distinct, Rule::Reversed(op))
}

pub static CATALOG: &[Entry] = &[
    // ---- Tier 0: ordering ---------------------------------------------------
    leaf("less_than_comparable", Arity::Optional, Rule::Order(OrderRule::LessThanComparable)),
    leaf("equality_comparable", Arity::Optional, Rule::Order(OrderRule::EqualityComparable)),
    leaf("equivalent", Arity::Optional, Rule::Order(OrderRule::Equivalent)),
    leaf("partially_ordered", Arity::Optional, Rule::Order(OrderRule::PartiallyOrdered)),
    // ---- Tier 0: arithmetic -------------------------------------------------
    binary("addable", ADD, true),
    binary("subtractable", SUB, false),
    binary("multipliable", MUL, true),
    binary("dividable", DIV, false),
    binary("modable", REM, false),
    binary("xorable", XOR, true),
    binary("andable", AND, true),
    binary("orable", OR, true),
    binary("left_shiftable", SHL, false),
    binary("right_shiftable", SHR, false),
    reversed("rsubtractable", SUB),
    reversed("rdividable", DIV),
    reversed("rmodable", REM),
    reversed("rleft_shiftable", SHL),
    reversed("rright_shiftable", SHR),
    // ---- Tier 0: access / unary ---------------------------------------------
    leaf("incrementable", Arity::None, Rule::Unary(UnaryRule::Incrementable)),
    leaf("decrementable", Arity::None, Rule::Unary(UnaryRule::Decrementable)),
    leaf("dereferenceable", Arity::None, Rule::Unary(UnaryRule::Dereferenceable)),
    leaf("subscriptable", Arity::Required, Rule::Unary(UnaryRule::Subscriptable)),
    // ---- Tier 1 ---------------------------------------------------------------
    bundle("totally_ordered", Arity::Optional, &[part!("less_than_comparable"), part!("equality_comparable")]),
    bundle("additive", Arity::Optional, &[part!("addable"), part!("subtractable")]),
    bundle("multiplicative", Arity::Optional, &[part!("multipliable"), part!("dividable")]),
    bundle("integer_multiplicative", Arity::Optional, &[part!("multiplicative"), part!("modable")]),
    bundle("arithmetic", Arity::Optional, &[part!("additive"), part!("multiplicative")]),
    bundle("integer_arithmetic", Arity::Optional, &[part!("additive"), part!("integer_multiplicative")]),
    bundle("bitwise", Arity::Optional, &[part!("xorable"), part!("andable"), part!("orable")]),
    bundle("shiftable", Arity::Optional, &[part!("left_shiftable"), part!("right_shiftable")]),
    bundle("unit_steppable", Arity::None, &[part!("incrementable"), part!("decrementable")]),
    // ---- Tier 2 ---------------------------------------------------------------
    bundle(
        "ring_operators",
        Arity::Optional,
        &[part!("additive"), part!("rsubtractable", Inherit, Heterogeneous), part!("multipliable")],
    ),
    bundle(
        "ordered_ring_operators",
        Arity::Optional,
        &[part!("ring_operators"), part!("totally_ordered")],
    ),
    bundle(
        "field_operators",
        Arity::Optional,
        &[part!("ring_operators"), part!("dividable"), part!("rdividable", Inherit, Heterogeneous)],
    ),
    bundle(
        "ordered_field_operators",
        Arity::Optional,
        &[part!("field_operators"), part!("totally_ordered")],
    ),
    Entry {
        name: "euclidean_ring_operators",
        aliases: &["euclidian_ring_operators"],
        arity: Arity::Optional,
        shape: Shape::Bundle(&[
            part!("ring_operators"),
            part!("dividable"),
            part!("rdividable", Inherit, Heterogeneous),
            part!("modable"),
            part!("rmodable", Inherit, Heterogeneous),
        ]),
    },
    Entry {
        name: "ordered_euclidean_ring_operators",
        aliases: &["ordered_euclidian_ring_operators"],
        arity: Arity::Optional,
        shape: Shape::Bundle(&[part!("totally_ordered"), part!("euclidean_ring_operators")]),
    },
    bundle(
        "operators",
        Arity::Optional,
        &[
            part!("totally_ordered"),
            part!("integer_arithmetic"),
            part!("bitwise"),
            part!("unit_steppable", Primary, Homogeneous),
        ],
    ),
    // ---- Tier 3: iterator concepts ----------------------------------------------
    bundle(
        "input_iteratable",
        Arity::None,
        &[part!("equality_comparable", Primary, Always), part!("incrementable"), part!("dereferenceable")],
    ),
    bundle("output_iteratable", Arity::None, &[part!("incrementable")]),
    bundle("forward_iteratable", Arity::None, &[part!("input_iteratable")]),
    bundle(
        "bidirectional_iteratable",
        Arity::None,
        &[part!("forward_iteratable"), part!("decrementable")],
    ),
    // Equality already arrives through input_iteratable.
    bundle(
        "random_access_iteratable",
        Arity::Required,
        &[
            part!("bidirectional_iteratable", Primary, Always),
            part!("less_than_comparable", Primary, Always),
            part!("additive"),
            part!("subscriptable"),
        ],
    ),
    helper("input_iterator_helper", &["input_iterator"], Category::Input),
    helper("output_iterator_helper", &["output_iterator"], Category::Output),
    helper("forward_iterator_helper", &["forward_iterator"], Category::Forward),
    helper("bidirectional_iterator_helper", &["bidirectional_iterator"], Category::Bidirectional),
    helper("random_access_iterator_helper", &["random_access_iterator"], Category::RandomAccess),
];

/// Find a capability by name or alias.
pub fn lookup(name: &str) -> Option<&'static Entry> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name || entry.aliases.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_part_is_cataloged() {
        for entry in CATALOG {
            if let Shape::Bundle(parts) = entry.shape {
                for p in parts {
                    assert!(lookup(p.name).is_some(), "{} references unknown {}", entry.name, p.name);
                }
            }
            if let Shape::Helper(category) = entry.shape {
                assert!(lookup(category.concept()).is_some());
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut all: Vec<&str> = CATALOG
            .iter()
            .flat_map(|e| core::iter::once(e.name).chain(e.aliases.iter().copied()))
            .collect();
        let len = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), len);
    }

    #[test]
    fn test_euclidean_spellings_share_one_entry() {
        let a = lookup("euclidean_ring_operators").map(|e| e.name);
        let b = lookup("euclidian_ring_operators").map(|e| e.name);
        assert_eq!(a, b);
        assert_eq!(
            lookup("ordered_euclidian_ring_operators").map(|e| e.name),
            Some("ordered_euclidean_ring_operators")
        );
    }
}
