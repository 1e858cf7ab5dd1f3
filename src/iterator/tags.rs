//! Category tags.
//!
//! Each tag is a unit struct; refinement is expressed by marker traits, so
//! `ForwardTag: InputCategory` holds the way a forward iterator is also an
//! input iterator.

/// A cursor category tag.
pub trait IteratorCategory: 'static {
    const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutputTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

/// Categories that can be read from once.
pub trait InputCategory: IteratorCategory {}
/// Categories that can be traversed more than once.
pub trait ForwardCategory: InputCategory {}
/// Categories that can step backwards.
pub trait BidirectionalCategory: ForwardCategory {}
/// Categories that can jump by an offset.
pub trait RandomAccessCategory: BidirectionalCategory {}

macro_rules! category {
    ($tag:ident, $name:literal $(, $refines:ident)*) => {
        impl IteratorCategory for $tag {
            const NAME: &'static str = $name;
        }
        $(impl $refines for $tag {})*
    };
}

category!(InputTag, "input", InputCategory);
category!(OutputTag, "output");
category!(ForwardTag, "forward", InputCategory, ForwardCategory);
category!(BidirectionalTag, "bidirectional", InputCategory, ForwardCategory, BidirectionalCategory);
category!(
    RandomAccessTag,
    "random_access",
    InputCategory,
    ForwardCategory,
    BidirectionalCategory,
    RandomAccessCategory
);

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of<C: IteratorCategory>(_: C) -> &'static str {
        C::NAME
    }

    fn readable<C: InputCategory>() {}

    #[test]
    fn test_refinement() {
        readable::<InputTag>();
        readable::<ForwardTag>();
        readable::<RandomAccessTag>();
        assert_eq!(name_of(BidirectionalTag), "bidirectional");
        assert_eq!(name_of(OutputTag), "output");
    }
}
