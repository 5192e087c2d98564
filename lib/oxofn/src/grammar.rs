//! The static grammar table.
//!
//! Every component of the crate consults this table instead of hard-coding
//! operator shapes: the ingest converters check reconstructed arities against
//! it, the typing pass reads the property-argument slot from it, the triple
//! serializers recover leaf datatype tags from its argument kinds and the
//! Manchester/RDFa emitters take keyword and precedence from it. Adding an
//! OWL construct means adding one [`Signature`] entry (and the tag itself).

use crate::error::StructuralError;
use crate::expression::{Expression, OperatorTag};
use std::fmt;

/// The syntactic family an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Top-level axiom; renders without enclosing parentheses.
    Axiom,
    /// Class expression.
    ClassExpression,
    /// Object or data property expression.
    PropertyExpression,
}

/// The argument-count contract of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    /// Returns true if `n` arguments satisfy this contract.
    pub fn admits(self, n: usize) -> bool {
        match self {
            Self::Exact(k) => n == k,
            Self::AtLeast(k) => n >= k,
            Self::Between(lo, hi) => n >= lo && n <= hi,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(k) => write!(f, "exactly {k}"),
            Self::AtLeast(k) => write!(f, "at least {k}"),
            Self::Between(lo, hi) => write!(f, "between {lo} and {hi}"),
        }
    }
}

/// The kind of value expected in an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// A class expression or datatype reference (restriction filler).
    ClassExpr,
    /// A property reference (named or `ObjectInverseOf`).
    PropertyRef,
    /// A named individual or a literal value.
    IndividualOrLiteral,
    /// A named entity reference.
    EntityRef,
    /// A non-negative integer literal.
    NonNegInteger,
    /// Any expression (fallback slots).
    Any,
}

impl ArgKind {
    /// Whether a leaf in this slot is an entity reference (as opposed to a
    /// literal) when re-serialized to the LDTab form.
    pub fn is_entity_reference(self) -> bool {
        matches!(self, Self::ClassExpr | Self::PropertyRef | Self::EntityRef)
    }
}

#[derive(Debug, Clone, Copy)]
enum Kinds {
    Uniform(ArgKind),
    Fixed(&'static [ArgKind]),
}

/// Manchester precedence levels, loosest binding first.
pub const PREC_AXIOM: u8 = 0;
pub const PREC_OR: u8 = 1;
pub const PREC_AND: u8 = 2;
pub const PREC_UNARY: u8 = 3;
pub const PREC_ATOM: u8 = 4;

/// The grammar-table entry for one operator tag.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub family: Family,
    pub arity: Arity,
    kinds: Kinds,
    /// Manchester keyword, if the construct has one.
    pub keyword: Option<&'static str>,
    /// Manchester precedence of the construct itself.
    pub precedence: u8,
    /// Index of the property-reference argument inspected by the typing
    /// pass, for polymorphic tags and their committed counterparts.
    pub property_arg: Option<usize>,
}

impl Signature {
    /// Returns the expected kind of the argument at `index`. For
    /// variable-arity operators the last declared kind repeats.
    pub fn arg_kind(&self, index: usize) -> ArgKind {
        match self.kinds {
            Kinds::Uniform(k) => k,
            Kinds::Fixed(ks) => ks[index.min(ks.len() - 1)],
        }
    }
}

const RESTRICTION: Kinds = Kinds::Fixed(&[ArgKind::PropertyRef, ArgKind::ClassExpr]);
const VALUE_RESTRICTION: Kinds =
    Kinds::Fixed(&[ArgKind::PropertyRef, ArgKind::IndividualOrLiteral]);
const CARDINALITY: Kinds = Kinds::Fixed(&[
    ArgKind::NonNegInteger,
    ArgKind::PropertyRef,
    ArgKind::ClassExpr,
]);

impl OperatorTag {
    /// Looks up this tag's grammar-table entry.
    pub fn signature(self) -> Signature {
        #[expect(clippy::enum_glob_use)]
        use OperatorTag::*;
        match self {
            SubClassOf => Signature {
                family: Family::Axiom,
                arity: Arity::Exact(2),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("SubClassOf"),
                precedence: PREC_AXIOM,
                property_arg: None,
            },
            EquivalentClasses => Signature {
                family: Family::Axiom,
                arity: Arity::AtLeast(2),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("EquivalentTo"),
                precedence: PREC_AXIOM,
                property_arg: None,
            },
            DisjointClasses => Signature {
                family: Family::Axiom,
                arity: Arity::AtLeast(2),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("DisjointWith"),
                precedence: PREC_AXIOM,
                property_arg: None,
            },
            DisjointUnion => Signature {
                family: Family::Axiom,
                arity: Arity::AtLeast(3),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("DisjointUnionOf"),
                precedence: PREC_AXIOM,
                property_arg: None,
            },
            ThickTriple => Signature {
                family: Family::Axiom,
                arity: Arity::Exact(3),
                kinds: Kinds::Fixed(&[ArgKind::EntityRef, ArgKind::EntityRef, ArgKind::Any]),
                keyword: None,
                precedence: PREC_AXIOM,
                property_arg: None,
            },
            ObjectIntersectionOf => Signature {
                family: Family::ClassExpression,
                arity: Arity::AtLeast(2),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("and"),
                precedence: PREC_AND,
                property_arg: None,
            },
            ObjectUnionOf => Signature {
                family: Family::ClassExpression,
                arity: Arity::AtLeast(2),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("or"),
                precedence: PREC_OR,
                property_arg: None,
            },
            ObjectComplementOf => Signature {
                family: Family::ClassExpression,
                arity: Arity::Exact(1),
                kinds: Kinds::Uniform(ArgKind::ClassExpr),
                keyword: Some("not"),
                precedence: PREC_UNARY,
                property_arg: None,
            },
            ObjectOneOf => Signature {
                family: Family::ClassExpression,
                arity: Arity::AtLeast(1),
                kinds: Kinds::Uniform(ArgKind::IndividualOrLiteral),
                keyword: None,
                precedence: PREC_ATOM,
                property_arg: None,
            },
            ObjectInverseOf => Signature {
                family: Family::PropertyExpression,
                arity: Arity::Exact(1),
                kinds: Kinds::Uniform(ArgKind::PropertyRef),
                keyword: Some("inverse"),
                precedence: PREC_UNARY,
                property_arg: Some(0),
            },
            SomeValuesFrom | ObjectSomeValuesFrom | DataSomeValuesFrom => Signature {
                family: Family::ClassExpression,
                arity: Arity::Exact(2),
                kinds: RESTRICTION,
                keyword: Some("some"),
                precedence: PREC_UNARY,
                property_arg: Some(0),
            },
            AllValuesFrom | ObjectAllValuesFrom | DataAllValuesFrom => Signature {
                family: Family::ClassExpression,
                arity: Arity::Exact(2),
                kinds: RESTRICTION,
                keyword: Some("only"),
                precedence: PREC_UNARY,
                property_arg: Some(0),
            },
            HasValue | ObjectHasValue | DataHasValue => Signature {
                family: Family::ClassExpression,
                arity: Arity::Exact(2),
                kinds: VALUE_RESTRICTION,
                keyword: Some("value"),
                precedence: PREC_UNARY,
                property_arg: Some(0),
            },
            ObjectHasSelf => Signature {
                family: Family::ClassExpression,
                arity: Arity::Exact(1),
                kinds: Kinds::Uniform(ArgKind::PropertyRef),
                keyword: Some("Self"),
                precedence: PREC_UNARY,
                property_arg: Some(0),
            },
            MinCardinality | ObjectMinCardinality | DataMinCardinality => Signature {
                family: Family::ClassExpression,
                arity: Arity::Between(2, 3),
                kinds: CARDINALITY,
                keyword: Some("min"),
                precedence: PREC_UNARY,
                property_arg: Some(1),
            },
            MaxCardinality | ObjectMaxCardinality | DataMaxCardinality => Signature {
                family: Family::ClassExpression,
                arity: Arity::Between(2, 3),
                kinds: CARDINALITY,
                keyword: Some("max"),
                precedence: PREC_UNARY,
                property_arg: Some(1),
            },
            ExactCardinality | ObjectExactCardinality | DataExactCardinality => Signature {
                family: Family::ClassExpression,
                arity: Arity::Between(2, 3),
                kinds: CARDINALITY,
                keyword: Some("exactly"),
                precedence: PREC_UNARY,
                property_arg: Some(1),
            },
        }
    }
}

impl Expression {
    /// Checks every operator node against the grammar table's arity
    /// contract.
    pub fn validate(&self) -> Result<(), StructuralError> {
        match self {
            Self::Entity(_) | Self::Literal(_) => Ok(()),
            Self::Operator(tag, args) => {
                if !tag.signature().arity.admits(args.len()) {
                    return Err(StructuralError::arity(*tag, args.len()));
                }
                for arg in args {
                    arg.validate()?;
                }
                Ok(())
            }
        }
    }
}
