//! The OWL class-expression IR.
//!
//! An [`Expression`] is an immutable tagged tree. Leaves are entity
//! references or literals; interior nodes apply an [`OperatorTag`] to an
//! ordered argument sequence. Every concrete serialization supported by this
//! crate (LDTab annotation trees, thick triples, OFN-S text, Manchester
//! syntax, RDFa) reads or writes this tree.

use crate::error::UnknownOperatorError;
use std::fmt;
use std::str::FromStr;

/// A reference to a named entity, optionally carrying a display label.
///
/// The identifier is the machine name (an IRI or CURIE). The label is only
/// attached by the labeling pass and never replaces the identifier, since the
/// RDFa emitter needs both at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    id: String,
    label: Option<String>,
}

impl Entity {
    /// Creates an unlabeled entity reference.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Creates an entity reference with an attached display label.
    #[inline]
    pub fn with_label(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
        }
    }

    /// Returns the machine identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display label, if one has been attached.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the label if present, the identifier otherwise.
    #[inline]
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl From<&str> for Entity {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Entity {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// A literal value with its lexical form and optional datatype tag.
///
/// The datatype is carried through verbatim from the LDTab encoding
/// (a datatype CURIE such as `xsd:string`, a language tag such as `@en`, or
/// the `_JSON` marker). Plain literals have no datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfnLiteral {
    value: String,
    datatype: Option<String>,
}

impl OfnLiteral {
    /// Creates a plain literal.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    /// Creates a literal with an explicit datatype or language tag.
    #[inline]
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype.into()),
        }
    }

    /// Returns the lexical form.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the datatype tag, if any.
    #[inline]
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    /// Returns the value as a non-negative integer, if it is one.
    pub fn as_non_negative_integer(&self) -> Option<u64> {
        self.value.parse().ok()
    }
}

/// The operator vocabulary of the IR.
///
/// Tags come in two families: polymorphic restriction tags
/// ([`SomeValuesFrom`](Self::SomeValuesFrom) and friends), which are
/// placeholders pending the typing pass, and committed `Object`/`Data`
/// variants. Boolean combinations are pinned to the object family by their
/// RDF encoding and carry no untyped form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorTag {
    // Axiom-level tags
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    /// Fallback for a triple whose predicate is not a recognized axiom
    /// predicate: `ThickTriple(subject, predicate, object)`.
    ThickTriple,

    // Boolean class expressions and enumerations
    ObjectIntersectionOf,
    ObjectUnionOf,
    ObjectComplementOf,
    ObjectOneOf,

    // Property expressions
    ObjectInverseOf,

    // Polymorphic restrictions (pending typing)
    SomeValuesFrom,
    AllValuesFrom,
    HasValue,
    MinCardinality,
    MaxCardinality,
    ExactCardinality,

    // Committed restrictions
    ObjectSomeValuesFrom,
    ObjectAllValuesFrom,
    ObjectHasValue,
    ObjectHasSelf,
    ObjectMinCardinality,
    ObjectMaxCardinality,
    ObjectExactCardinality,
    DataSomeValuesFrom,
    DataAllValuesFrom,
    DataHasValue,
    DataMinCardinality,
    DataMaxCardinality,
    DataExactCardinality,
}

impl OperatorTag {
    /// The OFN-S spelling of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SubClassOf => "SubClassOf",
            Self::EquivalentClasses => "EquivalentClasses",
            Self::DisjointClasses => "DisjointClasses",
            Self::DisjointUnion => "DisjointUnion",
            Self::ThickTriple => "ThickTriple",
            Self::ObjectIntersectionOf => "ObjectIntersectionOf",
            Self::ObjectUnionOf => "ObjectUnionOf",
            Self::ObjectComplementOf => "ObjectComplementOf",
            Self::ObjectOneOf => "ObjectOneOf",
            Self::ObjectInverseOf => "ObjectInverseOf",
            Self::SomeValuesFrom => "SomeValuesFrom",
            Self::AllValuesFrom => "AllValuesFrom",
            Self::HasValue => "HasValue",
            Self::MinCardinality => "MinCardinality",
            Self::MaxCardinality => "MaxCardinality",
            Self::ExactCardinality => "ExactCardinality",
            Self::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
            Self::ObjectAllValuesFrom => "ObjectAllValuesFrom",
            Self::ObjectHasValue => "ObjectHasValue",
            Self::ObjectHasSelf => "ObjectHasSelf",
            Self::ObjectMinCardinality => "ObjectMinCardinality",
            Self::ObjectMaxCardinality => "ObjectMaxCardinality",
            Self::ObjectExactCardinality => "ObjectExactCardinality",
            Self::DataSomeValuesFrom => "DataSomeValuesFrom",
            Self::DataAllValuesFrom => "DataAllValuesFrom",
            Self::DataHasValue => "DataHasValue",
            Self::DataMinCardinality => "DataMinCardinality",
            Self::DataMaxCardinality => "DataMaxCardinality",
            Self::DataExactCardinality => "DataExactCardinality",
        }
    }

    /// Returns true for polymorphic restriction tags awaiting the typing
    /// pass.
    pub fn is_polymorphic(self) -> bool {
        matches!(
            self,
            Self::SomeValuesFrom
                | Self::AllValuesFrom
                | Self::HasValue
                | Self::MinCardinality
                | Self::MaxCardinality
                | Self::ExactCardinality
        )
    }

    /// The `Object`-prefixed counterpart of a polymorphic tag.
    pub fn object_counterpart(self) -> Option<Self> {
        match self {
            Self::SomeValuesFrom => Some(Self::ObjectSomeValuesFrom),
            Self::AllValuesFrom => Some(Self::ObjectAllValuesFrom),
            Self::HasValue => Some(Self::ObjectHasValue),
            Self::MinCardinality => Some(Self::ObjectMinCardinality),
            Self::MaxCardinality => Some(Self::ObjectMaxCardinality),
            Self::ExactCardinality => Some(Self::ObjectExactCardinality),
            _ => None,
        }
    }

    /// The `Data`-prefixed counterpart of a polymorphic tag.
    pub fn data_counterpart(self) -> Option<Self> {
        match self {
            Self::SomeValuesFrom => Some(Self::DataSomeValuesFrom),
            Self::AllValuesFrom => Some(Self::DataAllValuesFrom),
            Self::HasValue => Some(Self::DataHasValue),
            Self::MinCardinality => Some(Self::DataMinCardinality),
            Self::MaxCardinality => Some(Self::DataMaxCardinality),
            Self::ExactCardinality => Some(Self::DataExactCardinality),
            _ => None,
        }
    }

    /// The polymorphic form of a committed restriction tag, if it has one.
    pub fn polymorphic_counterpart(self) -> Option<Self> {
        match self {
            Self::ObjectSomeValuesFrom | Self::DataSomeValuesFrom => Some(Self::SomeValuesFrom),
            Self::ObjectAllValuesFrom | Self::DataAllValuesFrom => Some(Self::AllValuesFrom),
            Self::ObjectHasValue | Self::DataHasValue => Some(Self::HasValue),
            Self::ObjectMinCardinality | Self::DataMinCardinality => Some(Self::MinCardinality),
            Self::ObjectMaxCardinality | Self::DataMaxCardinality => Some(Self::MaxCardinality),
            Self::ObjectExactCardinality | Self::DataExactCardinality => {
                Some(Self::ExactCardinality)
            }
            _ => None,
        }
    }
}

impl FromStr for OperatorTag {
    type Err = UnknownOperatorError;

    fn from_str(s: &str) -> Result<Self, UnknownOperatorError> {
        Ok(match s {
            "SubClassOf" => Self::SubClassOf,
            "EquivalentClasses" => Self::EquivalentClasses,
            "DisjointClasses" => Self::DisjointClasses,
            "DisjointUnion" => Self::DisjointUnion,
            "ThickTriple" => Self::ThickTriple,
            "ObjectIntersectionOf" => Self::ObjectIntersectionOf,
            "ObjectUnionOf" => Self::ObjectUnionOf,
            "ObjectComplementOf" => Self::ObjectComplementOf,
            "ObjectOneOf" => Self::ObjectOneOf,
            "ObjectInverseOf" => Self::ObjectInverseOf,
            "SomeValuesFrom" => Self::SomeValuesFrom,
            "AllValuesFrom" => Self::AllValuesFrom,
            "HasValue" => Self::HasValue,
            "MinCardinality" => Self::MinCardinality,
            "MaxCardinality" => Self::MaxCardinality,
            "ExactCardinality" => Self::ExactCardinality,
            "ObjectSomeValuesFrom" => Self::ObjectSomeValuesFrom,
            "ObjectAllValuesFrom" => Self::ObjectAllValuesFrom,
            "ObjectHasValue" => Self::ObjectHasValue,
            "ObjectHasSelf" => Self::ObjectHasSelf,
            "ObjectMinCardinality" => Self::ObjectMinCardinality,
            "ObjectMaxCardinality" => Self::ObjectMaxCardinality,
            "ObjectExactCardinality" => Self::ObjectExactCardinality,
            "DataSomeValuesFrom" => Self::DataSomeValuesFrom,
            "DataAllValuesFrom" => Self::DataAllValuesFrom,
            "DataHasValue" => Self::DataHasValue,
            "DataMinCardinality" => Self::DataMinCardinality,
            "DataMaxCardinality" => Self::DataMaxCardinality,
            "DataExactCardinality" => Self::DataExactCardinality,
            _ => return Err(UnknownOperatorError(s.to_owned())),
        })
    }
}

impl fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OWL axiom or class-expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A reference to a named entity.
    Entity(Entity),

    /// A literal value.
    Literal(OfnLiteral),

    /// An OWL construct applied to an ordered argument sequence.
    Operator(OperatorTag, Vec<Expression>),
}

impl Expression {
    /// Creates an unlabeled entity reference.
    #[inline]
    pub fn entity(id: impl Into<String>) -> Self {
        Self::Entity(Entity::new(id))
    }

    /// Creates a plain literal.
    #[inline]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(OfnLiteral::new(value))
    }

    /// Creates an operator node.
    #[inline]
    pub fn operator(tag: OperatorTag, args: Vec<Expression>) -> Self {
        Self::Operator(tag, args)
    }

    /// Returns the entity if this is an entity reference.
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the literal if this is a literal leaf.
    pub fn as_literal(&self) -> Option<&OfnLiteral> {
        match self {
            Self::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the operator tag if this is an operator node.
    pub fn tag(&self) -> Option<OperatorTag> {
        match self {
            Self::Operator(tag, _) => Some(*tag),
            _ => None,
        }
    }

    /// Returns true if this tree contains no polymorphic operator tag.
    pub fn is_fully_typed(&self) -> bool {
        match self {
            Self::Entity(_) | Self::Literal(_) => true,
            Self::Operator(tag, args) => {
                !tag.is_polymorphic() && args.iter().all(Self::is_fully_typed)
            }
        }
    }
}

impl From<Entity> for Expression {
    fn from(e: Entity) -> Self {
        Self::Entity(e)
    }
}

impl From<OfnLiteral> for Expression {
    fn from(l: OfnLiteral) -> Self {
        Self::Literal(l)
    }
}

/// Renders the OFN-S form, e.g.
/// `["SubClassOf","obo:OBI_0001636",["SomeValuesFrom","obo:BFO_0000050","obo:OBI_0500000"]]`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ofn())
    }
}
