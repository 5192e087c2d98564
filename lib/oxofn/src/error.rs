//! Error types for OFN expression conversions.

use crate::grammar::Arity;
use crate::expression::OperatorTag;

/// An error raised when an annotation tree does not encode a well-formed
/// OWL expression.
///
/// Structural errors are always surfaced to the caller; malformed input is
/// never silently repaired.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StructuralError {
    /// A predicate required by the construct is missing.
    #[error("missing required property: {0}")]
    MissingProperty(&'static str),

    /// The `rdf:type` discriminator or predicate combination is not a known
    /// OWL construct.
    #[error("unrecognized OWL construct: {0}")]
    UnknownConstruct(String),

    /// An RDF collection chain is broken or exceeds the configured length
    /// limit (which also catches cyclic chains).
    #[error("malformed RDF collection: {0}")]
    MalformedList(String),

    /// An operator was reconstructed with an argument count outside its
    /// grammar contract.
    #[error("{tag} expects {expected} arguments, found {found}")]
    Arity {
        tag: OperatorTag,
        expected: Arity,
        found: usize,
    },

    /// A value has the wrong shape for its slot (e.g. a literal where an
    /// entity reference is required).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A cardinality value is not a non-negative integer.
    #[error("invalid cardinality value: {0}")]
    InvalidCardinality(String),

    /// Expression nesting exceeds the configured depth limit.
    #[error("expression nesting exceeds the configured limit ({0})")]
    TooDeep(usize),
}

impl StructuralError {
    pub(crate) fn arity(tag: OperatorTag, found: usize) -> Self {
        Self::Arity {
            tag,
            expected: tag.signature().arity,
            found,
        }
    }
}

/// An error raised when OFN-S text references an operator tag absent from
/// the grammar table.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown operator tag: {0}")]
pub struct UnknownOperatorError(pub String);

/// An error raised by the strict typing policy when a polymorphic tag
/// cannot be disambiguated.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot resolve {tag} to an Object or Data variant (property: {property})")]
pub struct TypingError {
    pub tag: OperatorTag,
    pub property: String,
}

/// An error raised by renderers that require a committed Object/Data
/// distinction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    /// RDFa rendering needs every polymorphic operator resolved.
    #[error("cannot render untyped operator {0} as RDFa")]
    UntypedOperator(OperatorTag),
}

/// Umbrella error for the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum OfnError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error(transparent)]
    UnknownOperator(#[from] UnknownOperatorError),
    #[error(transparent)]
    Typing(#[from] TypingError),
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The JSON transport could not be parsed at all.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
