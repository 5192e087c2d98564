//! The typing pass: disambiguation of polymorphic operator tags.
//!
//! An untyped restriction tag is resolved by the declared type of the entity
//! in its property slot, independent of surrounding context, so the rewrite
//! is a plain bottom-up walk. Tags that cannot be resolved are left untyped
//! under the default best-effort policy; the strict policy turns them into
//! errors instead.

use crate::error::TypingError;
use crate::expression::{Expression, OperatorTag};
use crate::triple::vocab;
use rustc_hash::{FxHashMap, FxHashSet};

/// The declared type of a named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    Datatype,
}

impl EntityType {
    /// Parses the CURIE spelling stored by the lookup collaborator
    /// (`owl:Class`, `owl:ObjectProperty`, ...). Unknown spellings yield
    /// `None` rather than an error; a type fact the engine does not know
    /// about simply contributes nothing to disambiguation.
    pub fn from_curie(curie: &str) -> Option<Self> {
        match curie {
            vocab::OWL_CLASS => Some(Self::Class),
            vocab::OWL_OBJECT_PROPERTY => Some(Self::ObjectProperty),
            vocab::OWL_DATATYPE_PROPERTY => Some(Self::DataProperty),
            vocab::OWL_ANNOTATION_PROPERTY => Some(Self::AnnotationProperty),
            vocab::OWL_NAMED_INDIVIDUAL => Some(Self::NamedIndividual),
            vocab::OWL_DATATYPE => Some(Self::Datatype),
            _ => None,
        }
    }

    /// The CURIE spelling of this type.
    pub fn as_curie(self) -> &'static str {
        match self {
            Self::Class => vocab::OWL_CLASS,
            Self::ObjectProperty => vocab::OWL_OBJECT_PROPERTY,
            Self::DataProperty => vocab::OWL_DATATYPE_PROPERTY,
            Self::AnnotationProperty => vocab::OWL_ANNOTATION_PROPERTY,
            Self::NamedIndividual => vocab::OWL_NAMED_INDIVIDUAL,
            Self::Datatype => vocab::OWL_DATATYPE,
        }
    }
}

/// Entity identifier -> set of declared types. Built once per batch by the
/// lookup collaborator and treated as a read-only snapshot.
pub type TypeMap = FxHashMap<String, FxHashSet<EntityType>>;

/// What to do when a polymorphic tag cannot be disambiguated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypingPolicy {
    /// Leave the tag untyped and continue.
    #[default]
    BestEffort,
    /// Fail the pass.
    Strict,
}

/// Rewrites polymorphic tags using `types`, leaving unresolved tags untyped.
///
/// The result has the same shape as the input; only tags change. The pass is
/// idempotent, and monotone in the map: growing the map never changes an
/// already-committed tag, it can only commit more of them.
pub fn apply_typing(expr: &Expression, types: &TypeMap) -> Expression {
    // BestEffort never produces an error.
    apply_typing_with_policy(expr, types, TypingPolicy::BestEffort)
        .unwrap_or_else(|_| expr.clone())
}

/// Rewrites polymorphic tags under an explicit unresolved-tag policy.
pub fn apply_typing_with_policy(
    expr: &Expression,
    types: &TypeMap,
    policy: TypingPolicy,
) -> Result<Expression, TypingError> {
    match expr {
        Expression::Entity(_) | Expression::Literal(_) => Ok(expr.clone()),
        Expression::Operator(tag, args) => {
            // Children first; a parent's disambiguation never depends on a
            // child's internal shape.
            let args = args
                .iter()
                .map(|arg| apply_typing_with_policy(arg, types, policy))
                .collect::<Result<Vec<_>, _>>()?;
            let tag = if tag.is_polymorphic() {
                resolve(*tag, &args, types, policy)?
            } else {
                *tag
            };
            Ok(Expression::Operator(tag, args))
        }
    }
}

fn resolve(
    tag: OperatorTag,
    args: &[Expression],
    types: &TypeMap,
    policy: TypingPolicy,
) -> Result<OperatorTag, TypingError> {
    let slot = tag
        .signature()
        .property_arg
        .and_then(|i| args.get(i));
    let resolved = slot.and_then(|property| match property {
        // An inverse property expression is an object-property expression by
        // construction.
        Expression::Operator(OperatorTag::ObjectInverseOf, _) => tag.object_counterpart(),
        Expression::Entity(e) => {
            let declared = types.get(e.id())?;
            let is_object = declared.contains(&EntityType::ObjectProperty);
            let is_data = declared.contains(&EntityType::DataProperty);
            match (is_object, is_data) {
                (true, false) => tag.object_counterpart(),
                (false, true) => tag.data_counterpart(),
                // Absent or contradictory facts: no commitment.
                _ => None,
            }
        }
        _ => None,
    });
    match resolved {
        Some(typed) => Ok(typed),
        None => match policy {
            TypingPolicy::BestEffort => Ok(tag),
            TypingPolicy::Strict => Err(TypingError {
                tag,
                property: slot
                    .and_then(Expression::as_entity)
                    .map(|e| e.id().to_owned())
                    .unwrap_or_default(),
            }),
        },
    }
}
