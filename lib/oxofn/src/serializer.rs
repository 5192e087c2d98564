//! Triple re-serialization: expression IR back to annotation trees.
//!
//! The inverse of the ingest converters. The walk is top-down: axiom tags
//! map back to their predicates, restriction and boolean tags re-emit
//! blank-node annotation trees with their `rdf:type` discriminators, and
//! list arguments are re-encoded as `rdf:first`/`rdf:rest` chains. Leaf
//! datatype discriminators are recovered from the grammar table's argument
//! kinds, since the IR does not separately record how a leaf was tagged.
//! Untyped restriction tags serialize through the shared OWL predicates, so
//! the typing pass does not change the triple encoding.

use crate::error::StructuralError;
use crate::expression::{Expression, OfnLiteral, OperatorTag};
use crate::grammar::ArgKind;
use crate::triple::{AnnotationObject, AnnotationTree, AnnotationValue, ThickTriple, vocab};

/// Serializes expressions to the LDTab or thick triple form.
pub struct ExpressionSerializer {
    /// Whether to emit explicit datatype discriminators (the LDTab form).
    datatyped: bool,
}

impl ExpressionSerializer {
    /// A serializer for the LDTab form (explicit datatype discriminators).
    pub fn ldtab() -> Self {
        Self { datatyped: true }
    }

    /// A serializer for the simplified thick form (no discriminators).
    pub fn thick() -> Self {
        Self { datatyped: false }
    }

    /// Serializes an axiom-level expression to a
    /// `(subject, predicate, object)` row.
    pub fn serialize_axiom(
        &self,
        expr: &Expression,
    ) -> Result<(String, String, AnnotationObject), StructuralError> {
        expr.validate()?;
        let Expression::Operator(tag, args) = expr else {
            return Err(StructuralError::InvalidValue(
                "expected an axiom-level expression, found a leaf".to_owned(),
            ));
        };
        match tag {
            OperatorTag::SubClassOf => Ok((
                entity_id(&args[0])?,
                vocab::RDFS_SUB_CLASS_OF.to_owned(),
                self.object(&args[1])?,
            )),
            OperatorTag::EquivalentClasses => self.binary_axiom(vocab::OWL_EQUIVALENT_CLASS, args),
            OperatorTag::DisjointClasses => self.binary_axiom(vocab::OWL_DISJOINT_WITH, args),
            OperatorTag::DisjointUnion => Ok((
                entity_id(&args[0])?,
                vocab::OWL_DISJOINT_UNION_OF.to_owned(),
                self.list(&args[1..], ArgKind::ClassExpr)?,
            )),
            OperatorTag::ThickTriple => Ok((
                entity_id(&args[0])?,
                entity_id(&args[1])?,
                self.object(&args[2])?,
            )),
            other => Err(StructuralError::InvalidValue(format!(
                "expected an axiom-level expression, found {other}"
            ))),
        }
    }

    /// Serializes a class expression to a bare annotation object (no
    /// subject/predicate wrapper).
    pub fn serialize_object(
        &self,
        expr: &Expression,
    ) -> Result<AnnotationObject, StructuralError> {
        expr.validate()?;
        self.object(expr)
    }

    fn binary_axiom(
        &self,
        predicate: &str,
        args: &[Expression],
    ) -> Result<(String, String, AnnotationObject), StructuralError> {
        // The triple encoding holds one pair per row.
        if args.len() != 2 {
            return Err(StructuralError::InvalidValue(format!(
                "cannot serialize an n-ary axiom ({} operands) as a single triple",
                args.len()
            )));
        }
        Ok((
            entity_id(&args[0])?,
            predicate.to_owned(),
            self.object(&args[1])?,
        ))
    }

    fn object(&self, expr: &Expression) -> Result<AnnotationObject, StructuralError> {
        Ok(match expr {
            Expression::Entity(e) => AnnotationObject::Node(e.id().to_owned()),
            Expression::Literal(l) => AnnotationObject::Node(l.value().to_owned()),
            Expression::Operator(tag, args) => AnnotationObject::Tree(self.tree(*tag, args)?),
        })
    }

    fn tree(
        &self,
        tag: OperatorTag,
        args: &[Expression],
    ) -> Result<AnnotationTree, StructuralError> {
        #[expect(clippy::enum_glob_use)]
        use OperatorTag::*;
        match tag {
            SomeValuesFrom | ObjectSomeValuesFrom | DataSomeValuesFrom => {
                self.restriction(vocab::OWL_SOME_VALUES_FROM, args)
            }
            AllValuesFrom | ObjectAllValuesFrom | DataAllValuesFrom => {
                self.restriction(vocab::OWL_ALL_VALUES_FROM, args)
            }
            HasValue | ObjectHasValue | DataHasValue => {
                self.restriction(vocab::OWL_HAS_VALUE, args)
            }
            ObjectHasSelf => {
                let mut tree = self.restriction_base(&args[0])?;
                tree.insert(
                    vocab::OWL_HAS_SELF,
                    self.leaf("true", Some(vocab::XSD_BOOLEAN)),
                );
                Ok(tree)
            }
            MinCardinality | ObjectMinCardinality | DataMinCardinality => self.cardinality(
                tag,
                args,
                vocab::OWL_MIN_CARDINALITY,
                vocab::OWL_MIN_QUALIFIED_CARDINALITY,
            ),
            MaxCardinality | ObjectMaxCardinality | DataMaxCardinality => self.cardinality(
                tag,
                args,
                vocab::OWL_MAX_CARDINALITY,
                vocab::OWL_MAX_QUALIFIED_CARDINALITY,
            ),
            ExactCardinality | ObjectExactCardinality | DataExactCardinality => self.cardinality(
                tag,
                args,
                vocab::OWL_CARDINALITY,
                vocab::OWL_QUALIFIED_CARDINALITY,
            ),
            ObjectIntersectionOf => self.boolean(vocab::OWL_INTERSECTION_OF, args),
            ObjectUnionOf => self.boolean(vocab::OWL_UNION_OF, args),
            ObjectOneOf => self.boolean(vocab::OWL_ONE_OF, args),
            ObjectComplementOf => {
                let mut tree = AnnotationTree::new();
                tree.insert(vocab::RDF_TYPE, self.leaf(vocab::OWL_CLASS, None));
                tree.insert(
                    vocab::OWL_COMPLEMENT_OF,
                    self.value(&args[0], ArgKind::ClassExpr)?,
                );
                Ok(tree)
            }
            ObjectInverseOf => {
                let mut tree = AnnotationTree::new();
                tree.insert(
                    vocab::OWL_INVERSE_OF,
                    self.value(&args[0], ArgKind::PropertyRef)?,
                );
                Ok(tree)
            }
            SubClassOf | EquivalentClasses | DisjointClasses | DisjointUnion | ThickTriple => {
                Err(StructuralError::InvalidValue(format!(
                    "axiom operator {tag} in expression position"
                )))
            }
        }
    }

    fn restriction_base(&self, property: &Expression) -> Result<AnnotationTree, StructuralError> {
        let mut tree = AnnotationTree::new();
        tree.insert(vocab::RDF_TYPE, self.leaf(vocab::OWL_RESTRICTION, None));
        tree.insert(
            vocab::OWL_ON_PROPERTY,
            self.value(property, ArgKind::PropertyRef)?,
        );
        Ok(tree)
    }

    fn restriction(
        &self,
        selector: &str,
        args: &[Expression],
    ) -> Result<AnnotationTree, StructuralError> {
        let mut tree = self.restriction_base(&args[0])?;
        tree.insert(selector, self.value(&args[1], ArgKind::ClassExpr)?);
        Ok(tree)
    }

    fn cardinality(
        &self,
        tag: OperatorTag,
        args: &[Expression],
        plain_predicate: &str,
        qualified_predicate: &str,
    ) -> Result<AnnotationTree, StructuralError> {
        let mut tree = self.restriction_base(&args[1])?;
        let n = self.value(&args[0], ArgKind::NonNegInteger)?;
        match args.get(2) {
            None => tree.insert(plain_predicate, n),
            Some(filler) => {
                tree.insert(qualified_predicate, n);
                // The qualifying predicate re-commits the family; untyped
                // qualified cardinalities fall back to owl:onClass.
                let qualifier = match tag {
                    OperatorTag::DataMinCardinality
                    | OperatorTag::DataMaxCardinality
                    | OperatorTag::DataExactCardinality => vocab::OWL_ON_DATA_RANGE,
                    _ => vocab::OWL_ON_CLASS,
                };
                tree.insert(qualifier, self.value(filler, ArgKind::ClassExpr)?);
            }
        }
        Ok(tree)
    }

    fn boolean(
        &self,
        predicate: &str,
        args: &[Expression],
    ) -> Result<AnnotationTree, StructuralError> {
        let kind = if predicate == vocab::OWL_ONE_OF {
            ArgKind::IndividualOrLiteral
        } else {
            ArgKind::ClassExpr
        };
        let chain = self.list(args, kind)?;
        let mut tree = AnnotationTree::new();
        tree.insert(vocab::RDF_TYPE, self.leaf(vocab::OWL_CLASS, None));
        tree.insert(predicate, self.chain_value(chain));
        Ok(tree)
    }

    /// Re-encodes an argument sequence as an `rdf:first`/`rdf:rest` chain,
    /// preserving order.
    fn list(
        &self,
        items: &[Expression],
        kind: ArgKind,
    ) -> Result<AnnotationObject, StructuralError> {
        let mut tail = AnnotationObject::Node(vocab::RDF_NIL.to_owned());
        for item in items.iter().rev() {
            let mut node = AnnotationTree::new();
            node.insert(vocab::RDF_FIRST, self.value(item, kind)?);
            node.insert(vocab::RDF_REST, self.chain_value(tail));
            tail = AnnotationObject::Tree(node);
        }
        Ok(tail)
    }

    fn chain_value(&self, object: AnnotationObject) -> AnnotationValue {
        let datatype = if self.datatyped {
            Some(match object {
                AnnotationObject::Node(_) => vocab::DATATYPE_IRI,
                AnnotationObject::Tree(_) => vocab::DATATYPE_JSON,
            })
        } else {
            None
        };
        AnnotationValue {
            object,
            datatype: datatype.map(str::to_owned),
        }
    }

    fn value(
        &self,
        expr: &Expression,
        kind: ArgKind,
    ) -> Result<AnnotationValue, StructuralError> {
        Ok(match expr {
            Expression::Entity(e) => self.leaf(e.id(), None),
            Expression::Literal(l) => self.literal_value(l, kind),
            Expression::Operator(tag, args) => {
                self.chain_value(AnnotationObject::Tree(self.tree(*tag, args)?))
            }
        })
    }

    fn literal_value(&self, literal: &OfnLiteral, kind: ArgKind) -> AnnotationValue {
        let datatype = if self.datatyped {
            match literal.datatype() {
                Some(dt) => Some(dt.to_owned()),
                // Recovered from the grammar table's argument-kind schema.
                None if kind == ArgKind::NonNegInteger => {
                    Some(vocab::XSD_NON_NEGATIVE_INTEGER.to_owned())
                }
                None => Some("xsd:string".to_owned()),
            }
        } else {
            literal.datatype().map(str::to_owned)
        };
        AnnotationValue {
            object: AnnotationObject::Node(literal.value().to_owned()),
            datatype,
        }
    }

    /// An entity-reference leaf; `datatype` overrides the `_IRI` default.
    fn leaf(&self, node: &str, datatype: Option<&str>) -> AnnotationValue {
        AnnotationValue {
            object: AnnotationObject::Node(node.to_owned()),
            datatype: self
                .datatyped
                .then(|| datatype.unwrap_or(vocab::DATATYPE_IRI).to_owned()),
        }
    }
}

fn entity_id(expr: &Expression) -> Result<String, StructuralError> {
    expr.as_entity()
        .map(|e| e.id().to_owned())
        .ok_or_else(|| {
            StructuralError::InvalidValue(
                "axiom subject and predicate must be named entities".to_owned(),
            )
        })
}

/// Serializes an axiom to an LDTab `(subject, predicate, object)` row, with
/// explicit datatype discriminators on every leaf.
pub fn ofn_to_ldtab(
    expr: &Expression,
) -> Result<(String, String, AnnotationObject), StructuralError> {
    ExpressionSerializer::ldtab().serialize_axiom(expr)
}

/// Serializes an axiom to a thick triple (no datatype discriminators).
pub fn ofn_to_thick(expr: &Expression) -> Result<ThickTriple, StructuralError> {
    let (subject, predicate, object) = ExpressionSerializer::thick().serialize_axiom(expr)?;
    Ok(ThickTriple {
        subject,
        predicate,
        object,
    })
}

/// Serializes a class expression to a bare LDTab annotation object.
pub fn ofn_to_object(expr: &Expression) -> Result<AnnotationObject, StructuralError> {
    ExpressionSerializer::ldtab().serialize_object(expr)
}
