//! Ingest converters: graph-encoded triple forms to the expression IR.
//!
//! The converters recognize the reserved OWL vocabulary (`rdf:type`
//! discriminators, restriction predicates, boolean-combination predicates)
//! and rebuild the expression tree depth-first: children are fully
//! reconstructed before their parent is built, since a parent's tag depends
//! only on which predicate slot a child occupies, never on the child's
//! internal shape. Malformed input is rejected with a [`StructuralError`];
//! nothing is silently repaired.

use crate::error::StructuralError;
use crate::expression::{Expression, OfnLiteral, OperatorTag};
use crate::triple::{AnnotationObject, AnnotationTree, AnnotationValue, ThickTriple, vocab};

/// Parser limits.
///
/// `max_list_length` bounds `rdf:first`/`rdf:rest` chain walks and thereby
/// rejects cyclic or runaway collection encodings; `max_depth` bounds
/// expression nesting.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pub max_depth: usize,
    pub max_list_length: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self {
            max_depth: 100,
            max_list_length: 10_000,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstructs expressions from annotation trees.
pub struct ExpressionParser {
    config: ParserConfig,
}

impl ExpressionParser {
    /// Creates a parser with default limits.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::new())
    }

    /// Creates a parser with custom limits.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Reconstructs an axiom from an LDTab row. The `object` column may be a
    /// bare entity reference or a nested annotation tree.
    pub fn parse_ldtab(
        &self,
        subject: &str,
        predicate: &str,
        object: &AnnotationObject,
    ) -> Result<Expression, StructuralError> {
        let subject_expr = Expression::entity(subject);
        match predicate {
            vocab::RDFS_SUB_CLASS_OF => {
                let object = self.parse_object_column(object)?;
                self.operator(OperatorTag::SubClassOf, vec![subject_expr, object])
            }
            vocab::OWL_EQUIVALENT_CLASS => {
                let object = self.parse_object_column(object)?;
                self.operator(OperatorTag::EquivalentClasses, vec![subject_expr, object])
            }
            vocab::OWL_DISJOINT_WITH => {
                let object = self.parse_object_column(object)?;
                self.operator(OperatorTag::DisjointClasses, vec![subject_expr, object])
            }
            vocab::OWL_DISJOINT_UNION_OF => {
                let mut args = vec![subject_expr];
                args.extend(self.parse_list(object, 0)?);
                self.operator(OperatorTag::DisjointUnion, args)
            }
            _ => {
                // Unknown axiom predicates still round-trip, wrapped in the
                // generic thick-triple operator.
                let object = self.parse_object_column(object)?;
                self.operator(
                    OperatorTag::ThickTriple,
                    vec![subject_expr, Expression::entity(predicate), object],
                )
            }
        }
    }

    /// Reconstructs an axiom from a thick triple.
    pub fn parse_thick(&self, triple: &ThickTriple) -> Result<Expression, StructuralError> {
        self.parse_ldtab(&triple.subject, &triple.predicate, &triple.object)
    }

    /// Reconstructs an anonymous class expression from a bare annotation
    /// tree (no subject/predicate wrapper).
    pub fn parse_object(&self, tree: &AnnotationTree) -> Result<Expression, StructuralError> {
        self.parse_tree(tree, 0)
    }

    fn parse_object_column(
        &self,
        object: &AnnotationObject,
    ) -> Result<Expression, StructuralError> {
        match object {
            AnnotationObject::Node(s) => Ok(Expression::entity(s.as_str())),
            AnnotationObject::Tree(t) => self.parse_tree(t, 0),
        }
    }

    fn parse_tree(&self, tree: &AnnotationTree, depth: usize) -> Result<Expression, StructuralError> {
        if depth > self.config.max_depth {
            return Err(StructuralError::TooDeep(self.config.max_depth));
        }

        // rdf:type discrimination comes first; an unrecognized discriminator
        // is a hard error, per the reserved-vocabulary contract.
        for ty in tree.types() {
            match ty {
                vocab::OWL_RESTRICTION => return self.parse_restriction(tree, depth),
                vocab::OWL_CLASS => {}
                other => {
                    return Err(StructuralError::UnknownConstruct(format!(
                        "unexpected rdf:type discriminator: {other}"
                    )));
                }
            }
        }

        if let Some(head) = tree.first(vocab::OWL_INTERSECTION_OF) {
            let args = self.parse_list(&head.object, depth)?;
            return self.operator(OperatorTag::ObjectIntersectionOf, args);
        }
        if let Some(head) = tree.first(vocab::OWL_UNION_OF) {
            let args = self.parse_list(&head.object, depth)?;
            return self.operator(OperatorTag::ObjectUnionOf, args);
        }
        if let Some(head) = tree.first(vocab::OWL_ONE_OF) {
            let args = self.parse_list(&head.object, depth)?;
            return self.operator(OperatorTag::ObjectOneOf, args);
        }
        if let Some(v) = tree.first(vocab::OWL_COMPLEMENT_OF) {
            let arg = self.parse_value(v, depth)?;
            return self.operator(OperatorTag::ObjectComplementOf, vec![arg]);
        }
        if let Some(v) = tree.first(vocab::OWL_INVERSE_OF) {
            let arg = self.parse_value(v, depth)?;
            return self.operator(OperatorTag::ObjectInverseOf, vec![arg]);
        }

        Err(StructuralError::UnknownConstruct(
            "anonymous node without a recognized discriminator".to_owned(),
        ))
    }

    fn parse_restriction(
        &self,
        tree: &AnnotationTree,
        depth: usize,
    ) -> Result<Expression, StructuralError> {
        let property = tree
            .first(vocab::OWL_ON_PROPERTY)
            .ok_or(StructuralError::MissingProperty(vocab::OWL_ON_PROPERTY))?;
        let property = self.parse_value(property, depth)?;

        if let Some(v) = tree.first(vocab::OWL_SOME_VALUES_FROM) {
            let filler = self.parse_value(v, depth)?;
            return self.operator(OperatorTag::SomeValuesFrom, vec![property, filler]);
        }
        if let Some(v) = tree.first(vocab::OWL_ALL_VALUES_FROM) {
            let filler = self.parse_value(v, depth)?;
            return self.operator(OperatorTag::AllValuesFrom, vec![property, filler]);
        }
        if let Some(v) = tree.first(vocab::OWL_HAS_VALUE) {
            let value = self.parse_value(v, depth)?;
            return self.operator(OperatorTag::HasValue, vec![property, value]);
        }
        if tree.contains(vocab::OWL_HAS_SELF) {
            return self.operator(OperatorTag::ObjectHasSelf, vec![property]);
        }

        if let Some(v) = tree.first(vocab::OWL_MIN_CARDINALITY) {
            let n = self.parse_cardinality(v)?;
            return self.operator(OperatorTag::MinCardinality, vec![n, property]);
        }
        if let Some(v) = tree.first(vocab::OWL_MAX_CARDINALITY) {
            let n = self.parse_cardinality(v)?;
            return self.operator(OperatorTag::MaxCardinality, vec![n, property]);
        }
        if let Some(v) = tree.first(vocab::OWL_CARDINALITY) {
            let n = self.parse_cardinality(v)?;
            return self.operator(OperatorTag::ExactCardinality, vec![n, property]);
        }

        if let Some(v) = tree.first(vocab::OWL_MIN_QUALIFIED_CARDINALITY) {
            return self.parse_qualified_cardinality(
                tree,
                v,
                property,
                OperatorTag::ObjectMinCardinality,
                OperatorTag::DataMinCardinality,
                depth,
            );
        }
        if let Some(v) = tree.first(vocab::OWL_MAX_QUALIFIED_CARDINALITY) {
            return self.parse_qualified_cardinality(
                tree,
                v,
                property,
                OperatorTag::ObjectMaxCardinality,
                OperatorTag::DataMaxCardinality,
                depth,
            );
        }
        if let Some(v) = tree.first(vocab::OWL_QUALIFIED_CARDINALITY) {
            return self.parse_qualified_cardinality(
                tree,
                v,
                property,
                OperatorTag::ObjectExactCardinality,
                OperatorTag::DataExactCardinality,
                depth,
            );
        }

        Err(StructuralError::UnknownConstruct(
            "owl:Restriction without a recognized value selector".to_owned(),
        ))
    }

    /// The qualifying predicate commits the family: `owl:onClass` pins the
    /// Object variant, `owl:onDataRange` the Data variant.
    fn parse_qualified_cardinality(
        &self,
        tree: &AnnotationTree,
        cardinality: &AnnotationValue,
        property: Expression,
        object_tag: OperatorTag,
        data_tag: OperatorTag,
        depth: usize,
    ) -> Result<Expression, StructuralError> {
        let n = self.parse_cardinality(cardinality)?;
        if let Some(v) = tree.first(vocab::OWL_ON_CLASS) {
            let filler = self.parse_value(v, depth)?;
            return self.operator(object_tag, vec![n, property, filler]);
        }
        if let Some(v) = tree.first(vocab::OWL_ON_DATA_RANGE) {
            let filler = self.parse_value(v, depth)?;
            return self.operator(data_tag, vec![n, property, filler]);
        }
        Err(StructuralError::MissingProperty(vocab::OWL_ON_CLASS))
    }

    fn parse_cardinality(&self, v: &AnnotationValue) -> Result<Expression, StructuralError> {
        let node = match v.object.as_node() {
            Some(node) => node,
            None => {
                return Err(StructuralError::InvalidCardinality(
                    "nested value where an integer literal is required".to_owned(),
                ));
            }
        };
        if node.parse::<u64>().is_err() || v.datatype.as_deref() == Some(vocab::DATATYPE_IRI) {
            return Err(StructuralError::InvalidCardinality(node.to_owned()));
        }
        Ok(match &v.datatype {
            Some(dt) => Expression::Literal(OfnLiteral::typed(node, dt)),
            None => Expression::literal(node),
        })
    }

    /// Linearizes an `rdf:first`/`rdf:rest` chain in encounter order. The
    /// length limit rejects cyclic chains.
    fn parse_list(
        &self,
        head: &AnnotationObject,
        depth: usize,
    ) -> Result<Vec<Expression>, StructuralError> {
        let mut items = Vec::new();
        let mut current = head;
        let mut count = 0usize;
        loop {
            match current {
                AnnotationObject::Node(s) if s == vocab::RDF_NIL => return Ok(items),
                AnnotationObject::Node(s) => {
                    return Err(StructuralError::MalformedList(format!(
                        "chain link is a bare node: {s}"
                    )));
                }
                AnnotationObject::Tree(t) => {
                    count += 1;
                    if count > self.config.max_list_length {
                        return Err(StructuralError::MalformedList(format!(
                            "chain exceeds {} links (broken or cyclic)",
                            self.config.max_list_length
                        )));
                    }
                    let first = t
                        .first(vocab::RDF_FIRST)
                        .ok_or_else(|| StructuralError::MalformedList("missing rdf:first".to_owned()))?;
                    items.push(self.parse_value(first, depth)?);
                    current = &t
                        .first(vocab::RDF_REST)
                        .ok_or_else(|| StructuralError::MalformedList("missing rdf:rest".to_owned()))?
                        .object;
                }
            }
        }
    }

    fn parse_value(
        &self,
        value: &AnnotationValue,
        depth: usize,
    ) -> Result<Expression, StructuralError> {
        match &value.object {
            AnnotationObject::Tree(t) => self.parse_tree(t, depth + 1),
            AnnotationObject::Node(s) => Ok(if value.is_entity_reference() {
                Expression::entity(s.as_str())
            } else {
                // Checked by is_entity_reference: a non-reference leaf always
                // carries a discriminator.
                match &value.datatype {
                    Some(dt) => Expression::Literal(OfnLiteral::typed(s, dt)),
                    None => Expression::literal(s.as_str()),
                }
            }),
        }
    }

    fn operator(
        &self,
        tag: OperatorTag,
        args: Vec<Expression>,
    ) -> Result<Expression, StructuralError> {
        if !tag.signature().arity.admits(args.len()) {
            return Err(StructuralError::arity(tag, args.len()));
        }
        Ok(Expression::operator(tag, args))
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstructs an axiom from an LDTab `subject`/`predicate`/`object` row.
pub fn ldtab_to_ofn(
    subject: &str,
    predicate: &str,
    object: &AnnotationObject,
) -> Result<Expression, StructuralError> {
    ExpressionParser::new().parse_ldtab(subject, predicate, object)
}

/// Reconstructs an axiom from a thick triple.
pub fn thick_to_ofn(triple: &ThickTriple) -> Result<Expression, StructuralError> {
    ExpressionParser::new().parse_thick(triple)
}

/// Reconstructs an anonymous class expression from a bare annotation tree.
pub fn object_to_ofn(tree: &AnnotationTree) -> Result<Expression, StructuralError> {
    ExpressionParser::new().parse_object(tree)
}
