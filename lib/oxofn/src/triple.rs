//! The graph-encoded triple transport model.
//!
//! LDTab stores one axiom per row as `subject`, `predicate` and a JSON
//! `object` column. A structured object is an *annotation tree*: a map from
//! predicate to an ordered list of value records, each record being either a
//! leaf (IRI or literal, with an explicit `datatype` discriminator) or a
//! nested annotation tree standing for a blank-node-rooted sub-expression.
//! The simplified *thick triple* form is the same shape without datatype
//! discriminators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// CURIE spellings of the reserved vocabulary recognized by the converters.
pub mod vocab {
    pub const RDF_TYPE: &str = "rdf:type";
    pub const RDF_FIRST: &str = "rdf:first";
    pub const RDF_REST: &str = "rdf:rest";
    pub const RDF_NIL: &str = "rdf:nil";

    pub const RDFS_SUB_CLASS_OF: &str = "rdfs:subClassOf";
    pub const RDFS_LABEL: &str = "rdfs:label";

    pub const OWL_CLASS: &str = "owl:Class";
    pub const OWL_RESTRICTION: &str = "owl:Restriction";
    pub const OWL_OBJECT_PROPERTY: &str = "owl:ObjectProperty";
    pub const OWL_DATATYPE_PROPERTY: &str = "owl:DatatypeProperty";
    pub const OWL_ANNOTATION_PROPERTY: &str = "owl:AnnotationProperty";
    pub const OWL_NAMED_INDIVIDUAL: &str = "owl:NamedIndividual";
    pub const OWL_DATATYPE: &str = "rdfs:Datatype";

    pub const OWL_EQUIVALENT_CLASS: &str = "owl:equivalentClass";
    pub const OWL_DISJOINT_WITH: &str = "owl:disjointWith";
    pub const OWL_DISJOINT_UNION_OF: &str = "owl:disjointUnionOf";

    pub const OWL_ON_PROPERTY: &str = "owl:onProperty";
    pub const OWL_SOME_VALUES_FROM: &str = "owl:someValuesFrom";
    pub const OWL_ALL_VALUES_FROM: &str = "owl:allValuesFrom";
    pub const OWL_HAS_VALUE: &str = "owl:hasValue";
    pub const OWL_HAS_SELF: &str = "owl:hasSelf";
    pub const OWL_MIN_CARDINALITY: &str = "owl:minCardinality";
    pub const OWL_MAX_CARDINALITY: &str = "owl:maxCardinality";
    pub const OWL_CARDINALITY: &str = "owl:cardinality";
    pub const OWL_MIN_QUALIFIED_CARDINALITY: &str = "owl:minQualifiedCardinality";
    pub const OWL_MAX_QUALIFIED_CARDINALITY: &str = "owl:maxQualifiedCardinality";
    pub const OWL_QUALIFIED_CARDINALITY: &str = "owl:qualifiedCardinality";
    pub const OWL_ON_CLASS: &str = "owl:onClass";
    pub const OWL_ON_DATA_RANGE: &str = "owl:onDataRange";

    pub const OWL_INTERSECTION_OF: &str = "owl:intersectionOf";
    pub const OWL_UNION_OF: &str = "owl:unionOf";
    pub const OWL_COMPLEMENT_OF: &str = "owl:complementOf";
    pub const OWL_ONE_OF: &str = "owl:oneOf";
    pub const OWL_INVERSE_OF: &str = "owl:inverseOf";

    pub const XSD_BOOLEAN: &str = "xsd:boolean";
    pub const XSD_NON_NEGATIVE_INTEGER: &str = "xsd:nonNegativeInteger";

    /// LDTab datatype discriminator for entity references.
    pub const DATATYPE_IRI: &str = "_IRI";
    /// LDTab datatype discriminator for nested JSON payloads.
    pub const DATATYPE_JSON: &str = "_JSON";
}

/// The object of a value record: a leaf name/literal or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationObject {
    Node(String),
    Tree(AnnotationTree),
}

impl AnnotationObject {
    /// Returns the leaf string if this is not a nested tree.
    pub fn as_node(&self) -> Option<&str> {
        match self {
            Self::Node(s) => Some(s),
            Self::Tree(_) => None,
        }
    }

    /// Returns the nested tree if this is one.
    pub fn as_tree(&self) -> Option<&AnnotationTree> {
        match self {
            Self::Node(_) => None,
            Self::Tree(t) => Some(t),
        }
    }
}

impl From<&str> for AnnotationObject {
    fn from(s: &str) -> Self {
        Self::Node(s.to_owned())
    }
}

impl From<AnnotationTree> for AnnotationObject {
    fn from(t: AnnotationTree) -> Self {
        Self::Tree(t)
    }
}

/// One value record under a predicate.
///
/// The LDTab form carries a `datatype` discriminator (`_IRI`, `_JSON`, a
/// datatype CURIE or a language tag); the thick form omits it, in which case
/// every leaf is read as an entity reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationValue {
    pub object: AnnotationObject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl AnnotationValue {
    /// A bare value record without a datatype discriminator.
    pub fn plain(object: impl Into<AnnotationObject>) -> Self {
        Self {
            object: object.into(),
            datatype: None,
        }
    }

    /// A value record with an explicit datatype discriminator.
    pub fn datatyped(object: impl Into<AnnotationObject>, datatype: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            datatype: Some(datatype.into()),
        }
    }

    /// An entity-reference record (`_IRI`).
    pub fn iri(id: impl Into<String>) -> Self {
        Self::datatyped(AnnotationObject::Node(id.into()), vocab::DATATYPE_IRI)
    }

    /// Whether the record is a leaf entity reference. Records without a
    /// discriminator (the thick form) count as entity references.
    pub fn is_entity_reference(&self) -> bool {
        matches!(self.object, AnnotationObject::Node(_))
            && self
                .datatype
                .as_deref()
                .is_none_or(|d| d == vocab::DATATYPE_IRI)
    }
}

/// A blank-node-rooted sub-expression: predicate -> ordered value records.
///
/// Predicates are kept in `BTreeMap` order so that re-serialization is
/// canonical; the order of the records under one predicate is significant
/// and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationTree(pub BTreeMap<String, Vec<AnnotationValue>>);

impl AnnotationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value record under `predicate`, preserving insertion order.
    pub fn insert(&mut self, predicate: impl Into<String>, value: AnnotationValue) {
        self.0.entry(predicate.into()).or_default().push(value);
    }

    /// Returns the records under `predicate`.
    pub fn get(&self, predicate: &str) -> Option<&[AnnotationValue]> {
        self.0.get(predicate).map(Vec::as_slice)
    }

    /// Returns the first record under `predicate`.
    pub fn first(&self, predicate: &str) -> Option<&AnnotationValue> {
        self.0.get(predicate).and_then(|vs| vs.first())
    }

    /// Returns true if `predicate` has at least one record.
    pub fn contains(&self, predicate: &str) -> bool {
        self.0.contains_key(predicate)
    }

    /// Returns the leaf values of the `rdf:type` records, if any.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.get(vocab::RDF_TYPE)
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.object.as_node())
    }
}

impl fmt::Display for AnnotationTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// A triple whose object may be a structured annotation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThickTriple {
    pub subject: String,
    pub predicate: String,
    pub object: AnnotationObject,
}

impl ThickTriple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<AnnotationObject>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// Renders the JSON transport form.
impl fmt::Display for ThickTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ldtab_object_deserializes() {
        let json = r#"{
            "owl:someValuesFrom": [{"datatype": "_IRI", "object": "obo:OBI_0500000"}],
            "rdf:type": [{"datatype": "_IRI", "object": "owl:Restriction"}],
            "owl:onProperty": [{"datatype": "_IRI", "object": "obo:BFO_0000050"}]
        }"#;
        let tree: AnnotationTree = serde_json::from_str(json).unwrap();
        assert!(tree.contains(vocab::OWL_ON_PROPERTY));
        assert_eq!(tree.types().next(), Some(vocab::OWL_RESTRICTION));
        assert!(tree.first(vocab::OWL_SOME_VALUES_FROM).unwrap().is_entity_reference());
    }

    #[test]
    fn thick_triple_deserializes_without_datatypes() {
        let json = r#"{
            "subject": "obo:OBI_0001636",
            "predicate": "rdfs:subClassOf",
            "object": {
                "owl:someValuesFrom": [{"object": "obo:OBI_0500000"}],
                "rdf:type": [{"object": "owl:Restriction"}],
                "owl:onProperty": [{"object": "obo:BFO_0000050"}]
            }
        }"#;
        let triple: ThickTriple = serde_json::from_str(json).unwrap();
        assert_eq!(triple.subject, "obo:OBI_0001636");
        let tree = triple.object.as_tree().unwrap();
        assert!(tree.first(vocab::OWL_SOME_VALUES_FROM).unwrap().is_entity_reference());
    }

    #[test]
    fn named_object_deserializes_as_node() {
        let triple: ThickTriple = serde_json::from_str(
            r#"{"subject": "ex:A", "predicate": "rdfs:subClassOf", "object": "ex:B"}"#,
        )
        .unwrap();
        assert_eq!(triple.object.as_node(), Some("ex:B"));
    }

    #[test]
    fn reserialization_is_canonical() {
        let json = r#"{"rdf:type":[{"object":"owl:Restriction","datatype":"_IRI"}]}"#;
        let tree: AnnotationTree = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&tree).unwrap();
        let again: AnnotationTree = serde_json::from_str(&out).unwrap();
        assert_eq!(tree, again);
    }
}
