//! Malformed and adversarial inputs must fail loudly, never be repaired.

use oxofn::{
    AnnotationObject, AnnotationTree, Expression, ExpressionParser, OfnError, ParserConfig,
    StructuralError, TypeMap, TypingPolicy, apply_typing_with_policy, object_to_ofn, ofn_to_ldtab,
    to_rdfa,
};

fn tree(json: &str) -> AnnotationTree {
    serde_json::from_str(json).unwrap()
}

#[test]
fn restriction_without_on_property_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:someValuesFrom": [{"object": "ex:C", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(
        err,
        StructuralError::MissingProperty("owl:onProperty")
    ));
}

#[test]
fn restriction_without_a_value_selector_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::UnknownConstruct(_)));
}

#[test]
fn unknown_type_discriminator_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "ex:MadeUpConstruct", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::UnknownConstruct(_)));
}

#[test]
fn anonymous_node_without_discriminator_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{"ex:whatever": [{"object": "ex:C", "datatype": "_IRI"}]}"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::UnknownConstruct(_)));
}

#[test]
fn chain_link_that_is_a_bare_node_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:intersectionOf": [{"object": "ex:notAChain", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::MalformedList(_)));
}

#[test]
fn chain_link_without_first_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:unionOf": [{"object": {
                "rdf:rest": [{"object": "rdf:nil", "datatype": "_IRI"}]
            }, "datatype": "_JSON"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::MalformedList(_)));
}

#[test]
fn chain_link_without_rest_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:unionOf": [{"object": {
                "rdf:first": [{"object": "ex:A", "datatype": "_IRI"}]
            }, "datatype": "_JSON"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::MalformedList(_)));
}

#[test]
fn overlong_chain_is_rejected_as_cyclic() {
    let parser = ExpressionParser::with_config(ParserConfig {
        max_depth: 100,
        max_list_length: 2,
    });
    let t = tree(
        r#"{
            "owl:unionOf": [{"object": {
                "rdf:first": [{"object": "ex:A", "datatype": "_IRI"}],
                "rdf:rest": [{"object": {
                    "rdf:first": [{"object": "ex:B", "datatype": "_IRI"}],
                    "rdf:rest": [{"object": {
                        "rdf:first": [{"object": "ex:C", "datatype": "_IRI"}],
                        "rdf:rest": [{"object": "rdf:nil", "datatype": "_IRI"}]
                    }, "datatype": "_JSON"}]
                }, "datatype": "_JSON"}]
            }, "datatype": "_JSON"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    );
    let err = parser.parse_object(&t).unwrap_err();
    assert!(matches!(err, StructuralError::MalformedList(_)));
}

#[test]
fn nesting_past_the_depth_limit_is_rejected() {
    let parser = ExpressionParser::with_config(ParserConfig {
        max_depth: 2,
        max_list_length: 10_000,
    });
    let t = tree(
        r#"{
            "owl:complementOf": [{"object": {
                "owl:complementOf": [{"object": {
                    "owl:complementOf": [{"object": {
                        "owl:complementOf": [{"object": "ex:A", "datatype": "_IRI"}],
                        "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
                    }, "datatype": "_JSON"}],
                    "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
                }, "datatype": "_JSON"}],
                "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
            }, "datatype": "_JSON"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    );
    let err = parser.parse_object(&t).unwrap_err();
    assert!(matches!(err, StructuralError::TooDeep(2)));
}

#[test]
fn non_integer_cardinality_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:minCardinality": [{"object": "many", "datatype": "xsd:string"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::InvalidCardinality(_)));
}

#[test]
fn entity_reference_in_cardinality_position_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:minCardinality": [{"object": "2", "datatype": "_IRI"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::InvalidCardinality(_)));
}

#[test]
fn qualified_cardinality_without_qualifier_is_rejected() {
    let err = object_to_ofn(&tree(
        r#"{
            "owl:minQualifiedCardinality":
                [{"object": "2", "datatype": "xsd:nonNegativeInteger"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, StructuralError::MissingProperty("owl:onClass")));
}

#[test]
fn unknown_ofn_tag_is_rejected() {
    let err = Expression::from_ofn(r#"["FrobnicateOf","ex:A","ex:B"]"#).unwrap_err();
    assert!(matches!(err, OfnError::UnknownOperator(_)));
}

#[test]
fn wrong_ofn_arity_is_rejected() {
    let err = Expression::from_ofn(r#"["ObjectComplementOf","ex:A","ex:B"]"#).unwrap_err();
    assert!(matches!(
        err,
        OfnError::Structural(StructuralError::Arity { found: 2, .. })
    ));
}

#[test]
fn empty_ofn_array_is_rejected() {
    let err = Expression::from_ofn("[]").unwrap_err();
    assert!(matches!(err, OfnError::Structural(_)));
}

#[test]
fn leaf_cannot_be_serialized_as_an_axiom() {
    let err = ofn_to_ldtab(&Expression::entity("ex:A")).unwrap_err();
    assert!(matches!(err, StructuralError::InvalidValue(_)));
}

#[test]
fn n_ary_equivalence_cannot_become_a_single_triple() {
    let expr =
        Expression::from_ofn(r#"["EquivalentClasses","ex:A","ex:B","ex:C"]"#).unwrap();
    let err = ofn_to_ldtab(&expr).unwrap_err();
    assert!(matches!(err, StructuralError::InvalidValue(_)));
}

#[test]
fn class_expression_in_axiom_subject_position_is_rejected() {
    let expr = Expression::from_ofn(
        r#"["SubClassOf",["ObjectComplementOf","ex:A"],"ex:B"]"#,
    )
    .unwrap();
    assert!(ofn_to_ldtab(&expr).is_err());
}

#[test]
fn strict_typing_fails_when_facts_are_missing() {
    let expr = Expression::from_ofn(
        r#"["SubClassOf","ex:A",["SomeValuesFrom","ex:p","ex:C"]]"#,
    )
    .unwrap();
    let err = apply_typing_with_policy(&expr, &TypeMap::default(), TypingPolicy::Strict)
        .unwrap_err();
    assert_eq!(err.property, "ex:p");
}

#[test]
fn rdfa_refuses_untyped_restrictions() {
    let expr = Expression::from_ofn(
        r#"["SubClassOf","ex:A",["SomeValuesFrom","ex:p","ex:C"]]"#,
    )
    .unwrap();
    assert!(to_rdfa(&expr).is_err());
}

#[test]
fn object_column_garbage_fails_json_deserialization() {
    assert!(serde_json::from_str::<AnnotationObject>("{\"rdf:type\": 7}").is_err());
}
