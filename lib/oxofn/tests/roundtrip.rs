//! Round-trip tests between the triple forms, the IR and the OFN-S text.

use oxofn::{
    AnnotationObject, EntityType, Expression, ThickTriple, TypeMap, apply_typing, ldtab_to_ofn,
    ofn_to_ldtab, ofn_to_thick, thick_to_ofn,
};

fn roundtrip_ldtab(subject: &str, predicate: &str, object_json: &str) {
    let object: AnnotationObject = serde_json::from_str(object_json).unwrap();
    let expr = ldtab_to_ofn(subject, predicate, &object).unwrap();
    let (s, p, o) = ofn_to_ldtab(&expr).unwrap();
    assert_eq!(s, subject);
    assert_eq!(p, predicate);
    assert_eq!(
        serde_json::to_string(&o).unwrap(),
        serde_json::to_string(&object).unwrap()
    );
}

#[test]
fn existential_restriction_roundtrips() {
    roundtrip_ldtab(
        "obo:OBI_0001636",
        "rdfs:subClassOf",
        r#"{
            "owl:onProperty": [{"object": "obo:BFO_0000050", "datatype": "_IRI"}],
            "owl:someValuesFrom": [{"object": "obo:OBI_0500000", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn nested_restriction_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "rdfs:subClassOf",
        r#"{
            "owl:allValuesFrom": [{"object": {
                "owl:hasValue": [{"object": "ex:a", "datatype": "_IRI"}],
                "owl:onProperty": [{"object": "ex:q", "datatype": "_IRI"}],
                "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
            }, "datatype": "_JSON"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn intersection_chain_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "owl:equivalentClass",
        r#"{
            "owl:intersectionOf": [{"object": {
                "rdf:first": [{"object": "ex:B", "datatype": "_IRI"}],
                "rdf:rest": [{"object": {
                    "rdf:first": [{"object": "ex:C", "datatype": "_IRI"}],
                    "rdf:rest": [{"object": "rdf:nil", "datatype": "_IRI"}]
                }, "datatype": "_JSON"}]
            }, "datatype": "_JSON"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn enumeration_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "owl:equivalentClass",
        r#"{
            "owl:oneOf": [{"object": {
                "rdf:first": [{"object": "ex:a", "datatype": "_IRI"}],
                "rdf:rest": [{"object": "rdf:nil", "datatype": "_IRI"}]
            }, "datatype": "_JSON"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn complement_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "owl:disjointWith",
        r#"{
            "owl:complementOf": [{"object": "ex:B", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Class", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn plain_cardinality_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "rdfs:subClassOf",
        r#"{
            "owl:minCardinality":
                [{"object": "2", "datatype": "xsd:nonNegativeInteger"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn qualified_cardinality_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "rdfs:subClassOf",
        r#"{
            "owl:onClass": [{"object": "ex:C", "datatype": "_IRI"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "owl:qualifiedCardinality":
                [{"object": "3", "datatype": "xsd:nonNegativeInteger"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn data_range_qualified_cardinality_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "rdfs:subClassOf",
        r#"{
            "owl:maxQualifiedCardinality":
                [{"object": "1", "datatype": "xsd:nonNegativeInteger"}],
            "owl:onDataRange": [{"object": "xsd:string", "datatype": "_IRI"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn has_self_roundtrips() {
    roundtrip_ldtab(
        "ex:A",
        "rdfs:subClassOf",
        r#"{
            "owl:hasSelf": [{"object": "true", "datatype": "xsd:boolean"}],
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    );
}

#[test]
fn disjoint_union_roundtrips() {
    roundtrip_ldtab(
        "ex:C",
        "owl:disjointUnionOf",
        r#"{
            "rdf:first": [{"object": "ex:A", "datatype": "_IRI"}],
            "rdf:rest": [{"object": {
                "rdf:first": [{"object": "ex:B", "datatype": "_IRI"}],
                "rdf:rest": [{"object": "rdf:nil", "datatype": "_IRI"}]
            }, "datatype": "_JSON"}]
        }"#,
    );
}

#[test]
fn named_object_roundtrips() {
    roundtrip_ldtab("ex:A", "rdfs:subClassOf", r#""ex:B""#);
}

#[test]
fn unknown_predicate_roundtrips_through_the_fallback() {
    roundtrip_ldtab("ex:A", "rdfs:seeAlso", r#""ex:B""#);
}

#[test]
fn thick_triple_roundtrips_without_discriminators() {
    let triple: ThickTriple = serde_json::from_str(
        r#"{
            "subject": "obo:OBI_0001636",
            "predicate": "rdfs:subClassOf",
            "object": {
                "owl:onProperty": [{"object": "obo:BFO_0000050"}],
                "owl:someValuesFrom": [{"object": "obo:OBI_0500000"}],
                "rdf:type": [{"object": "owl:Restriction"}]
            }
        }"#,
    )
    .unwrap();
    let expr = thick_to_ofn(&triple).unwrap();
    assert_eq!(ofn_to_thick(&expr).unwrap(), triple);
}

#[test]
fn typing_does_not_change_the_triple_encoding() {
    let object: AnnotationObject = serde_json::from_str(
        r#"{
            "owl:onProperty": [{"object": "ex:p", "datatype": "_IRI"}],
            "owl:someValuesFrom": [{"object": "ex:C", "datatype": "_IRI"}],
            "rdf:type": [{"object": "owl:Restriction", "datatype": "_IRI"}]
        }"#,
    )
    .unwrap();
    let expr = ldtab_to_ofn("ex:A", "rdfs:subClassOf", &object).unwrap();

    let mut types = TypeMap::default();
    types
        .entry("ex:p".to_owned())
        .or_default()
        .insert(EntityType::ObjectProperty);
    let typed = apply_typing(&expr, &types);
    assert_ne!(typed, expr);

    assert_eq!(ofn_to_ldtab(&typed).unwrap(), ofn_to_ldtab(&expr).unwrap());
}

#[test]
fn ofn_text_roundtrips() {
    for text in [
        r#"["SubClassOf","ex:A","ex:B"]"#,
        r#"["SubClassOf","obo:OBI_0001636",["SomeValuesFrom","obo:BFO_0000050","obo:OBI_0500000"]]"#,
        r#"["EquivalentClasses","ex:A",["ObjectIntersectionOf","ex:B",["ObjectComplementOf","ex:C"]]]"#,
        r#"["SubClassOf","ex:A",["ObjectMinCardinality","2","ex:p","ex:C"]]"#,
        r#"["SubClassOf","ex:A",["ObjectHasSelf","ex:p"]]"#,
        r#"["SubClassOf","ex:A",["DataHasValue","ex:p","\"abc\"^^xsd:string"]]"#,
        r#"["DisjointUnion","ex:C","ex:A","ex:B"]"#,
        r#"["ThickTriple","ex:A","rdfs:seeAlso","ex:B"]"#,
    ] {
        assert_eq!(Expression::from_ofn(text).unwrap().to_ofn(), text);
    }
}

#[test]
fn ofn_text_survives_a_trip_through_the_triple_form() {
    // Restriction tags come back polymorphic; the triple encoding does not
    // record the Object/Data family.
    let text =
        r#"["SubClassOf","ex:A",["ObjectUnionOf",["SomeValuesFrom","ex:p","ex:B"],"ex:C"]]"#;
    let expr = Expression::from_ofn(text).unwrap();
    let (s, p, o) = ofn_to_ldtab(&expr).unwrap();
    assert_eq!(ldtab_to_ofn(&s, &p, &o).unwrap().to_ofn(), text);
}
