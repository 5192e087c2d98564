//! Conversion engine for OWL class-expression axioms.
//!
//! This crate reconstructs a shared intermediate representation
//! ([`Expression`]) from several concrete serializations of the same logical
//! structure, rewrites it, and re-serializes it:
//! - ingest from LDTab annotation trees and thick triples
//!   ([`ldtab_to_ofn`], [`thick_to_ofn`], [`object_to_ofn`]);
//! - signature extraction ([`extract_signature`]), which drives type/label
//!   lookups in the enclosing application;
//! - type-directed disambiguation of polymorphic operators
//!   ([`apply_typing`]) and label attachment ([`apply_labeling`]);
//! - emission to OFN-S text ([`Expression::to_ofn`]), Manchester syntax
//!   ([`to_manchester`]), RDFa markup ([`to_rdfa`]) and back to the triple
//!   forms ([`ofn_to_ldtab`], [`ofn_to_thick`]).
//!
//! Every transformation is a pure function over immutable values; a batch of
//! inputs sharing one [`TypeMap`]/[`LabelMap`] can be processed concurrently
//! without coordination.
//!
//! # Example
//! ```
//! use oxofn::{ThickTriple, thick_to_ofn};
//!
//! let triple: ThickTriple = serde_json::from_str(
//!     r#"{
//!         "subject": "obo:OBI_0001636",
//!         "predicate": "rdfs:subClassOf",
//!         "object": {
//!             "owl:someValuesFrom": [{"object": "obo:OBI_0500000"}],
//!             "rdf:type": [{"object": "owl:Restriction"}],
//!             "owl:onProperty": [{"object": "obo:BFO_0000050"}]
//!         }
//!     }"#,
//! )?;
//! let expr = thick_to_ofn(&triple)?;
//! assert_eq!(
//!     expr.to_ofn(),
//!     r#"["SubClassOf","obo:OBI_0001636",["SomeValuesFrom","obo:BFO_0000050","obo:OBI_0500000"]]"#
//! );
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod error;
mod expression;
mod grammar;
mod labeling;
mod manchester;
mod ofn;
mod parser;
mod rdfa;
mod serializer;
mod signature;
mod triple;
mod typing;

pub use error::{OfnError, RenderError, StructuralError, TypingError, UnknownOperatorError};
pub use expression::{Entity, Expression, OfnLiteral, OperatorTag};
pub use grammar::{ArgKind, Arity, Family, Signature};
pub use labeling::{LabelMap, apply_labeling};
pub use manchester::to_manchester;
pub use parser::{ExpressionParser, ParserConfig, ldtab_to_ofn, object_to_ofn, thick_to_ofn};
pub use rdfa::to_rdfa;
pub use serializer::{ExpressionSerializer, ofn_to_ldtab, ofn_to_object, ofn_to_thick};
pub use signature::extract_signature;
pub use triple::{AnnotationObject, AnnotationTree, AnnotationValue, ThickTriple, vocab};
pub use typing::{
    EntityType, TypeMap, TypingPolicy, apply_typing, apply_typing_with_policy,
};
