//! The OFN-S textual surface form.
//!
//! OFN-S serializes an expression as nested JSON arrays: the first element
//! of each array is the operator tag, the remaining elements are arguments.
//! Leaf strings are entity references unless they carry embedded quotes
//! (the literal convention inherited from the LDTab encoding) or stand in an
//! integer position.

use crate::error::{OfnError, StructuralError};
use crate::expression::{Expression, OfnLiteral, OperatorTag};
use crate::triple::vocab;
use serde_json::Value;

impl Expression {
    /// Parses OFN-S text.
    ///
    /// Fails with [`UnknownOperatorError`](crate::UnknownOperatorError) when
    /// an array head is not in the grammar table, and with a structural
    /// error when an operator's argument count violates its contract.
    pub fn from_ofn(text: &str) -> Result<Self, OfnError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_ofn_value(&value)
    }

    /// Parses an already-deserialized OFN-S value.
    pub fn from_ofn_value(value: &Value) -> Result<Self, OfnError> {
        match value {
            Value::String(s) => Ok(parse_leaf(s)),
            Value::Number(n) => Ok(Self::literal(n.to_string())),
            Value::Array(items) => {
                let (head, args) = items.split_first().ok_or_else(|| {
                    StructuralError::InvalidValue("empty OFN-S array".to_owned())
                })?;
                let tag: OperatorTag = head
                    .as_str()
                    .ok_or_else(|| {
                        StructuralError::InvalidValue(
                            "OFN-S array head is not an operator tag".to_owned(),
                        )
                    })?
                    .parse()?;
                let args = args
                    .iter()
                    .map(Self::from_ofn_value)
                    .collect::<Result<Vec<_>, _>>()?;
                if !tag.signature().arity.admits(args.len()) {
                    return Err(StructuralError::arity(tag, args.len()).into());
                }
                Ok(Self::Operator(tag, args))
            }
            other => Err(StructuralError::InvalidValue(format!(
                "unexpected OFN-S value: {other}"
            ))
            .into()),
        }
    }

    /// Renders the OFN-S text form. Labeled entities render as their label,
    /// matching the output of the labeling pass.
    pub fn to_ofn(&self) -> String {
        self.to_ofn_value().to_string()
    }

    /// Renders the OFN-S value form.
    pub fn to_ofn_value(&self) -> Value {
        match self {
            Self::Entity(e) => Value::String(e.display_name().to_owned()),
            Self::Literal(l) => Value::String(render_literal(l)),
            Self::Operator(tag, args) => {
                let mut items = Vec::with_capacity(args.len() + 1);
                items.push(Value::String(tag.as_str().to_owned()));
                items.extend(args.iter().map(Self::to_ofn_value));
                Value::Array(items)
            }
        }
    }
}

fn parse_leaf(s: &str) -> Expression {
    if let Some(rest) = s.strip_prefix('"') {
        if let Some(idx) = rest.rfind('"') {
            let value = &rest[..idx];
            let suffix = &rest[idx + 1..];
            if suffix.is_empty() {
                return Expression::literal(value);
            }
            if let Some(dt) = suffix.strip_prefix("^^") {
                return Expression::Literal(OfnLiteral::typed(value, dt));
            }
            if suffix.starts_with('@') {
                return Expression::Literal(OfnLiteral::typed(value, suffix));
            }
        }
        // Stray quote without the literal shape; keep the raw text.
        return Expression::literal(s);
    }
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return Expression::literal(s);
    }
    Expression::entity(s)
}

fn render_literal(l: &OfnLiteral) -> String {
    match l.datatype() {
        None => {
            if !l.value().is_empty() && l.value().bytes().all(|b| b.is_ascii_digit()) {
                l.value().to_owned()
            } else {
                format!("\"{}\"", l.value())
            }
        }
        Some(vocab::DATATYPE_JSON) => l.value().to_owned(),
        Some(dt) if dt.starts_with('@') => format!("\"{}\"{dt}", l.value()),
        Some(dt) if dt == vocab::XSD_NON_NEGATIVE_INTEGER => l.value().to_owned(),
        Some(dt) => format!("\"{}\"^^{dt}", l.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_arrays() {
        let e = Expression::from_ofn(
            r#"["SubClassOf","obo:OBI_0001636",["SomeValuesFrom","obo:BFO_0000050","obo:OBI_0500000"]]"#,
        )
        .unwrap();
        assert_eq!(e.tag(), Some(OperatorTag::SubClassOf));
        assert_eq!(
            e.to_ofn(),
            r#"["SubClassOf","obo:OBI_0001636",["SomeValuesFrom","obo:BFO_0000050","obo:OBI_0500000"]]"#
        );
    }

    #[test]
    fn unknown_tag_aborts() {
        let err = Expression::from_ofn(r#"["FrobnicateOf","ex:A"]"#).unwrap_err();
        assert!(matches!(err, OfnError::UnknownOperator(_)));
    }

    #[test]
    fn arity_is_checked() {
        let err = Expression::from_ofn(r#"["SubClassOf","ex:A"]"#).unwrap_err();
        assert!(matches!(
            err,
            OfnError::Structural(StructuralError::Arity { found: 1, .. })
        ));
    }

    #[test]
    fn quoted_leaves_are_literals() {
        let e = Expression::from_ofn(r#"["DataHasValue","ex:p","\"42\"^^xsd:integer"]"#).unwrap();
        let Expression::Operator(_, args) = &e else {
            panic!("expected operator");
        };
        let lit = args[1].as_literal().unwrap();
        assert_eq!(lit.value(), "42");
        assert_eq!(lit.datatype(), Some("xsd:integer"));
        assert_eq!(e.to_ofn(), r#"["DataHasValue","ex:p","\"42\"^^xsd:integer"]"#);
    }

    #[test]
    fn integer_leaves_are_literals() {
        let e = Expression::from_ofn(r#"["ObjectMinCardinality","2","ex:p"]"#).unwrap();
        let Expression::Operator(_, args) = &e else {
            panic!("expected operator");
        };
        assert!(args[0].as_literal().is_some());
        assert_eq!(e.to_ofn(), r#"["ObjectMinCardinality","2","ex:p"]"#);
    }
}
