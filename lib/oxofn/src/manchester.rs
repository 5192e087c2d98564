//! Manchester syntax emitter.
//!
//! Recursive descent guided by the grammar table: each tag contributes its
//! keyword and precedence, and a child whose own precedence is below what
//! its slot requires is parenthesized. Axiom-level tags render at the top
//! level without enclosing parentheses. Untyped restriction tags share their
//! Object counterparts' keywords, so a partially typed tree still renders.

use crate::expression::{Entity, Expression, OfnLiteral, OperatorTag};
use crate::grammar::{PREC_AND, PREC_ATOM, PREC_OR, PREC_UNARY};

/// Renders `expr` as Manchester syntax text.
///
/// Entity leaves render as their label when one is attached, as their
/// identifier otherwise; names containing whitespace or reserved punctuation
/// are single-quoted.
pub fn to_manchester(expr: &Expression) -> String {
    let mut out = String::new();
    write_expr(expr, 0, &mut out);
    out
}

fn write_expr(expr: &Expression, min_prec: u8, out: &mut String) {
    match expr {
        Expression::Entity(e) => write_name(e, out),
        Expression::Literal(l) => write_literal(l, out),
        Expression::Operator(tag, args) => {
            let prec = tag.signature().precedence;
            let parenthesize = prec < min_prec;
            if parenthesize {
                out.push('(');
            }
            write_operator(*tag, args, out);
            if parenthesize {
                out.push(')');
            }
        }
    }
}

fn write_operator(tag: OperatorTag, args: &[Expression], out: &mut String) {
    #[expect(clippy::enum_glob_use)]
    use OperatorTag::*;
    let keyword = tag.signature().keyword;
    match tag {
        SubClassOf | EquivalentClasses | DisjointClasses => {
            // `A SubClassOf B`; n-ary axioms chain the keyword.
            let keyword = keyword.unwrap_or(tag.as_str());
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                    out.push_str(keyword);
                    out.push(' ');
                }
                write_expr(arg, PREC_OR, out);
            }
        }
        DisjointUnion => {
            let (class, members) = (&args[0], &args[1..]);
            write_expr(class, PREC_OR, out);
            out.push_str(" DisjointUnionOf ");
            write_separated(members, ", ", PREC_OR, out);
        }
        ThickTriple => write_separated(args, " ", PREC_ATOM, out),
        ObjectIntersectionOf => write_separated(args, " and ", PREC_UNARY, out),
        ObjectUnionOf => write_separated(args, " or ", PREC_AND, out),
        ObjectComplementOf => {
            out.push_str("not ");
            write_expr(&args[0], PREC_UNARY, out);
        }
        ObjectOneOf => {
            out.push('{');
            write_separated(args, ", ", PREC_ATOM, out);
            out.push('}');
        }
        ObjectInverseOf => {
            out.push_str("inverse ");
            write_expr(&args[0], PREC_ATOM, out);
        }
        SomeValuesFrom | ObjectSomeValuesFrom | DataSomeValuesFrom | AllValuesFrom
        | ObjectAllValuesFrom | DataAllValuesFrom | HasValue | ObjectHasValue | DataHasValue => {
            write_expr(&args[0], PREC_UNARY, out);
            out.push(' ');
            out.push_str(keyword.unwrap_or_default());
            out.push(' ');
            write_expr(&args[1], PREC_UNARY, out);
        }
        ObjectHasSelf => {
            write_expr(&args[0], PREC_UNARY, out);
            out.push_str(" Self");
        }
        MinCardinality | ObjectMinCardinality | DataMinCardinality | MaxCardinality
        | ObjectMaxCardinality | DataMaxCardinality | ExactCardinality
        | ObjectExactCardinality | DataExactCardinality => {
            // `p min 2` or `p min 2 C`; argument order in the IR is
            // [n, property, filler?].
            write_expr(&args[1], PREC_UNARY, out);
            out.push(' ');
            out.push_str(keyword.unwrap_or_default());
            out.push(' ');
            write_expr(&args[0], PREC_ATOM, out);
            if let Some(filler) = args.get(2) {
                out.push(' ');
                write_expr(filler, PREC_UNARY, out);
            }
        }
    }
}

fn write_separated(args: &[Expression], separator: &str, min_prec: u8, out: &mut String) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_expr(arg, min_prec, out);
    }
}

fn write_name(entity: &Entity, out: &mut String) {
    let name = entity.display_name();
    if needs_quoting(name) {
        out.push('\'');
        for c in name.chars() {
            if c == '\'' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
    } else {
        out.push_str(name);
    }
}

fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace()
                || matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ',' | '\'' | '"')
        })
}

fn write_literal(literal: &OfnLiteral, out: &mut String) {
    let value = literal.value();
    match literal.datatype() {
        None if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            out.push_str(value);
        }
        None => {
            out.push('"');
            out.push_str(value);
            out.push('"');
        }
        Some(dt) if dt.starts_with('@') => {
            out.push('"');
            out.push_str(value);
            out.push('"');
            out.push_str(dt);
        }
        Some(dt) => {
            if dt == crate::triple::vocab::XSD_NON_NEGATIVE_INTEGER {
                out.push_str(value);
            } else {
                out.push('"');
                out.push_str(value);
                out.push_str("\"^^");
                out.push_str(dt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::{LabelMap, apply_labeling};

    #[test]
    fn axiom_renders_without_outer_parentheses() {
        let e = Expression::from_ofn(
            r#"["SubClassOf","obo:OBI_0001636",["ObjectSomeValuesFrom","obo:BFO_0000050","obo:OBI_0500000"]]"#,
        )
        .unwrap();
        assert_eq!(
            to_manchester(&e),
            "obo:OBI_0001636 SubClassOf obo:BFO_0000050 some obo:OBI_0500000"
        );
    }

    #[test]
    fn low_precedence_fillers_are_parenthesized() {
        let e = Expression::from_ofn(
            r#"["ObjectSomeValuesFrom","ex:p",["ObjectUnionOf","ex:A","ex:B"]]"#,
        )
        .unwrap();
        assert_eq!(to_manchester(&e), "ex:p some (ex:A or ex:B)");
    }

    #[test]
    fn conjunction_of_disjunctions_parenthesizes_the_disjunctions() {
        let e = Expression::from_ofn(
            r#"["ObjectIntersectionOf",["ObjectUnionOf","ex:A","ex:B"],"ex:C"]"#,
        )
        .unwrap();
        assert_eq!(to_manchester(&e), "(ex:A or ex:B) and ex:C");
    }

    #[test]
    fn disjunction_of_conjunctions_needs_no_parentheses() {
        let e = Expression::from_ofn(
            r#"["ObjectUnionOf",["ObjectIntersectionOf","ex:A","ex:B"],"ex:C"]"#,
        )
        .unwrap();
        assert_eq!(to_manchester(&e), "ex:A and ex:B or ex:C");
    }

    #[test]
    fn labels_substitute_and_quote() {
        let e = Expression::from_ofn(r#"["ObjectSomeValuesFrom","ex:p","obo:CHEBI_33262"]"#)
            .unwrap();
        let labels: LabelMap = [("obo:CHEBI_33262", "citric acid")].into_iter().collect();
        assert_eq!(
            to_manchester(&apply_labeling(&e, &labels)),
            "ex:p some 'citric acid'"
        );
    }

    #[test]
    fn untyped_tags_fall_back_to_the_shared_keyword() {
        let e = Expression::from_ofn(r#"["SomeValuesFrom","ex:p","ex:C"]"#).unwrap();
        assert_eq!(to_manchester(&e), "ex:p some ex:C");
    }

    #[test]
    fn cardinality_and_enumeration_render() {
        let e = Expression::from_ofn(
            r#"["ObjectIntersectionOf",["ObjectMinCardinality","2","ex:p"],["ObjectOneOf","ex:a","ex:b"]]"#,
        )
        .unwrap();
        assert_eq!(to_manchester(&e), "ex:p min 2 and {ex:a, ex:b}");
    }

    #[test]
    fn has_self_and_inverse_render() {
        let e = Expression::from_ofn(
            r#"["ObjectSomeValuesFrom",["ObjectInverseOf","ex:p"],["ObjectHasSelf","ex:q"]]"#,
        )
        .unwrap();
        assert_eq!(to_manchester(&e), "inverse ex:p some ex:q Self");
    }
}
