//! RDFa emitter.
//!
//! Renders an HTML fragment that carries both the machine identifier
//! (`about` attributes) and the human label (element text). The element
//! `class` attribute names the OWL construct, so the IR must be fully typed:
//! a polymorphic tag has no committed Object/Data class name and is rejected
//! with a [`RenderError`].

use crate::error::RenderError;
use crate::expression::{Entity, Expression, OfnLiteral, OperatorTag};
use crate::grammar::{PREC_AND, PREC_ATOM, PREC_OR, PREC_UNARY};

/// Renders `expr` as an RDFa/HTML fragment.
///
/// Fails with [`RenderError::UntypedOperator`] if the tree still contains a
/// polymorphic restriction tag; run the typing pass first.
pub fn to_rdfa(expr: &Expression) -> Result<String, RenderError> {
    let mut out = String::new();
    write_expr(expr, 0, &mut out)?;
    Ok(out)
}

fn write_expr(expr: &Expression, min_prec: u8, out: &mut String) -> Result<(), RenderError> {
    match expr {
        Expression::Entity(e) => {
            write_entity(e, out);
            Ok(())
        }
        Expression::Literal(l) => {
            write_literal(l, out);
            Ok(())
        }
        Expression::Operator(tag, args) => {
            if tag.is_polymorphic() {
                return Err(RenderError::UntypedOperator(*tag));
            }
            let prec = tag.signature().precedence;
            out.push_str("<span class=\"");
            out.push_str(tag.as_str());
            out.push_str("\">");
            if prec < min_prec {
                out.push('(');
            }
            write_operator(*tag, args, out)?;
            if prec < min_prec {
                out.push(')');
            }
            out.push_str("</span>");
            Ok(())
        }
    }
}

fn write_operator(
    tag: OperatorTag,
    args: &[Expression],
    out: &mut String,
) -> Result<(), RenderError> {
    #[expect(clippy::enum_glob_use)]
    use OperatorTag::*;
    let keyword = tag.signature().keyword;
    match tag {
        SubClassOf | EquivalentClasses | DisjointClasses => {
            let keyword = keyword.unwrap_or(tag.as_str());
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write_keyword(keyword, out);
                }
                write_expr(arg, PREC_OR, out)?;
            }
            Ok(())
        }
        DisjointUnion => {
            write_expr(&args[0], PREC_OR, out)?;
            write_keyword("DisjointUnionOf", out);
            write_separated(&args[1..], ", ", PREC_OR, out)
        }
        ThickTriple => write_separated(args, " ", PREC_ATOM, out),
        ObjectIntersectionOf => write_separated(args, " and ", PREC_UNARY, out),
        ObjectUnionOf => write_separated(args, " or ", PREC_AND, out),
        ObjectComplementOf => {
            out.push_str("not ");
            write_expr(&args[0], PREC_UNARY, out)
        }
        ObjectOneOf => {
            out.push('{');
            write_separated(args, ", ", PREC_ATOM, out)?;
            out.push('}');
            Ok(())
        }
        ObjectInverseOf => {
            out.push_str("inverse ");
            write_expr(&args[0], PREC_ATOM, out)
        }
        ObjectSomeValuesFrom | DataSomeValuesFrom | ObjectAllValuesFrom | DataAllValuesFrom
        | ObjectHasValue | DataHasValue => {
            write_expr(&args[0], PREC_UNARY, out)?;
            write_keyword(keyword.unwrap_or_default(), out);
            write_expr(&args[1], PREC_UNARY, out)
        }
        ObjectHasSelf => {
            write_expr(&args[0], PREC_UNARY, out)?;
            write_keyword("Self", out);
            Ok(())
        }
        ObjectMinCardinality | DataMinCardinality | ObjectMaxCardinality | DataMaxCardinality
        | ObjectExactCardinality | DataExactCardinality => {
            write_expr(&args[1], PREC_UNARY, out)?;
            write_keyword(keyword.unwrap_or_default(), out);
            write_expr(&args[0], PREC_ATOM, out)?;
            if let Some(filler) = args.get(2) {
                out.push(' ');
                write_expr(filler, PREC_UNARY, out)?;
            }
            Ok(())
        }
        // Polymorphic tags are rejected before dispatch.
        SomeValuesFrom | AllValuesFrom | HasValue | MinCardinality | MaxCardinality
        | ExactCardinality => Err(RenderError::UntypedOperator(tag)),
    }
}

fn write_separated(
    args: &[Expression],
    separator: &str,
    min_prec: u8,
    out: &mut String,
) -> Result<(), RenderError> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_expr(arg, min_prec, out)?;
    }
    Ok(())
}

fn write_keyword(keyword: &str, out: &mut String) {
    out.push(' ');
    out.push_str(keyword);
    out.push(' ');
}

fn write_entity(entity: &Entity, out: &mut String) {
    out.push_str("<span about=\"");
    escape_html(entity.id(), out);
    out.push_str("\">");
    escape_html(entity.display_name(), out);
    out.push_str("</span>");
}

fn write_literal(literal: &OfnLiteral, out: &mut String) {
    out.push_str("<span class=\"literal\">");
    escape_html(literal.value(), out);
    out.push_str("</span>");
}

fn escape_html(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
