//! Signature extraction.

use crate::expression::Expression;
use rustc_hash::FxHashSet;

/// Collects every entity identifier reachable from `expr`.
///
/// Literals are excluded; the result is a true set, so the traversal order
/// does not matter. An atom-only expression yields a singleton.
pub fn extract_signature(expr: &Expression) -> FxHashSet<String> {
    let mut signature = FxHashSet::default();
    collect(expr, &mut signature);
    signature
}

fn collect(expr: &Expression, signature: &mut FxHashSet<String>) {
    match expr {
        Expression::Entity(e) => {
            signature.insert(e.id().to_owned());
        }
        Expression::Literal(_) => {}
        Expression::Operator(_, args) => {
            for arg in args {
                collect(arg, signature);
            }
        }
    }
}
