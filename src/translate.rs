//! The two translation passes: field filters and keyword search.

use crate::key::{parse_field_key, Target};
use crate::tree::Node;
use crate::value::FilterSet;

/// Translate filters and an optional keyword search into a condition tree.
///
/// Filter entries are AND-combined in insertion order; the keyword-search
/// contribution, when present, is appended as one final AND-group. The result is a
/// pure value: lowering it onto a query happens separately.
#[must_use]
pub fn translate(
    filters: &FilterSet,
    search_term: Option<&str>,
    searchable_columns: &[Target],
) -> Node {
    let mut clauses = Vec::with_capacity(filters.len() + 1);

    for (key, value) in filters.iter() {
        if value.is_empty() {
            tracing::trace!(field = key, "skipping empty filter value");
            continue;
        }
        let parsed = parse_field_key(key);
        clauses.push(Node::compare(parsed.target, parsed.operator, value.clone()));
    }

    if let Some(search) = keyword_node(search_term, searchable_columns) {
        clauses.push(search);
    }

    tracing::debug!(clauses = clauses.len(), "translated filter parameters");
    Node::all(clauses)
}

/// Build the keyword-search subtree: AND across terms, OR across columns.
///
/// Returns `None` when the term is absent/empty or no searchable columns were
/// given. The term is split on single spaces; empty terms produced by consecutive
/// spaces are dropped, since a `LIKE '%%'` leaf matches every row and would
/// silently weaken the conjunction.
#[must_use]
pub fn keyword_node(search_term: Option<&str>, searchable_columns: &[Target]) -> Option<Node> {
    let search_term = search_term?;
    if search_term.is_empty() || searchable_columns.is_empty() {
        return None;
    }

    let per_term: Vec<Node> = search_term
        .split(' ')
        .filter(|term| !term.is_empty())
        .map(|term| {
            Node::any(
                searchable_columns
                    .iter()
                    .map(|target| Node::contains(target.clone(), term))
                    .collect(),
            )
        })
        .collect();

    if per_term.is_empty() {
        None
    } else {
        Some(Node::all(per_term))
    }
}
