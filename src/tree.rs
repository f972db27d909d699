//! The explicit condition tree.
//!
//! The translator produces an immutable tree of AND-groups, OR-groups, and leaves
//! instead of mutating a query through nested closures. The AND-of-ORs shape of the
//! keyword-search pass is therefore directly testable without a live database.

use crate::key::{FilterOperator, Target};
use crate::value::FilterValue;

/// A node in the condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Children combined with logical AND.
    All(Vec<Node>),
    /// Children combined with logical OR.
    Any(Vec<Node>),
    /// A comparison leaf: `column <op> value`, optionally relation-scoped.
    Compare {
        target: Target,
        operator: FilterOperator,
        value: FilterValue,
    },
    /// A substring-match leaf: `column LIKE %term%`, optionally relation-scoped.
    Contains { target: Target, term: String },
}

impl Node {
    /// An AND-group over the given children.
    #[must_use]
    pub fn all(children: Vec<Node>) -> Self {
        Self::All(children)
    }

    /// An OR-group over the given children.
    #[must_use]
    pub fn any(children: Vec<Node>) -> Self {
        Self::Any(children)
    }

    #[must_use]
    pub fn compare(target: Target, operator: FilterOperator, value: impl Into<FilterValue>) -> Self {
        Self::Compare {
            target,
            operator,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn contains(target: Target, term: impl Into<String>) -> Self {
        Self::Contains {
            target,
            term: term.into(),
        }
    }

    /// Whether this node contributes no condition at all.
    ///
    /// A group with no (non-empty) children is empty; leaves never are. Applying an
    /// empty tree must leave the query unmodified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All(children) | Self::Any(children) => {
                children.iter().all(Self::is_empty)
            }
            Self::Compare { .. } | Self::Contains { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_groups_are_empty() {
        assert!(Node::all(vec![]).is_empty());
        assert!(Node::any(vec![]).is_empty());
        assert!(Node::all(vec![Node::any(vec![])]).is_empty());
    }

    #[test]
    fn leaves_are_not_empty() {
        let leaf = Node::contains(Target::column("title"), "red");
        assert!(!leaf.is_empty());
        assert!(!Node::all(vec![leaf]).is_empty());
    }
}
