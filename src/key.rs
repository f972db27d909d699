//! Field-key parsing.
//!
//! Filter keys carry up to three pieces of information: a column name, an optional
//! `relation.column` dot path, and an optional trailing comparison-operator suffix
//! (e.g. `price>=`, `company.country`, `status`). Parsing never fails; anything
//! that does not match the grammar falls back to an equality test on the whole key.

/// Comparison operators accepted as a field-key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl FilterOperator {
    /// Parse an operator symbol run (e.g. `">="`) against the closed set.
    ///
    /// Returns `None` for runs outside the set, such as `"><"` or `"=!"`; callers
    /// fall back to [`FilterOperator::Eq`] rather than passing a malformed operator
    /// through to the query layer.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" | "==" => Some(Self::Eq),
            "!=" | "<>" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

/// A column reference, optionally scoped to a named relation.
///
/// One level of relationship traversal is supported: `company.name` means column
/// `name` on the relation `company`. In a path with more than one dot the remainder
/// after the first dot is passed through verbatim as the related column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Relation name when the path was dotted (e.g. `company` in `company.name`).
    pub relation: Option<String>,
    /// Column name on the entity the target is scoped to.
    pub column: String,
}

impl Target {
    /// Parse a column specifier, splitting a dotted path on the first dot.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        match spec.split_once('.') {
            Some((relation, column)) => Self {
                relation: Some(relation.to_string()),
                column: column.to_string(),
            },
            None => Self {
                relation: None,
                column: spec.to_string(),
            },
        }
    }

    /// A plain top-level column target.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            relation: None,
            column: name.into(),
        }
    }

    /// A relation-scoped column target.
    #[must_use]
    pub fn related(relation: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            relation: Some(relation.into()),
            column: column.into(),
        }
    }
}

/// Result of parsing a filter field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub target: Target,
    pub operator: FilterOperator,
}

/// Parse a filter field key into its target column and comparison operator.
///
/// Grammar for the operator suffix: the key must be a run of `[A-Za-z0-9_.]`
/// followed by a trailing run of `[<>!=]`. When the key matches, the trailing run
/// is interpreted as the operator and the prefix as the column path; otherwise the
/// whole key is the column path and the operator defaults to equality.
#[must_use]
pub fn parse_field_key(key: &str) -> ParsedKey {
    let (path, operator) = split_operator_suffix(key);
    ParsedKey {
        target: Target::parse(path),
        operator,
    }
}

fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '!' | '=')
}

fn split_operator_suffix(key: &str) -> (&str, FilterOperator) {
    let path = key.trim_end_matches(is_operator_char);
    if path.len() == key.len() || path.is_empty() || !path.chars().all(is_path_char) {
        // No suffix, or the prefix falls outside the grammar: the whole key is the
        // column path.
        return (key, FilterOperator::Eq);
    }
    let suffix = &key[path.len()..];
    // Runs outside the closed operator set fall back to equality.
    let operator = FilterOperator::from_symbol(suffix).unwrap_or(FilterOperator::Eq);
    (path, operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_defaults_to_equality() {
        let parsed = parse_field_key("status");
        assert_eq!(parsed.target, Target::column("status"));
        assert_eq!(parsed.operator, FilterOperator::Eq);
    }

    #[test]
    fn operator_suffixes_are_extracted() {
        for (key, op) in [
            ("price>=", FilterOperator::Ge),
            ("price<=", FilterOperator::Le),
            ("price>", FilterOperator::Gt),
            ("price<", FilterOperator::Lt),
            ("price!=", FilterOperator::Ne),
            ("price<>", FilterOperator::Ne),
            ("price=", FilterOperator::Eq),
        ] {
            let parsed = parse_field_key(key);
            assert_eq!(parsed.target, Target::column("price"), "key {key}");
            assert_eq!(parsed.operator, op, "key {key}");
        }
    }

    #[test]
    fn dotted_key_splits_into_relation_and_column() {
        let parsed = parse_field_key("company.name");
        assert_eq!(parsed.target, Target::related("company", "name"));
        assert_eq!(parsed.operator, FilterOperator::Eq);
    }

    #[test]
    fn dotted_key_with_operator_suffix() {
        let parsed = parse_field_key("company.founded>=");
        assert_eq!(parsed.target, Target::related("company", "founded"));
        assert_eq!(parsed.operator, FilterOperator::Ge);
    }

    #[test]
    fn multi_dot_path_splits_on_first_dot_only() {
        let parsed = parse_field_key("a.b.c");
        assert_eq!(parsed.target, Target::related("a", "b.c"));
    }

    #[test]
    fn unknown_operator_run_falls_back_to_equality() {
        let parsed = parse_field_key("price><");
        assert_eq!(parsed.target, Target::column("price"));
        assert_eq!(parsed.operator, FilterOperator::Eq);
    }

    #[test]
    fn key_outside_grammar_is_taken_verbatim() {
        // A space breaks the path grammar, so the trailing '>' is not an operator.
        let parsed = parse_field_key("pri ce>");
        assert_eq!(parsed.target, Target::column("pri ce>"));
        assert_eq!(parsed.operator, FilterOperator::Eq);
    }

    #[test]
    fn bare_operator_run_is_taken_verbatim() {
        let parsed = parse_field_key(">=");
        assert_eq!(parsed.target, Target::column(">="));
        assert_eq!(parsed.operator, FilterOperator::Eq);
    }
}
