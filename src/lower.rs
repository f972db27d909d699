//! Lowering condition trees onto Sea-ORM conditions.
//!
//! Groups map to [`Condition::all`]/[`Condition::any`]; relation-scoped leaves map
//! to EXISTS subqueries so parent rows are never duplicated and the relation never
//! has to be eagerly loaded.

use sea_orm::{
    Condition,
    sea_query::{Alias, Expr, LikeExpr, Query, SimpleExpr},
};
use thiserror::Error;

use crate::key::{FilterOperator, Target};
use crate::schema::{EntitySchema, RelationSpec};
use crate::tree::Node;
use crate::value::FilterValue;

/// Errors surfaced while lowering a condition tree.
///
/// Parsing never fails; the only fallible step is resolving a relation name
/// against the caller-supplied schema.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("unknown relation `{name}` in filter target")]
    UnknownRelation { name: String },
}

/// Lower a condition tree onto a [`Condition`].
///
/// # Errors
///
/// Returns [`TranslateError::UnknownRelation`] when a dotted target names a
/// relation the schema does not register.
pub fn lower(node: &Node, schema: &EntitySchema) -> Result<Condition, TranslateError> {
    match node {
        Node::All(children) => lower_group(Condition::all(), children, schema),
        Node::Any(children) => lower_group(Condition::any(), children, schema),
        Node::Compare {
            target,
            operator,
            value,
        } => Ok(Condition::all().add(scoped_expr(target, schema, |column| {
            compare_expr(column, *operator, value)
        })?)),
        Node::Contains { target, term } => Ok(Condition::all()
            .add(scoped_expr(target, schema, |column| contains_expr(column, term))?)),
    }
}

fn lower_group(
    mut condition: Condition,
    children: &[Node],
    schema: &EntitySchema,
) -> Result<Condition, TranslateError> {
    for child in children {
        condition = match child {
            Node::All(_) | Node::Any(_) => condition.add(lower(child, schema)?),
            Node::Compare {
                target,
                operator,
                value,
            } => condition.add(scoped_expr(target, schema, |column| {
                compare_expr(column, *operator, value)
            })?),
            Node::Contains { target, term } => condition
                .add(scoped_expr(target, schema, |column| contains_expr(column, term))?),
        };
    }
    Ok(condition)
}

/// Build a predicate on the target column and, for dotted targets, wrap it in an
/// EXISTS subquery scoped to the named relation.
fn scoped_expr(
    target: &Target,
    schema: &EntitySchema,
    predicate: impl FnOnce(Expr) -> SimpleExpr,
) -> Result<SimpleExpr, TranslateError> {
    match &target.relation {
        None => Ok(predicate(Expr::col(Alias::new(target.column.as_str())))),
        Some(name) => {
            let relation = schema
                .find_relation(name)
                .ok_or_else(|| TranslateError::UnknownRelation { name: name.clone() })?;
            tracing::trace!(
                relation = name.as_str(),
                table = relation.table.as_str(),
                "scoping condition to relation via EXISTS"
            );
            let column = Expr::col((
                Alias::new(relation.table.as_str()),
                Alias::new(target.column.as_str()),
            ));
            Ok(exists_expr(schema, relation, predicate(column)))
        }
    }
}

fn compare_expr(column: Expr, operator: FilterOperator, value: &FilterValue) -> SimpleExpr {
    let value = value.to_query_value();
    match operator {
        FilterOperator::Eq => column.eq(value),
        FilterOperator::Ne => column.ne(value),
        FilterOperator::Lt => column.lt(value),
        FilterOperator::Le => column.lte(value),
        FilterOperator::Gt => column.gt(value),
        FilterOperator::Ge => column.gte(value),
    }
}

fn contains_expr(column: Expr, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like_wildcards(term));
    column.like(LikeExpr::new(pattern).escape('\\'))
}

/// `EXISTS (SELECT 1 FROM related WHERE related.related_key = parent.parent_key
/// AND <predicate>)`
fn exists_expr(
    schema: &EntitySchema,
    relation: &RelationSpec,
    predicate: SimpleExpr,
) -> SimpleExpr {
    let related = Alias::new(relation.table.as_str());
    let mut subquery = Query::select();
    subquery
        .expr(Expr::val(1))
        .from(related.clone())
        .and_where(
            Expr::col((related, Alias::new(relation.related_key.as_str()))).equals((
                Alias::new(schema.table.as_str()),
                Alias::new(relation.parent_key.as_str()),
            )),
        )
        .and_where(predicate);
    Expr::exists(subquery.take())
}

/// Escape LIKE wildcards so a literal `%`/`_` in a search term cannot act as a
/// wildcard. Backslash first.
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
