//! Public call surface: attach translated conditions to a Sea-ORM select.

use sea_orm::{Condition, EntityTrait, QueryFilter, Select};

use crate::key::Target;
use crate::lower::{lower, TranslateError};
use crate::schema::EntitySchema;
use crate::translate::translate;
use crate::value::FilterSet;

/// Build the combined condition for the given filters and keyword search.
///
/// Returns `None` when neither pass produced anything, so callers never attach an
/// empty WHERE group.
///
/// # Errors
///
/// Returns [`TranslateError::UnknownRelation`] when a dotted target names a
/// relation the schema does not register.
pub fn build_condition(
    filters: &FilterSet,
    search_term: Option<&str>,
    searchable_columns: &[Target],
    schema: &EntitySchema,
) -> Result<Option<Condition>, TranslateError> {
    let tree = translate(filters, search_term, searchable_columns);
    if tree.is_empty() {
        return Ok(None);
    }
    lower(&tree, schema).map(Some)
}

/// Apply filters and keyword search to a select, returning the conditions-applied
/// query. With no filters and no search term the select is returned unmodified.
///
/// # Errors
///
/// Returns [`TranslateError::UnknownRelation`] when a dotted target names a
/// relation the schema does not register.
pub fn apply<E: EntityTrait>(
    query: Select<E>,
    filters: &FilterSet,
    search_term: Option<&str>,
    searchable_columns: &[Target],
    schema: &EntitySchema,
) -> Result<Select<E>, TranslateError> {
    match build_condition(filters, search_term, searchable_columns, schema)? {
        Some(condition) => Ok(query.filter(condition)),
        None => Ok(query),
    }
}
