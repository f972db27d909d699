//! Relation metadata for lowering relation-scoped conditions.
//!
//! Dotted targets (`company.name`) lower to EXISTS subqueries, which need to know
//! the related table and the column pair joining it to the parent. Only relations
//! actually referenced by a dotted path need to be registered.

/// Describes one named relation of the parent entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationSpec {
    /// The relation name used in dotted paths (e.g. `company`).
    pub name: String,
    /// The related table (e.g. `companies`).
    pub table: String,
    /// The join column on the parent table (e.g. `company_id`, or `id` for a
    /// has-many relation).
    pub parent_key: String,
    /// The join column on the related table (e.g. `id`, or the foreign key back to
    /// the parent for a has-many relation).
    pub related_key: String,
}

impl RelationSpec {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        parent_key: impl Into<String>,
        related_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            parent_key: parent_key.into(),
            related_key: related_key.into(),
        }
    }
}

/// The parent table plus its named relations.
#[derive(Debug, Clone, Default)]
pub struct EntitySchema {
    /// The parent table name conditions are built against.
    pub table: String,
    relations: Vec<RelationSpec>,
}

impl EntitySchema {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            relations: Vec::new(),
        }
    }

    /// Register a relation, builder style.
    #[must_use]
    pub fn relation(
        mut self,
        name: impl Into<String>,
        table: impl Into<String>,
        parent_key: impl Into<String>,
        related_key: impl Into<String>,
    ) -> Self {
        self.relations
            .push(RelationSpec::new(name, table, parent_key, related_key));
        self
    }

    #[must_use]
    pub fn find_relation(&self, name: &str) -> Option<&RelationSpec> {
        self.relations.iter().find(|rel| rel.name == name)
    }
}
