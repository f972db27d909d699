//! # flexfilter
//!
//! Translate a loosely-structured set of filter parameters and a free-text search
//! term into conditions on a Sea-ORM query, so list/search endpoints do not have to
//! hand-write repetitive conditional-filter logic.
//!
//! Filter keys may carry a trailing comparison operator (`price>=`) and/or a dotted
//! `relation.column` path (`company.name`); the search term matches every
//! space-separated word against any of the searchable columns. Relation-scoped
//! conditions lower to EXISTS subqueries, so parent rows are never duplicated and
//! nothing is eagerly loaded.
//!
//! ```
//! use flexfilter::{build_condition, EntitySchema, FilterSet, Target};
//!
//! let filters = FilterSet::from_json_str(r#"{"price>=": 100, "company.country": "US"}"#);
//! let schema = EntitySchema::new("products")
//!     .relation("company", "companies", "company_id", "id");
//! let searchable = [Target::parse("title"), Target::parse("company.name")];
//!
//! let condition = build_condition(&filters, Some("red car"), &searchable, &schema).unwrap();
//! assert!(condition.is_some());
//! ```
//!
//! The translation itself is a pure value: [`translate`] produces an explicit
//! condition tree ([`Node`]) that can be inspected in tests without a database, and
//! [`lower`] turns it into a [`sea_orm::Condition`]. [`apply`] composes the two
//! onto a `Select`.
//!
//! Empty or null filter values never produce a condition; unparseable operator
//! suffixes fall back to equality; an empty search term or an empty searchable
//! column list disables the keyword-search pass. Field names are not validated
//! against any schema: the caller is trusted to supply safe column names.

pub mod apply;
pub mod key;
pub mod lower;
pub mod schema;
pub mod translate;
pub mod tree;
pub mod value;

pub use apply::{apply, build_condition};
pub use key::{parse_field_key, FilterOperator, ParsedKey, Target};
pub use lower::{lower, TranslateError};
pub use schema::{EntitySchema, RelationSpec};
pub use translate::{keyword_node, translate};
pub use tree::Node;
pub use value::{FilterSet, FilterValue};
