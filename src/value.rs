//! Filter values and the ordered filter set.
//!
//! Values are a closed sum over the scalar kinds the query layer supports instead
//! of an untyped map, so type mismatches surface at the boundary rather than at
//! query-execution time.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// A scalar filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
}

impl FilterValue {
    /// Whether this value disables its filter entry. Null and the empty string
    /// never produce a condition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Convert a JSON scalar into a filter value.
    ///
    /// Arrays and objects are not scalars and map to [`FilterValue::Null`], which
    /// the filter pass skips.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::Bool(b) => Self::Bool(*b),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Self::Null,
        }
    }

    pub(crate) fn to_query_value(&self) -> sea_orm::Value {
        match self {
            Self::Null => sea_orm::Value::String(None),
            Self::String(s) => s.clone().into(),
            Self::Int(i) => (*i).into(),
            Self::Float(f) => (*f).into(),
            Self::Bool(b) => (*b).into(),
            Self::Uuid(u) => (*u).into(),
            Self::DateTime(dt) => (*dt).into(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Uuid> for FilterValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

/// An ordered mapping from field keys to filter values.
///
/// Insertion order is preserved: conditions are AND-combined in the order keys are
/// encountered, so the produced condition tree is deterministic and testable.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    entries: Vec<(String, FilterValue)>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Parse a JSON object string into a filter set, preserving key order.
    ///
    /// Invalid JSON or a non-object document yields an empty set, matching the
    /// degrade-gracefully contract of the translator.
    #[must_use]
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "invalid filter JSON, ignoring");
                Self::new()
            }
        }
    }
}

impl FromIterator<(String, FilterValue)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for FilterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // serde_json's Map keeps insertion order (preserve_order feature).
        let map = serde_json::Map::deserialize(deserializer)?;
        Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), FilterValue::from_json(value)))
            .collect())
    }
}
