//! An ordered field map holding the parameters of a request in progress.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields;
use crate::operation::OperationKind;

/// The parameters of a request, keyed by DynamoDB field name.
///
/// Fields keep their insertion order and hold plain [`serde_json::Value`]s,
/// so a map can be assembled incrementally, inspected, serialized, or loaded
/// wholesale from deserialized input. Writing a field that is already present
/// overwrites it in place.
///
/// ```rust
/// use dynamodb_request::RequestMap;
/// use serde_json::json;
///
/// let mut map = RequestMap::new();
/// map.insert("TableName", json!("people"));
/// map.accumulate("ExpressionAttributeValues", ":min", json!(21));
///
/// assert!(map.contains("TableName"));
/// assert_eq!(
///     map.get("ExpressionAttributeValues"),
///     Some(&json!({ ":min": 21 })),
/// );
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestMap {
    entries: IndexMap<String, Value>,
}

impl RequestMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to `value`, returning the previous value if the field was
    /// already present. The field keeps its original position when
    /// overwritten.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(field.into(), value.into())
    }

    /// Returns whether `field` is present, regardless of its value: a field
    /// set to `null`, `0`, or `""` still counts.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field)
    }

    /// Removes `field`, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.entries.shift_remove(field)
    }

    /// Merges a `placeholder` entry into the object stored under `field`.
    ///
    /// The object is created on first use, and a placeholder written twice
    /// keeps only its latest value while every other placeholder is left
    /// untouched. A non-object value already stored under `field` is
    /// discarded and replaced by a fresh object.
    pub fn accumulate(
        &mut self,
        field: impl Into<String>,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
    ) {
        let slot = self
            .entries
            .entry(field.into())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(placeholders) = slot {
            placeholders.insert(placeholder.into(), value.into());
        }
    }

    /// Returns the number of fields in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map holds no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Resolves the read operation this map describes: [`Query`] when a
    /// `KeyConditionExpression` field is present, [`Scan`] otherwise. Only
    /// the presence of the field matters, never its value.
    ///
    /// [`Query`]: OperationKind::Query
    /// [`Scan`]: OperationKind::Scan
    pub fn operation_kind(&self) -> OperationKind {
        if self.contains(fields::KEY_CONDITION_EXPRESSION) {
            OperationKind::Query
        } else {
            OperationKind::Scan
        }
    }
}

impl From<Map<String, Value>> for RequestMap {
    fn from(object: Map<String, Value>) -> Self {
        object.into_iter().collect()
    }
}

impl FromIterator<(String, Value)> for RequestMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
