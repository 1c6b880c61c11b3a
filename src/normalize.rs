//! The finalize seam a map crosses on its way to execution.

use crate::fields;
use crate::map::RequestMap;

use serde_json::Value;

/// A transformation applied to the accumulated map when a request is
/// prepared.
///
/// The builder hands its map through this seam on every
/// [`prepare`](crate::RequestBuilder::prepare), so expression rewriting,
/// reserved-word aliasing, or any other late normalization can be plugged in
/// without touching assembly. Closures taking and returning a [`RequestMap`]
/// implement the trait directly.
///
/// ```rust
/// use dynamodb_request::{Finalize, RequestMap};
/// use serde_json::json;
///
/// let capped = |mut map: RequestMap| {
///     if !map.contains("Limit") {
///         map.insert("Limit", 25);
///     }
///     map
/// };
///
/// let map = capped.finalize(RequestMap::new());
/// assert_eq!(map.get("Limit"), Some(&json!(25)));
/// ```
pub trait Finalize {
    /// Transforms an accumulated map into the map that is executed.
    fn finalize(&self, map: RequestMap) -> RequestMap;
}

impl<F> Finalize for F
where
    F: Fn(RequestMap) -> RequestMap,
{
    fn finalize(&self, map: RequestMap) -> RequestMap {
        self(map)
    }
}

/// The stock finalizer.
///
/// Drops `ExpressionAttributeNames` and `ExpressionAttributeValues` fields
/// whose sub-objects ended up empty, so an expression helper that never
/// contributed a placeholder does not leave a hollow parameter behind.
/// Every other field passes through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Normalizer;

impl Finalize for Normalizer {
    fn finalize(&self, mut map: RequestMap) -> RequestMap {
        for field in [
            fields::EXPRESSION_ATTRIBUTE_NAMES,
            fields::EXPRESSION_ATTRIBUTE_VALUES,
        ] {
            let hollow = map
                .get(field)
                .and_then(Value::as_object)
                .is_some_and(serde_json::Map::is_empty);
            if hollow {
                map.remove(field);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::drops_empty_accumulators(
        json!({
            "TableName": "people",
            "ExpressionAttributeNames": {},
            "ExpressionAttributeValues": {},
        }),
        json!({ "TableName": "people" })
    )]
    #[case::keeps_populated_accumulators(
        json!({
            "ExpressionAttributeNames": { "#n": "name" },
            "ExpressionAttributeValues": {},
        }),
        json!({ "ExpressionAttributeNames": { "#n": "name" } })
    )]
    #[case::leaves_other_empty_objects(
        json!({ "Key": {}, "ExclusiveStartKey": {} }),
        json!({ "Key": {}, "ExclusiveStartKey": {} })
    )]
    #[case::leaves_non_object_accumulators(
        json!({ "ExpressionAttributeValues": ":v" }),
        json!({ "ExpressionAttributeValues": ":v" })
    )]
    fn test_normalizer(#[case] input: Value, #[case] expected: Value) {
        let map: RequestMap = serde_json::from_value(input).unwrap();
        let finalized = Normalizer.finalize(map);
        assert_eq!(serde_json::to_value(&finalized).unwrap(), expected);
    }

    #[rstest]
    fn test_closures_implement_finalize() {
        let rename = |mut map: RequestMap| {
            map.insert("TableName", "people_v2");
            map
        };
        let mut map = RequestMap::new();
        map.insert("TableName", "people");
        let finalized = rename.finalize(map);
        assert_eq!(finalized.get("TableName"), Some(&json!("people_v2")));
    }
}
