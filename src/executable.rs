//! The finalized, executable form of a request.

use crate::error::{Error, ExecuteError};
use crate::fields;
use crate::map::RequestMap;
use crate::operation::OperationKind;

use aws_sdk_dynamodb::{Client, operation, types};
use serde_dynamo::to_attribute_value;
use serde_json::Value;
use std::collections;

/// query request fields
#[derive(Clone, Debug, Default, PartialEq)]
struct QueryFields {
    consistent_read: Option<bool>,
    exclusive_start_key: Option<collections::HashMap<String, types::AttributeValue>>,
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    filter_expression: Option<String>,
    index_name: Option<String>,
    key_condition_expression: Option<String>,
    limit: Option<i32>,
    projection_expression: Option<String>,
    return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    scan_index_forward: Option<bool>,
    select: Option<types::Select>,
    table_name: Option<String>,
}

/// scan request fields
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanFields {
    consistent_read: Option<bool>,
    exclusive_start_key: Option<collections::HashMap<String, types::AttributeValue>>,
    expression_attribute_names: Option<collections::HashMap<String, String>>,
    expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    filter_expression: Option<String>,
    index_name: Option<String>,
    limit: Option<i32>,
    projection_expression: Option<String>,
    return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    segment: Option<i32>,
    select: Option<types::Select>,
    table_name: Option<String>,
    total_segments: Option<i32>,
}

fn as_str<'a>(field: &str, value: &'a Value) -> Result<&'a str, Error> {
    value
        .as_str()
        .ok_or_else(|| Error::unexpected_shape(field, "a string"))
}

fn as_boolean(field: &str, value: &Value) -> Result<bool, Error> {
    value
        .as_bool()
        .ok_or_else(|| Error::unexpected_shape(field, "a boolean"))
}

fn as_integer(field: &str, value: &Value) -> Result<i32, Error> {
    value
        .as_i64()
        .and_then(|number| i32::try_from(number).ok())
        .ok_or_else(|| Error::unexpected_shape(field, "a 32-bit integer"))
}

fn as_name_map(field: &str, value: &Value) -> Result<collections::HashMap<String, String>, Error> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::unexpected_shape(field, "an object of attribute names"))?;
    let mut names = collections::HashMap::with_capacity(object.len());
    for (placeholder, name) in object {
        let name = name
            .as_str()
            .ok_or_else(|| Error::unexpected_shape(field, "an object of attribute names"))?;
        names.insert(placeholder.clone(), name.to_owned());
    }
    Ok(names)
}

fn as_attribute_map(
    field: &str,
    value: &Value,
) -> Result<collections::HashMap<String, types::AttributeValue>, Error> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::unexpected_shape(field, "an object of attribute values"))?;
    let mut attributes = collections::HashMap::with_capacity(object.len());
    for (placeholder, value) in object {
        let value = to_attribute_value(value)?;
        attributes.insert(placeholder.clone(), value);
    }
    Ok(attributes)
}

impl TryFrom<&RequestMap> for QueryFields {
    type Error = Error;

    fn try_from(map: &RequestMap) -> Result<Self, Error> {
        let mut query = Self::default();
        for (field, value) in map.iter() {
            match field.as_str() {
                fields::TABLE_NAME => query.table_name = Some(as_str(field, value)?.to_owned()),
                fields::INDEX_NAME => query.index_name = Some(as_str(field, value)?.to_owned()),
                fields::KEY_CONDITION_EXPRESSION => {
                    query.key_condition_expression = Some(as_str(field, value)?.to_owned());
                }
                fields::FILTER_EXPRESSION => {
                    query.filter_expression = Some(as_str(field, value)?.to_owned());
                }
                fields::PROJECTION_EXPRESSION => {
                    query.projection_expression = Some(as_str(field, value)?.to_owned());
                }
                fields::EXPRESSION_ATTRIBUTE_NAMES => {
                    query.expression_attribute_names = Some(as_name_map(field, value)?);
                }
                fields::EXPRESSION_ATTRIBUTE_VALUES => {
                    query.expression_attribute_values = Some(as_attribute_map(field, value)?);
                }
                fields::EXCLUSIVE_START_KEY => {
                    query.exclusive_start_key = Some(as_attribute_map(field, value)?);
                }
                fields::LIMIT => query.limit = Some(as_integer(field, value)?),
                fields::CONSISTENT_READ => {
                    query.consistent_read = Some(as_boolean(field, value)?);
                }
                fields::SCAN_INDEX_FORWARD => {
                    query.scan_index_forward = Some(as_boolean(field, value)?);
                }
                fields::SELECT => query.select = Some(as_str(field, value)?.into()),
                fields::RETURN_CONSUMED_CAPACITY => {
                    query.return_consumed_capacity = Some(as_str(field, value)?.into());
                }
                _ => return Err(Error::foreign_field(field, OperationKind::Query)),
            }
        }
        Ok(query)
    }
}

impl TryFrom<&RequestMap> for ScanFields {
    type Error = Error;

    fn try_from(map: &RequestMap) -> Result<Self, Error> {
        let mut scan = Self::default();
        for (field, value) in map.iter() {
            match field.as_str() {
                fields::TABLE_NAME => scan.table_name = Some(as_str(field, value)?.to_owned()),
                fields::INDEX_NAME => scan.index_name = Some(as_str(field, value)?.to_owned()),
                fields::FILTER_EXPRESSION => {
                    scan.filter_expression = Some(as_str(field, value)?.to_owned());
                }
                fields::PROJECTION_EXPRESSION => {
                    scan.projection_expression = Some(as_str(field, value)?.to_owned());
                }
                fields::EXPRESSION_ATTRIBUTE_NAMES => {
                    scan.expression_attribute_names = Some(as_name_map(field, value)?);
                }
                fields::EXPRESSION_ATTRIBUTE_VALUES => {
                    scan.expression_attribute_values = Some(as_attribute_map(field, value)?);
                }
                fields::EXCLUSIVE_START_KEY => {
                    scan.exclusive_start_key = Some(as_attribute_map(field, value)?);
                }
                fields::LIMIT => scan.limit = Some(as_integer(field, value)?),
                fields::CONSISTENT_READ => scan.consistent_read = Some(as_boolean(field, value)?),
                fields::SEGMENT => scan.segment = Some(as_integer(field, value)?),
                fields::TOTAL_SEGMENTS => scan.total_segments = Some(as_integer(field, value)?),
                fields::SELECT => scan.select = Some(as_str(field, value)?.into()),
                fields::RETURN_CONSUMED_CAPACITY => {
                    scan.return_consumed_capacity = Some(as_str(field, value)?.into());
                }
                _ => return Err(Error::foreign_field(field, OperationKind::Scan)),
            }
        }
        Ok(scan)
    }
}

/// apply read settings shared by query and scan to a fluent builder
macro_rules! apply_read_fields {
    ($builder:expr, $fields:expr) => {
        $builder
            .set_consistent_read($fields.consistent_read)
            .set_exclusive_start_key($fields.exclusive_start_key)
            .set_expression_attribute_names($fields.expression_attribute_names)
            .set_expression_attribute_values($fields.expression_attribute_values)
            .set_filter_expression($fields.filter_expression)
            .set_index_name($fields.index_name)
            .set_limit($fields.limit)
            .set_projection_expression($fields.projection_expression)
            .set_return_consumed_capacity($fields.return_consumed_capacity)
            .set_select($fields.select)
            .set_table_name($fields.table_name)
    };
}

/// The unified output of an executed read.
///
/// Query and Scan report the same shape; collapsing them lets callers
/// consume either operation's result uniformly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadOutput {
    /// The capacity consumed by the operation, when requested.
    pub consumed_capacity: Option<types::ConsumedCapacity>,
    /// The number of items returned.
    pub count: i32,
    /// The returned items, one attribute map per item.
    pub items: Vec<collections::HashMap<String, types::AttributeValue>>,
    /// Where the next page starts, when the operation stopped early.
    pub last_evaluated_key: Option<collections::HashMap<String, types::AttributeValue>>,
    /// The number of items examined before any filtering.
    pub scanned_count: i32,
}

impl From<operation::query::QueryOutput> for ReadOutput {
    fn from(output: operation::query::QueryOutput) -> Self {
        Self {
            consumed_capacity: output.consumed_capacity,
            count: output.count,
            items: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
            scanned_count: output.scanned_count,
        }
    }
}

impl From<operation::scan::ScanOutput> for ReadOutput {
    fn from(output: operation::scan::ScanOutput) -> Self {
        Self {
            consumed_capacity: output.consumed_capacity,
            count: output.count,
            items: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
            scanned_count: output.scanned_count,
        }
    }
}

/// A finalized request bound to the client that executes it.
///
/// Instances come out of
/// [`RequestBuilder::prepare`](crate::RequestBuilder::prepare); the fields
/// are frozen at preparation time and [`send`](Self::send) runs the
/// operation they describe.
///
/// ```rust,no_run
/// use dynamodb_request::RequestBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = aws_sdk_dynamodb::Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
/// let mut builder = RequestBuilder::new(client);
/// builder.table_name("people").limit(10);
///
/// let output = builder.prepare().send().await?;
/// for item in &output.items {
///     println!("{item:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ExecutableRequest {
    client: Client,
    map: RequestMap,
}

impl ExecutableRequest {
    pub(crate) fn new(client: Client, map: RequestMap) -> Self {
        Self { client, map }
    }

    /// The client the request executes on.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The finalized fields, frozen at preparation time.
    pub fn map(&self) -> &RequestMap {
        &self.map
    }

    /// The operation the finalized fields resolve to.
    pub fn operation_kind(&self) -> OperationKind {
        self.map.operation_kind()
    }

    /// Splits the request into its client and finalized fields.
    pub fn into_parts(self) -> (Client, RequestMap) {
        (self.client, self.map)
    }

    /// Executes the request, as a Query when `KeyConditionExpression` is
    /// present and as a Scan otherwise.
    ///
    /// The fields are first translated into the operation's input shape; a
    /// field foreign to that operation, or a value that does not fit its
    /// slot, is reported as [`ExecuteError::Translate`] before anything
    /// reaches the network. One page is fetched per call: the output
    /// carries `last_evaluated_key`, which can be fed back through the
    /// builder's `ExclusiveStartKey` field to continue.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_request.send", err)
    )]
    pub async fn send(self) -> Result<ReadOutput, ExecuteError> {
        let Self { client, map } = self;
        match map.operation_kind() {
            OperationKind::Query => {
                let query = QueryFields::try_from(&map)?;
                let output = apply_read_fields!(client.query(), query)
                    .set_key_condition_expression(query.key_condition_expression)
                    .set_scan_index_forward(query.scan_index_forward)
                    .send()
                    .await?;
                Ok(output.into())
            }
            OperationKind::Scan => {
                let scan = ScanFields::try_from(&map)?;
                let output = apply_read_fields!(client.scan(), scan)
                    .set_segment(scan.segment)
                    .set_total_segments(scan.total_segments)
                    .send()
                    .await?;
                Ok(output.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::Config;
    use aws_sdk_dynamodb::config::BehaviorVersion;
    use rstest::rstest;
    use serde_json::json;

    fn request_map(value: Value) -> RequestMap {
        serde_json::from_value(value).unwrap()
    }

    #[rstest]
    #[case::minimal(
        json!({ "TableName": "a", "KeyConditionExpression": "b" }),
        QueryFields {
            key_condition_expression: Some("b".to_string()),
            table_name: Some("a".to_string()),
            ..Default::default()
        }
    )]
    #[case::full(
        json!({
            "ConsistentRead": true,
            "ExclusiveStartKey": { "id": "7" },
            "ExpressionAttributeNames": { "#n": "name" },
            "ExpressionAttributeValues": { ":min": 21 },
            "FilterExpression": "age >= :min",
            "IndexName": "by_age",
            "KeyConditionExpression": "#n = :name",
            "Limit": 10,
            "ProjectionExpression": "#n, age",
            "ReturnConsumedCapacity": "TOTAL",
            "ScanIndexForward": false,
            "Select": "COUNT",
            "TableName": "people",
        }),
        QueryFields {
            consistent_read: Some(true),
            exclusive_start_key: Some(
                collections::HashMap::from(
                    [
                        (
                            "id".to_string(),
                            types::AttributeValue::S(
                                "7".to_string()
                            )
                        ),
                    ]
                )
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#n".to_string(), "name".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":min".to_string(),
                            types::AttributeValue::N(
                                "21".to_string()
                            )
                        ),
                    ]
                )
            ),
            filter_expression: Some("age >= :min".to_string()),
            index_name: Some("by_age".to_string()),
            key_condition_expression: Some("#n = :name".to_string()),
            limit: Some(10),
            projection_expression: Some("#n, age".to_string()),
            return_consumed_capacity: Some(
                types::ReturnConsumedCapacity::Total
            ),
            scan_index_forward: Some(false),
            select: Some(
                types::Select::Count
            ),
            table_name: Some("people".to_string()),
        }
    )]
    fn test_query_fields_from_map(#[case] value: Value, #[case] expected: QueryFields) {
        let map = request_map(value);
        assert_eq!(QueryFields::try_from(&map).unwrap(), expected);
    }

    #[rstest]
    #[case::segments(
        json!({ "Segment": 0, "TableName": "people", "TotalSegments": 4 }),
        ScanFields {
            segment: Some(0),
            table_name: Some("people".to_string()),
            total_segments: Some(4),
            ..Default::default()
        }
    )]
    #[case::filtered(
        json!({
            "ExpressionAttributeValues": { ":min": 21 },
            "FilterExpression": "age >= :min",
            "TableName": "people",
        }),
        ScanFields {
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":min".to_string(),
                            types::AttributeValue::N(
                                "21".to_string()
                            )
                        ),
                    ]
                )
            ),
            filter_expression: Some("age >= :min".to_string()),
            table_name: Some("people".to_string()),
            ..Default::default()
        }
    )]
    fn test_scan_fields_from_map(#[case] value: Value, #[case] expected: ScanFields) {
        let map = request_map(value);
        assert_eq!(ScanFields::try_from(&map).unwrap(), expected);
    }

    #[rstest]
    #[case::segment_is_foreign(
        json!({ "KeyConditionExpression": "x", "Segment": 0 }),
        "field `Segment` is not part of the Query input schema"
    )]
    #[case::item_is_foreign(
        json!({ "Item": {}, "KeyConditionExpression": "x" }),
        "field `Item` is not part of the Query input schema"
    )]
    #[case::null_key_condition(
        json!({ "KeyConditionExpression": null }),
        "field `KeyConditionExpression` does not fit the request shape: expected a string"
    )]
    #[case::limit_shape(
        json!({ "KeyConditionExpression": "x", "Limit": "ten" }),
        "field `Limit` does not fit the request shape: expected a 32-bit integer"
    )]
    #[case::names_shape(
        json!({ "ExpressionAttributeNames": { "#n": 5 }, "KeyConditionExpression": "x" }),
        "field `ExpressionAttributeNames` does not fit the request shape: \
         expected an object of attribute names"
    )]
    fn test_query_translation_errors(#[case] value: Value, #[case] message: &str) {
        let map = request_map(value);
        assert_eq!(QueryFields::try_from(&map).unwrap_err().to_string(), message);
    }

    #[rstest]
    #[case::scan_index_forward_is_foreign(
        json!({ "ScanIndexForward": true, "TableName": "a" }),
        "field `ScanIndexForward` is not part of the Scan input schema"
    )]
    #[case::update_expression_is_foreign(
        json!({ "UpdateExpression": "SET age = :age" }),
        "field `UpdateExpression` is not part of the Scan input schema"
    )]
    #[case::values_shape(
        json!({ "ExpressionAttributeValues": 21, "TableName": "a" }),
        "field `ExpressionAttributeValues` does not fit the request shape: \
         expected an object of attribute values"
    )]
    fn test_scan_translation_errors(#[case] value: Value, #[case] message: &str) {
        let map = request_map(value);
        assert_eq!(ScanFields::try_from(&map).unwrap_err().to_string(), message);
    }

    #[rstest]
    fn test_read_output_unifies_query_and_scan() {
        let item = collections::HashMap::from([(
            "id".to_string(),
            types::AttributeValue::S("7".to_string()),
        )]);
        let query = operation::query::QueryOutput::builder()
            .items(item.clone())
            .count(1)
            .scanned_count(2)
            .build();
        let scan = operation::scan::ScanOutput::builder()
            .items(item.clone())
            .count(1)
            .scanned_count(2)
            .build();
        let expected = ReadOutput {
            consumed_capacity: None,
            count: 1,
            items: vec![item],
            last_evaluated_key: None,
            scanned_count: 2,
        };
        assert_eq!(ReadOutput::from(query), expected);
        assert_eq!(ReadOutput::from(scan), expected);
    }

    #[rstest]
    fn test_into_parts_hands_back_client_and_map() {
        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();
        let map = request_map(json!({ "TableName": "people" }));
        let request = ExecutableRequest::new(Client::from_conf(config), map.clone());
        assert_eq!(request.map(), &map);
        assert_eq!(request.operation_kind(), OperationKind::Scan);
        let (_client, inner) = request.into_parts();
        assert_eq!(inner, map);
    }
}
