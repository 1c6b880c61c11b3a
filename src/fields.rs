//! Canonical field names of the DynamoDB request schema.
//!
//! A [`RequestMap`](crate::map::RequestMap) keys its entries by these literal
//! names. The constants exist so the crate spells each name exactly once;
//! callers going through the typed setters on
//! [`RequestBuilder`](crate::builder::RequestBuilder) never touch them
//! directly, while callers assembling fields generically can.

/// The table the request addresses.
pub const TABLE_NAME: &str = "TableName";

/// The secondary index to read instead of the base table.
pub const INDEX_NAME: &str = "IndexName";

/// The primary key of a single-item operation.
pub const KEY: &str = "Key";

/// The full item body of a put operation.
pub const ITEM: &str = "Item";

/// The key condition of a Query; its presence is what makes a request a
/// Query rather than a Scan.
pub const KEY_CONDITION_EXPRESSION: &str = "KeyConditionExpression";

/// A filter applied server-side after items are read.
pub const FILTER_EXPRESSION: &str = "FilterExpression";

/// The attributes to project into the response.
pub const PROJECTION_EXPRESSION: &str = "ProjectionExpression";

/// The precondition of a conditional write.
pub const CONDITION_EXPRESSION: &str = "ConditionExpression";

/// The mutation clauses of an update.
pub const UPDATE_EXPRESSION: &str = "UpdateExpression";

/// The `#placeholder` → attribute-name sub-mapping. Accumulates one pair at
/// a time rather than being replaced wholesale.
pub const EXPRESSION_ATTRIBUTE_NAMES: &str = "ExpressionAttributeNames";

/// The `:placeholder` → attribute-value sub-mapping. Accumulates one pair at
/// a time rather than being replaced wholesale.
pub const EXPRESSION_ATTRIBUTE_VALUES: &str = "ExpressionAttributeValues";

/// The pagination cursor: the key to resume a Query or Scan after.
pub const EXCLUSIVE_START_KEY: &str = "ExclusiveStartKey";

/// The maximum number of items a Query or Scan evaluates in one call.
pub const LIMIT: &str = "Limit";

/// Whether the read is strongly consistent.
pub const CONSISTENT_READ: &str = "ConsistentRead";

/// Whether a Query traverses the index ascending (`true`) or descending.
pub const SCAN_INDEX_FORWARD: &str = "ScanIndexForward";

/// Which attribute set the response carries (all, projected, count, ...).
pub const SELECT: &str = "Select";

/// The zero-indexed segment of a parallel Scan.
pub const SEGMENT: &str = "Segment";

/// The number of segments a parallel Scan is split into.
pub const TOTAL_SEGMENTS: &str = "TotalSegments";

/// Whether the response reports consumed capacity.
pub const RETURN_CONSUMED_CAPACITY: &str = "ReturnConsumedCapacity";

/// Which item attributes a write reports back.
pub const RETURN_VALUES: &str = "ReturnValues";

/// Whether a write reports item-collection metrics.
pub const RETURN_ITEM_COLLECTION_METRICS: &str = "ReturnItemCollectionMetrics";

/// Which item attributes a failed condition check reports back.
pub const RETURN_VALUES_ON_CONDITION_CHECK_FAILURE: &str = "ReturnValuesOnConditionCheckFailure";
