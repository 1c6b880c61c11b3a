//! The request builder: typed, generic, and dynamically dispatched field
//! assembly.

use crate::client::ProvideClient;
use crate::dispatch::{Call, Outcome};
use crate::error::Error;
use crate::executable::ExecutableRequest;
use crate::fields;
use crate::map::RequestMap;
use crate::normalize::{Finalize, Normalizer};
use crate::operation::OperationKind;

use aws_sdk_dynamodb::Client;
use serde_json::Value;
use std::{fmt, sync};

/// A fluent builder accumulating the fields of one DynamoDB request.
///
/// A builder starts empty and grows a [`RequestMap`] through three
/// equivalent surfaces: typed setters covering the request vocabulary
/// ([`table_name`](Self::table_name), [`limit`](Self::limit), ...), the open
/// [`set`](Self::set)/[`has`](Self::has) pair for any field name, and the
/// dynamically dispatched [`call`](Self::call). Once the fields are in
/// place, [`prepare`](Self::prepare) snapshots them into an
/// [`ExecutableRequest`]; the builder stays usable and prepares any number
/// of requests. Whether a prepared request runs as a Query or a Scan
/// follows from the fields alone, see
/// [`operation_kind`](Self::operation_kind).
///
/// Cloning a builder copies its fields; the client source and the finalizer
/// are shared between the clones.
///
/// ```rust,no_run
/// use dynamodb_request::RequestBuilder;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = aws_sdk_dynamodb::Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
/// let mut builder = RequestBuilder::new(client);
/// builder
///     .table_name("people")
///     .key_condition_expression("#n = :name")
///     .expression_attribute_name("#n", "name")
///     .expression_attribute_value(":name", json!("alice"))
///     .limit(25);
///
/// let output = builder.prepare().send().await?;
/// println!("matched {} items", output.count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestBuilder {
    finalizer: sync::Arc<dyn Finalize + Send + Sync>,
    map: RequestMap,
    provider: sync::Arc<dyn ProvideClient + Send + Sync>,
}

impl RequestBuilder {
    /// Creates an empty builder drawing clients from `provider`: an
    /// existing [`Client`], an `aws_sdk_dynamodb::Config`, or any other
    /// [`ProvideClient`] implementation.
    pub fn new(provider: impl ProvideClient + Send + Sync + 'static) -> Self {
        Self {
            finalizer: sync::Arc::new(Normalizer),
            map: RequestMap::new(),
            provider: sync::Arc::new(provider),
        }
    }

    /// Replaces the stock [`Normalizer`] with a custom finalizer.
    ///
    /// ```rust
    /// use dynamodb_request::{RequestBuilder, RequestMap};
    ///
    /// let builder = RequestBuilder::new(aws_sdk_dynamodb::Config::builder().build())
    ///     .with_finalizer(|mut map: RequestMap| {
    ///         if !map.contains("Limit") {
    ///             map.insert("Limit", 100);
    ///         }
    ///         map
    ///     });
    /// ```
    pub fn with_finalizer(mut self, finalizer: impl Finalize + Send + Sync + 'static) -> Self {
        self.finalizer = sync::Arc::new(finalizer);
        self
    }

    /// Replaces the entire map with `map`, discarding every field set so
    /// far. Nothing is validated or merged; the new contents are taken
    /// as-is, so a map deserialized from stored or incoming JSON can seed
    /// the builder directly.
    ///
    /// ```rust
    /// use dynamodb_request::{RequestBuilder, RequestMap};
    /// use serde_json::json;
    ///
    /// # fn example() -> Result<(), serde_json::Error> {
    /// let mut builder = RequestBuilder::new(aws_sdk_dynamodb::Config::builder().build());
    /// builder.set("Select", "COUNT");
    ///
    /// let map: RequestMap = serde_json::from_value(json!({
    ///     "TableName": "people",
    ///     "Limit": 10,
    /// }))?;
    /// builder.hydrate(map);
    /// assert!(builder.has("Limit"));
    /// assert!(!builder.has("Select"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn hydrate(&mut self, map: impl Into<RequestMap>) -> &mut Self {
        self.map = map.into();
        self
    }

    /// Sets `field` to `value`, replacing any previous value. The name is
    /// taken verbatim and not validated here; fields outside the request
    /// vocabulary are only rejected once the map is translated for
    /// execution.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.map.insert(field, value);
        self
    }

    /// Returns whether `field` is present, regardless of its value: a
    /// field explicitly set to `null` still reports `true`.
    pub fn has(&self, field: &str) -> bool {
        self.map.contains(field)
    }

    /// Dispatches a method by name.
    ///
    /// The name is parsed by its prefix: `set<Field>` stores `argument`
    /// under `Field` (storing `null` when no argument is given) and
    /// returns [`Outcome::Stored`], while `has<Field>` ignores `argument`
    /// and returns [`Outcome::Present`] with the field's presence. The
    /// remainder after the prefix is taken verbatim, exactly like
    /// [`set`](Self::set). A name with neither prefix is rejected as
    /// [`Error::UnsupportedMethod`], a bare `set` or `has` as
    /// [`Error::MissingField`]; the map is never touched in either case.
    ///
    /// ```rust
    /// use dynamodb_request::{Outcome, RequestBuilder};
    /// use serde_json::json;
    ///
    /// # fn example() -> Result<(), dynamodb_request::Error> {
    /// let mut builder = RequestBuilder::new(aws_sdk_dynamodb::Config::builder().build());
    /// builder.call("setTableName", Some(json!("people")))?;
    /// assert_eq!(builder.call("hasTableName", None)?, Outcome::Present(true));
    /// assert!(builder.call("truncateTable", None).is_err());
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_request.call", err)
    )]
    pub fn call(&mut self, method: &str, argument: Option<Value>) -> Result<Outcome, Error> {
        match Call::parse(method, "RequestBuilder")? {
            Call::Set(field) => {
                self.map.insert(field, argument.unwrap_or(Value::Null));
                Ok(Outcome::Stored)
            }
            Call::Has(field) => Ok(Outcome::Present(self.map.contains(field))),
        }
    }

    /// Merges one `placeholder` → attribute-`name` pair into the
    /// `ExpressionAttributeNames` field. Other placeholders are left in
    /// place; a placeholder written twice keeps its latest name.
    pub fn expression_attribute_name(
        &mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> &mut Self {
        self.map
            .accumulate(fields::EXPRESSION_ATTRIBUTE_NAMES, placeholder, name.into());
        self
    }

    /// Merges one `placeholder` → `value` pair into the
    /// `ExpressionAttributeValues` field. Other placeholders are left in
    /// place; a placeholder written twice keeps its latest value.
    pub fn expression_attribute_value(
        &mut self,
        placeholder: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.map
            .accumulate(fields::EXPRESSION_ATTRIBUTE_VALUES, placeholder, value);
        self
    }

    /// The accumulated fields, exactly as set so far (not finalized).
    pub fn map(&self) -> &RequestMap {
        &self.map
    }

    /// Resolves the operation the current fields describe: [`Query`] as
    /// soon as `KeyConditionExpression` is present, whatever its value,
    /// [`Scan`] otherwise.
    ///
    /// [`Query`]: OperationKind::Query
    /// [`Scan`]: OperationKind::Scan
    pub fn operation_kind(&self) -> OperationKind {
        self.map.operation_kind()
    }

    /// Finalizes a snapshot of the accumulated fields into an executable
    /// request.
    ///
    /// The map is cloned, passed through the finalizer, and paired with a
    /// client drawn from the builder's provider. The builder itself is
    /// left untouched: it keeps its un-finalized fields and every call
    /// prepares a fresh request.
    pub fn prepare(&self) -> ExecutableRequest {
        self.prepare_on(self.provider.provide_client())
    }

    /// Like [`prepare`](Self::prepare), but the request executes on the
    /// supplied `client` instead of one drawn from the provider.
    pub fn prepare_with(&self, client: Client) -> ExecutableRequest {
        self.prepare_on(client)
    }

    fn prepare_on(&self, client: Client) -> ExecutableRequest {
        let map = self.finalizer.finalize(self.map.clone());
        ExecutableRequest::new(client, map)
    }
}

/// typed setter and predicate for each request field
macro_rules! impl_field_methods {
    ($($setter:ident, $predicate:ident => $field:expr, $name:literal;)*) => {
        impl RequestBuilder {
            $(
                #[doc = concat!("Sets the `", $name, "` field, replacing any previous value.")]
                pub fn $setter(&mut self, value: impl Into<Value>) -> &mut Self {
                    self.set($field, value)
                }

                #[doc = concat!("Returns whether the `", $name, "` field is present.")]
                pub fn $predicate(&self) -> bool {
                    self.has($field)
                }
            )*
        }
    };
}

impl_field_methods! {
    table_name, has_table_name => fields::TABLE_NAME, "TableName";
    index_name, has_index_name => fields::INDEX_NAME, "IndexName";
    key, has_key => fields::KEY, "Key";
    item, has_item => fields::ITEM, "Item";
    key_condition_expression, has_key_condition_expression => fields::KEY_CONDITION_EXPRESSION, "KeyConditionExpression";
    filter_expression, has_filter_expression => fields::FILTER_EXPRESSION, "FilterExpression";
    projection_expression, has_projection_expression => fields::PROJECTION_EXPRESSION, "ProjectionExpression";
    condition_expression, has_condition_expression => fields::CONDITION_EXPRESSION, "ConditionExpression";
    update_expression, has_update_expression => fields::UPDATE_EXPRESSION, "UpdateExpression";
    expression_attribute_names, has_expression_attribute_names => fields::EXPRESSION_ATTRIBUTE_NAMES, "ExpressionAttributeNames";
    expression_attribute_values, has_expression_attribute_values => fields::EXPRESSION_ATTRIBUTE_VALUES, "ExpressionAttributeValues";
    exclusive_start_key, has_exclusive_start_key => fields::EXCLUSIVE_START_KEY, "ExclusiveStartKey";
    limit, has_limit => fields::LIMIT, "Limit";
    consistent_read, has_consistent_read => fields::CONSISTENT_READ, "ConsistentRead";
    scan_index_forward, has_scan_index_forward => fields::SCAN_INDEX_FORWARD, "ScanIndexForward";
    select, has_select => fields::SELECT, "Select";
    segment, has_segment => fields::SEGMENT, "Segment";
    total_segments, has_total_segments => fields::TOTAL_SEGMENTS, "TotalSegments";
    return_consumed_capacity, has_return_consumed_capacity => fields::RETURN_CONSUMED_CAPACITY, "ReturnConsumedCapacity";
    return_values, has_return_values => fields::RETURN_VALUES, "ReturnValues";
    return_item_collection_metrics, has_return_item_collection_metrics => fields::RETURN_ITEM_COLLECTION_METRICS, "ReturnItemCollectionMetrics";
    return_values_on_condition_check_failure, has_return_values_on_condition_check_failure => fields::RETURN_VALUES_ON_CONDITION_CHECK_FAILURE, "ReturnValuesOnConditionCheckFailure";
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RequestBuilder")
            .field("map", &self.map)
            .finish_non_exhaustive()
    }
}
