#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Request
//!
//! A fluent, field-driven builder for assembling and dispatching Amazon DynamoDB requests.
//!
//! ## Overview
//!
//! This library treats a DynamoDB request as an open map of named fields and:
//! - Grows the map through typed setters, a generic `set`/`has` pair, or
//!   dynamically dispatched `set<Field>`/`has<Field>` method names
//! - Resolves the operation (Query or Scan) from the fields themselves, never
//!   from a flag
//! - Finalizes a snapshot of the map through a pluggable normalization seam
//! - Executes prepared requests on clients drawn from a pluggable source
//!
//! ## Quick Example
//!
//! Build the request field by field; the presence of `KeyConditionExpression`
//! is what makes it a Query:
//!
//! ```no_run
//! use dynamodb_request::RequestBuilder;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = aws_sdk_dynamodb::Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! let mut builder = RequestBuilder::new(client);
//! builder
//!     .table_name("people")
//!     .key_condition_expression("#n = :name")
//!     .expression_attribute_name("#n", "name")
//!     .expression_attribute_value(":name", json!("alice"))
//!     .limit(25);
//!
//! let output = builder.prepare().send().await?;
//! println!("matched {} of {} items", output.count, output.scanned_count);
//! # Ok(())
//! # }
//! ```
//!
//! The same builder can be driven entirely by name, the way a dynamic front
//! end (an ORM layer, a scripting bridge) hands calls through:
//!
//! ```
//! use dynamodb_request::{Outcome, RequestBuilder};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), dynamodb_request::Error> {
//! let mut builder = RequestBuilder::new(aws_sdk_dynamodb::Config::builder().build());
//! builder.call("setTableName", Some(json!("people")))?;
//! assert_eq!(builder.call("hasTableName", None)?, Outcome::Present(true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@builder`] - The request builder and its three setter surfaces
//! - [`mod@client`] - The client source seam
//! - [`mod@dispatch`] - Dynamic method-name parsing
//! - [`mod@error`] - Assembly and execution errors
//! - [`mod@executable`] - Prepared requests and their execution
//! - [`mod@fields`] - Canonical request field names
//! - [`mod@map`] - The ordered field map underlying every request
//! - [`mod@normalize`] - The finalize seam crossed at preparation
//! - [`mod@operation`] - Query/Scan resolution

/// The request builder and its setter surfaces.
pub mod builder;

/// The client source a builder draws on.
pub mod client;

/// Parsing of dynamically dispatched method names.
pub mod dispatch;

/// Errors raised while assembling or executing requests.
pub mod error;

/// Prepared requests and their execution.
pub mod executable;

/// Canonical field names of the request vocabulary.
pub mod fields;

/// The ordered field map underlying every request.
pub mod map;

/// The finalize seam crossed when requests are prepared.
pub mod normalize;

/// Resolution of the operation a request runs as.
pub mod operation;

pub use builder::RequestBuilder;
pub use client::ProvideClient;
pub use dispatch::{Call, Outcome};
pub use error::{Error, ExecuteError};
pub use executable::{ExecutableRequest, ReadOutput};
pub use map::RequestMap;
pub use normalize::{Finalize, Normalizer};
pub use operation::OperationKind;
