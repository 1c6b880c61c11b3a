//! Error types for request assembly and dispatch.
//!
//! Everything in [`Error`] is a contract violation on the caller's side
//! (a mistyped method name, a value that cannot take the wire shape);
//! nothing here is transient or retried. SDK failures raised while an
//! [`ExecutableRequest`](crate::ExecutableRequest) is sent propagate
//! unchanged through [`ExecuteError`].

use crate::operation;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{query, scan};

/// Errors raised while assembling a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dynamically dispatched name carried neither a `set` nor a `has`
    /// prefix, so there is nothing it could mean on the builder.
    #[error("no method `{method}` on `{builder}`: dynamic calls must use a `set` or `has` prefix")]
    UnsupportedMethod {
        /// The offending name, exactly as dispatched.
        method: String,
        /// The type the call was aimed at.
        builder: &'static str,
    },

    /// A dispatched name was a bare prefix with no field after it, which
    /// would otherwise store a value under the empty key.
    #[error("dynamic call `{method}` names no field after its `{prefix}` prefix")]
    MissingField {
        /// The offending name, exactly as dispatched.
        method: String,
        /// The prefix the name consisted of.
        prefix: &'static str,
    },

    /// A field holds a value that does not fit the shape the operation
    /// input expects (for example a string where `Limit` needs a number).
    #[error("field `{field}` does not fit the request shape: expected {expected}")]
    UnexpectedShape {
        /// The field whose value was rejected.
        field: String,
        /// A short description of the shape the field takes.
        expected: &'static str,
    },

    /// A field has no counterpart in the chosen operation's input schema.
    /// The builder itself accepts any field name; the mismatch only
    /// surfaces once an operation is picked and translated.
    #[error("field `{field}` is not part of the {operation} input schema")]
    ForeignField {
        /// The field with no counterpart.
        field: String,
        /// The operation whose schema rejected it.
        operation: operation::OperationKind,
    },

    /// An attribute value could not be converted to its wire representation.
    #[error(transparent)]
    Value(#[from] serde_dynamo::Error),
}

impl Error {
    pub(crate) fn unsupported_method(method: impl Into<String>, builder: &'static str) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
            builder,
        }
    }

    pub(crate) fn missing_field(method: impl Into<String>, prefix: &'static str) -> Self {
        Self::MissingField {
            method: method.into(),
            prefix,
        }
    }

    pub(crate) fn unexpected_shape(field: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedShape {
            field: field.into(),
            expected,
        }
    }

    pub(crate) fn foreign_field(
        field: impl Into<String>,
        operation: operation::OperationKind,
    ) -> Self {
        Self::ForeignField {
            field: field.into(),
            operation,
        }
    }
}

/// Errors surfaced when an executable request is dispatched to the client.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    /// The finalized map could not be translated into the SDK input shape.
    /// Raised before any call is made.
    #[error(transparent)]
    Translate(#[from] Error),

    /// The Query call failed inside the SDK.
    #[error(transparent)]
    Query(#[from] SdkError<query::QueryError>),

    /// The Scan call failed inside the SDK.
    #[error(transparent)]
    Scan(#[from] SdkError<scan::ScanError>),
}
