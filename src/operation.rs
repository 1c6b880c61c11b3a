//! The logical read operation a request resolves to.

use std::fmt;

/// The two read operations a field map can resolve to.
///
/// A request that pins items down by key condition is a [`Query`]; one that
/// walks the whole table is a [`Scan`]. Which of the two a builder produces
/// is decided purely by the fields present, see
/// [`RequestMap::operation_kind`](crate::map::RequestMap::operation_kind).
///
/// [`Query`]: OperationKind::Query
/// [`Scan`]: OperationKind::Scan
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    /// An indexed lookup driven by a key condition.
    Query,
    /// A full traversal of the table or index.
    Scan,
}

impl OperationKind {
    /// Returns the AWS operation name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Scan => "Scan",
        }
    }

    /// Parse an operation name string into an `OperationKind`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Query" => Some(Self::Query),
            "Scan" => Some(Self::Scan),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
