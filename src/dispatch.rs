//! Parsing of dynamically dispatched method names.

use crate::error::Error;

/// A dispatched method name, resolved to the field it addresses.
///
/// Dynamic names come in exactly two families: `set<Field>` stores a value
/// and `has<Field>` reports presence. Everything after the prefix is the
/// field name, taken verbatim.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call<'a> {
    /// A `set<Field>` name: store a value under `Field`.
    Set(&'a str),
    /// A `has<Field>` name: report whether `Field` is present.
    Has(&'a str),
}

impl<'a> Call<'a> {
    /// Parses a dispatched method name.
    ///
    /// The prefix match is exact and case-sensitive, and no validation is
    /// applied to the remainder: `setTableName` addresses `TableName`, and
    /// `settle` is a well-formed call addressing the field `tle`. A name
    /// with neither prefix has no meaning on the receiver and is rejected
    /// as [`Error::UnsupportedMethod`], naming the method and the `builder`
    /// type it was aimed at. A bare `set` or `has` leaves no field to
    /// address and is rejected as [`Error::MissingField`] rather than
    /// touching the empty key.
    pub fn parse(method: &'a str, builder: &'static str) -> Result<Self, Error> {
        if let Some(field) = method.strip_prefix("set") {
            if field.is_empty() {
                return Err(Error::missing_field(method, "set"));
            }
            return Ok(Self::Set(field));
        }
        if let Some(field) = method.strip_prefix("has") {
            if field.is_empty() {
                return Err(Error::missing_field(method, "has"));
            }
            return Ok(Self::Has(field));
        }
        Err(Error::unsupported_method(method, builder))
    }
}

/// What a successful dynamic call produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// A `set<Field>` call stored its value.
    Stored,
    /// A `has<Field>` call looked its field up; `true` when present.
    Present(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::set("setTableName", Call::Set("TableName"))]
    #[case::has("hasLimit", Call::Has("Limit"))]
    #[case::verbatim_remainder("settle", Call::Set("tle"))]
    #[case::prefix_inside_field("sethasKey", Call::Set("hasKey"))]
    fn test_parse(#[case] method: &str, #[case] expected: Call<'_>) {
        assert_eq!(Call::parse(method, "RequestBuilder").unwrap(), expected);
    }

    #[rstest]
    #[case::unrelated(
        "deleteFoo",
        "no method `deleteFoo` on `RequestBuilder`: dynamic calls must use a `set` or `has` prefix"
    )]
    #[case::wrong_case(
        "SetTableName",
        "no method `SetTableName` on `RequestBuilder`: dynamic calls must use a `set` or `has` prefix"
    )]
    #[case::bare_set("set", "dynamic call `set` names no field after its `set` prefix")]
    #[case::bare_has("has", "dynamic call `has` names no field after its `has` prefix")]
    fn test_parse_rejects_malformed_names(#[case] method: &str, #[case] message: &str) {
        let error = Call::parse(method, "RequestBuilder").unwrap_err();
        assert_eq!(error.to_string(), message);
    }

    #[rstest]
    #[case::bare_set("set")]
    #[case::bare_has("has")]
    fn test_bare_prefixes_are_missing_fields(#[case] method: &str) {
        let error = Call::parse(method, "RequestBuilder").unwrap_err();
        assert!(matches!(error, Error::MissingField { .. }));
    }
}
