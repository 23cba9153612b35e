//! Splits a variadic argument list into path expressions and trailing data.
use super::ast::Query;
use super::parser::parse_path;
use crate::error::QueryError;
use serde_json::Value;

/// Separates `[path..., data]` into the path arguments and the data argument.
///
/// The data is always the last argument, so a single argument is data with no
/// paths. An empty list is the only invalid call.
pub fn split_args(args: &[Value]) -> Result<(&[Value], &Value), QueryError> {
    let (data, paths) = args.split_last().ok_or(QueryError::MissingData)?;
    Ok((paths, data))
}

impl Query {
    /// Builds a query from dynamically typed path arguments.
    ///
    /// Strings are parsed as path expressions. Null and every other kind of
    /// value contribute no steps.
    pub fn from_args(paths: &[Value]) -> Self {
        let mut query = Query::default();
        for arg in paths {
            match arg {
                Value::String(expression) => query.extend(Query::new(parse_path(expression))),
                Value::Null => {}
                other => log::warn!("Ignoring non-string query argument: {}", other),
            }
        }
        query
    }
}
