//! Collect values from JSON trees with dotted path expressions.
//!
//! ```
//! use serde_json::json;
//!
//! let data = json!({ "store": { "book": [ { "isbn": "0-553-21311-3" }, { "title": "Moby Dick" } ] } });
//! let isbns = collect::collect(&["store", "book", "isbn"], &data);
//! assert_eq!(isbns, vec![&json!("0-553-21311-3")]);
//! ```
//!
//! A path is a sequence of child (`.field`) and descendant (`..field`) steps.
//! Several expressions are concatenated in order, so `["store", "..price"]`
//! behaves like `"store..price"`. Results are flattened: a matched sequence
//! contributes its elements, not itself.

pub mod config;
pub mod error;
pub mod output;

// --- Public API ---
pub use collect_query::{NodeKind, Query, QueryStep, TreeNode, parse_path, split_args};
pub use config::OutputFormat;
pub use error::{CliError, CollectError};

#[doc(hidden)]
pub use serde_json;

use serde_json::Value;

/// Runs the concatenation of `paths` against `data`.
///
/// An empty `paths` slice, or paths with no recognisable steps, yield an
/// empty list.
pub fn collect<'a, S: AsRef<str>>(paths: &[S], data: &'a Value) -> Vec<&'a Value> {
    Query::parse_all(paths).execute(data)
}

/// The variadic form: every argument but the last is a path expression and
/// the last one is the data.
///
/// Non-string path arguments (including `null`) contribute nothing. Calling
/// with no arguments at all is an error.
pub fn collect_args(args: &[Value]) -> Result<Vec<&Value>, CollectError> {
    let (paths, data) = split_args(args)?;
    Ok(Query::from_args(paths).execute(data))
}

/// Keeps the items on which `path` has at least one match.
pub fn having<'a, I>(path: &str, items: I) -> Vec<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let query = Query::parse(path);
    items.into_iter().filter(|item| query.matches(*item)).collect()
}

/// Keeps the items on which `path` has no match.
pub fn without<'a, I>(path: &str, items: I) -> Vec<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    let query = Query::parse(path);
    items.into_iter().filter(|item| !query.matches(*item)).collect()
}

/// Variadic sugar over [`collect_args`]: `collect!(path..., data)`.
///
/// Each argument is converted with `serde_json::Value::from`, so the data is
/// taken by value and the matches are returned as owned values.
/// `collect!()` is the invalid call and returns `CollectError::MissingData`.
#[macro_export]
macro_rules! collect {
    () => {
        $crate::collect_args(&[]).map(|found| {
            found
                .into_iter()
                .cloned()
                .collect::<::std::vec::Vec<$crate::serde_json::Value>>()
        })
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::collect_args(&[$($crate::serde_json::Value::from($arg)),+]).map(|found| {
            found
                .into_iter()
                .cloned()
                .collect::<::std::vec::Vec<$crate::serde_json::Value>>()
        })
    };
}
