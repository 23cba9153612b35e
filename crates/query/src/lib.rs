//! Dotted path queries over read-only trees.
//!
//! A path expression such as `store.book.isbn` or `store..price` is scanned
//! into a [`Query`]: an ordered list of child (`.field`) and descendant
//! (`..field`) steps. Executing the query folds those steps over the roots of
//! a tree and returns every match, flattened, in traversal order.

pub mod args;
pub mod ast;
pub mod engine;
pub mod error;
pub mod node;
mod parser;

// --- Public API ---
pub use args::split_args;
pub use ast::{Query, QueryStep};
pub use engine::{apply_step, execute};
pub use error::QueryError;
pub use node::{NodeKind, TreeNode};
pub use parser::parse_path;
