#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;

/// Clones borrowed matches so they can be compared against owned fixtures.
pub fn owned(matches: Vec<&Value>) -> Vec<Value> {
    matches.into_iter().cloned().collect()
}
