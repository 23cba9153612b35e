//! The evaluation engine for executing parsed steps against a `TreeNode` tree.
//!
//! Every step maps a list of roots to a flat list of matches. A matched value
//! that is itself a sequence is spliced element by element; any other matched
//! value is appended as one entry. Null matches are dropped.
use super::ast::{Query, QueryStep};
use crate::node::{NodeKind, TreeNode};

impl Query {
    /// Runs the query against `data` and returns every match in traversal order.
    pub fn execute<'a, N: TreeNode<'a>>(&self, data: N) -> Vec<N> {
        execute(self.steps(), data)
    }

    /// Returns true if the query yields at least one match on `data`.
    pub fn matches<'a, N: TreeNode<'a>>(&self, data: N) -> bool {
        !self.execute(data).is_empty()
    }
}

/// Folds `steps` over the roots of `data`, left to right.
///
/// A sequence passed as `data` is treated as a list of roots. With no steps the
/// result is always empty.
pub fn execute<'a, N: TreeNode<'a>>(steps: &[QueryStep], data: N) -> Vec<N> {
    if steps.is_empty() {
        return Vec::new();
    }

    let mut current = roots_of(data);
    for step in steps {
        current = apply_step(step, &current);
        log::trace!("Step '{}' produced {} match(es)", step, current.len());
    }
    log::debug!(
        "Executed {} step(s), {} match(es)",
        steps.len(),
        current.len()
    );
    current
}

/// Applies a single step to a list of roots.
pub fn apply_step<'a, N: TreeNode<'a>>(step: &QueryStep, roots: &[N]) -> Vec<N> {
    let mut results = Vec::new();
    match step {
        QueryStep::Child(field) => collect_children(field, roots, &mut results),
        QueryStep::Descendant(field) => collect_descendants(field, roots, &mut results),
    }
    results
}

/// Treats a sequence as a list of roots and anything else as a single root.
fn roots_of<'a, N: TreeNode<'a>>(node: N) -> Vec<N> {
    if node.is_sequence() {
        node.elements().collect()
    } else {
        vec![node]
    }
}

fn splice<'a, N: TreeNode<'a>>(matched: N, results: &mut Vec<N>) {
    match matched.kind() {
        NodeKind::Sequence => results.extend(matched.elements()),
        NodeKind::Null => {}
        NodeKind::Mapping | NodeKind::Scalar => results.push(matched),
    }
}

fn collect_children<'a, N: TreeNode<'a>>(field: &str, roots: &[N], results: &mut Vec<N>) {
    for root in roots {
        if let Some(matched) = root.field(field) {
            splice(matched, results);
        }
    }
}

/// Depth-first, key-order search. A matching key is not searched again for
/// the same field; non-matching keys are recursed into.
fn collect_descendants<'a, N: TreeNode<'a>>(field: &str, roots: &[N], results: &mut Vec<N>) {
    for root in roots.iter().filter(|root| root.is_mapping()) {
        for (key, child) in root.entries() {
            if key == field {
                splice(child, results);
            } else {
                collect_descendants(field, &roots_of(child), results);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn run<'a>(expression: &str, data: &'a Value) -> Vec<&'a Value> {
        Query::parse(expression).execute(data)
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let data = json!({ "a": 1 });
        assert!(execute(&[], &data).is_empty());
        assert!(run("", &data).is_empty());
        assert!(!Query::default().matches(&data));
    }

    #[test]
    fn test_child_step_appends_scalars_and_mappings() {
        let data = json!({ "a": { "b": 1 }, "c": "x" });
        assert_eq!(run("a", &data), vec![&json!({ "b": 1 })]);
        assert_eq!(run("a.b", &data), vec![&json!(1)]);
        assert_eq!(run("c", &data), vec![&json!("x")]);
    }

    #[test]
    fn test_child_step_splices_sequences_one_level() {
        let data = json!({ "a": [1, [2, 3], { "b": 4 }] });
        assert_eq!(
            run("a", &data),
            vec![&json!(1), &json!([2, 3]), &json!({ "b": 4 })]
        );
        // Only mapping roots contribute to the next step.
        assert_eq!(run("a.b", &data), vec![&json!(4)]);
    }

    #[test]
    fn test_child_step_skips_non_mappings_and_nulls() {
        let data = json!({ "a": "text", "n": null, "list": [{ "b": 1 }, 2, null] });
        assert!(run("a.b", &data).is_empty());
        assert!(run("n", &data).is_empty());
        assert!(run("missing", &data).is_empty());
        assert_eq!(run("list.b", &data), vec![&json!(1)]);
    }

    #[test]
    fn test_falsy_scalars_are_still_matches() {
        let data = json!({ "zero": 0, "no": false, "empty": "" });
        assert_eq!(run("zero", &data), vec![&json!(0)]);
        assert_eq!(run("no", &data), vec![&json!(false)]);
        assert_eq!(run("empty", &data), vec![&json!("")]);
    }

    #[test]
    fn test_sequence_input_is_a_list_of_roots() {
        let data = json!([{ "a": 1 }, { "a": 2 }, 3]);
        assert_eq!(run("a", &data), vec![&json!(1), &json!(2)]);
    }

    #[test]
    fn test_scalar_input_matches_nothing() {
        let data = json!("store");
        assert!(run("store", &data).is_empty());
        assert!(run("..store", &data).is_empty());
    }

    #[test]
    fn test_descendant_step_finds_every_depth() {
        let data = json!({
            "a": { "x": 1, "b": { "x": 2 } },
            "c": [{ "x": 3 }, { "d": { "x": 4 } }],
            "x": 5
        });
        assert_eq!(
            run("..x", &data),
            vec![&json!(1), &json!(2), &json!(3), &json!(4), &json!(5)]
        );
    }

    #[test]
    fn test_descendant_step_does_not_search_inside_a_match() {
        let data = json!({ "x": { "x": 1 }, "y": { "x": 2 } });
        assert_eq!(run("..x", &data), vec![&json!({ "x": 1 }), &json!(2)]);
    }

    #[test]
    fn test_descendant_step_splices_matched_sequences() {
        let data = json!({ "tags": ["a", "b"], "nested": { "tags": ["c"] } });
        assert_eq!(
            run("..tags", &data),
            vec![&json!("a"), &json!("b"), &json!("c")]
        );
    }

    #[test]
    fn test_descendant_step_skips_nested_sequences() {
        // Elements of a nested sequence are roots, but a sequence root is not
        // searched any further.
        let data = json!({ "rows": [[{ "x": 1 }], { "x": 2 }] });
        assert_eq!(run("..x", &data), vec![&json!(2)]);
    }

    #[test]
    fn test_no_deduplication() {
        let data = json!({ "a": { "v": 1 }, "b": { "v": 1 }, "c": [{ "v": 1 }, { "v": 1 }] });
        assert_eq!(run("..v", &data).len(), 4);
    }

    #[test]
    fn test_matches() {
        let data = json!({ "isbn": "0-553-21311-3" });
        assert!(Query::parse("isbn").matches(&data));
        assert!(!Query::parse("author").matches(&data));
    }

    #[test]
    fn test_apply_step_over_many_roots() {
        let first = json!({ "a": 1 });
        let second = json!({ "a": [2, 3] });
        let roots = vec![&first, &second];
        assert_eq!(
            apply_step(&QueryStep::Child("a".into()), &roots),
            vec![&json!(1), &json!(2), &json!(3)]
        );
    }
}
