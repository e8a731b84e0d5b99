//! Breadth-first and depth-first traversal over the chain adjacency.
//!
//! Both traversals start at a fixed root (position 0 unless the run policy
//! says otherwise), whatever the target's location.

use std::collections::{BTreeSet, VecDeque};

use stepwise_kernel::step::{Outcome, Step};

use crate::emitter::Emitter;
use crate::error::SearchError;
use crate::prepare::AdjacencyMap;

fn check_graph(values: &[i64], adjacency: &AdjacencyMap, root: usize) -> Result<(), SearchError> {
    super::ensure_non_empty(values)?;
    if adjacency.len() != values.len() {
        return Err(SearchError::InvalidInput {
            detail: format!(
                "adjacency covers {} positions, collection has {}",
                adjacency.len(),
                values.len()
            ),
        });
    }
    if root >= values.len() {
        return Err(SearchError::RootOutOfRange {
            root,
            len: values.len(),
        });
    }
    Ok(())
}

/// Visit node `node`: one step, `Some(outcome)` on match.
fn visit(
    values: &[i64],
    node: usize,
    target: i64,
    emitter: &mut Emitter<'_>,
) -> Result<Option<Outcome>, SearchError> {
    let is_match = values[node] == target;
    let step = Step::new([node], is_match, format!("Visiting node {node}"));
    if is_match {
        return emitter.found(step, node).map(Some);
    }
    emitter.emit(step)?;
    Ok(None)
}

/// FIFO traversal from `root`. Nodes already visited are skipped when
/// dequeued; unvisited neighbors are enqueued in adjacency order.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] or [`SearchError::RootOutOfRange`]
/// before any step for a malformed graph, and [`SearchError::Aborted`] if
/// the run is aborted.
pub fn breadth_first(
    values: &[i64],
    adjacency: &AdjacencyMap,
    root: usize,
    target: i64,
    emitter: &mut Emitter<'_>,
) -> Result<Outcome, SearchError> {
    check_graph(values, adjacency, root)?;
    let mut visited = BTreeSet::new();
    let mut frontier = VecDeque::from([root]);

    while let Some(node) = frontier.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(outcome) = visit(values, node, target, emitter)? {
            return Ok(outcome);
        }
        frontier.extend(
            adjacency
                .neighbors(node)
                .iter()
                .copied()
                .filter(|n| !visited.contains(n)),
        );
    }
    emitter.not_found()
}

/// Preorder traversal from `root`, identical in visit order to the recursive
/// form: neighbors are pushed in reverse so the lowest is explored first,
/// and visited nodes are skipped when popped.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] or [`SearchError::RootOutOfRange`]
/// before any step for a malformed graph, and [`SearchError::Aborted`] if
/// the run is aborted.
pub fn depth_first(
    values: &[i64],
    adjacency: &AdjacencyMap,
    root: usize,
    target: i64,
    emitter: &mut Emitter<'_>,
) -> Result<Outcome, SearchError> {
    check_graph(values, adjacency, root)?;
    let mut visited = BTreeSet::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(outcome) = visit(values, node, target, emitter)? {
            return Ok(outcome);
        }
        stack.extend(
            adjacency
                .neighbors(node)
                .iter()
                .rev()
                .copied()
                .filter(|n| !visited.contains(n)),
        );
    }
    emitter.not_found()
}
