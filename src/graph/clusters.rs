//! Weakly-connected components.

use std::collections::HashMap;

use super::types::DocumentNode;

/// Partitions nodes into components, treating every resolved edge as
/// undirected. Each component is sorted; components are ordered by their
/// first member. Isolated nodes form singleton components.
#[must_use]
pub fn components(nodes: &[DocumentNode]) -> Vec<Vec<String>> {
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.relative_path.as_str(), i))
        .collect();

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for (target, node) in nodes.iter().enumerate() {
        for source in &node.inbound_references {
            if let Some(&s) = index.get(source.as_str()) {
                adjacency[s].push(target);
                adjacency[target].push(s);
            }
        }
    }

    let mut seen = vec![false; nodes.len()];
    let mut out = Vec::new();
    for start in 0..nodes.len() {
        if seen[start] {
            continue;
        }
        let mut members = walk(start, &adjacency, &mut seen)
            .into_iter()
            .map(|i| nodes[i].relative_path.clone())
            .collect::<Vec<_>>();
        members.sort();
        out.push(members);
    }
    out
}

/// Iterative depth-first traversal from `start`.
fn walk(start: usize, adjacency: &[Vec<usize>], seen: &mut [bool]) -> Vec<usize> {
    let mut stack = vec![start];
    let mut members = Vec::new();
    seen[start] = true;

    while let Some(current) = stack.pop() {
        members.push(current);
        for &next in &adjacency[current] {
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    members
}
