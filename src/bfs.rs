use fxhash::FxBuildHasher;
/// This module implements a breadth-first analogue of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
/// The parent map is kept in an insertion-ordered [IndexMap] so the FIFO
/// frontier can hold plain map indices instead of cloned nodes.
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, parent)| {
            *i = *parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Breadth-first search from `start` until `success` holds for a dequeued
/// node. Returns the node sequence from `start` to the goal inclusive, or
/// [None] once the frontier drains without reaching a goal.
pub(crate) fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    // The start is marked visited by mapping it to an index no node has,
    // which also terminates the reconstruction walk.
    parents.insert(start.clone(), usize::MAX);
    while let Some(index) = frontier.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index).unwrap();
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            // The first discovery fixes the predecessor; on an unweighted
            // graph no later route to the same node is shorter.
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    debug!("Frontier exhausted without reaching a goal node");
    None
}
