use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashSet},
    hash::BuildHasherDefault,
};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::{
    core::{Distance, Town},
    graph::Graph,
};

use super::{Error, ShortestPaths};

pub fn dijkstra<'a>(
    graph: &'a Graph,
    source: &Town,
    goal: Option<&Town>,
) -> Result<ShortestPaths<'a>, Error> {
    let source = graph
        .vertex(source.name())
        .cloned()
        .ok_or_else(|| Error::SourceAbsent(source.clone()))?;

    let mut finalized: FxHashSet<Town> = HashSet::with_capacity_and_hasher(
        graph.vertex_count(),
        BuildHasherDefault::default(),
    );

    let mut dist: FxHashMap<Town, Distance> = FxHashMap::default();
    let mut pred = FxHashMap::default();

    // Ordering by `(distance, town)` makes the vertex with the smallest
    // distance come first and breaks ties by town name.
    let mut queue: BinaryHeap<Reverse<(Distance, Town)>> = BinaryHeap::new();

    dist.insert(source.clone(), 0);
    queue.push(Reverse((0, source.clone())));

    while let Some(Reverse((vertex_dist, vertex))) = queue.pop() {
        // Stale entry left behind by relaxation.
        if finalized.contains(&vertex) {
            continue;
        }

        trace!(town = %vertex, dist = vertex_dist, "finalized");

        if goal == Some(&vertex) {
            finalized.insert(vertex);
            break;
        }

        for road in graph.incident(&vertex) {
            let Some(next) = road.other_end(&vertex) else {
                continue;
            };

            if finalized.contains(next) {
                continue;
            }

            let next_dist = vertex_dist.saturating_add(road.distance());

            match dist.entry(next.clone()) {
                Entry::Occupied(curr_dist) => {
                    if next_dist < *curr_dist.get() {
                        *curr_dist.into_mut() = next_dist;
                        // Instead of decreasing the priority, push a duplicate.
                        // The outdated one is skipped when popped.
                        queue.push(Reverse((next_dist, next.clone())));
                        pred.insert(next.clone(), (vertex.clone(), road.key()));
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist);
                    queue.push(Reverse((next_dist, next.clone())));
                    pred.insert(next.clone(), (vertex.clone(), road.key()));
                }
            }
        }

        finalized.insert(vertex);
    }

    if let Some(goal) = goal {
        if !finalized.contains(goal) {
            return Err(Error::GoalNotReached);
        }
    }

    // Tentative distances of vertices that were not finalized due to early
    // termination are not shortest.
    dist.retain(|town, _| finalized.contains(town));
    pred.retain(|town, _| finalized.contains(town));

    Ok(ShortestPaths {
        graph,
        source,
        dist,
        pred,
    })
}
