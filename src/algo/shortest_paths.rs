//! Find the [shortest path] between two towns of a road network.
//!
//! The search is Dijkstra's algorithm from a single source. Among towns with
//! the same tentative distance, the one with lexicographically smaller name is
//! finalized first, so the reconstructed routes are deterministic even when
//! more shortest routes exist.
//!
//! [shortest path]: https://en.wikipedia.org/wiki/Shortest_path_problem
//!
//! # Examples
//!
//! ```
//! use roadnet::{algo::ShortestPaths, core::Town, Graph};
//!
//! let mut graph = Graph::new();
//!
//! let names = ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg"];
//! let [prague, bratislava, vienna, munich, nuremberg] =
//!     names.map(|name| Town::new(name).unwrap());
//!
//! for town in [&prague, &bratislava, &vienna, &munich, &nuremberg] {
//!     graph.add_vertex(town.clone());
//! }
//!
//! graph.add_edge(&prague, &bratislava, 328, "D2").unwrap();
//! graph.add_edge(&prague, &nuremberg, 297, "D5").unwrap();
//! graph.add_edge(&prague, &vienna, 293, "D1").unwrap();
//! graph.add_edge(&bratislava, &vienna, 79, "A6").unwrap();
//! graph.add_edge(&nuremberg, &munich, 170, "A9").unwrap();
//! graph.add_edge(&vienna, &munich, 402, "A1").unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).run(&bratislava).unwrap();
//!
//! assert_eq!(shortest_paths.dist(&munich), Some(481));
//! assert_eq!(
//!     shortest_paths.describe(&munich),
//!     vec!["Bratislava via A6 to Vienna 79 mi", "Vienna via A1 to Munich 402 mi"]
//! );
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    core::{Distance, Road, RoadKey, Town},
    graph::Graph,
};

mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source town.
///
/// Holds a borrow of the graph, so the graph cannot change while the result
/// is alive. Run the search again after mutating the graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<'a> {
    graph: &'a Graph,
    source: Town,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal.
    dist: FxHashMap<Town, Distance>,
    pred: FxHashMap<Town, (Town, RoadKey)>,
}

impl<'a> ShortestPaths<'a> {
    /// Source town where the search was started.
    pub fn source(&self) -> &Town {
        &self.source
    }

    /// Returns the shortest distance between the source and the given town, or
    /// `None` if it's not known.
    ///
    /// There are two causes why the distance is not known: (1) the towns are
    /// not connected, or (2) the [goal](ShortestPathsBuilder::goal) was
    /// reached before finalizing the given town.
    pub fn dist(&self, to: &Town) -> Option<Distance> {
        self.dist.get(to).copied()
    }

    /// Returns an iterator over the towns on the path between the given town
    /// and the source, in this order. The given town itself is not included.
    ///
    /// The iterator is empty if the path is not known.
    pub fn reconstruct<'p>(&'p self, to: &Town) -> PathReconstruction<'p> {
        PathReconstruction {
            curr: self.pred.get_key_value(to).map(|(town, _)| town),
            pred: &self.pred,
        }
    }

    /// Returns the roads on the shortest path from the source to the given
    /// town, each oriented in the direction of travel.
    ///
    /// Returns `None` if the path is not known and an empty vector if the
    /// town is the source.
    pub fn route(&self, to: &Town) -> Option<Vec<Road>> {
        if !self.dist.contains_key(to) {
            return None;
        }

        let mut roads = Vec::new();
        let mut curr = to;

        while let Some((prev, key)) = self.pred.get(curr) {
            let road = self.graph.road(key)?.oriented_from(prev)?;
            roads.push(road);
            curr = prev;
        }

        roads.reverse();
        Some(roads)
    }

    /// Describes the roads of the [route](Self::route) to the given town.
    ///
    /// The result is empty if the route is not known or the town is the
    /// source.
    pub fn describe(&self, to: &Town) -> Vec<String> {
        self.route(to)
            .unwrap_or_default()
            .iter()
            .map(Road::to_string)
            .collect()
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source town is not in the graph.
    #[error("source town `{0}` is not in the graph")]
    SourceAbsent(Town),

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Iterator over the towns on the path from a town to the source town.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: Option<&'a Town>,
    pred: &'a FxHashMap<Town, (Town, RoadKey)>,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = &'a Town;

    fn next(&mut self) -> Option<Self::Item> {
        let (prev, _) = self.pred.get(self.curr?)?;
        self.curr = Some(prev);
        Some(prev)
    }
}
