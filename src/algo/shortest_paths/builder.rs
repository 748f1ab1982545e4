use crate::{core::Town, graph::Graph};

use super::{dijkstra::dijkstra, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a> {
    graph: &'a Graph,
    goal: Option<Town>,
}

impl<'a> ShortestPaths<'a> {
    pub fn on(graph: &'a Graph) -> ShortestPathsBuilder<'a> {
        ShortestPathsBuilder { graph, goal: None }
    }
}

impl<'a> ShortestPathsBuilder<'a> {
    /// Stops the search as soon as the distance to `goal` is final.
    pub fn goal(self, goal: Town) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn run(self, source: &Town) -> Result<ShortestPaths<'a>, Error> {
        let ShortestPathsBuilder { graph, goal } = self;
        dijkstra(graph, source, goal.as_ref())
    }
}
