use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, Just, Strategy},
};

use crate::{core::Town, graph::Graph};

/// Parameters of [`road_graph_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    max_towns: usize,
    max_roads: usize,
    max_distance: i64,
    loops: bool,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_towns: 8,
            max_roads: 16,
            max_distance: 20,
            loops: false,
        }
    }
}

impl StrategyParams {
    /// Upper bound of the number of towns. At least one town is always
    /// generated.
    pub fn max_towns(self, value: usize) -> Self {
        Self {
            max_towns: value.max(1),
            ..self
        }
    }

    /// Upper bound of the number of road insertion attempts. Attempts between
    /// already connected towns are ignored by the graph.
    pub fn max_roads(self, value: usize) -> Self {
        Self {
            max_roads: value,
            ..self
        }
    }

    pub fn max_distance(self, value: i64) -> Self {
        Self {
            max_distance: value.max(0),
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            loops: true,
            ..self
        }
    }
}

/// Name of the `i`-th generated town.
pub fn town_name(i: usize) -> String {
    format!("T{i}")
}

/// Generates a graph with default [`StrategyParams`].
pub fn road_graph() -> BoxedStrategy<Graph> {
    road_graph_with(StrategyParams::default())
}

/// Generates a graph with towns named by [`town_name`] and roads `R0`, `R1`,
/// ... with random endpoints and distances.
pub fn road_graph_with(params: StrategyParams) -> BoxedStrategy<Graph> {
    let StrategyParams {
        max_towns,
        max_roads,
        max_distance,
        loops,
    } = params;

    (1..=max_towns)
        .prop_flat_map(move |n| {
            let roads = vec((0..n, 0..n, 0..=max_distance), 0..=max_roads);
            (Just(n), roads)
        })
        .prop_map(move |(n, roads)| {
            let mut graph = Graph::new();

            let towns = (0..n)
                .filter_map(|i| Town::new(town_name(i)).ok())
                .collect::<Vec<_>>();

            for town in &towns {
                graph.add_vertex(town.clone());
            }

            for (i, (a, b, distance)) in roads.into_iter().enumerate() {
                if a == b && !loops {
                    continue;
                }

                // Both endpoints exist and the attributes are valid.
                let _ = graph.add_edge(&towns[a], &towns[b], distance, format!("R{i}"));
            }

            graph
        })
        .boxed()
}
