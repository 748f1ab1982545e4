use thiserror::Error;

use crate::{core::Town, graph::Graph};

/// The canonical network of eight towns `Town_1`..`Town_8` as
/// `(road, distance, town, town)` records.
pub const FIXTURE_ROADS: [(&str, i64, &str, &str); 8] = [
    ("Road_1", 3, "Town_1", "Town_5"),
    ("Road_2", 4, "Town_1", "Town_7"),
    ("Road_3", 6, "Town_2", "Town_4"),
    ("Road_4", 4, "Town_2", "Town_5"),
    ("Road_5", 2, "Town_3", "Town_4"),
    ("Road_6", 2, "Town_3", "Town_6"),
    ("Road_7", 3, "Town_3", "Town_8"),
    ("Road_8", 5, "Town_6", "Town_8"),
];

/// Creates a town.
///
/// # Panics
///
/// Panics if the name is empty.
pub fn town(name: &str) -> Town {
    Town::new(name).expect("town name must not be empty")
}

/// Creates the graph described by [`FIXTURE_ROADS`].
///
/// # Panics
///
/// Panics if the fixture data is invalid.
pub fn fixture() -> Graph {
    let mut graph = Graph::new();

    for i in 1..=8 {
        graph.add_vertex(town(&format!("Town_{i}")));
    }

    for (name, distance, a, b) in FIXTURE_ROADS {
        graph
            .add_edge(&town(a), &town(b), distance, name)
            .expect("fixture road must be valid");
    }

    graph
}

/// The fixture in the text format accepted by the
/// [loader](crate::loader::load).
pub fn fixture_text() -> String {
    FIXTURE_ROADS
        .iter()
        .map(|(name, distance, a, b)| format!("{name},{distance};{a};{b}\n"))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("road `{0}` has endpoint `{1}` which is not in the graph")]
    EndpointAbsent(String, Town),
    #[error("road `{0}` is not stored under its own key")]
    RoadKeyMismatch(String),
    #[error("road `{0}` is missing in the incident roads of `{1}`")]
    NotIncident(String, Town),
    #[error("road `{0}` is listed as incident to `{1}` but does not touch it")]
    ForeignIncident(String, Town),
    #[error("roads iterator count ({0}) is not equal to edge count ({1})")]
    RoadsEdgeCountMismatch(usize, usize),
    #[error("towns iterator count ({0}) is not equal to vertex count ({1})")]
    TownsVertexCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count without loops ({1})")]
    HandshakingLemma(usize, usize),
}

/// Checks that the road map and the adjacency index of the graph agree.
pub fn check_consistency(graph: &Graph) -> Result<(), ConsistencyCheckError> {
    let town_count = graph.towns().count();
    if town_count != graph.vertex_count() {
        return Err(ConsistencyCheckError::TownsVertexCountMismatch(
            town_count,
            graph.vertex_count(),
        ));
    }

    let road_count = graph.roads().count();
    if road_count != graph.edge_count() {
        return Err(ConsistencyCheckError::RoadsEdgeCountMismatch(
            road_count,
            graph.edge_count(),
        ));
    }

    let mut loops = 0;

    for road in graph.roads() {
        let key = road.key();

        match graph.road(&key) {
            Some(stored) if stored.is_identical(road) => {}
            _ => return Err(ConsistencyCheckError::RoadKeyMismatch(road.name().into())),
        }

        if key.is_loop() {
            loops += 1;
        }

        for town in key.endpoints() {
            if !graph.contains_vertex(town) {
                return Err(ConsistencyCheckError::EndpointAbsent(
                    road.name().into(),
                    town.clone(),
                ));
            }

            if !graph.incident(town).any(|incident| incident.key() == key) {
                return Err(ConsistencyCheckError::NotIncident(
                    road.name().into(),
                    town.clone(),
                ));
            }
        }
    }

    for town in graph.towns() {
        if let Some(road) = graph.incident(town).find(|road| !road.contains(town)) {
            return Err(ConsistencyCheckError::ForeignIncident(
                road.name().into(),
                town.clone(),
            ));
        }
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    // A loop is stored once in the incident set of its town.
    let deg_sum = graph.towns().map(|town| graph.degree(town)).sum::<usize>();
    let expected = 2 * graph.edge_count() - loops;

    if deg_sum != expected {
        return Err(ConsistencyCheckError::HandshakingLemma(deg_sum, expected));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_consistent() {
        let graph = fixture();

        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(check_consistency(&graph), Ok(()));
    }

    #[test]
    fn fixture_text_format() {
        let text = fixture_text();

        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().next(), Some("Road_1,3;Town_1;Town_5"));
    }
}
