//! The road network graph.
//!
//! Roads are stored in a map keyed by [`RoadKey`], the normalized unordered
//! pair of their endpoints, which makes "at most one road between two towns"
//! a structural property of the storage. Next to it, every town maps to the
//! set of keys of its incident roads. Both structures are updated together on
//! every mutation, so removing a town removes its roads in time proportional
//! to its degree.
//!
//! # Examples
//!
//! ```
//! use roadnet::{core::Town, Graph};
//!
//! let mut graph = Graph::new();
//!
//! let prague = Town::new("Prague").unwrap();
//! let vienna = Town::new("Vienna").unwrap();
//! let munich = Town::new("Munich").unwrap();
//!
//! graph.add_vertex(prague.clone());
//! graph.add_vertex(vienna.clone());
//! graph.add_vertex(munich.clone());
//!
//! graph.add_edge(&prague, &vienna, 293, "D1").unwrap();
//! graph.add_edge(&vienna, &munich, 402, "A1").unwrap();
//!
//! assert_eq!(
//!     graph.shortest_path(&prague, &munich),
//!     vec!["Prague via D1 to Vienna 293 mi", "Vienna via A1 to Munich 402 mi"]
//! );
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{
    algo::ShortestPaths,
    config::{Config, Isolated},
    core::{Error, Road, RoadKey, Town},
};

/// Undirected road network with at most one road between any pair of towns.
///
/// The graph assumes exclusive access for the duration of every call, which
/// the borrow checker guarantees. It does no internal locking.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: FxHashMap<Town, FxHashSet<RoadKey>>,
    roads: FxHashMap<RoadKey, Road>,
    config: Config,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.roads.len()
    }

    /// Adds a town to the graph.
    ///
    /// Returns `false` if a town with the same name is already present, in
    /// which case the graph is not modified.
    pub fn add_vertex(&mut self, town: Town) -> bool {
        if self.adjacency.contains_key(&town) {
            return false;
        }

        debug!(%town, "adding town");
        self.adjacency.insert(town, FxHashSet::default());
        true
    }

    /// Removes a town and every road touching it.
    ///
    /// Returns `false` if the town was not present.
    pub fn remove_vertex(&mut self, town: &Town) -> bool {
        let Some(incident) = self.adjacency.remove(town) else {
            return false;
        };

        debug!(%town, roads = incident.len(), "removing town");

        for key in incident {
            if let Some(other) = key.other(town) {
                if let Some(keys) = self.adjacency.get_mut(other) {
                    keys.remove(&key);
                }
            }

            self.roads.remove(&key);
        }

        true
    }

    pub fn contains_vertex(&self, town: &Town) -> bool {
        self.adjacency.contains_key(town)
    }

    /// Returns the instance of the town stored in the graph.
    ///
    /// Roads created by the graph share this instance.
    pub fn vertex(&self, name: &str) -> Option<&Town> {
        self.adjacency.get_key_value(name).map(|(town, _)| town)
    }

    /// Iterates over all towns in unspecified order.
    pub fn towns(&self) -> impl Iterator<Item = &Town> + '_ {
        self.adjacency.keys()
    }

    /// Snapshot of all towns, sorted by name.
    pub fn vertex_set(&self) -> Vec<Town> {
        let mut towns = self.towns().cloned().collect::<Vec<_>>();
        towns.sort_unstable();
        towns
    }

    /// Adds a road between two towns that are already in the graph.
    ///
    /// Returns `Ok(None)` if the towns are already connected by a road,
    /// regardless of its name and distance. A road is identified by its
    /// endpoints only, so the existing road is kept intact.
    ///
    /// Fails with [`Error::TownAbsent`] if either endpoint is not in the graph
    /// and with the errors of [`Road::new`] if the road itself is invalid. The
    /// graph is not modified on failure.
    pub fn add_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        distance: i64,
        name: impl AsRef<str>,
    ) -> Result<Option<Road>, Error> {
        let source = self.canonical(source)?;
        let destination = self.canonical(destination)?;

        let road = Road::new(source, destination, distance, name)?;
        let key = road.key();

        if self.roads.contains_key(&key) {
            debug!(?key, road = road.name(), "towns already connected, road not added");
            return Ok(None);
        }

        debug!(%road, "adding road");

        for town in key.endpoints() {
            if let Some(keys) = self.adjacency.get_mut(town) {
                keys.insert(key.clone());
            }
        }

        self.roads.insert(key, road.clone());
        Ok(Some(road))
    }

    /// Removes the road between two towns if its distance and name are exactly
    /// the given ones.
    ///
    /// Returns `None` if there is no such road, including the case when the
    /// towns are connected by a road with a different distance or name.
    pub fn remove_edge(
        &mut self,
        source: &Town,
        destination: &Town,
        distance: i64,
        name: impl AsRef<str>,
    ) -> Option<Road> {
        let key = RoadKey::between(source, destination);
        let road = self.roads.get(&key)?;

        let same_distance = i64::try_from(road.distance()).map_or(false, |d| d == distance);
        if !same_distance || road.name() != name.as_ref() {
            debug!(?key, "road attributes do not match, not removed");
            return None;
        }

        let road = self.roads.remove(&key)?;

        for town in key.endpoints() {
            if let Some(keys) = self.adjacency.get_mut(town) {
                keys.remove(&key);
            }
        }

        debug!(%road, "removed road");
        Some(road)
    }

    pub fn contains_edge(&self, source: &Town, destination: &Town) -> bool {
        self.roads.contains_key(&RoadKey::between(source, destination))
    }

    /// Returns the road connecting the two towns, in any direction.
    pub fn get_edge(&self, source: &Town, destination: &Town) -> Option<&Road> {
        self.roads.get(&RoadKey::between(source, destination))
    }

    pub fn road(&self, key: &RoadKey) -> Option<&Road> {
        self.roads.get(key)
    }

    /// Iterates over all roads in unspecified order.
    pub fn roads(&self) -> impl Iterator<Item = &Road> + '_ {
        self.roads.values()
    }

    /// Snapshot of all roads, sorted by their endpoints.
    pub fn edge_set(&self) -> Vec<Road> {
        let mut roads = self.roads.iter().collect::<Vec<_>>();
        roads.sort_unstable_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
        roads.into_iter().map(|(_, road)| road.clone()).collect()
    }

    /// Iterates over the roads touching the town in unspecified order.
    ///
    /// The iterator is empty if the town is not in the graph.
    pub fn incident<'a>(&'a self, town: &Town) -> impl Iterator<Item = &'a Road> + 'a {
        self.adjacency
            .get(town)
            .into_iter()
            .flatten()
            .filter_map(|key| self.roads.get(key))
    }

    /// Number of roads touching the town.
    pub fn degree(&self, town: &Town) -> usize {
        self.adjacency.get(town).map_or(0, |keys| keys.len())
    }

    /// All roads touching the town, sorted by their endpoints.
    ///
    /// For a town without roads, including a town that is not in the graph,
    /// the result depends on [`Config::isolated`]: either an empty vector or
    /// [`Error::NoIncidentRoads`].
    pub fn edges_of(&self, town: &Town) -> Result<Vec<Road>, Error> {
        let mut roads = self.incident(town).cloned().collect::<Vec<_>>();

        if roads.is_empty() && self.config.isolated == Isolated::Error {
            return Err(Error::NoIncidentRoads(town.clone()));
        }

        roads.sort_unstable_by_key(Road::key);
        Ok(roads)
    }

    /// Finds the shortest route between two towns and describes each road on
    /// it, oriented in the direction of travel.
    ///
    /// The result is empty if the towns are not connected, are the same town,
    /// or either of them is not in the graph. See
    /// [`ShortestPaths`](crate::algo::ShortestPaths) for more control.
    pub fn shortest_path(&self, source: &Town, destination: &Town) -> Vec<String> {
        ShortestPaths::on(self)
            .goal(destination.clone())
            .run(source)
            .map(|paths| paths.describe(destination))
            .unwrap_or_default()
    }

    fn canonical(&self, town: &Town) -> Result<Town, Error> {
        self.adjacency
            .get_key_value(town)
            .map(|(town, _)| town.clone())
            .ok_or_else(|| Error::TownAbsent(town.clone()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::{check_consistency, fixture, town};

    use super::*;

    fn names(roads: &[Road]) -> Vec<&str> {
        let mut names = roads.iter().map(Road::name).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    #[test]
    fn add_vertex_once() {
        let mut graph = Graph::new();

        assert!(graph.add_vertex(town("Town_1")));
        assert!(!graph.add_vertex(town("Town_1")));
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.contains_vertex(&town("Town_1")));
        assert!(!graph.contains_vertex(&town("Town_2")));
    }

    #[test]
    fn vertex_set_sorted() {
        let graph = fixture();
        let towns = graph.vertex_set();

        assert_eq!(towns.len(), 8);
        assert!(towns.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn edge_set() {
        let graph = fixture();
        assert_eq!(
            names(&graph.edge_set()),
            vec!["Road_1", "Road_2", "Road_3", "Road_4", "Road_5", "Road_6", "Road_7", "Road_8"]
        );
    }

    #[test]
    fn add_edge_endpoint_absent() {
        let mut graph = fixture();

        assert_matches!(
            graph.add_edge(&town("Town_1"), &town("Town_10"), 1, "Road_10"),
            Err(Error::TownAbsent(t)) if t == town("Town_10")
        );
        assert_eq!(graph.edge_count(), 8);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_edge_invalid_road() {
        let mut graph = fixture();

        assert_matches!(
            graph.add_edge(&town("Town_1"), &town("Town_8"), -1, "Road_10"),
            Err(Error::NegativeDistance(-1))
        );
        assert_matches!(
            graph.add_edge(&town("Town_1"), &town("Town_8"), 1, ""),
            Err(Error::EmptyRoadName)
        );
        assert!(!graph.contains_edge(&town("Town_1"), &town("Town_8")));
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn add_edge_new() {
        let mut graph = fixture();

        assert!(!graph.contains_edge(&town("Town_1"), &town("Town_8")));

        let road = graph
            .add_edge(&town("Town_1"), &town("Town_8"), 1, "Road_10")
            .unwrap()
            .unwrap();

        assert_eq!(road.to_string(), "Town_1 via Road_10 to Town_8 1 mi");
        assert!(graph.contains_edge(&town("Town_1"), &town("Town_8")));
        assert!(graph.contains_edge(&town("Town_8"), &town("Town_1")));
        assert_eq!(graph.edge_count(), 9);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_edge_duplicate_pair_ignored() {
        let mut graph = fixture();

        // Reversed endpoints, different distance and name.
        assert_matches!(
            graph.add_edge(&town("Town_5"), &town("Town_1"), 100, "Other"),
            Ok(None)
        );
        assert_eq!(graph.edge_count(), 8);

        let road = graph.get_edge(&town("Town_1"), &town("Town_5")).unwrap();
        assert_eq!(road.name(), "Road_1");
        assert_eq!(road.distance(), 3);
    }

    #[test]
    fn road_shares_canonical_towns() {
        let mut graph = Graph::new();
        graph.add_vertex(town("A"));
        graph.add_vertex(town("B"));

        let road = graph.add_edge(&town("A"), &town("B"), 1, "AB").unwrap().unwrap();
        let stored = graph.vertex("A").unwrap();

        assert!(road.source().ptr_eq(stored));
    }

    #[test]
    fn get_edge() {
        let graph = fixture();

        assert_eq!(
            graph.get_edge(&town("Town_5"), &town("Town_2")).map(Road::name),
            Some("Road_4")
        );
        assert_eq!(graph.get_edge(&town("Town_1"), &town("Town_8")), None);
        assert_eq!(graph.get_edge(&town("Town_1"), &town("Town_99")), None);
    }

    #[test]
    fn remove_edge_exact_match() {
        let mut graph = fixture();

        assert_eq!(graph.remove_edge(&town("Town_3"), &town("Town_8"), 4, "Road_7"), None);
        assert_eq!(graph.remove_edge(&town("Town_3"), &town("Town_8"), 3, "Road_8"), None);
        assert!(graph.contains_edge(&town("Town_3"), &town("Town_8")));

        let removed = graph
            .remove_edge(&town("Town_8"), &town("Town_3"), 3, "Road_7")
            .unwrap();

        assert_eq!(removed.name(), "Road_7");
        assert!(!graph.contains_edge(&town("Town_3"), &town("Town_8")));
        assert_eq!(graph.edge_count(), 7);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_edge_missing() {
        let mut graph = fixture();
        assert_eq!(graph.remove_edge(&town("Town_1"), &town("Town_8"), 1, "Road_1"), None);
        assert_eq!(graph.remove_edge(&town("Town_1"), &town("Nowhere"), 3, "Road_1"), None);
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut graph = fixture();

        assert!(graph.remove_vertex(&town("Town_1")));
        assert!(!graph.remove_vertex(&town("Town_1")));

        assert!(!graph.contains_vertex(&town("Town_1")));
        assert_eq!(graph.edge_count(), 6);
        assert!(graph.roads().all(|road| !road.contains(&town("Town_1"))));
        assert!(graph
            .towns()
            .all(|other| !graph.contains_edge(&town("Town_1"), other)));

        // Town_7 was connected only to Town_1.
        assert_eq!(graph.degree(&town("Town_7")), 0);
        assert!(graph.edges_of(&town("Town_7")).unwrap().is_empty());

        check_consistency(&graph).unwrap();
    }

    #[test]
    fn remove_vertex_with_loop() {
        let mut graph = Graph::new();
        graph.add_vertex(town("A"));
        graph.add_edge(&town("A"), &town("A"), 2, "Ring").unwrap();

        assert_eq!(graph.degree(&town("A")), 1);
        assert!(graph.remove_vertex(&town("A")));
        assert_eq!(graph.edge_count(), 0);
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn edges_of() {
        let graph = fixture();
        let roads = graph.edges_of(&town("Town_2")).unwrap();

        assert_eq!(names(&roads), vec!["Road_3", "Road_4"]);
    }

    #[test]
    fn edges_of_isolated() {
        let mut graph = Graph::new();
        graph.add_vertex(town("Lonely"));

        assert!(graph.edges_of(&town("Lonely")).unwrap().is_empty());
        assert!(graph.edges_of(&town("Unknown")).unwrap().is_empty());
    }

    #[test]
    fn edges_of_isolated_strict() {
        let mut graph = Graph::with_config(Config::strict());
        graph.add_vertex(town("Lonely"));

        assert_matches!(
            graph.edges_of(&town("Lonely")),
            Err(Error::NoIncidentRoads(t)) if t == town("Lonely")
        );
    }

    #[test]
    fn shortest_path_does_not_mutate() {
        let graph = fixture();
        let before = graph.edge_set();

        graph.shortest_path(&town("Town_1"), &town("Town_8"));

        let after = graph.edge_set();
        assert_eq!(before.len(), after.len());
        assert!(before.iter().zip(&after).all(|(b, a)| b.is_identical(a)));
        assert_eq!(graph.vertex_count(), 8);
    }
}
