//! Name-keyed facade over [`Graph`].
//!
//! Consumers that only know town and road names use [`GraphManager`]. It
//! holds nothing but the graph and turns every name into a throwaway [`Town`]
//! for the lookup, so all invariants stay enforced by the graph itself.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    config::Config,
    core::{Error, Town},
    graph::Graph,
    loader::{self, LoadError},
};

/// String-keyed convenience layer over a [`Graph`].
///
/// Names that cannot form a town (empty names) are treated as absent by the
/// query methods.
///
/// # Examples
///
/// ```
/// use roadnet::GraphManager;
///
/// let mut manager = GraphManager::new();
///
/// manager.add_town("Athens").unwrap();
/// manager.add_town("Sparta").unwrap();
/// manager.add_road("Athens", "Sparta", 136, "E65").unwrap();
///
/// assert_eq!(manager.get_road("Sparta", "Athens"), Some("E65"));
/// assert_eq!(manager.get_path("Athens", "Sparta"), vec!["Athens via E65 to Sparta 136 mi"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphManager {
    graph: Graph,
}

impl GraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            graph: Graph::with_config(config),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Adds a town. Returns `false` if a town of this name already exists.
    pub fn add_town(&mut self, name: &str) -> Result<bool, Error> {
        Ok(self.graph.add_vertex(Town::new(name)?))
    }

    pub fn contains_town(&self, name: &str) -> bool {
        lookup(name).map_or(false, |town| self.graph.contains_vertex(&town))
    }

    pub fn get_town(&self, name: &str) -> Option<&Town> {
        self.graph.vertex(name)
    }

    /// Deletes a town together with all its roads.
    pub fn delete_town(&mut self, name: &str) -> bool {
        lookup(name).map_or(false, |town| self.graph.remove_vertex(&town))
    }

    /// Names of all towns in alphabetical order.
    pub fn all_towns(&self) -> Vec<String> {
        let mut names = self
            .graph
            .towns()
            .map(|town| town.name().to_owned())
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Adds a road between two existing towns.
    ///
    /// Returns `false` if the towns are already connected. See
    /// [`Graph::add_edge`] for errors.
    pub fn add_road(
        &mut self,
        town1: &str,
        town2: &str,
        distance: i64,
        road_name: &str,
    ) -> Result<bool, Error> {
        let town1 = Town::new(town1)?;
        let town2 = Town::new(town2)?;

        self.graph
            .add_edge(&town1, &town2, distance, road_name)
            .map(|road| road.is_some())
    }

    /// Name of the road connecting the two towns.
    pub fn get_road(&self, town1: &str, town2: &str) -> Option<&str> {
        let (town1, town2) = (lookup(town1)?, lookup(town2)?);
        self.graph.get_edge(&town1, &town2).map(|road| road.name())
    }

    pub fn contains_road_connection(&self, town1: &str, town2: &str) -> bool {
        match (lookup(town1), lookup(town2)) {
            (Some(town1), Some(town2)) => self.graph.contains_edge(&town1, &town2),
            _ => false,
        }
    }

    /// Deletes the road connecting the two towns if it has the given name.
    ///
    /// The distance of the road is taken from the graph, so the caller does
    /// not need to know it.
    pub fn delete_road_connection(&mut self, town1: &str, town2: &str, road_name: &str) -> bool {
        let (Some(town1), Some(town2)) = (lookup(town1), lookup(town2)) else {
            return false;
        };

        let Some(distance) = self
            .graph
            .get_edge(&town1, &town2)
            .and_then(|road| i64::try_from(road.distance()).ok())
        else {
            return false;
        };

        self.graph
            .remove_edge(&town1, &town2, distance, road_name)
            .is_some()
    }

    /// Names of all roads in alphabetical order.
    pub fn all_roads(&self) -> Vec<String> {
        let mut names = self
            .graph
            .roads()
            .map(|road| road.name().to_owned())
            .collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Describes the shortest route between two towns. See
    /// [`Graph::shortest_path`].
    pub fn get_path(&self, town1: &str, town2: &str) -> Vec<String> {
        match (lookup(town1), lookup(town2)) {
            (Some(town1), Some(town2)) => self.graph.shortest_path(&town1, &town2),
            _ => Vec::new(),
        }
    }

    /// Populates the graph from a file in the [loader](crate::loader) format.
    ///
    /// Returns the number of records read. On error the graph is left
    /// unchanged.
    pub fn populate_town_graph(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let file = File::open(path)?;
        self.populate_from_reader(BufReader::new(file))
    }

    /// Like [`populate_town_graph`](Self::populate_town_graph), reading from
    /// any buffered reader.
    pub fn populate_from_reader(&mut self, reader: impl BufRead) -> Result<usize, LoadError> {
        loader::load(&mut self.graph, reader)
    }
}

fn lookup(name: &str) -> Option<Town> {
    Town::new(name).ok()
}
