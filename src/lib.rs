//! Road networks of named towns connected by named, distance-weighted roads,
//! with deterministic shortest route queries.
//!
//! The core is [`Graph`], which stores [towns](core::Town) and undirected
//! [roads](core::Road) with at most one road between any pair of towns, and
//! finds [shortest paths](algo::ShortestPaths) with Dijkstra's algorithm.
//! [`GraphManager`] is a facade over the graph keyed by plain names and the
//! [`loader`] reads networks from a simple text format.
//!
//! # Examples
//!
//! ```
//! use roadnet::GraphManager;
//!
//! let mut manager = GraphManager::new();
//! manager
//!     .populate_from_reader("A1,402;Vienna;Munich\nD1,293;Prague;Vienna\n".as_bytes())
//!     .unwrap();
//!
//! assert_eq!(manager.all_towns(), vec!["Munich", "Prague", "Vienna"]);
//! assert_eq!(
//!     manager.get_path("Prague", "Munich"),
//!     vec!["Prague via D1 to Vienna 293 mi", "Vienna via A1 to Munich 402 mi"]
//! );
//! ```

pub mod algo;
pub mod config;
pub mod core;
pub mod graph;
pub mod infra;
pub mod loader;
pub mod manager;

pub use crate::{config::Config, graph::Graph, manager::GraphManager};
