//! Loading road networks from text.
//!
//! Every non-blank line describes one road:
//!
//! ```text
//! road-name,distance;town-A;town-B
//! ```
//!
//! Fields are separated by either `,` or `;` and surrounding whitespace of each
//! field is ignored. Loading a line adds both towns (if not present yet) and
//! then the road between them.
//!
//! A load is all or nothing. The first malformed line aborts it and the graph
//! is left exactly as it was before.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::Path,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    core::{Error, Town},
    graph::Graph,
};

/// Number of fields of a line.
pub const FIELD_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading input failed: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected {} fields, found {found}", FIELD_COUNT)]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: invalid distance: {source}")]
    Distance {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: Error,
    },
}

impl LoadError {
    /// One-based number of the offending line, if the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Io(_) => None,
            LoadError::MissingFields { line, .. }
            | LoadError::Distance { line, .. }
            | LoadError::Graph { line, .. } => Some(*line),
        }
    }
}

/// A parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub road: String,
    pub distance: i64,
    pub town_a: String,
    pub town_b: String,
}

impl Record {
    /// Parses a single line. `line` is the one-based line number used in
    /// errors.
    pub fn parse(text: &str, line: usize) -> Result<Self, LoadError> {
        let fields = text.split([',', ';']).map(str::trim).collect::<Vec<_>>();

        let [road, distance, town_a, town_b, ..] = fields[..] else {
            return Err(LoadError::MissingFields {
                line,
                found: fields.len(),
            });
        };

        let distance = distance
            .parse()
            .map_err(|source| LoadError::Distance { line, source })?;

        Ok(Self {
            road: road.to_owned(),
            distance,
            town_a: town_a.to_owned(),
            town_b: town_b.to_owned(),
        })
    }

    /// Adds the towns and the road of the record to the graph.
    ///
    /// Returns `true` if the road was added, `false` if the towns were
    /// already connected.
    pub fn apply(&self, graph: &mut Graph) -> Result<bool, Error> {
        let town_a = Town::new(&self.town_a)?;
        let town_b = Town::new(&self.town_b)?;

        graph.add_vertex(town_a.clone());
        graph.add_vertex(town_b.clone());

        graph
            .add_edge(&town_a, &town_b, self.distance, &self.road)
            .map(|road| road.is_some())
    }
}

/// Parses all lines of the input. Blank lines are skipped.
pub fn parse(reader: impl BufRead) -> Result<Vec<(usize, Record)>, LoadError> {
    let mut records = Vec::new();

    for (i, text) in reader.lines().enumerate() {
        let text = text?;
        let line = i + 1;

        if text.trim().is_empty() {
            continue;
        }

        records.push((line, Record::parse(&text, line)?));
    }

    Ok(records)
}

/// Loads roads from the reader into the graph.
///
/// Returns the number of records read. On error the graph is not modified.
pub fn load(graph: &mut Graph, reader: impl BufRead) -> Result<usize, LoadError> {
    let records = parse(reader)?;

    let mut staged = graph.clone();
    let mut added = 0;

    for (line, record) in &records {
        let is_new = record
            .apply(&mut staged)
            .map_err(|source| LoadError::Graph {
                line: *line,
                source,
            })?;

        if is_new {
            added += 1;
        } else {
            debug!(line, road = %record.road, "towns already connected, line ignored");
        }
    }

    *graph = staged;

    info!(records = records.len(), added, "loaded road network");
    Ok(records.len())
}

/// Loads roads from the file at `path` into the graph. See [`load`].
pub fn load_file(graph: &mut Graph, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load(graph, BufReader::new(file))
}
