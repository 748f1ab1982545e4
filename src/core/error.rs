use thiserror::Error;

use super::town::Town;

/// Validation failure of a graph operation.
///
/// Every variant is an invalid argument passed by the caller. None of them
/// leaves the graph in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A town was given an empty name.
    #[error("town name cannot be empty")]
    EmptyTownName,

    /// A road was given an empty name.
    #[error("road name cannot be empty")]
    EmptyRoadName,

    /// A road was given a negative distance.
    #[error("road distance cannot be negative, got {0}")]
    NegativeDistance(i64),

    /// A road endpoint is not a vertex of the graph.
    #[error("town `{0}` is not in the graph")]
    TownAbsent(Town),

    /// The town has no incident roads.
    ///
    /// Returned only when the graph is configured with
    /// [`Isolated::Error`](crate::config::Isolated::Error).
    #[error("town `{0}` has no incident roads")]
    NoIncidentRoads(Town),
}

impl Error {
    /// Returns `true` for all errors caused by an invalid argument, which is
    /// currently every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EmptyTownName
                | Error::EmptyRoadName
                | Error::NegativeDistance(_)
                | Error::TownAbsent(_)
                | Error::NoIncidentRoads(_)
        )
    }
}
