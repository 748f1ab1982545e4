//! Behaviour options of a [`Graph`](crate::graph::Graph).

/// What [`Graph::edges_of`](crate::graph::Graph::edges_of) reports for a town
/// without incident roads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Isolated {
    /// Return an empty collection.
    #[default]
    Empty,

    /// Fail with [`Error::NoIncidentRoads`](crate::core::Error::NoIncidentRoads).
    Error,
}

/// Graph configuration.
///
/// # Examples
///
/// ```
/// use roadnet::{config::{Config, Isolated}, Graph};
///
/// let graph = Graph::with_config(Config::default().isolated(Isolated::Error));
/// assert_eq!(graph.config().isolated, Isolated::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[non_exhaustive]
pub struct Config {
    pub isolated: Isolated,
}

impl Config {
    /// Configuration reproducing the historical behaviour where querying the
    /// roads of an isolated town is an error.
    pub fn strict() -> Self {
        Self {
            isolated: Isolated::Error,
        }
    }

    pub fn isolated(self, value: Isolated) -> Self {
        Self {
            isolated: value,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        assert_eq!(Config::default().isolated, Isolated::Empty);
    }

    #[test]
    fn strict() {
        assert_eq!(Config::strict().isolated, Isolated::Error);
        assert_eq!(Config::strict().isolated(Isolated::Empty), Config::default());
    }
}
