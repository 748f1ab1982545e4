use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use super::{error::Error, key::RoadKey, town::Town};

/// Length of a road in miles.
pub type Distance = u64;

/// Distance of a road created by [`Road::with_unit_distance`].
pub const UNIT_DISTANCE: i64 = 1;

/// An undirected, named road between two towns.
///
/// Equality and hashing of roads are *topological*: two roads are equal if
/// they connect the same unordered pair of towns, regardless of their names
/// and distances. The order of endpoints is kept only for display.
///
/// Roads do not implement [`Ord`]. Presentation ordering is by
/// name (see [`Road::cmp_by_name`]), which would not be consistent with the
/// topological equality.
///
/// # Examples
///
/// ```
/// use roadnet::core::{Road, Town};
///
/// let a = Town::new("A").unwrap();
/// let b = Town::new("B").unwrap();
///
/// let one = Road::new(a.clone(), b.clone(), 3, "Main Street").unwrap();
/// let other = Road::new(b, a, 7, "Bypass").unwrap();
///
/// assert_eq!(one, other);
/// assert_eq!(one.to_string(), "A via Main Street to B 3 mi");
/// ```
#[derive(Clone)]
pub struct Road {
    source: Town,
    destination: Town,
    distance: Distance,
    name: Arc<str>,
}

impl Road {
    /// Creates a road.
    ///
    /// Fails with [`Error::EmptyRoadName`] if the name is empty and with
    /// [`Error::NegativeDistance`] if the distance is negative.
    pub fn new(
        source: Town,
        destination: Town,
        distance: i64,
        name: impl AsRef<str>,
    ) -> Result<Self, Error> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(Error::EmptyRoadName);
        }

        let distance = Distance::try_from(distance).map_err(|_| Error::NegativeDistance(distance))?;

        Ok(Self {
            source,
            destination,
            distance,
            name: Arc::from(name),
        })
    }

    /// Creates a road of [unit distance](UNIT_DISTANCE).
    pub fn with_unit_distance(
        source: Town,
        destination: Town,
        name: impl AsRef<str>,
    ) -> Result<Self, Error> {
        Self::new(source, destination, UNIT_DISTANCE, name)
    }

    pub fn source(&self) -> &Town {
        &self.source
    }

    pub fn destination(&self) -> &Town {
        &self.destination
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> RoadKey {
        RoadKey::between(&self.source, &self.destination)
    }

    /// Returns `true` if the town is either endpoint of the road.
    pub fn contains(&self, town: &Town) -> bool {
        &self.source == town || &self.destination == town
    }

    /// Returns the endpoint opposite to `town`, or `None` if the road does not
    /// touch it.
    pub fn other_end(&self, town: &Town) -> Option<&Town> {
        if &self.source == town {
            Some(&self.destination)
        } else if &self.destination == town {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Returns the same road with the endpoints swapped for display.
    ///
    /// The result is equal to `self`.
    pub fn reversed(&self) -> Road {
        Road {
            source: self.destination.clone(),
            destination: self.source.clone(),
            distance: self.distance,
            name: self.name.clone(),
        }
    }

    /// Returns the road oriented so that `from` is the source, or `None` if
    /// the road does not touch `from`.
    pub fn oriented_from(&self, from: &Town) -> Option<Road> {
        if &self.source == from {
            Some(self.clone())
        } else if &self.destination == from {
            Some(self.reversed())
        } else {
            None
        }
    }

    /// Compares roads lexicographically by name.
    ///
    /// This is a presentation order only. Roads with equal names may be
    /// unequal and equal roads may have different names.
    pub fn cmp_by_name(&self, other: &Road) -> Ordering {
        self.name.cmp(&other.name)
    }

    /// Returns `true` if all attributes, including endpoint order, name and
    /// distance, are the same.
    pub fn is_identical(&self, other: &Road) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && self.distance == other.distance
            && self.name == other.name
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        (self.source == other.source && self.destination == other.destination)
            || (self.source == other.destination && self.destination == other.source)
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} to {} {} mi",
            self.source, self.name, self.destination, self.distance
        )
    }
}

impl fmt::Debug for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Road")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("distance", &self.distance)
            .field("name", &&*self.name)
            .finish()
    }
}
