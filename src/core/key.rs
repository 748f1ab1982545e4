use std::fmt;

use super::town::Town;

/// Normalized unordered pair of towns identifying a road.
///
/// The endpoints are stored in lexicographic order, so the key of a road
/// between A and B is the same as the key of a road between B and A. The
/// graph stores at most one road per key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoadKey {
    lo: Town,
    hi: Town,
}

impl RoadKey {
    pub fn new(a: Town, b: Town) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Builds a key from borrowed towns, cloning them.
    pub fn between(a: &Town, b: &Town) -> Self {
        Self::new(a.clone(), b.clone())
    }

    /// Endpoints in lexicographic order.
    pub fn endpoints(&self) -> [&Town; 2] {
        [&self.lo, &self.hi]
    }

    pub fn contains(&self, town: &Town) -> bool {
        &self.lo == town || &self.hi == town
    }

    /// Returns the endpoint opposite to `town`, or `None` if `town` is not an
    /// endpoint. For a loop, the town itself is returned.
    pub fn other(&self, town: &Town) -> Option<&Town> {
        if &self.lo == town {
            Some(&self.hi)
        } else if &self.hi == town {
            Some(&self.lo)
        } else {
            None
        }
    }

    pub fn is_loop(&self) -> bool {
        self.lo == self.hi
    }
}

impl fmt::Debug for RoadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn town(name: &str) -> Town {
        Town::new(name).unwrap()
    }

    #[test]
    fn order_independent() {
        let ab = RoadKey::between(&town("A"), &town("B"));
        let ba = RoadKey::between(&town("B"), &town("A"));

        assert_eq!(ab, ba);
        assert_eq!(ab.endpoints(), [&town("A"), &town("B")]);
    }

    #[test]
    fn other_endpoint() {
        let key = RoadKey::between(&town("B"), &town("A"));

        assert_eq!(key.other(&town("A")), Some(&town("B")));
        assert_eq!(key.other(&town("B")), Some(&town("A")));
        assert_eq!(key.other(&town("C")), None);
    }

    #[test]
    fn loop_key() {
        let key = RoadKey::between(&town("A"), &town("A"));

        assert!(key.is_loop());
        assert_eq!(key.other(&town("A")), Some(&town("A")));
    }

    #[test]
    fn debug_format() {
        let key = RoadKey::between(&town("B"), &town("A"));
        assert_eq!(format!("{key:?}"), "{A, B}");
    }
}
