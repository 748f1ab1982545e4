use std::{borrow::Borrow, fmt, sync::Arc};

use super::error::Error;

/// A named vertex of the road network.
///
/// The name is the sole identity of a town: two towns are equal if and only
/// if their names are equal (exact, case-sensitive match) and towns are
/// ordered lexicographically by name. Cloning a town is cheap and the clone
/// shares the name allocation with the original.
///
/// # Examples
///
/// ```
/// use roadnet::core::Town;
///
/// let a = Town::new("Springfield").unwrap();
/// let b = Town::new("Springfield").unwrap();
///
/// assert_eq!(a, b);
/// assert!(Town::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Town {
    name: Arc<str>,
}

impl Town {
    /// Creates a town with the given name.
    ///
    /// Fails with [`Error::EmptyTownName`] if the name is empty.
    pub fn new(name: impl AsRef<str>) -> Result<Self, Error> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(Error::EmptyTownName);
        }

        Ok(Self {
            name: Arc::from(name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if both towns share the same name allocation, i.e., one
    /// is a clone of the other.
    pub fn ptr_eq(&self, other: &Town) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

// `Hash` of `Arc<str>` delegates to `str`, so lookups by name are consistent
// with lookups by town.
impl Borrow<str> for Town {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Town").field(&&*self.name).finish()
    }
}
