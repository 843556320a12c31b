use serde::{Deserialize, Serialize};

/// Alias for a vector of Entry
/// Result of the LCS diff function, one entry per unit
pub type Script<T> = Vec<Entry<T>>;

/// How a unit (or a run of units) relates the two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Kept,
    Added,
    Removed,
}

/// Each element in a script can be
/// present in both sequences (Kept)
/// only in `after` (Added)
/// only in `before` (Removed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    Kept(T),
    Added(T),
    Removed(T),
}

impl<T> Entry<T> {
    pub fn kind(&self) -> Kind {
        match self {
            Entry::Kept(_) => Kind::Kept,
            Entry::Added(_) => Kind::Added,
            Entry::Removed(_) => Kind::Removed,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Entry::Kept(v) | Entry::Added(v) | Entry::Removed(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Entry::Kept(v) | Entry::Added(v) | Entry::Removed(v) => v,
        }
    }
}
