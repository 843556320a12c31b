use crate::lcs::Kind;
use serde::{Deserialize, Serialize};

/// A maximal stretch of consecutive entries sharing one kind.
/// `value` is the concatenation of the stretch's units, e.g. a `String`
/// for character or token diffs and a `Vec<T>` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffRun<V> {
    pub kind: Kind,
    pub value: V,
}

impl<V> DiffRun<V> {
    pub fn new(kind: Kind, value: V) -> Self {
        DiffRun { kind, value }
    }

    pub fn kept(value: V) -> Self {
        DiffRun::new(Kind::Kept, value)
    }

    pub fn added(value: V) -> Self {
        DiffRun::new(Kind::Added, value)
    }

    pub fn removed(value: V) -> Self {
        DiffRun::new(Kind::Removed, value)
    }
}

/// Which input a run list should be folded back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    /// Whether runs of `kind` contribute to this side.
    pub fn includes(self, kind: Kind) -> bool {
        match self {
            Side::Before => kind != Kind::Added,
            Side::After => kind != Kind::Removed,
        }
    }
}

/// Unit counts per kind over a whole diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub kept: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Run values that can be glued back together.
pub trait Concat: Default {
    fn append(&mut self, other: &Self);
    /// Number of units held.
    fn units(&self) -> usize;
}

impl Concat for String {
    fn append(&mut self, other: &Self) {
        self.push_str(other);
    }

    fn units(&self) -> usize {
        self.chars().count()
    }
}

impl<T: Clone> Concat for Vec<T> {
    fn append(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }

    fn units(&self) -> usize {
        self.len()
    }
}
