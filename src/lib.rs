//! LCS-based diffs between two sequences, coalesced into runs of kept,
//! added and removed units. Built for showing where a program's actual
//! output departs from the expected one.
//!
//! ```
//! use lcsdiff::{diff_str, DiffRun};
//!
//! let runs = diff_str("", "xyz");
//! assert_eq!(runs, vec![DiffRun::added("xyz".to_string())]);
//! ```

pub mod check;
pub mod differ;
pub mod error;
pub mod lcs;
pub mod options;
pub mod render;
pub mod runs;
pub mod tokenize;

pub use check::{compare_output, Verdict};
pub use differ::Differ;
pub use error::DiffError;
pub use lcs::{Entry, Kind, Script};
pub use options::DiffOptions;
pub use runs::{diff_runs, diff_str, DiffRun, DiffStats, Side};
pub use tokenize::{diff_text, Granularity};
