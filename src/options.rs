use crate::error::DiffError;
use crate::tokenize::Granularity;
use serde::{Deserialize, Serialize};

/// Upper bound on LCS table cells, about 32 MB of `usize` on 64-bit targets.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 4_000_000;

/// Settings for [`crate::Differ`] and [`crate::check::compare_output`].
///
/// Missing fields take their defaults when deserialized:
///
/// ```
/// use lcsdiff::{DiffOptions, Granularity};
///
/// let options = DiffOptions::from_json(r#"{"granularity": "line"}"#).unwrap();
/// assert_eq!(options.granularity, Granularity::Line);
/// assert!(!options.ignore_trailing_whitespace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    pub granularity: Granularity,
    pub max_table_cells: usize,
    /// Drop trailing whitespace on every line and trailing blank lines
    /// before comparing program output.
    pub ignore_trailing_whitespace: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            granularity: Granularity::Char,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            ignore_trailing_whitespace: false,
        }
    }
}

impl DiffOptions {
    pub fn from_json(s: &str) -> Result<Self, DiffError> {
        let options: DiffOptions = serde_json::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    #[must_use]
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    #[must_use]
    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    #[must_use]
    pub fn with_ignore_trailing_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_trailing_whitespace = ignore;
        self
    }

    pub fn validate(&self) -> Result<(), DiffError> {
        if self.max_table_cells == 0 {
            return Err(DiffError::InvalidOptions(
                "max_table_cells must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
