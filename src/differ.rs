use crate::error::DiffError;
use crate::lcs::table_cells;
use crate::options::DiffOptions;
use crate::runs::{diff_runs, DiffRun};
use crate::tokenize::tokenize;
use tracing::{debug, instrument, trace};

/// Text differ that refuses inputs whose LCS table would outgrow
/// `max_table_cells`. The table is quadratic in input length and the
/// computation cannot be interrupted, so the bound is checked up front.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn new(options: DiffOptions) -> Result<Self, DiffError> {
        options.validate()?;
        Ok(Differ { options })
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    #[instrument(skip_all, fields(granularity = ?self.options.granularity))]
    pub fn diff(&self, before: &str, after: &str) -> Result<Vec<DiffRun<String>>, DiffError> {
        let before = tokenize(before, self.options.granularity);
        let after = tokenize(after, self.options.granularity);

        let cells = table_cells(before.len(), after.len());
        if cells > self.options.max_table_cells {
            debug!(cells, limit = self.options.max_table_cells, "refusing oversized diff");
            return Err(DiffError::TableTooLarge {
                cells,
                limit: self.options.max_table_cells,
            });
        }

        trace!(before = before.len(), after = after.len(), cells, "building lcs table");
        let runs: Vec<DiffRun<String>> = diff_runs(&before, &after);
        debug!(runs = runs.len(), "diff computed");
        Ok(runs)
    }
}
