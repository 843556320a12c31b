pub mod types;
pub use types::*;

use std::cmp::max;

/// Longest-common-subsequence lengths for every pair of prefixes,
/// stored row-major in a single `(n + 1) * (m + 1)` buffer.
struct LcsTable {
    cells: Vec<usize>,
    width: usize,
}

impl LcsTable {
    fn build<T: PartialEq>(before: &[T], after: &[T]) -> Self {
        let width = after.len() + 1;
        let mut cells = vec![0; (before.len() + 1) * width];
        for i in 1..=before.len() {
            let row = i * width;
            let prev = row - width;
            for j in 1..=after.len() {
                cells[row + j] = if before[i - 1] == after[j - 1] {
                    cells[prev + j - 1] + 1
                } else {
                    max(cells[prev + j], cells[row + j - 1])
                };
            }
        }
        LcsTable { cells, width }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}

/// Number of cells the table for sequences of length `n` and `m` needs.
/// Saturates instead of overflowing so callers can compare it against a limit.
pub fn table_cells(n: usize, m: usize) -> usize {
    n.saturating_add(1).saturating_mul(m.saturating_add(1))
}

/// Length of the longest common subsequence of `before` and `after`.
pub fn lcs_len<T: PartialEq>(before: &[T], after: &[T]) -> usize {
    LcsTable::build(before, after).lcs_len()
}

/// Computes a unit-level edit script between two sequences.
///
/// Every unit of `before` appears once as `Kept` or `Removed`, every unit of
/// `after` once as `Kept` or `Added`, in order. The number of `Kept` entries
/// is the LCS length. When several scripts are equally short, additions are
/// preferred over removals while walking back from the end, so removals land
/// first in the forward output.
///
/// # Examples
///
/// ```
/// use lcsdiff::lcs::{diff, Entry};
///
/// let result = diff(&[1, 2, 3], &[1, 3, 4]);
/// assert_eq!(result, vec![
///     Entry::Kept(1),
///     Entry::Removed(2),
///     Entry::Kept(3),
///     Entry::Added(4),
/// ]);
/// ```
///
/// # Arguments
///
/// * `before` - The original sequence
/// * `after` - The new sequence
pub fn diff<T: PartialEq + Clone>(before: &[T], after: &[T]) -> Script<T> {
    if before.is_empty() {
        return after.iter().map(|e| Entry::Added(e.clone())).collect();
    }
    if after.is_empty() {
        return before.iter().map(|e| Entry::Removed(e.clone())).collect();
    }

    let table = LcsTable::build(before, after);
    traceback(before, after, &table)
}

fn traceback<T: PartialEq + Clone>(before: &[T], after: &[T], table: &LcsTable) -> Script<T> {
    let mut i = before.len();
    let mut j = after.len();
    let mut entries: Script<T> = Vec::with_capacity(i + j - table.lcs_len());
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && before[i - 1] == after[j - 1] {
            entries.push(Entry::Kept(before[i - 1].clone()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            entries.push(Entry::Added(after[j - 1].clone()));
            j -= 1;
        } else {
            entries.push(Entry::Removed(before[i - 1].clone()));
            i -= 1;
        }
    }

    entries.reverse();
    entries
}
