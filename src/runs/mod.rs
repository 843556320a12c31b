mod types;
pub use types::*;

use crate::error::DiffError;
use crate::lcs::{self, Kind, Script};
use std::iter;

/// Folds a unit-level script into runs, starting a new run only when the
/// kind changes. No two neighbouring runs in the result share a kind.
pub fn coalesce<T, V>(script: Script<T>) -> Vec<DiffRun<V>>
where
    V: Default + Extend<T>,
{
    let mut runs: Vec<DiffRun<V>> = Vec::new();
    for entry in script {
        let kind = entry.kind();
        if let Some(run) = runs.last_mut().filter(|run| run.kind == kind) {
            run.value.extend(iter::once(entry.into_value()));
            continue;
        }
        let mut value = V::default();
        value.extend(iter::once(entry.into_value()));
        runs.push(DiffRun { kind, value });
    }
    runs
}

/// Diffs two sequences and returns the coalesced runs.
///
/// # Examples
///
/// ```
/// use lcsdiff::runs::{diff_runs, DiffRun};
///
/// let before: Vec<u8> = vec![1, 2, 3, 4];
/// let after: Vec<u8> = vec![1, 2, 9];
/// let result: Vec<DiffRun<Vec<u8>>> = diff_runs(&before, &after);
/// assert_eq!(result, vec![
///     DiffRun::kept(vec![1, 2]),
///     DiffRun::removed(vec![3, 4]),
///     DiffRun::added(vec![9]),
/// ]);
/// ```
pub fn diff_runs<T, V>(before: &[T], after: &[T]) -> Vec<DiffRun<V>>
where
    T: PartialEq + Clone,
    V: Default + Extend<T>,
{
    coalesce(lcs::diff(before, after))
}

/// Character-level diff of two strings.
pub fn diff_str(before: &str, after: &str) -> Vec<DiffRun<String>> {
    let before: Vec<char> = before.chars().collect();
    let after: Vec<char> = after.chars().collect();
    diff_runs(&before, &after)
}

/// Concatenates the runs that belong to `side`.
pub fn reconstruct<V: Concat>(runs: &[DiffRun<V>], side: Side) -> V {
    runs.iter()
        .filter(|run| side.includes(run.kind))
        .fold(V::default(), |mut acc, run| {
            acc.append(&run.value);
            acc
        })
}

pub fn before<V: Concat>(runs: &[DiffRun<V>]) -> V {
    reconstruct(runs, Side::Before)
}

pub fn after<V: Concat>(runs: &[DiffRun<V>]) -> V {
    reconstruct(runs, Side::After)
}

pub fn stats<V: Concat>(runs: &[DiffRun<V>]) -> DiffStats {
    runs.iter().fold(DiffStats::default(), |mut acc, run| {
        let units = run.value.units();
        match run.kind {
            Kind::Kept => acc.kept += units,
            Kind::Added => acc.added += units,
            Kind::Removed => acc.removed += units,
        }
        acc
    })
}

/// Replays `runs` over `before`, producing the `after` side.
///
/// Kept and removed runs must match `before` at the current offset, and
/// together they must consume all of it.
pub fn apply<T: PartialEq + Clone>(before: &[T], runs: &[DiffRun<Vec<T>>]) -> Result<Vec<T>, DiffError> {
    let mut result = vec![];
    let mut offset = 0;

    for (index, run) in runs.iter().enumerate() {
        if run.kind == Kind::Added {
            result.extend_from_slice(&run.value);
            continue;
        }
        let end = offset + run.value.len();
        if before.get(offset..end) != Some(run.value.as_slice()) {
            return Err(DiffError::Mismatch { index, offset });
        }
        if run.kind == Kind::Kept {
            result.extend_from_slice(&run.value);
        }
        offset = end;
    }

    if offset < before.len() {
        return Err(DiffError::Unconsumed { offset });
    }
    Ok(result)
}

/// String counterpart of [`apply`]; offsets are byte offsets into `before`.
pub fn apply_str(before: &str, runs: &[DiffRun<String>]) -> Result<String, DiffError> {
    let mut result = String::with_capacity(before.len());
    let mut offset = 0;

    for (index, run) in runs.iter().enumerate() {
        if run.kind == Kind::Added {
            result.push_str(&run.value);
            continue;
        }
        if !before[offset..].starts_with(run.value.as_str()) {
            return Err(DiffError::Mismatch { index, offset });
        }
        if run.kind == Kind::Kept {
            result.push_str(&run.value);
        }
        offset += run.value.len();
    }

    if offset < before.len() {
        return Err(DiffError::Unconsumed { offset });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::Entry;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_round_trip_before(before in "[abc]{0,16}", after in "[abc]{0,16}") {
            let runs = diff_str(&before, &after);
            prop_assert_eq!(reconstruct(&runs, Side::Before), before);
        }

        #[test]
        fn test_round_trip_after(before in "[abc]{0,16}", after in "[abc]{0,16}") {
            let runs = diff_str(&before, &after);
            prop_assert_eq!(reconstruct(&runs, Side::After), after);
        }

        #[test]
        fn test_no_adjacent_same_kind(before in "[abc ]{0,16}", after in "[abc ]{0,16}") {
            let runs = diff_str(&before, &after);
            for pair in runs.windows(2) {
                prop_assert_ne!(pair[0].kind, pair[1].kind);
            }
        }

        #[test]
        fn test_identity(s in ".{1,24}") {
            prop_assert_eq!(diff_str(&s, &s), vec![DiffRun::kept(s.clone())]);
        }

        #[test]
        fn test_total_difference(before in "[a-m]{1,12}", after in "[n-z]{1,12}") {
            let runs = diff_str(&before, &after);
            prop_assert_eq!(runs, vec![DiffRun::removed(before.clone()), DiffRun::added(after.clone())]);
        }

        #[test]
        fn test_apply_roundtrip(
            before in prop::collection::vec(0u8..5, 0..20),
            after in prop::collection::vec(0u8..5, 0..20),
        ) {
            let runs: Vec<DiffRun<Vec<u8>>> = diff_runs(&before, &after);
            prop_assert_eq!(apply(&before, &runs), Ok(after));
        }

        #[test]
        fn test_apply_str_roundtrip(before in ".{0,16}", after in ".{0,16}") {
            let runs = diff_str(&before, &after);
            prop_assert_eq!(apply_str(&before, &runs), Ok(after));
        }
    }

    #[test]
    fn test_coalesce_merges_neighbours() {
        let script = vec![
            Entry::Kept('a'),
            Entry::Kept('b'),
            Entry::Removed('c'),
            Entry::Added('d'),
            Entry::Added('e'),
            Entry::Kept('f'),
        ];
        let runs: Vec<DiffRun<String>> = coalesce(script);
        assert_eq!(
            runs,
            vec![
                DiffRun::kept("ab".to_string()),
                DiffRun::removed("c".to_string()),
                DiffRun::added("de".to_string()),
                DiffRun::kept("f".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(diff_str("", "").is_empty());
        assert_eq!(diff_str("", "xyz"), vec![DiffRun::added("xyz".to_string())]);
        assert_eq!(diff_str("xyz", ""), vec![DiffRun::removed("xyz".to_string())]);
    }

    #[test]
    fn test_hello_world() {
        let runs = diff_str("hello world", "hello friend");
        assert_eq!(runs[0], DiffRun::kept("hello ".to_string()));
        assert_eq!(
            runs,
            vec![
                DiffRun::kept("hello ".to_string()),
                DiffRun::removed("wo".to_string()),
                DiffRun::added("f".to_string()),
                DiffRun::kept("r".to_string()),
                DiffRun::removed("l".to_string()),
                DiffRun::added("ien".to_string()),
                DiffRun::kept("d".to_string()),
            ]
        );
        assert_eq!(before(&runs), "hello world");
        assert_eq!(after(&runs), "hello friend");
    }

    #[test]
    fn test_swapped_pair() {
        let runs = diff_str("abc", "bac");
        assert_eq!(
            runs,
            vec![
                DiffRun::removed("a".to_string()),
                DiffRun::kept("b".to_string()),
                DiffRun::added("a".to_string()),
                DiffRun::kept("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_stats() {
        let runs = diff_str("kitten", "sitting");
        assert_eq!(
            stats(&runs),
            DiffStats {
                kept: 4,
                added: 3,
                removed: 2
            }
        );
        assert!(stats(&diff_str("same", "same")).is_identical());
    }

    #[test]
    fn test_apply_mismatch() {
        let runs = vec![
            DiffRun::kept("ab".to_string()),
            DiffRun::removed("x".to_string()),
        ];
        assert_eq!(
            apply_str("abc", &runs),
            Err(DiffError::Mismatch { index: 1, offset: 2 })
        );
    }

    #[test]
    fn test_apply_unconsumed() {
        let runs = vec![DiffRun::kept(vec![1, 2])];
        assert_eq!(apply(&[1, 2, 3], &runs), Err(DiffError::Unconsumed { offset: 2 }));
    }

    #[test]
    fn test_apply_past_end() {
        let runs = vec![DiffRun::kept(vec![1, 2, 3])];
        assert_eq!(apply(&[1, 2], &runs), Err(DiffError::Mismatch { index: 0, offset: 0 }));
    }
}
