use crate::differ::Differ;
use crate::error::DiffError;
use crate::options::DiffOptions;
use crate::runs::DiffRun;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Outcome of comparing a program's output with the expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    /// `runs` go from expected (`before`) to actual (`after`).
    WrongAnswer { runs: Vec<DiffRun<String>> },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Compares `actual` against `expected`.
///
/// With `ignore_trailing_whitespace` both sides are normalized first and the
/// runs of a wrong answer describe the normalized texts.
///
/// ```
/// use lcsdiff::check::{compare_output, Verdict};
/// use lcsdiff::DiffOptions;
///
/// let options = DiffOptions::default().with_ignore_trailing_whitespace(true);
/// let verdict = compare_output("1 2\n3\n", "1 2  \n3\n\n", &options).unwrap();
/// assert_eq!(verdict, Verdict::Accepted);
/// ```
#[instrument(skip_all)]
pub fn compare_output(expected: &str, actual: &str, options: &DiffOptions) -> Result<Verdict, DiffError> {
    let (expected, actual) = if options.ignore_trailing_whitespace {
        (normalize(expected), normalize(actual))
    } else {
        (Cow::Borrowed(expected), Cow::Borrowed(actual))
    };

    if expected == actual {
        debug!("output accepted");
        return Ok(Verdict::Accepted);
    }

    let runs = Differ::new(options.clone())?.diff(&expected, &actual)?;
    debug!(runs = runs.len(), "wrong answer");
    Ok(Verdict::WrongAnswer { runs })
}

fn normalize(text: &str) -> Cow<'_, str> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    Cow::Owned(lines.join("\n"))
}
