use crate::runs::{diff_runs, DiffRun};
use serde::{Deserialize, Serialize};

/// The unit a text diff works on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Char,
    /// Maximal runs of whitespace and of non-whitespace.
    Word,
    /// Lines including their `\n`.
    Line,
}

/// Splits `text` into units. Concatenating the result gives back `text`.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Char => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
        Granularity::Word => words(text),
        Granularity::Line => text.split_inclusive('\n').collect(),
    }
}

fn words(text: &str) -> Vec<&str> {
    let mut tokens = vec![];
    let mut start = 0;
    let mut in_space = None;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            tokens.push(&text[start..i]);
            start = i;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Diffs two texts at the given granularity.
pub fn diff_text(before: &str, after: &str, granularity: Granularity) -> Vec<DiffRun<String>> {
    let before = tokenize(before, granularity);
    let after = tokenize(after, granularity);
    diff_runs(&before, &after)
}
