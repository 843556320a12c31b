use crate::error::DiffError;
use crate::lcs::Kind;
use crate::runs::DiffRun;
use serde::Serialize;

/// Inline, wdiff-style presentation: `[-removed-]`, `{+added+}`, kept text as is.
pub trait ToMarkup {
    fn to_markup(&self) -> String;
}

impl<V: AsRef<str>> ToMarkup for DiffRun<V> {
    fn to_markup(&self) -> String {
        let value = self.value.as_ref();
        match self.kind {
            Kind::Kept => value.to_string(),
            Kind::Added => format!("{{+{}+}}", value),
            Kind::Removed => format!("[-{}-]", value),
        }
    }
}

impl<V: AsRef<str>> ToMarkup for [DiffRun<V>] {
    fn to_markup(&self) -> String {
        self.iter().map(ToMarkup::to_markup).collect()
    }
}

impl<V: AsRef<str>> ToMarkup for Vec<DiffRun<V>> {
    fn to_markup(&self) -> String {
        self.as_slice().to_markup()
    }
}

fn prefix(kind: Kind) -> char {
    match kind {
        Kind::Kept => ' ',
        Kind::Added => '+',
        Kind::Removed => '-',
    }
}

/// One output line per line of each run, prefixed with `' '`, `'+'` or `'-'`.
/// Best suited to line-granularity runs; a run that does not end in a
/// newline is still closed with one.
pub fn to_prefixed_lines<V: AsRef<str>>(runs: &[DiffRun<V>]) -> String {
    let mut out = String::new();
    for run in runs {
        for line in run.value.as_ref().split_inclusive('\n') {
            out.push(prefix(run.kind));
            out.push_str(line);
            if !line.ends_with('\n') {
                out.push('\n');
            }
        }
    }
    out
}

/// The runs as a JSON array of `{"kind", "value"}` objects.
pub fn to_json<V: Serialize>(runs: &[DiffRun<V>]) -> Result<String, DiffError> {
    Ok(serde_json::to_string(runs)?)
}
