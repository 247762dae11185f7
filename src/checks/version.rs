//! Dotted version numbers.
//!
//! PHP reports versions like `5.5.9-1ubuntu4.14`, so the first dotted
//! number in the text is taken and compared component by component.
//! Missing components count as zero: `5.3.7.1` is newer than `5.3.7`, and
//! `5.4` equals `5.4.0`.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// First run of dot-separated digits.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)*").expect("VERSION_REGEX must compile"));

/// Extract the numeric components of the first version number in `text`.
pub fn parse_version(text: &str) -> Option<Vec<u64>> {
    let found = VERSION_REGEX.find(text)?;
    found
        .as_str()
        .split('.')
        .map(|part| part.parse().ok())
        .collect()
}

/// Compare two parsed versions, padding the shorter one with zeros.
pub fn compare_versions(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Whether `actual` is at least `minimum`.
///
/// Returns false if either side contains no version number.
pub fn version_satisfies(actual: &str, minimum: &str) -> bool {
    match (parse_version(actual), parse_version(minimum)) {
        (Some(a), Some(m)) => compare_versions(&a, &m) != Ordering::Less,
        _ => false,
    }
}
