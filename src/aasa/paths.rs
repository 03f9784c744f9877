//! Normalization of Universal Link path lists.

use std::collections::HashSet;

/// Normalize a list of raw Universal Link paths.
///
/// Each entry is trimmed and given a leading `/` if it lacks one. Entries that
/// are empty after trimming are dropped. A trailing `/` is kept as given, since
/// Apple treats `/callback` and `/callback/` as distinct prefixes. Duplicates
/// (after normalization) are removed, keeping the first occurrence in order.
pub fn normalize_paths<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for entry in raw {
        let trimmed = entry.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }

        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        if seen.insert(normalized.clone()) {
            out.push(normalized);
        }
    }

    out
}
