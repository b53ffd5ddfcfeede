//! Case-insensitive substring matching over a fixed candidate list.
//!
//! Matching folds both sides per character with the Unicode lowercase
//! mapping. Offsets reported back to callers are counted in characters of
//! the original, unfolded string, so a highlight never splits a multi-byte
//! character even when folding changes the byte length.

/// Location of the matched query inside a candidate.
///
/// Both fields count `char`s of the original candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub start: usize,
    pub len: usize,
}

impl Highlight {
    /// Split `text` into the part before, inside and after the highlight.
    pub fn split<'a>(&self, text: &'a str) -> (&'a str, &'a str, &'a str) {
        let start = byte_offset(text, self.start);
        let end = byte_offset(text, self.start + self.len);
        (&text[..start], &text[start..end], &text[end..])
    }
}

/// Byte offset of the `char_idx`th character, clamped to the end of `text`.
pub(crate) fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Folded characters of `text`, each tagged with the index of the source char.
fn fold(text: &str) -> Vec<(char, usize)> {
    text.chars()
        .enumerate()
        .flat_map(|(idx, ch)| ch.to_lowercase().map(move |lower| (lower, idx)))
        .collect()
}

/// Find the first case-insensitive occurrence of `query` in `text`.
///
/// Returns `None` for an empty query.
pub fn find_match(text: &str, query: &str) -> Option<Highlight> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    let haystack = fold(text);
    if needle.len() > haystack.len() {
        return None;
    }

    let pos = (0..=haystack.len() - needle.len()).find(|&start| {
        haystack[start..start + needle.len()]
            .iter()
            .zip(&needle)
            .all(|((h, _), n)| h == n)
    })?;

    let first = haystack[pos].1;
    let last = haystack[pos + needle.len() - 1].1;
    Some(Highlight {
        start: first,
        len: last - first + 1,
    })
}

/// Compute the match set for `query`.
///
/// Candidate order is preserved and duplicates are kept. An empty query
/// yields no matches.
pub fn recompute(query: &str, candidates: &[String]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|candidate| find_match(candidate, query).is_some())
        .cloned()
        .collect()
}

/// Owns the candidate set and the matches for the most recent query.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    candidates: Vec<String>,
    matches: Vec<String>,
}

impl Matcher {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            matches: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Replace the candidate set. Matches are stale until the next `update`.
    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }

    /// Recompute matches against `query`, discarding the previous set.
    pub fn update(&mut self, query: &str) -> &[String] {
        self.matches = recompute(query, &self.candidates);
        tracing::debug!(
            query,
            candidates = self.candidates.len(),
            matches = self.matches.len(),
            "recomputed matches"
        );
        &self.matches
    }
}
