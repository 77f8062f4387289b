//! Substring filtering of the vocabulary.

use burst_model::SuggestionVocabulary;

/// Entries that contain `query` anywhere, case-sensitively, in vocabulary
/// order. An empty query matches everything.
///
/// Containment rather than prefix matching lets `email` find
/// `customers.email` without typing the document name first.
pub fn filter(vocabulary: &SuggestionVocabulary, query: &str) -> Vec<String> {
    filter_limited(vocabulary, query, None)
}

/// Like [`filter`], keeping at most `limit` entries.
pub fn filter_limited(
    vocabulary: &SuggestionVocabulary,
    query: &str,
    limit: Option<usize>,
) -> Vec<String> {
    let matches = vocabulary.iter().filter(|entry| entry.contains(query));
    match limit {
        Some(limit) => matches.take(limit).map(str::to_string).collect(),
        None => matches.map(str::to_string).collect(),
    }
}
