use burst_model::{
    CurrentWordSpan, LoadStatus, SourceKind, SuggestionVocabulary, TabularSource,
};

#[test]
fn word_span_lengths() {
    let span = CurrentWordSpan { start: 6, end: 11 };
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());

    let empty = CurrentWordSpan::empty_at(6);
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

#[test]
fn vocabulary_lookup() {
    let vocab = SuggestionVocabulary::new(
        3,
        vec!["customers.email".to_string(), "customers.name".to_string()],
    );
    assert_eq!(vocab.version(), 3);
    assert_eq!(vocab.len(), 2);
    assert_eq!(vocab.get(1), Some("customers.name"));
    assert_eq!(vocab.get(2), None);
    assert!(vocab.contains("customers.email"));
    assert!(!vocab.contains("customers"));
    assert_eq!(
        vocab.iter().collect::<Vec<_>>(),
        vec!["customers.email", "customers.name"]
    );
}

#[test]
fn loaded_source_keeps_origin() {
    let source = TabularSource::new(
        SourceKind::DistributionList,
        vec!["name".to_string(), "email".to_string()],
        vec!["Ada,ada@example.com".to_string()],
    )
    .with_origin("lists/customers.csv");
    assert_eq!(source.status(), LoadStatus::Loaded);
    assert!(!source.status().is_absent());
    assert_eq!(source.field_count(), 2);
    assert_eq!(
        source.origin().map(|p| p.to_string_lossy().into_owned()),
        Some("lists/customers.csv".to_string())
    );
}
