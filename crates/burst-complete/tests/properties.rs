use burst_complete::{
    CompletionOptions, DocumentRegistry, char_len, current_word, current_word_with, filter,
    insert, insert_with, span_text,
};
use burst_model::{InsertStyle, SourceKind, TabularSource};
use proptest::prelude::*;

fn source(fields: &[String]) -> TabularSource {
    TabularSource::new(SourceKind::Generic, fields.to_vec(), Vec::new())
}

fn documents() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        ("[a-c]{1,3}", prop::collection::vec("[a-z]{1,4}", 0..4)),
        0..6,
    )
}

fn buffer() -> impl Strategy<Value = String> {
    "[a-z ,.\n{}é]{0,24}"
}

proptest! {
    #[test]
    fn vocabulary_is_flattened_latest_registration(docs in documents()) {
        let mut registry = DocumentRegistry::new();
        for (name, fields) in &docs {
            registry.register(name, source(fields)).expect("valid name");
        }

        let vocabulary = registry.vocabulary();
        let expected_len: usize = registry.documents().map(|(_, s)| s.field_count()).sum();
        prop_assert_eq!(vocabulary.len(), expected_len);

        let mut offset = 0;
        for (name, document) in registry.documents() {
            // Only the latest registration of a name is visible.
            let latest = docs.iter().rev().find(|(n, _)| n == name).map(|(_, f)| f);
            prop_assert_eq!(document.fields(), latest.map(Vec::as_slice));
            for (i, field) in document.fields().unwrap_or_default().iter().enumerate() {
                prop_assert_eq!(&vocabulary.entries()[offset + i], &format!("{name}.{field}"));
            }
            offset += document.field_count();
        }
    }

    #[test]
    fn filter_is_ordered_containment(
        fields in prop::collection::vec("[a-d]{1,4}", 0..8),
        query in "[a-d.]{0,3}",
    ) {
        let mut registry = DocumentRegistry::new();
        registry.register("doc", source(&fields)).expect("valid name");
        let vocabulary = registry.vocabulary();

        let expected: Vec<String> = vocabulary
            .iter()
            .filter(|entry| entry.contains(query.as_str()))
            .map(str::to_string)
            .collect();
        prop_assert_eq!(filter(&vocabulary, &query), expected);
        prop_assert_eq!(filter(&vocabulary, ""), vocabulary.entries().to_vec());
    }

    #[test]
    fn word_span_ends_at_cursor(text in buffer(), cursor in 0usize..30) {
        let span = current_word(&text, cursor);
        let clamped = cursor.min(char_len(&text));
        prop_assert_eq!(span.end, clamped);
        prop_assert!(span.start <= span.end);
        prop_assert!(!span_text(&text, span).chars().any(char::is_whitespace));
        // Pure: same input, same span.
        prop_assert_eq!(current_word(&text, cursor), span);
    }

    #[test]
    fn insertion_only_touches_the_word(
        text in buffer(),
        cursor in 0usize..30,
        editor in any::<bool>(),
    ) {
        let style = if editor { InsertStyle::Editor } else { InsertStyle::Line };
        let options = CompletionOptions::default();
        let cursor = cursor.min(char_len(&text));
        let span = current_word_with(&options.boundaries(style), &text, cursor);
        let done = insert_with(&options, style, &text, cursor, "doc.field");

        let head: String = text.chars().take(span.start).collect();
        let tail: String = text.chars().skip(span.end).collect();
        let inserted = format!("{{{{doc.field}}}}{}", options.trailing_delimiter(style));
        prop_assert_eq!(&done.text, &format!("{head}{inserted}{tail}"));
        prop_assert_eq!(done.cursor, span.start + char_len(&inserted));
        prop_assert!(done.cursor <= char_len(&done.text));
    }

    #[test]
    fn line_insert_after_space_keeps_previous_word(words in prop::collection::vec("[a-z]{1,5}", 1..4)) {
        let text = format!("{} ", words.join(" "));
        let done = insert(&text, char_len(&text), "doc.field");
        prop_assert_eq!(done.text, format!("{text}{{{{doc.field}}}}"));
    }
}
