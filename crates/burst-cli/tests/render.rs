use burst_cli::render::{load_table, render_insertion, render_popup, vocabulary_table};
use burst_cli::session::LoadReport;
use burst_cli::settings::DocumentSetting;
use burst_complete::{DocumentRegistry, RegistryError};
use burst_model::{Insertion, LoadStatus, PopupState, SourceKind, TabularSource};

fn registry() -> DocumentRegistry {
    let mut registry = DocumentRegistry::new();
    registry
        .register(
            "customers",
            TabularSource::new(
                SourceKind::DistributionList,
                vec!["name".to_string(), "email".to_string()],
                vec!["Ada,ada@example.com".to_string()],
            ),
        )
        .expect("valid name");
    registry
}

#[test]
fn popup_marks_the_highlighted_candidate() {
    let popup = PopupState {
        visible: true,
        query: "cu".to_string(),
        candidates: vec!["customers.name".to_string(), "customers.email".to_string()],
        highlighted_index: 1,
    };
    insta::assert_snapshot!(render_popup(Some(&popup)), @r#"
    query: "cu"
      customers.name
    > customers.email
    "#);
}

#[test]
fn hidden_popup() {
    insta::assert_snapshot!(render_popup(None), @"popup hidden");
}

#[test]
fn insertion_shows_the_cursor() {
    let insertion = Insertion {
        text: "Hi {{customers.name}} there".to_string(),
        cursor: 22,
    };
    insta::assert_snapshot!(render_insertion(&insertion), @"Hi {{customers.name}} |there");
}

#[test]
fn insertion_cursor_at_end() {
    let insertion = Insertion {
        text: "{{customers.email}}".to_string(),
        cursor: 19,
    };
    insta::assert_snapshot!(render_insertion(&insertion), @"{{customers.email}}|");
}

#[test]
fn vocabulary_table_lists_placeholders() {
    let table = vocabulary_table(&registry()).to_string();
    assert!(table.contains("Placeholder"));
    assert!(table.contains("{{customers.name}}"));
    assert!(table.contains("{{customers.email}}"));
}

#[test]
fn load_table_reports_each_outcome() {
    let document = |name: &str| DocumentSetting {
        name: name.to_string(),
        path: format!("{name}.csv").into(),
        has_header_row: true,
        kind: SourceKind::Generic,
    };
    let reports = vec![
        LoadReport {
            document: document("customers"),
            outcome: Ok(LoadStatus::Loaded),
            fields: 2,
        },
        LoadReport {
            document: document("orders"),
            outcome: Ok(LoadStatus::MissingSource),
            fields: 0,
        },
        LoadReport {
            document: document("bad"),
            outcome: Err(RegistryError::EmptyName),
            fields: 0,
        },
    ];
    let table = load_table(&reports).to_string();
    for expected in ["customers.csv", "loaded", "missing", "orders", "Fields"] {
        assert!(table.contains(expected), "missing {expected} in\n{table}");
    }
}
