use std::path::Path;

use anyhow::{Context, Result, bail};
use burst_cli::logging::redact_value;
use burst_cli::render::{load_table, render_insertion, render_popup, vocabulary_table};
use burst_cli::session::{LoadReport, build_engine};
use burst_cli::settings::{
    DocumentSetting, Settings, load_settings, load_settings_from, render_settings, save_settings,
    settings_path,
};
use burst_complete::{CompletionEngine, char_len, insert_with};
use burst_model::{BufferId, BurstError, InsertStyle, Insertion};
use serde_json::json;
use tracing::{debug, info, info_span};

use crate::cli::{ConfigArgs, DocumentArgs, InsertArgs, SuggestArgs, VocabArgs};

const BUFFER: BufferId = BufferId(0);

pub fn run_vocab(args: &VocabArgs, config: Option<&Path>) -> Result<()> {
    let (engine, reports) = load_engine(&args.documents, config)?;
    if args.json {
        let vocabulary = engine.suggestion_vocabulary();
        let value = json!({
            "version": vocabulary.version(),
            "entries": vocabulary.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    if !reports.is_empty() {
        println!("{}", load_table(&reports));
    }
    println!("{}", vocabulary_table(engine.registry()));
    Ok(())
}

pub fn run_suggest(args: &SuggestArgs, config: Option<&Path>) -> Result<()> {
    let (mut engine, _) = load_engine(&args.documents, config)?;
    let style = InsertStyle::from(args.style);
    engine.register_buffer(BUFFER, style);
    let cursor = args.cursor.unwrap_or_else(|| char_len(&args.text));
    let span = info_span!("suggest", ?style, cursor);
    let _guard = span.enter();
    debug!(text = redact_value(&args.text), "buffer");

    let popup = if args.force {
        engine.force_show(BUFFER, &args.text, cursor)
    } else {
        engine.on_text_changed(BUFFER, &args.text, cursor)
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&popup)?);
    } else {
        print!("{}", render_popup(popup.as_ref()));
    }
    Ok(())
}

pub fn run_insert(args: &InsertArgs, config: Option<&Path>) -> Result<()> {
    let (mut engine, _) = load_engine(&args.documents, config)?;
    let style = InsertStyle::from(args.style);
    engine.register_buffer(BUFFER, style);
    let cursor = args.cursor.unwrap_or_else(|| char_len(&args.text));
    let span = info_span!("insert", ?style, cursor);
    let _guard = span.enter();
    debug!(text = redact_value(&args.text), "buffer");

    let insertion = match &args.entry {
        Some(entry) => insert_with(engine.options(), style, &args.text, cursor, entry),
        None => accept_from_popup(&mut engine, &args.text, cursor, args.index.unwrap_or(0))?,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&insertion)?);
    } else {
        println!("{}", render_insertion(&insertion));
    }
    Ok(())
}

pub fn run_config(args: &ConfigArgs, config: Option<&Path>) -> Result<()> {
    let path = match config {
        Some(path) => path.to_path_buf(),
        None => settings_path().ok_or(BurstError::NoConfigDir)?,
    };
    let settings = if path.exists() {
        load_settings_from(&path)?
    } else {
        Settings::default()
    };
    if args.init {
        save_settings(&settings, &path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }
    println!("# {}", path.display());
    print!("{}", render_settings(&settings)?);
    Ok(())
}

fn accept_from_popup(
    engine: &mut CompletionEngine,
    text: &str,
    cursor: usize,
    index: usize,
) -> Result<Insertion> {
    let Some(popup) = engine.force_show(BUFFER, text, cursor) else {
        bail!("no suggestion matches the word at cursor {cursor}");
    };
    let count = popup.candidates.len();
    engine
        .on_accept_candidate(BUFFER, index)
        .with_context(|| format!("candidate {index} out of range ({count} available)"))
}

fn load_engine(
    documents: &DocumentArgs,
    config: Option<&Path>,
) -> Result<(CompletionEngine, Vec<LoadReport>)> {
    let settings = match config {
        Some(path) => load_settings_from(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => load_settings(),
    };
    let extra = documents
        .docs
        .iter()
        .map(|spec| {
            DocumentSetting::parse_spec(spec, documents.has_header_row(), documents.kind())
                .context("parse --doc")
        })
        .collect::<Result<Vec<_>>>()?;
    let (engine, reports) = build_engine(&settings, &extra);
    let loaded = reports.iter().filter(|report| report.is_loaded()).count();
    info!(
        documents = reports.len(),
        loaded,
        entries = engine.suggestion_vocabulary().len(),
        "vocabulary ready"
    );
    Ok((engine, reports))
}
