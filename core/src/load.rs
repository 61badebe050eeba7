//! Corpus loading from CSV, JSON and JSONL movie listings.
//!
//! Records are keyed by `name`; the text of a movie is its `genre`, `tagline`,
//! `casts`, `directors` and `writers` joined by single spaces. Missing, blank
//! or non-string fields contribute nothing.

use crate::corpus::Corpus;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub casts: Option<String>,
    #[serde(default)]
    pub directors: Option<String>,
    #[serde(default)]
    pub writers: Option<String>,
}

impl MovieRecord {
    /// Lenient conversion from an arbitrary JSON object.
    pub fn from_json(value: &Value) -> MovieRecord {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        MovieRecord {
            name: text("name"),
            genre: text("genre"),
            tagline: text("tagline"),
            casts: text("casts"),
            directors: text("directors"),
            writers: text("writers"),
        }
    }

    pub fn combined_text(&self) -> String {
        [&self.genre, &self.tagline, &self.casts, &self.directors, &self.writers]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Load a file or, recursively, every `.csv`/`.json`/`.jsonl` file of a directory.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p).as_deref(), Some("csv" | "json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
        files.sort();
    } else {
        files.push(path.to_path_buf());
    }

    let mut corpus = Corpus::new();
    for file in &files {
        let records = match extension(file).as_deref() {
            Some("json") => read_json(file),
            Some("jsonl") => read_jsonl(file),
            _ => read_csv(file),
        }
        .with_context(|| format!("failed to load movies from '{}'", file.display()))?;
        add_records(&mut corpus, records);
    }
    tracing::info!(files = files.len(), num_docs = corpus.len(), "loaded corpus");
    Ok(corpus)
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_ascii_lowercase)
}

fn add_records(corpus: &mut Corpus, records: Vec<MovieRecord>) {
    for record in records {
        let Some(name) = record.name.as_deref().filter(|n| !n.trim().is_empty()) else {
            tracing::warn!(?record, "skipping record without a name");
            continue;
        };
        let name = name.to_string();
        if !corpus.insert(name.clone(), record.combined_text()) {
            tracing::warn!(%name, "duplicate title, keeping the last record");
        }
    }
}

pub fn read_csv(path: &Path) -> Result<Vec<MovieRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: MovieRecord = row?;
        records.push(record);
    }
    Ok(records)
}

pub fn read_json(path: &Path) -> Result<Vec<MovieRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let json: Value = serde_json::from_reader(reader)?;
    Ok(match json {
        Value::Array(arr) => arr.iter().map(MovieRecord::from_json).collect(),
        Value::Object(_) => vec![MovieRecord::from_json(&json)],
        _ => Vec::new(),
    })
}

pub fn read_jsonl(path: &Path) -> Result<Vec<MovieRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let value: Value = serde_json::from_str(&line)?;
        records.push(MovieRecord::from_json(&value));
    }
    Ok(records)
}
