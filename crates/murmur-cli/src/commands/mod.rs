//! Command implementations
//!
//! Each command reads plain files (or stdin), calls into murmur-core, and
//! prints JSON. All I/O lives here; the core stays pure.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::info;

use murmur_core::{ChangeDiffer, InsightExtractor, Lexicon};

/// Extract insights from a transcript file (or stdin) and print them as JSON
pub fn cmd_analyze(file: Option<&Path>, lexicon: Option<&Path>) -> Result<()> {
    let transcript = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read transcript from stdin")?;
            buf
        }
    };

    let lexicon = match lexicon {
        Some(path) => Lexicon::from_path(path)
            .with_context(|| format!("Failed to load lexicon {}", path.display()))?,
        None => Lexicon::default(),
    };

    let extractor = InsightExtractor::with_lexicon(lexicon)?;
    let record = extractor.extract(&transcript);

    info!(
        wins = record.wins.len(),
        regrets = record.regrets.len(),
        tasks = record.tasks.len(),
        keywords = record.keywords.len(),
        "analysis complete"
    );

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Diff two snapshot files and print the change map as JSON
pub fn cmd_diff(before: &Path, after: &Path, exclude: &[String]) -> Result<()> {
    let before = read_snapshot(before)?;
    let after = read_snapshot(after)?;

    let mut differ = ChangeDiffer::new();
    for field in exclude {
        differ = differ.exclude(field);
    }

    let changes = differ.diff(before.as_ref(), after.as_ref())?;

    info!(changed = changes.len(), "diff complete");

    println!("{}", serde_json::to_string_pretty(&changes)?);
    Ok(())
}

/// Read a flat snapshot file. JSON `null` counts as an absent snapshot.
fn read_snapshot(path: &Path) -> Result<Option<Map<String, Value>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        other => bail!(
            "Expected a JSON object in {}, got {}",
            path.display(),
            type_name(&other)
        ),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
