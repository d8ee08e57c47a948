//! Assertions over the JSON view models printed with `--format json`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a space list contains `expected` spaces.
pub fn assert_space_count(json: &Value, expected: usize) -> Result<()> {
    let spaces = json["content"]["spaces"]
        .as_array()
        .context("Expected 'content.spaces' array in JSON")?;

    if spaces.len() != expected {
        anyhow::bail!("Expected {} spaces, got {}", expected, spaces.len());
    }

    Ok(())
}

/// Assert that a report list contains `expected` reports.
pub fn assert_report_count(json: &Value, expected: usize) -> Result<()> {
    let reports = json["content"]["reports"]
        .as_array()
        .context("Expected 'content.reports' array in JSON")?;

    if reports.len() != expected {
        anyhow::bail!("Expected {} reports, got {}", expected, reports.len());
    }

    Ok(())
}

/// Assert the order of space names in a space list.
pub fn assert_space_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names = string_field(json, "spaces", "name")?;
    if names != expected {
        anyhow::bail!("Expected spaces {:?}, got {:?}", expected, names);
    }
    Ok(())
}

/// Assert the order of report progress texts in a report list.
pub fn assert_report_progress(json: &Value, expected: &[&str]) -> Result<()> {
    let progress = string_field(json, "reports", "progress")?;
    if progress != expected {
        anyhow::bail!("Expected reports {:?}, got {:?}", expected, progress);
    }
    Ok(())
}

/// Assert that every report path lives under `users/{uid}/spaces/{space_id}`.
pub fn assert_reports_belong_to(json: &Value, uid: &str, space_id: &str) -> Result<()> {
    let prefix = format!("users/{}/spaces/{}/progress_reports/", uid, space_id);

    for (i, path) in string_field(json, "reports", "path")?.iter().enumerate() {
        if !path.starts_with(&prefix) {
            anyhow::bail!("Report {} has path {} outside {}", i, path, prefix);
        }
    }

    Ok(())
}

fn string_field(json: &Value, collection: &str, field: &str) -> Result<Vec<String>> {
    let items = json["content"][collection]
        .as_array()
        .with_context(|| format!("Expected 'content.{}' array in JSON", collection))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item[field]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("{} entry {} missing '{}'", collection, i, field))
        })
        .collect()
}
