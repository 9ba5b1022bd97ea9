use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::model::Dataset;

pub(super) fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        bail!("input file not found: {}", path.display());
    }

    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let dataset = read_dataset(file)
        .with_context(|| format!("failed to load data from {}", path.display()))?;

    info!(path = %path.display(), rows = dataset.len(), "loaded irradiation data");
    if dataset.is_empty() {
        warn!(path = %path.display(), "input file has a header but no rows");
    }

    Ok(dataset)
}

pub(super) fn read_dataset<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .context("failed to read CSV header")?
        .clone();
    if headers.is_empty() || is_blank_record(&headers) {
        bail!("no columns to parse from file");
    }

    let columns = unique_column_names(&headers);
    let width = columns.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse CSV record")?;
        if is_blank_record(&record) {
            continue;
        }

        if record.len() > width {
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            bail!(
                "line {line}: expected {width} fields, found {}",
                record.len()
            );
        }

        let mut cells: Vec<String> = record.iter().map(ToOwned::to_owned).collect();
        cells.resize(width, String::new());
        rows.push(cells);
    }

    Ok(Dataset::new(columns, rows))
}

fn is_blank_record(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}

/// Header names with any UTF-8 BOM removed and repeats suffixed `.1`, `.2`, ...
pub(super) fn unique_column_names(headers: &StringRecord) -> Vec<String> {
    let mut seen = HashSet::with_capacity(headers.len());
    let mut columns = Vec::with_capacity(headers.len());

    for (position, raw) in headers.iter().enumerate() {
        let name = if position == 0 {
            raw.trim_start_matches('\u{feff}')
        } else {
            raw
        };

        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }

        seen.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}
