use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Cell contents read as "no value", mirroring the usual dataframe NA tokens.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn is_missing_cell(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

/// Numeric value of a cell, or `None` when the cell is missing or not a number.
pub fn parse_numeric_cell(cell: &str) -> Option<f64> {
    if is_missing_cell(cell) {
        return None;
    }

    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Round half to even at `decimals` places.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
