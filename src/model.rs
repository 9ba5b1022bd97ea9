use std::path::PathBuf;

use serde::Serialize;

pub const IRRADIATION_COLUMN: &str = "Irradiation annuelle (kWh/m²)";
pub const REGION_COLUMN: &str = "Region";
pub const COMMUNE_COLUMN: &str = "Commune";

pub const MEAN_LABEL: &str = "Moyenne";
pub const MEDIAN_LABEL: &str = "Médiane";
pub const STD_DEV_LABEL: &str = "Écart-type";
pub const COUNT_LABEL: &str = "Nb_communes";

pub const REGIONAL_RANKING_FILE: &str = "classement_regional_irradiation.csv";

pub fn top_ranking_file_name(top_n: i64) -> String {
    format!("top_{top_n}_communes_irradiation.csv")
}

/// Resolved options for a ranking run.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub top_n: i64,
    pub irradiation_column: String,
    pub region_column: String,
    pub commune_column: String,
}

/// In-memory copy of the input file. Cells keep their original text.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Every row must already be padded to `columns.len()` cells.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub value: f64,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TopRanking {
    pub columns: Vec<String>,
    pub value_column: String,
    pub rows: Vec<RankedRow>,
}

impl TopRanking {
    /// Cell of `column` for the rank-1 row, if both exist.
    pub fn leader_cell(&self, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.rows
            .first()
            .and_then(|row| row.cells.get(index))
            .map(String::as_str)
    }
}

/// Per-region statistics. `None` marks an undefined value and is written as an
/// empty cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStats {
    pub region: String,
    #[serde(rename = "Moyenne")]
    pub mean: Option<f64>,
    #[serde(rename = "Médiane")]
    pub median: Option<f64>,
    #[serde(rename = "Écart-type")]
    pub std_dev: Option<f64>,
    #[serde(rename = "Nb_communes")]
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct RegionalRanking {
    pub region_column: String,
    pub value_column: String,
    pub regions: Vec<RegionStats>,
}

impl RegionalRanking {
    pub fn total_count(&self) -> usize {
        self.regions.iter().map(|stats| stats.count).sum()
    }
}
