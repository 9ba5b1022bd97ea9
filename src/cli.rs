use std::path::PathBuf;

use clap::Parser;

use crate::model::{COMMUNE_COLUMN, IRRADIATION_COLUMN, REGION_COLUMN, RankingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "irradiation_rankings",
    version,
    about = "Generate commune and regional rankings from solar irradiation data"
)]
pub struct Cli {
    /// Input CSV with one row per commune
    #[arg(long, default_value = "data/irradiation_communes_2025_07.csv")]
    pub input: PathBuf,

    /// Directory receiving the generated rankings
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Number of communes kept in the main ranking, zero or less keeps none
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub top_n: i64,
}

impl From<Cli> for RankingConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output_dir: cli.output_dir,
            top_n: cli.top_n,
            irradiation_column: IRRADIATION_COLUMN.to_string(),
            region_column: REGION_COLUMN.to_string(),
            commune_column: COMMUNE_COLUMN.to_string(),
        }
    }
}
