use std::path::Path;

use anyhow::Result;
use tracing::{error, info, warn};

use super::{
    ReportTable, generate_regional_ranking, generate_top_ranking, load_dataset, write_report,
};
use crate::model::{REGIONAL_RANKING_FILE, RankingConfig, top_ranking_file_name};
use crate::util::ensure_directory;

pub fn run(config: &RankingConfig) -> Result<()> {
    ensure_directory(&config.output_dir)?;

    let dataset = load_dataset(&config.input)?;
    info!(columns = ?dataset.columns(), "columns available in input");

    let has_irradiation = dataset.has_column(&config.irradiation_column);
    let has_region = dataset.has_column(&config.region_column);

    if has_irradiation {
        if let Some(ranking) =
            generate_top_ranking(&dataset, &config.irradiation_column, config.top_n)
        {
            if let Some(leader) = ranking.rows.first() {
                info!(
                    commune = ranking.leader_cell(&config.commune_column).unwrap_or_default(),
                    column = %ranking.value_column,
                    value = leader.value,
                    ranked = ranking.rows.len(),
                    "top ranking computed"
                );
            }

            let output_path = config
                .output_dir
                .join(top_ranking_file_name(config.top_n));
            save_report(
                &ranking,
                &output_path,
                &format!("Top {} communes", config.top_n),
            );
        }
    } else {
        warn!(
            column = %config.irradiation_column,
            "skipping top ranking, column missing"
        );
    }

    if has_region && has_irradiation {
        if let Some(ranking) = generate_regional_ranking(
            &dataset,
            &config.region_column,
            &config.irradiation_column,
        ) {
            info!(
                regions = ranking.regions.len(),
                samples = ranking.total_count(),
                column = %ranking.value_column,
                "regional ranking computed"
            );

            let output_path = config.output_dir.join(REGIONAL_RANKING_FILE);
            save_report(&ranking, &output_path, "Regional ranking");
        }
    } else {
        warn!(
            region_column = %config.region_column,
            region_present = has_region,
            value_column = %config.irradiation_column,
            value_present = has_irradiation,
            "skipping regional ranking, column missing"
        );
    }

    info!("ranking generation complete");
    Ok(())
}

/// Write failures are reported and swallowed so the remaining reports still run.
fn save_report<T: ReportTable>(table: &T, output_path: &Path, title: &str) {
    match write_report(table, output_path) {
        Ok(()) => info!(title = %title, path = %output_path.display(), "ranking saved"),
        Err(err) => error!(
            title = %title,
            path = %output_path.display(),
            error = %format!("{err:#}"),
            "failed to save ranking"
        ),
    }
}
