use tracing::warn;

use crate::model::{Dataset, RankedRow, TopRanking};
use crate::util::parse_numeric_cell;

/// The `top_n` rows with the largest `column` value, ranked from 1.
///
/// Equal values keep their input order. Rows without a numeric value are never
/// ranked, and a `top_n` of zero or less ranks nothing. Returns `None` when the
/// column does not exist.
pub(super) fn generate_top_ranking(
    dataset: &Dataset,
    column: &str,
    top_n: i64,
) -> Option<TopRanking> {
    let Some(index) = dataset.column_index(column) else {
        warn!(column = %column, "column not found in data");
        return None;
    };

    let mut candidates: Vec<(usize, f64)> = dataset
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(position, row)| {
            parse_numeric_cell(&row[index]).map(|value| (position, value))
        })
        .collect();

    let unranked = dataset.len() - candidates.len();
    if unranked > 0 {
        warn!(
            column = %column,
            rows = unranked,
            "rows without a numeric value left out of the ranking"
        );
    }

    // sort_by is stable, ties stay in input order
    candidates.sort_by(|left, right| right.1.total_cmp(&left.1));
    candidates.truncate(usize::try_from(top_n).unwrap_or(0));

    let rows = candidates
        .into_iter()
        .enumerate()
        .map(|(offset, (position, value))| RankedRow {
            rank: offset + 1,
            value,
            cells: dataset.rows()[position].clone(),
        })
        .collect();

    Some(TopRanking {
        columns: dataset.columns().to_vec(),
        value_column: column.to_string(),
        rows,
    })
}
