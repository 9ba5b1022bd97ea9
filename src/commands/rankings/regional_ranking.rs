use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::warn;

use crate::model::{Dataset, RegionStats, RegionalRanking};
use crate::util::{is_missing_cell, parse_numeric_cell, round_decimals};

const STAT_DECIMALS: i32 = 2;

/// Mean, median, sample standard deviation and count of `value_column` per
/// distinct `region_column` value, best mean first.
pub(super) fn generate_regional_ranking(
    dataset: &Dataset,
    region_column: &str,
    value_column: &str,
) -> Option<RegionalRanking> {
    let (Some(region_index), Some(value_index)) = (
        dataset.column_index(region_column),
        dataset.column_index(value_column),
    ) else {
        warn!(
            region_column = %region_column,
            value_column = %value_column,
            "missing columns for regional ranking"
        );
        return None;
    };

    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in dataset.rows() {
        let region = row[region_index].as_str();
        if is_missing_cell(region) {
            continue;
        }

        let values = groups.entry(region).or_default();
        if let Some(value) = parse_numeric_cell(&row[value_index]) {
            values.push(value);
        }
    }

    // groups come out in label order; the stable sort keeps that order for equal means
    let mut regions: Vec<RegionStats> = groups
        .into_iter()
        .map(|(region, values)| summarize_region(region, values))
        .collect();
    regions.sort_by(|left, right| compare_means_descending(left.mean, right.mean));

    Some(RegionalRanking {
        region_column: region_column.to_string(),
        value_column: value_column.to_string(),
        regions,
    })
}

pub(super) fn summarize_region(region: &str, mut values: Vec<f64>) -> RegionStats {
    let count = values.len();
    values.sort_by(f64::total_cmp);

    let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
    let median = median_of_sorted(&values);
    let std_dev = mean.and_then(|mean| sample_std_dev(&values, mean));

    RegionStats {
        region: region.to_string(),
        mean: rounded(mean),
        median: rounded(median),
        std_dev: rounded(std_dev),
        count,
    }
}

fn median_of_sorted(values: &[f64]) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }

    let mid = count / 2;
    if count % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Undefined below two samples (n - 1 denominator).
fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let squares: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

fn rounded(value: Option<f64>) -> Option<f64> {
    value
        .filter(|value| !value.is_nan())
        .map(|value| round_decimals(value, STAT_DECIMALS))
}

/// Defined means first, highest to lowest.
fn compare_means_descending(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => right.total_cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
