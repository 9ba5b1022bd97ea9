use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};

use crate::model::{
    COUNT_LABEL, MEAN_LABEL, MEDIAN_LABEL, RegionalRanking, STD_DEV_LABEL, TopRanking,
};

/// A ranking that can be laid out as CSV: one header row, then one record per
/// entry with the rank or group label first.
pub(super) trait ReportTable {
    fn header(&self) -> Vec<String>;

    fn write_rows<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;
}

impl ReportTable for TopRanking {
    fn header(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.columns.iter().cloned())
            .collect()
    }

    fn write_rows<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        for row in &self.rows {
            let rank = row.rank.to_string();
            let record = std::iter::once(rank.as_str()).chain(row.cells.iter().map(String::as_str));
            writer
                .write_record(record)
                .with_context(|| format!("failed to write rank {}", row.rank))?;
        }
        Ok(())
    }
}

impl ReportTable for RegionalRanking {
    fn header(&self) -> Vec<String> {
        [
            self.region_column.as_str(),
            MEAN_LABEL,
            MEDIAN_LABEL,
            STD_DEV_LABEL,
            COUNT_LABEL,
        ]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
    }

    fn write_rows<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        for stats in &self.regions {
            writer
                .serialize(stats)
                .with_context(|| format!("failed to write region {}", stats.region))?;
        }
        Ok(())
    }
}

pub(super) fn write_report<T: ReportTable>(table: &T, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    write_table(table, file)
        .with_context(|| format!("failed to write {}", output_path.display()))
}

pub(super) fn write_table<T: ReportTable, W: Write>(table: &T, sink: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    writer
        .write_record(table.header())
        .context("failed to write header")?;
    table.write_rows(&mut writer)?;
    writer.flush().context("failed to flush report")?;

    Ok(())
}
