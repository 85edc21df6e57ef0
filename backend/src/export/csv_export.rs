//! Comma-separated export; links stay plain text.

use std::{fs::File, io::Write, path::Path};

use anyhow::Context;
use common::flat_record::{FlatRecord, FlatRecordField};

pub fn write_csv<W: Write>(rows: &[FlatRecord], writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // header written explicitly so an empty set still gets one
    csv_writer.write_record(FlatRecordField::ALL.iter().map(|field| field.header_name()))?;
    for row in rows {
        csv_writer.write_record(FlatRecordField::ALL.iter().map(|&field| row.display_value(field)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file(rows: &[FlatRecord], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(rows, file).with_context(|| format!("Failed to write {}", path.display()))
}
