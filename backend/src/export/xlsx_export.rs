//! Spreadsheet export; regulatory links become clickable cells.

use std::path::Path;

use anyhow::Context;
use common::flat_record::{FlatRecord, FlatRecordField};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

const SHEET_NAME: &str = "MAUDE events";

pub fn write_xlsx_file(rows: &[FlatRecord], path: &Path) -> anyhow::Result<()> {
    let mut workbook = build_workbook(rows)?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save spreadsheet {}", path.display()))?;
    Ok(())
}

fn build_workbook(rows: &[FlatRecord]) -> anyhow::Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, field) in FlatRecordField::ALL.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, field.header_name(), &header_format)?;
    }
    for (i, row) in rows.iter().enumerate() {
        write_row(worksheet, i as u32 + 1, row)?;
    }
    worksheet.autofit();
    Ok(workbook)
}

fn write_row(worksheet: &mut Worksheet, row_num: u32, row: &FlatRecord) -> anyhow::Result<()> {
    for (col, &field) in FlatRecordField::ALL.iter().enumerate() {
        let col = col as u16;
        match (field, row.value(field)) {
            (_, None) => {}
            (FlatRecordField::RegulatoryLink, Some(link)) => {
                worksheet.write_url(row_num, col, link)?;
            }
            (_, Some(text)) => {
                worksheet.write_string(row_num, col, text)?;
            }
        }
    }
    Ok(())
}
