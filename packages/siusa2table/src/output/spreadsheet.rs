//! XLSX writer.

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use super::write_atomic;
use crate::error::Result;
use crate::types::ResultTable;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Render the table as an XLSX workbook.
///
/// Row 0 holds the bold header, column 0 the zero-based row index. Null
/// cells stay blank.
pub fn to_xlsx_bytes(table: &ResultTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let index_format = Format::new().set_bold().set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in (1u16..).zip(table.columns()) {
        worksheet.write_string_with_format(0, col, *name, &header_format)?;
    }

    for (index, row) in table.iter() {
        let sheet_row = worksheet_row(index)?;
        worksheet.write_number_with_format(sheet_row, 0, index as f64, &index_format)?;

        for (col, value) in (1u16..).zip(row.values()) {
            if let Some(value) = value {
                worksheet.write_string(sheet_row, col, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Worksheet row of the table row at `index`, below the header.
fn worksheet_row(index: usize) -> Result<u32> {
    index
        .checked_add(1)
        .and_then(|row| u32::try_from(row).ok())
        .ok_or_else(|| XlsxError::RowColumnLimitError.into())
}

/// Write the table as an XLSX file.
pub fn write_xlsx(table: &ResultTable, path: &Path) -> Result<()> {
    let content = to_xlsx_bytes(table)?;
    write_atomic(path, &content)
}
