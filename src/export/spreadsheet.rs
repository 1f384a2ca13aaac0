use jiff::tz::Offset;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::{COLUMNS, CellValue, ticket_cells};
use crate::error::{ReplydeskError, Result};
use crate::ticket::Ticket;

/// One ticket as a row of named cells
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadsheetRow {
    cells: Vec<(&'static str, CellValue)>,
}

impl SpreadsheetRow {
    /// Cell under a column key, `None` for unknown keys
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(key, _)| *key == column)
            .map(|(_, value)| value)
    }

    /// Cells in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CellValue)> {
        self.cells.iter().map(|(key, value)| (*key, value))
    }
}

/// Rows keyed by the same column names as the CSV header
pub fn to_spreadsheet_rows(tickets: &[Ticket], offset: Offset) -> Vec<SpreadsheetRow> {
    tickets
        .iter()
        .map(|ticket| SpreadsheetRow {
            cells: COLUMNS
                .iter()
                .copied()
                .zip(ticket_cells(ticket, offset))
                .collect(),
        })
        .collect()
}

/// Encode `rows` as an xlsx workbook with a single sheet.
///
/// The first row holds the column keys; numbers stay numeric, absent values
/// leave the cell blank.
pub fn write_workbook(rows: &[SpreadsheetRow], sheet_name: &str) -> Result<Vec<u8>> {
    build_workbook(rows, sheet_name)
        .map_err(|e| ReplydeskError::Export(format!("cannot build workbook: {}", e)))
}

fn build_workbook(rows: &[SpreadsheetRow], sheet_name: &str) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        for (col, (_, value)) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                CellValue::Number(n) => {
                    worksheet.write_number(row_num, col, *n as f64)?;
                }
                CellValue::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    workbook.save_to_buffer()
}
