//! Ticket exports.
//!
//! Both encodings are pure functions of the ticket collection. Writing the
//! result somewhere is left to an [`ArtifactSink`].

mod csv;
mod sink;
mod spreadsheet;

pub use csv::{BOM, DELIMITER, to_delimited_text};
pub use sink::{ArtifactSink, DirectorySink};
pub use spreadsheet::{SpreadsheetRow, to_spreadsheet_rows, write_workbook};

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use jiff::tz::Offset;

use crate::config::Config;
use crate::display::format_export_date;
use crate::error::{ReplydeskError, Result};
use crate::ticket::Ticket;

/// Column keys shared by the CSV header and the spreadsheet rows
pub const COLUMNS: [&str; 10] = [
    "id",
    "дата",
    "фио",
    "объект",
    "телефон",
    "email",
    "заводские номера",
    "тип приборов",
    "эмоциональный окрас",
    "суть вопроса",
];

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ReplydeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            _ => Err(ReplydeskError::Export(format!(
                "unknown export format '{}' (expected csv or xlsx)",
                s
            ))),
        }
    }
}

/// One cell of an exported row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(u64),
    Text(String),
    Empty,
}

impl CellValue {
    fn optional(value: Option<impl Into<String>>) -> Self {
        value.map(|v| CellValue::Text(v.into())).unwrap_or(CellValue::Empty)
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s),
            CellValue::Empty => Cow::Borrowed(""),
        }
    }
}

/// Cells of one ticket in [`COLUMNS`] order
pub(crate) fn ticket_cells(ticket: &Ticket, offset: Offset) -> [CellValue; 10] {
    [
        CellValue::Number(ticket.id.get()),
        CellValue::Text(format_export_date(&ticket.date, offset)),
        CellValue::optional(ticket.full_name.clone()),
        CellValue::optional(ticket.object.clone()),
        CellValue::optional(ticket.phone.clone()),
        CellValue::Text(ticket.email.clone()),
        CellValue::optional(ticket.serial_numbers_joined()),
        CellValue::optional(ticket.device_type.clone()),
        CellValue::Text(ticket.emotional_tone.label().to_string()),
        CellValue::Text(ticket.issue_summary.clone()),
    ]
}

/// Names and locale used when producing export artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub offset: Offset,
    pub csv_file_name: String,
    pub xlsx_file_name: String,
    pub sheet_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let config = Config::default();
        ExportSettings {
            offset: Offset::constant(config.display.utc_offset_hours),
            csv_file_name: config.export.csv_file_name,
            xlsx_file_name: config.export.xlsx_file_name,
            sheet_name: config.export.sheet_name,
        }
    }
}

impl ExportSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ExportSettings {
            offset: config.display_offset()?,
            csv_file_name: config.export.csv_file_name.clone(),
            xlsx_file_name: config.export.xlsx_file_name.clone(),
            sheet_name: config.export.sheet_name.clone(),
        })
    }
}

/// An encoded export ready to be handed to a sink
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode `tickets` in the requested format
pub fn export(
    tickets: &[Ticket],
    format: ExportFormat,
    settings: &ExportSettings,
) -> Result<ExportArtifact> {
    let artifact = match format {
        ExportFormat::Csv => ExportArtifact {
            format,
            file_name: settings.csv_file_name.clone(),
            content_type: CSV_CONTENT_TYPE,
            bytes: to_delimited_text(tickets, settings.offset).into_bytes(),
        },
        ExportFormat::Xlsx => {
            let rows = to_spreadsheet_rows(tickets, settings.offset);
            ExportArtifact {
                format,
                file_name: settings.xlsx_file_name.clone(),
                content_type: XLSX_CONTENT_TYPE,
                bytes: write_workbook(&rows, &settings.sheet_name)?,
            }
        }
    };
    tracing::info!(
        "Exported {} tickets as {} ({} bytes)",
        tickets.len(),
        format,
        artifact.bytes.len()
    );
    Ok(artifact)
}
