use jiff::tz::Offset;

use crate::ticket::ReceivedAt;

/// `dd.mm.yyyy, HH:MM`, as shown in the ticket table
pub fn format_table_date(date: &ReceivedAt, offset: Offset) -> String {
    date.in_offset(offset).strftime("%d.%m.%Y, %H:%M").to_string()
}

/// `dd.mm.yyyy, HH:MM:SS`, as written to exports
pub fn format_export_date(date: &ReceivedAt, offset: Offset) -> String {
    date.in_offset(offset).strftime("%d.%m.%Y, %H:%M:%S").to_string()
}
