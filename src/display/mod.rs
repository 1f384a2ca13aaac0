use crate::types::TicketStatus;
use owo_colors::{OwoColorize, Stream};

pub mod dates;
pub mod detail;
pub mod table;
pub mod tone;

pub use dates::{format_export_date, format_table_date};
pub use detail::format_detail;
pub use table::{format_list_view, format_ticket_table};
pub use tone::{ToneColor, tone_badge};

pub fn format_status_colored(status: TicketStatus) -> String {
    format_status_colored_with_format(status, |s| format!("[{}]", s))
}

pub fn format_status_colored_with_format<F>(status: TicketStatus, format_fn: F) -> String
where
    F: Fn(&str) -> String,
{
    let badge = format_fn(status.label());
    match status {
        TicketStatus::New => badge
            .if_supports_color(Stream::Stdout, |b| b.yellow())
            .to_string(),
        TicketStatus::Sent => badge
            .if_supports_color(Stream::Stdout, |b| b.green())
            .to_string(),
    }
}
