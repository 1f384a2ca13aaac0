//! Ticket list rendering

use jiff::tz::Offset;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_status_colored, format_table_date, tone_badge};
use crate::console::ListView;
use crate::ticket::Ticket;
use crate::types::TicketId;

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Дата")]
    date: String,
    #[tabled(rename = "ФИО")]
    full_name: String,
    #[tabled(rename = "Объект")]
    object: String,
    #[tabled(rename = "Телефон")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Заводские номера")]
    serial_numbers: String,
    #[tabled(rename = "Тип приборов")]
    device_type: String,
    #[tabled(rename = "Эмоц. окрас")]
    tone: String,
    #[tabled(rename = "Суть вопроса")]
    issue_summary: String,
    #[tabled(rename = "Статус")]
    status: String,
}

impl TicketRow {
    fn new(ticket: &Ticket, selected: bool, offset: Offset) -> Self {
        TicketRow {
            marker: if selected { "▶" } else { "" },
            id: ticket.id.get(),
            date: format_table_date(&ticket.date, offset),
            full_name: ticket.full_name.clone().unwrap_or_default(),
            object: ticket.object.clone().unwrap_or_default(),
            phone: ticket.phone.clone().unwrap_or_default(),
            email: ticket.email.clone(),
            serial_numbers: ticket.serial_numbers_joined().unwrap_or_default(),
            device_type: ticket.device_type.clone().unwrap_or_default(),
            tone: tone_badge(ticket.emotional_tone),
            issue_summary: ticket.issue_summary.clone(),
            status: format_status_colored(ticket.status),
        }
    }
}

/// Table of tickets with the selected one marked
pub fn format_ticket_table(tickets: &[Ticket], selected: Option<TicketId>, offset: Offset) -> String {
    let rows: Vec<TicketRow> = tickets
        .iter()
        .map(|t| TicketRow::new(t, selected == Some(t.id), offset))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Render whatever the list area currently shows
pub fn format_list_view(view: &ListView, offset: Offset) -> String {
    match view {
        ListView::Loading => "Загрузка обращений...".to_string(),
        ListView::Failed { message } => format!(
            "Не удалось загрузить обращения: {}\nПовторите попытку командой reload",
            message
        ),
        ListView::Busy => "Синхронизация...".to_string(),
        ListView::Table { tickets, .. } if tickets.is_empty() => "Обращений нет".to_string(),
        ListView::Table { tickets, selected } => format_ticket_table(tickets, *selected, offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::TicketBuilder;

    #[test]
    fn test_table_contains_headers_and_values() {
        let tickets = vec![
            TicketBuilder::new(1)
                .full_name("Орлов Дмитрий")
                .issue_summary("Схема подключения")
                .build(),
        ];
        let output = format_ticket_table(&tickets, Some(TicketId::new(1)), Offset::UTC);

        assert!(output.contains("Суть вопроса"));
        assert!(output.contains("Орлов Дмитрий"));
        assert!(output.contains("01.01.2024, 09:00"));
        assert!(output.contains("▶"));
    }

    #[test]
    fn test_list_view_states() {
        assert_eq!(format_list_view(&ListView::Loading, Offset::UTC), "Загрузка обращений...");
        assert_eq!(format_list_view(&ListView::Busy, Offset::UTC), "Синхронизация...");

        let failed = ListView::Failed {
            message: "timeout".to_string(),
        };
        assert!(format_list_view(&failed, Offset::UTC).contains("timeout"));

        let empty = ListView::Table {
            tickets: vec![],
            selected: None,
        };
        assert_eq!(format_list_view(&empty, Offset::UTC), "Обращений нет");
    }
}
