use jiff::tz::Offset;
use owo_colors::{OwoColorize, Stream};

use super::{format_status_colored, format_table_date, tone_badge};
use crate::console::DetailView;

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("—")
}

/// Detail panel of the selected ticket: sender, original message and draft
pub fn format_detail(view: &DetailView, offset: Offset) -> String {
    let ticket = &view.ticket;
    let serials = ticket.serial_numbers_joined();

    let mut output = format!(
        "{} #{} {}\n",
        "Детали обращения".if_supports_color(Stream::Stdout, |t| t.bold()),
        ticket.id,
        format_status_colored(ticket.status)
    );
    output.push_str(&format!(
        "От: {} ({})\n",
        or_dash(ticket.full_name.as_deref()),
        ticket.email
    ));
    output.push_str(&format!("Телефон: {}\n", or_dash(ticket.phone.as_deref())));
    output.push_str(&format!("Объект: {}\n", or_dash(ticket.object.as_deref())));
    output.push_str(&format!("Заводские номера: {}\n", or_dash(serials.as_deref())));
    output.push_str(&format!(
        "Тип приборов: {}\n",
        or_dash(ticket.device_type.as_deref())
    ));
    output.push_str(&format!("Дата: {}\n", format_table_date(&ticket.date, offset)));
    output.push_str(&format!("Эмоц. окрас: {}\n", tone_badge(ticket.emotional_tone)));
    output.push_str(&format!("Суть вопроса: {}\n", ticket.issue_summary));

    output.push_str("\nИсходное сообщение:\n");
    output.push_str(&ticket.original_message);
    output.push_str("\n\nПроект ответа:\n");

    if view.generating {
        output.push_str("Генерация...");
    } else if view.draft.is_empty() {
        output.push_str("(пусто)");
    } else {
        output.push_str(&view.draft);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::TicketBuilder;

    fn view(draft: &str, generating: bool) -> DetailView {
        DetailView {
            ticket: TicketBuilder::new(4)
                .full_name("Кузнецова Анна")
                .original_message("Не могу найти пароль")
                .build(),
            draft: draft.to_string(),
            generating,
            can_send: !draft.is_empty() && !generating,
        }
    }

    #[test]
    fn test_detail_shows_sender_and_message() {
        let output = format_detail(&view("", false), Offset::UTC);
        assert!(output.contains("От: Кузнецова Анна (client4@example.ru)"));
        assert!(output.contains("Телефон: —"));
        assert!(output.contains("Не могу найти пароль"));
        assert!(output.ends_with("(пусто)"));
    }

    #[test]
    fn test_detail_draft_states() {
        assert!(format_detail(&view("Ответ", false), Offset::UTC).ends_with("Ответ"));
        assert!(format_detail(&view("Ответ", true), Offset::UTC).ends_with("Генерация..."));
    }
}
