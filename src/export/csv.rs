use jiff::tz::Offset;

use super::{COLUMNS, ticket_cells};
use crate::ticket::Ticket;

/// Byte-order mark so spreadsheet tools read the file as UTF-8
pub const BOM: &str = "\u{FEFF}";

pub const DELIMITER: &str = ";";

/// Semicolon-separated export: BOM, a header line, then one line per ticket.
///
/// Fields are written verbatim. A value that itself contains `;` or a line
/// break shifts the columns of its row; consumers of this format rely on the
/// unescaped layout.
pub fn to_delimited_text(tickets: &[Ticket], offset: Offset) -> String {
    let mut lines = Vec::with_capacity(tickets.len() + 1);
    lines.push(COLUMNS.join(DELIMITER));

    for ticket in tickets {
        let cells = ticket_cells(ticket, offset);
        let fields: Vec<_> = cells.iter().map(|c| c.as_text()).collect();
        lines.push(fields.join(DELIMITER));
    }

    let mut text = String::from(BOM);
    text.push_str(&lines.join("\n"));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::{ReceivedAt, TicketBuilder};
    use crate::types::EmotionalTone;

    const HEADER: &str = "id;дата;фио;объект;телефон;email;заводские номера;тип приборов;эмоциональный окрас;суть вопроса";

    #[test]
    fn test_empty_collection_is_header_only() {
        let text = to_delimited_text(&[], Offset::constant(3));
        assert_eq!(text, format!("{}{}", BOM, HEADER));
    }

    #[test]
    fn test_full_row() {
        let ticket = TicketBuilder::new(7)
            .date("2024-03-01T07:05:09Z".parse::<ReceivedAt>().unwrap())
            .full_name("Иванов Иван")
            .object("ООО Ромашка")
            .phone("+79990001122")
            .email("ivanov@romashka.ru")
            .serial_numbers(["SN1", "SN2"])
            .device_type("ЭРИС-230")
            .tone(EmotionalTone::Negative)
            .issue_summary("Не работает датчик")
            .build();

        let text = to_delimited_text(&[ticket], Offset::constant(3));
        let lines: Vec<&str> = text.trim_start_matches(BOM).lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "7;01.03.2024, 10:05:09;Иванов Иван;ООО Ромашка;+79990001122;ivanov@romashka.ru;SN1,SN2;ЭРИС-230;Негативный;Не работает датчик"
        );
    }

    #[test]
    fn test_absent_fields_render_empty() {
        let ticket = TicketBuilder::new(3).email("a@b.ru").issue_summary("s").build();
        let text = to_delimited_text(&[ticket], Offset::constant(3));
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "3;01.01.2024, 09:00:00;;;;a@b.ru;;;Нейтральный;s");
    }

    #[test]
    fn test_embedded_delimiter_is_not_escaped() {
        let ticket = TicketBuilder::new(1).issue_summary("a;b").build();
        let text = to_delimited_text(&[ticket], Offset::UTC);
        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with(";a;b"));
        assert_eq!(row.split(DELIMITER).count(), COLUMNS.len() + 1);
    }

    #[test]
    fn test_deterministic() {
        let tickets = vec![TicketBuilder::new(1).build(), TicketBuilder::new(2).build()];
        assert_eq!(
            to_delimited_text(&tickets, Offset::UTC),
            to_delimited_text(&tickets, Offset::UTC)
        );
    }
}
