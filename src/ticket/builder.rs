use jiff::civil::DateTime;

use super::{ReceivedAt, Ticket};
use crate::types::{EmotionalTone, TicketId, TicketStatus};

/// Fluent construction of [`Ticket`] values for mock data and tests
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    pub fn new(id: u64) -> Self {
        TicketBuilder {
            ticket: Ticket {
                id: TicketId::new(id),
                date: ReceivedAt::Local(DateTime::constant(2024, 1, 1, 9, 0, 0, 0)),
                full_name: None,
                object: None,
                phone: None,
                email: format!("client{}@example.ru", id),
                serial_numbers: None,
                device_type: None,
                emotional_tone: EmotionalTone::Neutral,
                issue_summary: String::new(),
                original_message: String::new(),
                status: TicketStatus::New,
                reviewed_by_human: false,
            },
        }
    }

    pub fn date(mut self, date: ReceivedAt) -> Self {
        self.ticket.date = date;
        self
    }

    pub fn full_name(mut self, name: impl Into<String>) -> Self {
        self.ticket.full_name = Some(name.into());
        self
    }

    pub fn object(mut self, object: impl Into<String>) -> Self {
        self.ticket.object = Some(object.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.ticket.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.ticket.email = email.into();
        self
    }

    pub fn serial_numbers<I, S>(mut self, numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ticket.serial_numbers = Some(numbers.into_iter().map(Into::into).collect());
        self
    }

    pub fn device_type(mut self, device_type: impl Into<String>) -> Self {
        self.ticket.device_type = Some(device_type.into());
        self
    }

    pub fn tone(mut self, tone: EmotionalTone) -> Self {
        self.ticket.emotional_tone = tone;
        self
    }

    pub fn issue_summary(mut self, summary: impl Into<String>) -> Self {
        self.ticket.issue_summary = summary.into();
        self
    }

    pub fn original_message(mut self, message: impl Into<String>) -> Self {
        self.ticket.original_message = message.into();
        self
    }

    pub fn build(self) -> Ticket {
        self.ticket
    }
}
