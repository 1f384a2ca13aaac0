use std::time::Duration;

use super::TicketSource;
use crate::error::Result;
use crate::ticket::{SerialNumbersField, TicketRecord};

/// Serves a fixed set of sample tickets after a simulated fetch delay
#[derive(Debug, Clone)]
pub struct MockSource {
    latency: Duration,
    records: Vec<TicketRecord>,
}

impl MockSource {
    pub fn new(latency: Duration) -> Self {
        MockSource {
            latency,
            records: mock_records(),
        }
    }

    pub fn with_records(latency: Duration, records: Vec<TicketRecord>) -> Self {
        MockSource { latency, records }
    }
}

#[async_trait::async_trait]
impl TicketSource for MockSource {
    async fn fetch(&self) -> Result<Vec<TicketRecord>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("mock ({} tickets)", self.records.len())
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u64,
    date: &str,
    full_name: Option<&str>,
    object: Option<&str>,
    phone: Option<&str>,
    email: &str,
    serial_numbers: Option<&[&str]>,
    device_type: Option<&str>,
    tone: &str,
    issue_summary: &str,
    original_message: &str,
) -> TicketRecord {
    TicketRecord {
        id,
        date: date.to_string(),
        full_name: full_name.map(str::to_string),
        object: object.map(str::to_string),
        phone: phone.map(str::to_string),
        email: email.to_string(),
        serial_numbers: serial_numbers
            .map(|sns| SerialNumbersField::Many(sns.iter().map(|s| s.to_string()).collect())),
        device_type: device_type.map(str::to_string),
        emotional_tone: tone.to_string(),
        issue_summary: issue_summary.to_string(),
        original_message: original_message.to_string(),
        status: None,
        reviewed_by_human: false,
    }
}

/// Sample inbox used by the mock source
pub fn mock_records() -> Vec<TicketRecord> {
    vec![
        record(
            1,
            "2024-01-15T10:30:00",
            Some("Миронова Юлия Сергеевна"),
            Some("АО «ВостокНефть»"),
            Some("+79161234567"),
            "y.mironova@vostokneft.ru",
            Some(&["a44cc2d9189e"]),
            Some("ДГС ЭРИС-230"),
            "Негативный",
            "Датчик не выходит на связь после обновления",
            "Здравствуйте! После обновления прошивки датчик перестал выходить на связь. \
             Это уже привело к простою участка. Требуем срочно решить проблему.",
        ),
        record(
            2,
            "2024-01-16T14:05:00",
            Some("Орлов Дмитрий"),
            Some("ООО ПромЭнерго"),
            None,
            "d.orlov@promenergo.ru",
            Some(&["230-11874", "230-11875"]),
            Some("DGS230/IR-G20"),
            "Нейтральный",
            "Нужна схема подключения к Siemens S7-1200 по Modbus",
            "Добрый день. Подскажите, пожалуйста, схему подключения газоанализаторов \
             к контроллеру Siemens S7-1200 по Modbus RTU.",
        ),
        record(
            3,
            "2024-01-17T09:12:00",
            None,
            Some("ГК «СеверТранс»"),
            Some("+78124567890"),
            "support@severtrans.ru",
            None,
            Some("ДГС BLE Android"),
            "Позитивный",
            "Запрос документации API для интеграции",
            "Спасибо за быструю поставку! Хотим интегрировать приложение с нашей системой \
             мониторинга, пришлите, пожалуйста, документацию по API.",
        ),
        record(
            4,
            "2024-01-18T16:45:00",
            Some("Кузнецова Анна"),
            None,
            Some("+79035550101"),
            "a.kuznetsova@mail.ru",
            None,
            None,
            "Нейтральный",
            "Запрос пароля для DGS BLE Android",
            "Здравствуйте, не могу найти пароль для подключения к датчику через приложение.",
        ),
        record(
            5,
            "2024-01-19T08:20:00",
            Some("Сидоров Павел Игоревич"),
            Some("Нефтебаза №3"),
            Some("+79261112233"),
            "p.sidorov@neftebaza3.ru",
            Some(&["ERIS-414-0098"]),
            Some("ЭРИС-414"),
            "Негативный",
            "Ложные срабатывания сигнализации",
            "Третий день подряд ложные срабатывания сигнализации на объекте. \
             Просим прислать специалиста.",
        ),
    ]
}
