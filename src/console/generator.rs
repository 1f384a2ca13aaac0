//! Suggested reply generation.
//!
//! Replies come from fixed templates chosen by the ticket's tone after a
//! simulated round-trip delay.

use std::time::Duration;

use crate::types::EmotionalTone;

const APOLOGY: &str = "Уважаемый клиент! Приносим извинения за доставленные неудобства. \
Наши специалисты уже работают над решением вашей проблемы. Пожалуйста, ожидайте, \
мы свяжемся с вами в ближайшее время.";

const CLARIFICATION: &str = "Здравствуйте! Благодарим за обращение. Для решения вашего \
вопроса нам нужно уточнить некоторые детали. Напишите, пожалуйста, удобное время для звонка.";

const WELCOME: &str = "Здравствуйте! Рады, что вы обратились к нам. С удовольствием поможем \
вам с интеграцией. Направляем ссылку на документацию: https://docs.example.com/api";

const GENERIC: &str =
    "Спасибо за обращение! Мы обработаем ваш запрос и свяжемся с вами.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTemplate {
    /// Negative tone
    Apology,
    /// Neutral tone
    Clarification,
    /// Positive tone
    Welcome,
    /// Anything that is not a recognized tone
    Generic,
}

impl ReplyTemplate {
    pub fn for_tone(tone: EmotionalTone) -> Self {
        match tone {
            EmotionalTone::Negative => ReplyTemplate::Apology,
            EmotionalTone::Neutral => ReplyTemplate::Clarification,
            EmotionalTone::Positive => ReplyTemplate::Welcome,
        }
    }

    /// Template for a raw tone label; unknown labels get [`ReplyTemplate::Generic`]
    pub fn for_label(label: &str) -> Self {
        match label.parse::<EmotionalTone>() {
            Ok(tone) => Self::for_tone(tone),
            Err(_) => ReplyTemplate::Generic,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ReplyTemplate::Apology => APOLOGY,
            ReplyTemplate::Clarification => CLARIFICATION,
            ReplyTemplate::Welcome => WELCOME,
            ReplyTemplate::Generic => GENERIC,
        }
    }
}

/// Produces reply drafts after a fixed latency
#[derive(Debug, Clone)]
pub struct ReplyGenerator {
    latency: Duration,
}

impl ReplyGenerator {
    pub fn new(latency: Duration) -> Self {
        ReplyGenerator { latency }
    }

    /// A generator that answers without waiting
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub async fn generate(&self, tone: EmotionalTone) -> String {
        self.respond(ReplyTemplate::for_tone(tone)).await
    }

    /// Entry point for a raw tone label straight from a source; labels that
    /// are not a known tone get the generic reply
    pub async fn generate_for_label(&self, label: &str) -> String {
        self.respond(ReplyTemplate::for_label(label)).await
    }

    async fn respond(&self, template: ReplyTemplate) -> String {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        template.text().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_its_own_template() {
        let texts: Vec<&str> = EmotionalTone::ALL
            .iter()
            .map(|t| ReplyTemplate::for_tone(*t).text())
            .collect();
        assert_eq!(texts.len(), 3);
        assert!(texts.iter().all(|t| *t != GENERIC));
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
    }

    #[test]
    fn test_templates_have_no_placeholders() {
        for template in [
            ReplyTemplate::Apology,
            ReplyTemplate::Clarification,
            ReplyTemplate::Welcome,
            ReplyTemplate::Generic,
        ] {
            let text = template.text();
            assert!(!text.contains('{') && !text.contains('}'), "{text}");
            assert!(!text.contains("  "), "line continuation left double spaces: {text}");
        }
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(ReplyTemplate::for_label("Негативный"), ReplyTemplate::Apology);
        assert_eq!(ReplyTemplate::for_label("positive"), ReplyTemplate::Welcome);
        assert_eq!(ReplyTemplate::for_label("Восторженный"), ReplyTemplate::Generic);
        assert_eq!(ReplyTemplate::for_label(""), ReplyTemplate::Generic);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_for_latency() {
        let generator = ReplyGenerator::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();

        let reply = generator.generate(EmotionalTone::Negative).await;
        assert!(reply.starts_with("Уважаемый клиент! Приносим извинения"));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_generate_for_unrecognized_label() {
        let reply = ReplyGenerator::instant().generate_for_label("???").await;
        assert_eq!(reply, GENERIC);
    }
}
