use owo_colors::{OwoColorize, Stream};

use crate::types::EmotionalTone;

/// Indicator color of a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneColor {
    Green,
    Orange,
    Red,
    /// Shown for anything that is not a recognized tone
    Gray,
}

impl ToneColor {
    pub fn for_tone(tone: EmotionalTone) -> Self {
        match tone {
            EmotionalTone::Positive => ToneColor::Green,
            EmotionalTone::Neutral => ToneColor::Orange,
            EmotionalTone::Negative => ToneColor::Red,
        }
    }

    pub fn for_label(label: &str) -> Self {
        match label.parse::<EmotionalTone>() {
            Ok(tone) => Self::for_tone(tone),
            Err(_) => ToneColor::Gray,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToneColor::Green => "green",
            ToneColor::Orange => "orange",
            ToneColor::Red => "red",
            ToneColor::Gray => "gray",
        }
    }

    /// Paint `text` for stdout, plain when stdout has no color support
    pub fn paint(self, text: &str) -> String {
        match self {
            ToneColor::Green => text.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
            ToneColor::Orange => text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
            ToneColor::Red => text.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
            ToneColor::Gray => text.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string(),
        }
    }
}

/// A colored dot followed by the tone label
pub fn tone_badge(tone: EmotionalTone) -> String {
    format!("{} {}", ToneColor::for_tone(tone).paint("●"), tone.label())
}
