use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Budget used by downstream percentage math when the questionnaire does not
/// carry a usable amount.
pub const DEFAULT_BUDGET: u64 = 10_000;

/// The six answers collected before a blueprint is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnaireAnswers {
    pub event_name: String,
    /// One of the [`EventType`] names. Kept as text so that an unknown value
    /// can be reported as a validation error instead of a decoding failure.
    pub event_type: String,
    /// Expected head count. Not validated; echoed verbatim into the venue
    /// capacity.
    pub attendees: String,
    /// Whole currency units.
    pub budget: String,
    pub duration: EventDuration,
    pub goals: String,
}

impl QuestionnaireAnswers {
    /// Presence checks performed before submission.
    pub fn validate(&self) -> Result<EventType, ValidationError> {
        if self.event_name.trim().is_empty() {
            return Err(ValidationError::MissingField("eventName"));
        }
        if self.event_type.trim().is_empty() {
            return Err(ValidationError::MissingField("eventType"));
        }
        let event_type = self.event_type.parse::<EventType>()?;
        if self.budget.trim().is_empty() {
            return Err(ValidationError::MissingField("budget"));
        }
        Ok(event_type)
    }

    /// The budget as an integer amount, or [`DEFAULT_BUDGET`] when it is
    /// absent, not an integer, or zero.
    #[must_use]
    pub fn budget_amount(&self) -> u64 {
        match self.budget.trim().parse::<u64>() {
            Ok(amount) if amount > 0 => amount,
            _ => DEFAULT_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Conference,
    Corporate,
    Wedding,
    Festival,
    Networking,
    Workshop,
}

impl EventType {
    pub const ALL: [Self; 6] = [
        Self::Conference,
        Self::Corporate,
        Self::Wedding,
        Self::Festival,
        Self::Networking,
        Self::Workshop,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Corporate => "corporate",
            Self::Wedding => "wedding",
            Self::Festival => "festival",
            Self::Networking => "networking",
            Self::Workshop => "workshop",
        }
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownEventType(value.to_string()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long the event runs. The questionnaire offers five presets but
/// accepts free text as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventDuration {
    HalfDay,
    FullDay,
    TwoDays,
    ThreeDays,
    Week,
    Custom(String),
}

impl EventDuration {
    /// The wire value, e.g. `2-days`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HalfDay => "half-day",
            Self::FullDay => "full-day",
            Self::TwoDays => "2-days",
            Self::ThreeDays => "3-days",
            Self::Week => "week",
            Self::Custom(text) => text,
        }
    }

    /// Human readable label used in timelines.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::HalfDay => "Half Day (4 hours)",
            Self::FullDay => "Full Day (8 hours)",
            Self::TwoDays => "2 Days",
            Self::ThreeDays => "3 Days",
            Self::Week => "1 Week",
            Self::Custom(text) if text.trim().is_empty() => "Event day",
            Self::Custom(text) => text.trim(),
        }
    }
}

impl Default for EventDuration {
    fn default() -> Self {
        Self::Custom(String::new())
    }
}

impl From<String> for EventDuration {
    fn from(value: String) -> Self {
        match value.trim() {
            "half-day" => Self::HalfDay,
            "full-day" => Self::FullDay,
            "2-days" => Self::TwoDays,
            "3-days" => Self::ThreeDays,
            "week" => Self::Week,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for EventDuration {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<EventDuration> for String {
    fn from(value: EventDuration) -> Self {
        match value {
            EventDuration::Custom(text) => text,
            preset => preset.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
