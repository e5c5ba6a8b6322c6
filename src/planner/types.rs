use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Health,
    Study,
    Productivity,
    Mixed,
}

impl Goal {
    /// `None` for goals without a template.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "health" => Some(Goal::Health),
            "study" => Some(Goal::Study),
            "productivity" => Some(Goal::Productivity),
            "mixed" => Some(Goal::Mixed),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Weekdays,
    Weekend,
    #[default]
    Unspecified,
}

impl Recurrence {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "weekdays" => Recurrence::Weekdays,
            "weekend" => Recurrence::Weekend,
            _ => Recurrence::Unspecified,
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Recurrence::Weekdays => "Monday to Friday",
            Recurrence::Weekend => "on weekends",
            Recurrence::Unspecified => "every day you choose",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Quick,
    Moderate,
    Long,
}

impl Intensity {
    pub fn for_minutes(total_minutes: u32) -> Self {
        if total_minutes < 40 {
            Intensity::Quick
        } else if total_minutes > 90 {
            Intensity::Long
        } else {
            Intensity::Moderate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Quick => "quick",
            Intensity::Moderate => "moderate",
            Intensity::Long => "long",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time of day parsed from `HH:MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn parse(value: &str) -> Option<Self> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M").ok().map(ClockTime)
    }

    pub fn minutes(self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

/// A start/end pair where the end is strictly later than the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    start: ClockTime,
    end: ClockTime,
}

impl TimeWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Option<Self> {
        (end.minutes() > start.minutes()).then_some(Self { start, end })
    }

    pub fn total_minutes(self) -> u32 {
        self.end.minutes() - self.start.minutes()
    }
}

/// Raw values from the suggestion form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub goal: String,
    pub start: String,
    pub end: String,
    pub recurrence: String,
    pub context: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanTemplate {
    pub goal: Goal,
    pub heading: String,
    pub blocks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanDescription {
    pub total_minutes: u32,
    /// Hours with one decimal place, e.g. `1.5`.
    pub hours: String,
    pub intensity: Intensity,
    pub recurrence: Recurrence,
    pub recurrence_phrase: &'static str,
    pub context: Option<String>,
    pub template: Option<PlanTemplate>,
}

impl PlanDescription {
    pub fn summary(&self) -> String {
        format!("Available time: {} h {}.", self.hours, self.recurrence_phrase)
    }

    /// Suggested blocks, empty for goals without a template.
    pub fn blocks(&self) -> &[String] {
        match &self.template {
            Some(template) => template.blocks.as_slice(),
            None => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum PlanRejection {
    #[error("Fill in the goal, start time and end time.")]
    MissingFields,
    #[error("Times must use the HH:MM format.")]
    InvalidTime,
    #[error("The end time has to be later than the start time.")]
    EndNotAfterStart,
}

impl PlanRejection {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
