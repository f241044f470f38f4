use std::{fmt::Display, ops::Deref, str::FromStr};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Session;

/// The five moods a day can be filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MoodCategory {
    Happy,
    Neutral,
    Sad,
    Angry,
    Anxious,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Happy,
        MoodCategory::Neutral,
        MoodCategory::Sad,
        MoodCategory::Angry,
        MoodCategory::Anxious,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "😊",
            MoodCategory::Neutral => "😐",
            MoodCategory::Sad => "😔",
            MoodCategory::Angry => "😡",
            MoodCategory::Anxious => "😰",
        }
    }
}

impl Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoodCategory::Happy => write!(f, "Happy"),
            MoodCategory::Neutral => write!(f, "Neutral"),
            MoodCategory::Sad => write!(f, "Sad"),
            MoodCategory::Angry => write!(f, "Angry"),
            MoodCategory::Anxious => write!(f, "Anxious"),
        }
    }
}

impl FromStr for MoodCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" | "1" => Ok(MoodCategory::Happy),
            "neutral" | "2" => Ok(MoodCategory::Neutral),
            "sad" | "3" => Ok(MoodCategory::Sad),
            "angry" | "4" => Ok(MoodCategory::Angry),
            "anxious" | "5" => Ok(MoodCategory::Anxious),
            other => Err(anyhow!(
                "'{other}' is not a mood, expected happy, neutral, sad, angry or anxious"
            )),
        }
    }
}

/// Stress rating on the 1-10 scale the slider in the entry form offers. The
/// range is still enforced here so an out-of-range value can never end up in
/// the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new_opt(value: u8) -> Option<StressLevel> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(StressLevel(value))
        } else {
            None
        }
    }
}

impl Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

impl Deref for StressLevel {
    type Target = u8;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One date's recorded mood and stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub mood: MoodCategory,
    pub stress: StressLevel,
}

/// Renders the journal as pretty JSON, newest entry last. A snapshot for the
/// `export` command, it is never read back in.
pub fn export_entries(session: &Session) -> Result<String> {
    let entries = session.entries().values().collect::<Vec<_>>();
    Ok(serde_json::to_string_pretty(&entries)?)
}
