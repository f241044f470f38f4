//! The in-memory state of one journaling session. Everything here lives for
//! the duration of a single `moodline start` run and is gone on exit.

pub mod auth;
pub mod journal;
pub mod nav;
pub mod summary;

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use anyhow::anyhow;
use chrono::NaiveDate;
use journal::{Entry, MoodCategory, StressLevel};
use serde::{Deserialize, Serialize};
use summary::Summary;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("stress level {0} is outside of the 1-10 range")]
    InvalidStressLevel(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Worker,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Worker => write!(f, "Worker"),
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" | "1" => Ok(Role::Student),
            "worker" | "2" => Ok(Role::Worker),
            other => Err(anyhow!("'{other}' is not a role, expected student or worker")),
        }
    }
}

/// One user's login, role and journal for the lifetime of the running process.
/// A plain value owned by the interactive loop, there is no global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    logged_in: bool,
    role: Option<Role>,
    entries: BTreeMap<NaiveDate, Entry>,
    banner_pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Journal entries keyed by date, at most one per date.
    pub fn entries(&self) -> &BTreeMap<NaiveDate, Entry> {
        &self.entries
    }

    /// Records the chosen role. Idempotent, the choice itself is only offered
    /// after a successful login.
    pub fn select_role(&mut self, role: Role) {
        self.role = Some(role);
    }

    /// Upserts the entry for `date`. Logging the same date twice replaces the
    /// previous entry, no history is kept.
    pub fn log_entry(
        &mut self,
        date: NaiveDate,
        mood: MoodCategory,
        stress: u8,
    ) -> Result<(), SessionError> {
        let stress = StressLevel::new_opt(stress).ok_or(SessionError::InvalidStressLevel(stress))?;
        self.entries.insert(date, Entry { date, mood, stress });
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        summary::summarize(self.entries.values())
    }

    /// Returns the session to its initial state. Same observable result as a
    /// process restart, the journal included.
    pub fn logout(&mut self) {
        *self = Session::default();
    }
}
