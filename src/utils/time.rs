use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};

/// Parses a journal date the way the date prompt advertises it: "today",
/// "yesterday", "15/03/2025" and friends, relative to `now`.
pub fn parse_journal_date(input: &str, now: DateTime<Local>, dialect: Dialect) -> Result<NaiveDate> {
    parse_date_string(input, now, dialect)
        .map(|v| v.date_naive())
        .map_err(|e| anyhow!("'{input}' is not a date I understand: {e}"))
}
