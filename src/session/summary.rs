use std::collections::BTreeMap;

use super::journal::{Entry, MoodCategory};

/// Aggregated view of the journal consumed by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Full precision mean of all stress ratings, `None` when nothing has been
    /// logged yet.
    pub average_stress: Option<f64>,
    pub mood_counts: BTreeMap<MoodCategory, usize>,
}

impl Summary {
    /// The average as shown to the user, rounded to one decimal place. Tests
    /// compare against this value, not the full precision one.
    pub fn display_average(&self) -> Option<f64> {
        self.average_stress.map(|v| (v * 10.).round() / 10.)
    }

    pub fn total_entries(&self) -> usize {
        self.mood_counts.values().sum()
    }
}

/// Computes mean stress and per-mood tallies over all entries. An empty
/// journal is a defined empty state, not an error, the caller renders a
/// "no data" message for it.
pub fn summarize<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Summary {
    let mut mood_counts = BTreeMap::<MoodCategory, usize>::new();
    let mut stress_sum = 0u64;
    let mut count = 0u64;

    for entry in entries {
        *mood_counts.entry(entry.mood).or_insert(0) += 1;
        stress_sum += *entry.stress as u64;
        count += 1;
    }

    let average_stress = if count == 0 {
        None
    } else {
        Some(stress_sum as f64 / count as f64)
    };

    Summary {
        average_stress,
        mood_counts,
    }
}
