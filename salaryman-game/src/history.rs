//! Append-only per-day snapshot ledger used for trend display.

use serde::{Deserialize, Serialize};

use crate::state::Stats;

/// Immutable ledger entry: the attribute snapshot taken when a day resolved,
/// keyed by the day number the run advanced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    pub stats: Stats,
}

/// Ordered list of day records. One entry is appended per resolved turn, so
/// the length always equals the number of turns taken. Entries are copies of
/// the live stats, never aliases; later mutations cannot rewrite a recorded
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct History {
    records: Vec<DayRecord>,
}

impl History {
    /// Append a snapshot for the given day.
    pub fn record(&mut self, day: u32, stats: Stats) {
        self.records.push(DayRecord { day, stats });
    }

    /// All records in append order.
    #[must_use]
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// Most recently appended record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&DayRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_independent_snapshots() {
        let mut history = History::default();
        let mut live = Stats::default();
        history.record(2, live);

        live.health = 1;
        live.money = -500;

        let recorded = history.last().unwrap();
        assert_eq!(recorded.day, 2);
        assert_eq!(recorded.stats.health, 80);
        assert_eq!(recorded.stats.money, 50_000);
    }

    #[test]
    fn records_keep_append_order() {
        let mut history = History::default();
        for day in 2..=5 {
            history.record(day, Stats::default());
        }
        assert_eq!(history.len(), 4);
        let days: Vec<u32> = history.records().iter().map(|r| r.day).collect();
        assert_eq!(days, vec![2, 3, 4, 5]);
    }

    #[test]
    fn clear_empties_the_ledger() {
        let mut history = History::default();
        history.record(2, Stats::default());
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }
}
