use heapless::Deque;

use crate::config::HISTORY_LEN;
use crate::telemetry::{CurrentData, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryItem {
    pub moisture: u8,
    pub recommendation: Recommendation,
    pub timestamp_ms: u64,
}

impl HistoryItem {
    pub fn color(&self) -> &'static str {
        self.recommendation.color()
    }
}

/// Recent readings, newest first. Repeats of the newest reading are skipped.
pub struct History {
    items: Deque<HistoryItem, HISTORY_LEN>,
}

impl History {
    pub fn new() -> Self {
        Self {
            items: Deque::new(),
        }
    }

    /// Returns whether the reading was recorded
    pub fn push(&mut self, data: &CurrentData, timestamp_ms: u64) -> bool {
        // compared by Recommendation, so "VLAZNO" repeats "VLAŽNO"
        if let Some(newest) = self.items.front() {
            if newest.moisture == data.moisture && newest.recommendation == data.recommendation {
                return false;
            }
        }

        if self.items.is_full() {
            self.items.pop_back();
        }
        // cannot fail, room was made above
        let _ = self.items.push_front(HistoryItem {
            moisture: data.moisture,
            recommendation: data.recommendation,
            timestamp_ms,
        });
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn newest(&self) -> Option<&HistoryItem> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(moisture: u8, recommendation: Recommendation) -> CurrentData {
        CurrentData {
            moisture,
            recommendation,
            ..Default::default()
        }
    }

    #[test]
    fn newest_first() {
        let mut history = History::new();
        history.push(&reading(10, Recommendation::Dry), 1);
        history.push(&reading(40, Recommendation::Optimal), 2);

        let order: Vec<u8> = history.iter().map(|i| i.moisture).collect();
        assert_eq!(order, [40, 10]);
        assert_eq!(history.newest().unwrap().color(), "#51CF66");
    }

    #[test]
    fn skips_repeat_of_newest() {
        let mut history = History::new();
        assert!(history.push(&reading(10, Recommendation::Dry), 1));
        assert!(!history.push(&reading(10, Recommendation::Dry), 2));
        assert!(history.push(&reading(10, Recommendation::Optimal), 3));
        // only compared against the newest entry
        assert!(history.push(&reading(10, Recommendation::Dry), 4));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn both_wet_spellings_count_as_repeat() {
        let mut history = History::new();
        let first = CurrentData::from_json(r#"{"moisture":70,"recommendation":"VLAŽNO"}"#).unwrap();
        let second = CurrentData::from_json(r#"{"moisture":70,"recommendation":"VLAZNO"}"#).unwrap();
        assert!(history.push(&first, 1));
        assert!(!history.push(&second, 2));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn bounded() {
        let mut history = History::new();
        for m in 0..8u8 {
            history.push(&reading(m, Recommendation::Unknown), m as u64);
        }
        assert_eq!(history.len(), HISTORY_LEN);
        let order: Vec<u8> = history.iter().map(|i| i.moisture).collect();
        assert_eq!(order, [7, 6, 5, 4, 3]);

        history.clear();
        assert!(history.is_empty());
    }
}
