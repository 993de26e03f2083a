use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::history::{History, RollRecord};
use super::Config;

/// Trailing window used by the roll-timeline view.
pub const MOVING_AVERAGE_WINDOW: usize = 5;

/// Everything a presentation layer needs to draw the statistics panel,
/// recomputed from the history on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub count: usize,
    pub mean: Option<f64>,
    pub range: (u32, u32),
    pub distribution: BTreeMap<u32, u64>,
    pub moving_average: Vec<f64>,
}

pub fn snapshot(history: &History, config: Config) -> Stats {
    Stats {
        count: history.len(),
        mean: mean(history),
        range: range(config),
        distribution: distribution(history, config),
        moving_average: moving_average(history, MOVING_AVERAGE_WINDOW).collect(),
    }
}

/// Arithmetic mean of the roll totals, `None` for an empty history.
pub fn mean(history: &History) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    Some(f64::from(history.totals().sum::<u32>()) / history.len() as f64)
}

/// Theoretical (min, max) total for the configuration, independent of any
/// observed rolls.
pub fn range(config: Config) -> (u32, u32) {
    (config.dice_count, config.dice_count * config.face_count)
}

/// Observed frequency of every achievable total, zero-filled so the
/// histogram always spans the full theoretical range.
pub fn distribution(history: &History, config: Config) -> BTreeMap<u32, u64> {
    let (min, max) = range(config);
    let mut counts: BTreeMap<u32, u64> = (min..=max).map(|total| (total, 0)).collect();
    for total in history.totals() {
        if let Some(count) = counts.get_mut(&total) {
            *count += 1;
        }
    }
    counts
}

/// Trailing mean of the last `window` totals at each position, in roll
/// order. Pure function of the history: a fresh call restarts from the
/// first roll.
pub fn moving_average(history: &History, window: usize) -> MovingAverage<'_> {
    assert!(window >= 1, "Window must be positive");
    MovingAverage {
        records: history.records(),
        window,
        pos: 0,
        sum: 0,
    }
}

#[derive(Debug, Clone)]
pub struct MovingAverage<'a> {
    records: &'a [RollRecord],
    window: usize,
    pos: usize,
    sum: u32,
}

impl Iterator for MovingAverage<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let record = self.records.get(self.pos)?;
        self.sum += record.total;
        if self.pos >= self.window {
            self.sum -= self.records[self.pos - self.window].total;
        }
        self.pos += 1;
        let span = self.pos.min(self.window);
        Some(f64::from(self.sum) / span as f64)
    }
}
