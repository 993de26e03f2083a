use serde::{Deserialize, Serialize};

/// One roll: the per-die values and their sum. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub values: Vec<u32>,
    pub total: u32,
}

impl RollRecord {
    pub fn new(values: Vec<u32>) -> Self {
        let total = values.iter().sum();
        Self { values, total }
    }
}

/// Append-only roll history; insertion order is chronological order.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<RollRecord>,
}

impl History {
    pub fn push(&mut self, record: RollRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[RollRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Roll totals in chronological order.
    pub fn totals(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().map(|r| r.total)
    }
}
