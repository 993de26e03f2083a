use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod dice;
pub mod history;
pub mod stats;
pub mod utils;

use dice::Roller;
use history::{History, RollRecord};
use stats::Stats;

/// Face counts the simulator supports, smallest first.
pub const SUPPORTED_FACES: [u32; 6] = [4, 6, 8, 10, 12, 20];
pub const MIN_DICE: u32 = 1;
pub const MAX_DICE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub face_count: u32,
    pub dice_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            face_count: SUPPORTED_FACES[0],
            dice_count: 2,
        }
    }
}

impl Config {
    pub fn new(face_count: u32, dice_count: u32) -> Result<Self> {
        let config = Self {
            face_count,
            dice_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_FACES.contains(&self.face_count) {
            bail!(
                "Unsupported face count {}, expected one of {:?}",
                self.face_count,
                SUPPORTED_FACES
            );
        }
        if self.dice_count < MIN_DICE || self.dice_count > MAX_DICE {
            bail!(
                "Dice count {} out of range {}..={}",
                self.dice_count,
                MIN_DICE,
                MAX_DICE
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionCommand {
    Roll,
    Configure { config: Config },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    DiceRolled { values: Vec<u32>, total: u32 },
    ConfigChanged { config: Config },
    HistoryCleared,
}

/// One user's simulator state. Commands mutate it, queries are pure reads;
/// nothing here is shared, so any number of sessions can coexist.
#[derive(Debug)]
pub struct Session {
    config: Config,
    history: History,
    roller: Roller,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            config: Config::default(),
            history: History::default(),
            roller: Roller::default(),
        }
    }
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: History::default(),
            roller: Roller::default(),
        })
    }

    /// Session with a deterministic roll sequence.
    pub fn with_seed(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: History::default(),
            roller: Roller::seeded(seed),
        })
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_roll(&self) -> Option<&RollRecord> {
        self.history.records().last()
    }

    /// Statistics snapshot for the current history and configuration.
    pub fn stats(&self) -> Stats {
        stats::snapshot(&self.history, self.config)
    }

    pub fn process_command(&mut self, command: SessionCommand) -> Result<Vec<SessionEvent>> {
        debug!("Handling command: {:?}", command);
        let mut events = Vec::new();

        match command {
            SessionCommand::Roll => {
                let record = self.roll();
                events.push(SessionEvent::DiceRolled {
                    values: record.values.clone(),
                    total: record.total,
                });
            }
            SessionCommand::Configure { config } => {
                config.validate()?;
                if config == self.config {
                    // Same dice, same faces: nothing to invalidate.
                    return Ok(events);
                }
                self.config = config;
                events.push(SessionEvent::ConfigChanged { config });
                self.history.clear();
                events.push(SessionEvent::HistoryCleared);
            }
        }

        Ok(events)
    }

    /// Draws one value per configured die and appends the record to the
    /// history. Infallible: the configuration is validated on every path
    /// that sets it.
    pub fn roll(&mut self) -> RollRecord {
        let values = self
            .roller
            .roll(self.config.dice_count, self.config.face_count);
        let record = RollRecord::new(values);
        self.history.push(record.clone());
        record
    }

    /// Swaps the configuration, clearing the history when it changed.
    pub fn configure(&mut self, config: Config) -> Result<()> {
        self.process_command(SessionCommand::Configure { config })?;
        Ok(())
    }
}
