//! Core of the dice simulator: per-session configuration, rolling, roll
//! history and the statistics derived from it. Rendering lives elsewhere;
//! this crate only mutates session state through commands and answers pure
//! queries.

pub mod session;

pub use session::dice::Roller;
pub use session::history::{History, RollRecord};
pub use session::stats::{MovingAverage, Stats, MOVING_AVERAGE_WINDOW};
pub use session::{Config, Session, SessionCommand, SessionEvent};
