use super::SessionEvent;

impl std::fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionEvent::DiceRolled { values, total } => {
                write!(f, "Rolled {:?} for a total of {}", values, total)
            }
            SessionEvent::ConfigChanged { config } => {
                write!(
                    f,
                    "Configuration changed to {} x d{}",
                    config.dice_count, config.face_count
                )
            }
            SessionEvent::HistoryCleared => {
                write!(f, "Roll history cleared")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Config, SessionEvent};

    #[test]
    fn test_event_display() {
        let rolled = SessionEvent::DiceRolled {
            values: vec![3, 4],
            total: 7,
        };
        assert_eq!(rolled.to_string(), "Rolled [3, 4] for a total of 7");

        let changed = SessionEvent::ConfigChanged {
            config: Config::new(20, 3).unwrap(),
        };
        assert_eq!(changed.to_string(), "Configuration changed to 3 x d20");
    }
}
