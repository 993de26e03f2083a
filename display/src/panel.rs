use std::collections::BTreeMap;

use dice_engine::{History, Session, Stats};

use crate::glyphs::GlyphRenderer;
use crate::{RollRenderer, NO_ROLLS};

const BAR_WIDTH: u64 = 30;

/// Past rolls, most recent first, one line each.
pub fn roll_log(history: &History) -> String {
    history
        .records()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, record)| format!("Roll #{}: {:?} = {}", i + 1, record.values, record.total))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Horizontal-bar histogram over the full theoretical range, bars scaled to
/// the most frequent total.
pub fn histogram(distribution: &BTreeMap<u32, u64>) -> String {
    let max = distribution.values().copied().max().unwrap_or(0);
    distribution
        .iter()
        .map(|(total, &count)| {
            let width = if max == 0 { 0 } else { count * BAR_WIDTH / max };
            format!(
                "{:>3} | {:<width$} {}",
                total,
                "#".repeat(width as usize),
                count,
                width = BAR_WIDTH as usize
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats_lines(stats: &Stats) -> String {
    let mean = match stats.mean {
        Some(mean) => format!("{:.2}", mean),
        None => "-".to_string(),
    };
    format!(
        "Rolls: {}\nMean: {}\nRange: {} - {}",
        stats.count, mean, stats.range.0, stats.range.1
    )
}

pub fn moving_average_line(stats: &Stats) -> String {
    let series = stats
        .moving_average
        .iter()
        .map(|avg| format!("{:.2}", avg))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Moving avg: {}", series)
}

fn two_column(left: &str, right: &str) -> String {
    let left_lines: Vec<&str> = left.lines().collect();
    let right_lines: Vec<&str> = right.lines().collect();
    let width = left_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    (0..left_lines.len().max(right_lines.len()))
        .map(|i| {
            let l = left_lines.get(i).copied().unwrap_or("");
            let r = right_lines.get(i).copied().unwrap_or("");
            let pad = width.saturating_sub(l.chars().count());
            format!("{}{}   {}", l, " ".repeat(pad), r)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Two-column view: roll display on the left, statistics with a histogram
/// and the moving-average timeline on the right.
pub struct DashboardRenderer;

impl RollRenderer for DashboardRenderer {
    fn render(&self, session: &Session) -> String {
        if session.last_roll().is_none() {
            return NO_ROLLS.to_string();
        }
        let stats = session.stats();
        let left = GlyphRenderer.render(session);
        let right = format!(
            "{}\n{}\n{}",
            stats_lines(&stats),
            histogram(&stats.distribution),
            moving_average_line(&stats)
        );
        two_column(&left, &right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_engine::{Config, RollRecord};

    #[test]
    fn test_roll_log_is_most_recent_first() {
        let mut history = History::default();
        history.push(RollRecord::new(vec![1, 2]));
        history.push(RollRecord::new(vec![6, 6]));
        let log = roll_log(&history);
        assert_eq!(
            log,
            "Roll #2: [6, 6] = 12\nRoll #1: [1, 2] = 3"
        );
    }

    #[test]
    fn test_histogram_scales_to_max() {
        let mut dist = BTreeMap::new();
        dist.insert(2, 4);
        dist.insert(3, 2);
        dist.insert(4, 0);
        let rendered = histogram(&dist);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('#').count(), 30);
        assert_eq!(lines[1].matches('#').count(), 15);
        assert_eq!(lines[2].matches('#').count(), 0);
        assert!(lines[0].ends_with(" 4"));
    }

    #[test]
    fn test_histogram_of_empty_history() {
        let dist: BTreeMap<u32, u64> = (2..=4).map(|t| (t, 0)).collect();
        for line in histogram(&dist).lines() {
            assert_eq!(line.matches('#').count(), 0);
        }
    }

    #[test]
    fn test_stats_lines_with_and_without_rolls() {
        let mut session = Session::with_seed(Config::new(6, 2).unwrap(), 8).unwrap();
        let empty = stats_lines(&session.stats());
        assert!(empty.contains("Rolls: 0"));
        assert!(empty.contains("Mean: -"));
        assert!(empty.contains("Range: 2 - 12"));

        session.roll();
        assert!(!stats_lines(&session.stats()).contains("Mean: -"));
    }

    #[test]
    fn test_dashboard_combines_columns() {
        let mut session = Session::with_seed(Config::new(6, 2).unwrap(), 8).unwrap();
        assert_eq!(DashboardRenderer.render(&session), NO_ROLLS);

        session.roll();
        session.roll();
        let rendered = DashboardRenderer.render(&session);
        assert!(rendered.contains("Rolls: 2"));
        assert!(rendered.contains("Total:"));
        assert!(rendered.contains("Moving avg:"));
        // Eleven histogram rows dominate the right column.
        assert!(rendered.lines().count() >= 11);
    }
}
