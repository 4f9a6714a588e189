use crate::config::Config;
use crate::game::Game;
use crate::time_series::LatencyPoint;
use crate::util::{mean, position_min, std_dev};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub rounds: usize,
    pub relocation_interval: Duration,
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            rounds: cfg.rounds,
            relocation_interval: cfg.relocation_interval(),
        }
    }
}

/// Results of one finished game, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub intervals: Vec<f64>,
    pub average_ms: f64,
    pub best_index: usize,
    pub best_ms: f64,
    pub worst_ms: f64,
    pub std_dev_ms: f64,
    pub first_reaction_ms: Option<f64>,
}

impl SessionSummary {
    /// None when no interval was recorded
    pub fn from_intervals(intervals: &[f64], first_reaction_ms: Option<f64>) -> Option<Self> {
        let average_ms = mean(intervals)?;
        let best_index = position_min(intervals)?;
        let worst_ms = intervals.iter().copied().fold(f64::MIN, f64::max);

        Some(Self {
            intervals: intervals.to_vec(),
            average_ms,
            best_index,
            best_ms: intervals[best_index],
            worst_ms,
            std_dev_ms: std_dev(intervals).unwrap_or(0.0),
            first_reaction_ms,
        })
    }

    pub fn from_game(game: &Game) -> Option<Self> {
        Self::from_intervals(game.tap_intervals(), game.first_reaction_ms())
    }

    /// Chart points, rounds numbered from 1
    pub fn points(&self) -> Vec<LatencyPoint> {
        self.intervals
            .iter()
            .enumerate()
            .map(|(i, ms)| LatencyPoint::new(i + 1, *ms))
            .collect()
    }

    pub fn one_line(&self) -> String {
        format!(
            "{} rounds   avg {:.0} ms   best #{} {:.0} ms   worst {:.0} ms   {:.1} sd",
            self.intervals.len(),
            self.average_ms,
            self.best_index + 1,
            self.best_ms,
            self.worst_ms,
            self.std_dev_ms
        )
    }
}
