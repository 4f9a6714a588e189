use crate::config::Config;
use crate::progress::{Advance, ProgressState, ProgressTrack};
use crate::round_timer::RoundTimer;
use crate::target::TargetPosition;
use crate::util::{elapsed_ms, mean, position_min};
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum GameState {
    Initial,
    Playing,
    Completed,
}

/// What caused the target to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum RelocationCause {
    Start,
    Tap,
    Timer,
}

/// Observable changes, drained by the presentation layer after each input
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Started,
    Tapped {
        round: usize,
        interval_ms: Option<f64>,
    },
    Relocated {
        position: TargetPosition,
        cause: RelocationCause,
    },
    Completed,
    Reset,
}

/// Game controller: round progression, target placement and tap timing
#[derive(Debug)]
pub struct Game {
    state: GameState,
    rounds: usize,
    progress: ProgressTrack,
    tap_intervals: Vec<f64>,
    last_tap: Option<Instant>,
    started_at: Option<Instant>,
    first_reaction_ms: Option<f64>,
    target: TargetPosition,
    round_timer: RoundTimer,
    rng: StdRng,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(rounds: usize, relocation_interval: Duration) -> Self {
        Self::with_rng(rounds, relocation_interval, StdRng::from_entropy())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.rounds, config.relocation_interval())
    }

    pub fn with_rng(rounds: usize, relocation_interval: Duration, rng: StdRng) -> Self {
        let rounds = rounds.max(1);
        Self {
            state: GameState::Initial,
            rounds,
            progress: ProgressTrack::new(rounds),
            tap_intervals: Vec::with_capacity(rounds),
            last_tap: None,
            started_at: None,
            first_reaction_ms: None,
            target: TargetPosition::CENTER,
            round_timer: RoundTimer::new(relocation_interval),
            rng,
            events: vec![],
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn progress(&self) -> &[ProgressState] {
        self.progress.slots()
    }

    pub fn current_round(&self) -> Option<usize> {
        self.progress.current()
    }

    pub fn target(&self) -> TargetPosition {
        self.target
    }

    pub fn tap_intervals(&self) -> &[f64] {
        &self.tap_intervals
    }

    /// Time from `start` to the first tap, which has no preceding tap to
    /// measure an interval against
    pub fn first_reaction_ms(&self) -> Option<f64> {
        self.first_reaction_ms
    }

    pub fn round_timer(&self) -> &RoundTimer {
        &self.round_timer
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.progress = ProgressTrack::new(self.rounds);
        self.tap_intervals.clear();
        self.last_tap = None;
        self.first_reaction_ms = None;
        self.started_at = Some(now);
        self.state = GameState::Playing;
        self.events.push(GameEvent::Started);
        tracing::info!(rounds = self.rounds, "game started");

        self.relocate_target(RelocationCause::Start);
        self.round_timer.arm(now);
    }

    pub fn tap(&mut self) {
        self.tap_at(Instant::now());
    }

    pub fn tap_at(&mut self, now: Instant) {
        if self.state != GameState::Playing {
            tracing::trace!(state = %self.state, "tap ignored");
            return;
        }

        let round = self.progress.current().unwrap_or(0);

        let interval_ms = self.last_tap.map(|last| elapsed_ms(last, now));
        match interval_ms {
            Some(ms) => self.tap_intervals.push(ms),
            None => {
                self.first_reaction_ms = self.started_at.map(|started| elapsed_ms(started, now));
            }
        }
        self.last_tap = Some(now);
        self.events.push(GameEvent::Tapped { round, interval_ms });
        tracing::debug!(round, ?interval_ms, "tap");

        if self.advance_progress() == Advance::Finished {
            return;
        }
        self.relocate_target(RelocationCause::Tap);
    }

    fn advance_progress(&mut self) -> Advance {
        let advance = self.progress.advance();
        if advance == Advance::Finished {
            self.state = GameState::Completed;
            self.round_timer.cancel();
            self.events.push(GameEvent::Completed);
            tracing::info!(
                intervals = ?self.tap_intervals,
                average_ms = ?self.average_interval_ms(),
                "game completed"
            );
        }
        advance
    }

    pub fn reset(&mut self) {
        self.state = GameState::Initial;
        self.progress = ProgressTrack::new(self.rounds);
        self.tap_intervals.clear();
        self.last_tap = None;
        self.started_at = None;
        self.first_reaction_ms = None;
        self.round_timer.cancel();
        self.events.push(GameEvent::Reset);
        tracing::debug!("game reset");
    }

    pub fn relocate_target(&mut self, cause: RelocationCause) {
        self.target = TargetPosition::random(&mut self.rng);
        self.events.push(GameEvent::Relocated {
            position: self.target,
            cause,
        });
        tracing::trace!(x = self.target.x, y = self.target.y, %cause, "target relocated");
    }

    /// Polls the relocation timer; call on every pass of the event loop
    pub fn on_tick(&mut self, now: Instant) {
        if self.state != GameState::Playing {
            return;
        }
        if self.round_timer.poll(now) {
            self.relocate_target(RelocationCause::Timer);
        }
    }

    pub fn best_round_index(&self) -> Option<usize> {
        position_min(&self.tap_intervals)
    }

    pub fn average_interval_ms(&self) -> Option<f64> {
        mean(&self.tap_intervals)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub(crate) fn set_tap_intervals(&mut self, intervals: Vec<f64>) {
        self.tap_intervals = intervals;
    }
}
