/// Visual state of one round slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum ProgressState {
    Future,
    Current,
    Completed,
}

/// Result of moving the track forward by one round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// the slot at this index is now current
    Next(usize),
    /// the last slot was completed, nothing is current anymore
    Finished,
}

/// Per-round slots, filled left to right
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressTrack {
    slots: Vec<ProgressState>,
}

impl ProgressTrack {
    pub fn new(rounds: usize) -> Self {
        let mut slots = vec![ProgressState::Future; rounds.max(1)];
        slots[0] = ProgressState::Current;
        Self { slots }
    }

    pub fn slots(&self) -> &[ProgressState] {
        &self.slots
    }

    pub fn current(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| *s == ProgressState::Current)
    }

    pub fn advance(&mut self) -> Advance {
        let Some(idx) = self.current() else {
            return Advance::Finished;
        };

        self.slots[idx] = ProgressState::Completed;

        match self.slots.get_mut(idx + 1) {
            Some(next) => {
                *next = ProgressState::Current;
                Advance::Next(idx + 1)
            }
            None => Advance::Finished,
        }
    }
}
