use serde::{Deserialize, Serialize};

pub static DEATH_SAVE_PIPS: u8 = 3;

/// Where a downed character stands in the death-save sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeState {
    /// No saves recorded.
    Stable,
    /// Accumulating successes and failures.
    Dying,
    /// Three failures. Terminal until an explicit revive.
    Dead,
    /// Just returned to life; counters cleared, 1 HP.
    Revived,
}

/// Death-save counters. The pips on the sheet are one cumulative counter
/// per row, not independent flags: clicking pip `i` advances the counter to
/// `i`, or retracts it to `i - 1` when the counter already covers `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeathSaves {
    successes: u8,
    failures: u8,
}

impl DeathSaves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> u8 {
        self.successes
    }

    pub fn failures(&self) -> u8 {
        self.failures
    }

    pub fn is_dead(&self) -> bool {
        self.failures >= DEATH_SAVE_PIPS
    }

    pub fn state(&self) -> LifeState {
        if self.is_dead() {
            LifeState::Dead
        } else if self.successes > 0 || self.failures > 0 {
            LifeState::Dying
        } else {
            LifeState::Stable
        }
    }

    /// Toggles the success pip at `index` (1..=3). No-op once dead; returns
    /// whether the counter changed.
    pub fn toggle_success(&mut self, index: u8) -> bool {
        if self.is_dead() {
            return false;
        }
        self.successes = Self::toggled(self.successes, index);
        true
    }

    /// Toggles the failure pip at `index` (1..=3). The click that records the
    /// third failure is the one that kills; everything after that is a no-op
    /// until [`DeathSaves::reset`].
    pub fn toggle_failure(&mut self, index: u8) -> bool {
        if self.is_dead() {
            return false;
        }
        self.failures = Self::toggled(self.failures, index);
        true
    }

    fn toggled(count: u8, index: u8) -> u8 {
        assert!(
            (1..=DEATH_SAVE_PIPS).contains(&index),
            "death save pip index out of range: {}",
            index
        );
        // Covered pips retract to just below the clicked one.
        if count >= index { index - 1 } else { index }
    }

    pub fn reset(&mut self) {
        self.successes = 0;
        self.failures = 0;
    }

    pub fn normalize(&mut self) {
        self.successes = self.successes.min(DEATH_SAVE_PIPS);
        self.failures = self.failures.min(DEATH_SAVE_PIPS);
    }
}
