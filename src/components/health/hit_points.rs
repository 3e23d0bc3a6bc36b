use serde::{Deserialize, Serialize};

/// Hit points as typed on the sheet. `current` may be entered below zero;
/// anything at or below zero counts as down. `temp` is a buffer and never
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
    pub temp: i32,
}

impl HitPoints {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            temp: 0,
        }
    }

    pub fn with_current(current: i32, max: i32) -> Self {
        Self {
            current,
            max,
            temp: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn normalize(&mut self) {
        if self.max < 0 {
            self.max = 0;
        }
        if self.temp < 0 {
            self.temp = 0;
        }
    }
}

impl Default for HitPoints {
    fn default() -> Self {
        Self::new(0)
    }
}
