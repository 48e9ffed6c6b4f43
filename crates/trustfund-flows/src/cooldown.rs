//! Resend cooldown countdown.
//!
//! Modeled as an explicit value with a pure `tick()` reducer instead of
//! an implicit timer: the embedder schedules one tick per second and the
//! flow stays testable without wall-clock waits. Dropping the owning flow
//! drops the countdown with it, so there is nothing to tear down.

/// A strictly decreasing integer countdown, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining_secs: u32,
}

impl Cooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arm the countdown.
    pub fn start(&mut self, secs: u32) {
        self.remaining_secs = secs;
    }

    /// One scheduler tick. Saturates at zero.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_secs == 0
    }
}
