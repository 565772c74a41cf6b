//! Win condition and love-meter progress

/// Fires once, the first time the score reaches the threshold
#[derive(Debug, Clone)]
pub struct WinWatcher {
    threshold: u32,
    fired: bool,
}

impl WinWatcher {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            fired: false,
        }
    }

    /// Returns true exactly once across all observations
    pub fn observe(&mut self, score: u32) -> bool {
        if self.fired || score < self.threshold {
            return false;
        }
        self.fired = true;
        log::info!("Win threshold {} reached", self.threshold);
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Fill ratio for the progress bar (0.0 - 1.0)
    pub fn progress(&self, score: u32) -> f32 {
        (score as f32 / self.threshold as f32).min(1.0)
    }
}
