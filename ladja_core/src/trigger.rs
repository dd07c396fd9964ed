//! One-shot visibility trigger for the stats panel.

use tracing::debug;

/// Fraction of the panel that must be visible before the trigger fires.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Trigger lifecycle. There is no way back from `Triggered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    /// Waiting for the panel to become visible enough
    #[default]
    Idle,
    /// Fired; every later observation is ignored
    Triggered,
}

/// Guarded `Idle -> Triggered` transition.
///
/// Observers may deliver any number of callbacks (including several before
/// they are disconnected); only the first qualifying one fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: TriggerState,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTrigger {
    /// Idle trigger firing at `threshold` (0.0..=1.0) visibility.
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: TriggerState::Idle,
        }
    }

    /// Configured visibility threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Current state.
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Whether the trigger has already fired.
    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Triggered
    }

    /// Feed one visibility observation. Returns `true` only on the call that
    /// performs the transition.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        match self.state {
            TriggerState::Triggered => false,
            TriggerState::Idle if visible_ratio >= self.threshold => {
                debug!(visible_ratio, "stats panel visible, firing trigger");
                self.state = TriggerState::Triggered;
                true
            }
            TriggerState::Idle => false,
        }
    }
}
