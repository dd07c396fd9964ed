//! Stats counter animation.
//!
//! Three independent counters share one clock: every [`CounterAnimator::tick`]
//! advances each unfinished counter by `target / steps`, clamping at the
//! target. Each counter owns its terminal flag, and completion of the whole
//! animation is derived from those flags, so the aggregate can never disagree
//! with an individual counter.
//!
//! Values accumulate as `f64` internally; rounding only happens when a
//! [`StatsSnapshot`] is taken for display.

use tracing::debug;

/// Number of ticks a counter needs to go from zero to its target.
pub const DEFAULT_STEPS: u32 = 100;

/// The three headline figures on the impact panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    /// Jobs to be created cross-continent
    JobsCreated,
    /// GDP contribution in billions of USD
    GdpContribution,
    /// Containers moved per year
    ContainersMoved,
}

impl Statistic {
    /// All statistics in panel order.
    pub const ALL: [Statistic; 3] = [
        Statistic::JobsCreated,
        Statistic::GdpContribution,
        Statistic::ContainersMoved,
    ];

    /// Final value the counter settles on.
    pub const fn target(self) -> f64 {
        match self {
            Statistic::JobsCreated => 100_000.0,
            Statistic::GdpContribution => 50.0,
            Statistic::ContainersMoved => 80_000.0,
        }
    }

    /// How intermediate values are rounded for display.
    pub const fn rounding(self) -> Rounding {
        match self {
            Statistic::GdpContribution => Rounding::OneDecimal,
            Statistic::JobsCreated | Statistic::ContainersMoved => Rounding::Floor,
        }
    }

    /// Caption shown under the number.
    pub const fn label(self) -> &'static str {
        match self {
            Statistic::JobsCreated => "Jobs to be Created Cross-Continent",
            Statistic::GdpContribution => "GDP to be Contributed (USD) B",
            Statistic::ContainersMoved => "Containers to be Moved Annually",
        }
    }

    const fn index(self) -> usize {
        match self {
            Statistic::JobsCreated => 0,
            Statistic::GdpContribution => 1,
            Statistic::ContainersMoved => 2,
        }
    }
}

/// Display rounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Whole numbers, rounded down
    Floor,
    /// Nearest tenth
    OneDecimal,
}

impl Rounding {
    /// Round a raw accumulator value.
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            Rounding::Floor => raw.floor(),
            Rounding::OneDecimal => (raw * 10.0).round() / 10.0,
        }
    }

    /// Format an already rounded value with thousands separators.
    ///
    /// `Floor` renders `100000.0` as `"100,000"`; `OneDecimal` always keeps
    /// its single decimal, `50.0` as `"50.0"`.
    pub fn format(self, value: f64) -> String {
        match self {
            Rounding::Floor => group_thousands(value.max(0.0) as u64),
            Rounding::OneDecimal => {
                let tenths = (value.max(0.0) * 10.0).round() as u64;
                format!("{}.{}", group_thousands(tenths / 10), tenths % 10)
            }
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A single counter: clamped, monotonic progress toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    statistic: Statistic,
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl Counter {
    /// Counter at zero for `statistic`, reaching its target in `steps` ticks.
    pub fn new(statistic: Statistic, steps: u32) -> Self {
        let target = statistic.target();
        let steps = steps.max(1);
        Self {
            statistic,
            target,
            increment: target / f64::from(steps),
            current: 0.0,
            done: target <= 0.0,
        }
    }

    /// Raw accumulator value.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Whether the target has been reached.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by one increment. Returns `false` once the counter had
    /// already finished.
    pub fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let next = self.current + self.increment;
        if next >= self.target {
            self.current = self.target;
            self.done = true;
            debug!(statistic = ?self.statistic, value = self.target, "counter reached target");
        } else {
            self.current = next;
        }
        true
    }

    /// Rounded value for display.
    pub fn displayed(&self) -> f64 {
        self.statistic.rounding().apply(self.current)
    }
}

/// Displayed values at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsSnapshot {
    values: [f64; 3],
}

impl StatsSnapshot {
    /// Rounded value of one statistic.
    pub fn get(&self, statistic: Statistic) -> f64 {
        self.values[statistic.index()]
    }

    /// Formatted value of one statistic (no suffix).
    pub fn display(&self, statistic: Statistic) -> String {
        statistic.rounding().format(self.get(statistic))
    }
}

/// Drives the three counters from a shared tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimator {
    counters: [Counter; 3],
    ticks: u32,
}

impl Default for CounterAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

impl CounterAnimator {
    /// All counters at zero; each needs `steps` ticks to finish.
    pub fn new(steps: u32) -> Self {
        Self {
            counters: Statistic::ALL.map(|statistic| Counter::new(statistic, steps)),
            ticks: 0,
        }
    }

    /// Advance every unfinished counter once. Returns `true` while at least
    /// one counter still has work left.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.ticks += 1;
        for counter in &mut self.counters {
            counter.advance();
        }
        !self.is_complete()
    }

    /// Whether every counter reached its target.
    pub fn is_complete(&self) -> bool {
        self.counters.iter().all(Counter::is_done)
    }

    /// Ticks applied so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Counter for one statistic.
    pub fn counter(&self, statistic: Statistic) -> &Counter {
        &self.counters[statistic.index()]
    }

    /// Current displayed values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            values: self.counters.map(|counter| counter.displayed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reaches_targets_in_step_count_ticks() {
        let mut animator = CounterAnimator::default();
        let mut frames = 0;
        while animator.tick() {
            frames += 1;
            assert!(frames < 1000, "animation never finished");
        }
        assert_eq!(animator.ticks(), 100);

        let snapshot = animator.snapshot();
        assert_eq!(snapshot.get(Statistic::JobsCreated), 100_000.0);
        assert_eq!(snapshot.get(Statistic::GdpContribution), 50.0);
        assert_eq!(snapshot.get(Statistic::ContainersMoved), 80_000.0);
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        let mut animator = CounterAnimator::new(7);
        let mut previous = animator.snapshot();
        while animator.tick() {
            let now = animator.snapshot();
            for stat in Statistic::ALL {
                assert!(now.get(stat) >= previous.get(stat), "{stat:?} decreased");
                assert!(now.get(stat) <= stat.target(), "{stat:?} overshot");
            }
            previous = now;
        }
    }

    #[test]
    fn uneven_steps_still_land_exactly() {
        // 100000 / 3 is not representable; clamping must absorb the drift
        let mut animator = CounterAnimator::new(3);
        while animator.tick() {}
        for stat in Statistic::ALL {
            assert_eq!(animator.counter(stat).current(), stat.target());
        }
    }

    #[test]
    fn finished_animator_is_frozen() {
        let mut animator = CounterAnimator::new(2);
        while animator.tick() {}
        let done = animator.clone();
        assert!(!animator.tick());
        assert_eq!(animator, done);
    }

    #[test]
    fn counter_stops_independently() {
        let mut counter = Counter::new(Statistic::GdpContribution, 4);
        let mut advanced = 0;
        while counter.advance() {
            advanced += 1;
        }
        assert_eq!(advanced, 4);
        assert!(counter.is_done());
        assert_eq!(counter.displayed(), 50.0);
    }

    #[test]
    fn display_rounding_rules() {
        let mut animator = CounterAnimator::default();
        animator.tick();
        let first = animator.snapshot();
        assert_eq!(first.get(Statistic::JobsCreated), 1000.0);
        assert_eq!(first.get(Statistic::GdpContribution), 0.5);
        assert_eq!(first.get(Statistic::ContainersMoved), 800.0);

        for _ in 0..50 {
            animator.tick();
            let snap = animator.snapshot();
            let gdp = snap.get(Statistic::GdpContribution);
            assert_eq!((gdp * 10.0).round() / 10.0, gdp);
            assert_eq!(snap.get(Statistic::JobsCreated).fract(), 0.0);
            assert_eq!(snap.get(Statistic::ContainersMoved).fract(), 0.0);
        }
    }

    #[test]
    fn formatting() {
        assert_eq!(Rounding::Floor.format(100_000.0), "100,000");
        assert_eq!(Rounding::Floor.format(999.0), "999");
        assert_eq!(Rounding::Floor.format(1_234_567.0), "1,234,567");
        assert_eq!(Rounding::Floor.format(0.0), "0");
        assert_eq!(Rounding::OneDecimal.format(50.0), "50.0");
        assert_eq!(Rounding::OneDecimal.format(12.5), "12.5");
        assert_eq!(Rounding::OneDecimal.format(1234.5), "1,234.5");

        let mut animator = CounterAnimator::default();
        while animator.tick() {}
        let snap = animator.snapshot();
        assert_eq!(snap.display(Statistic::JobsCreated), "100,000");
        assert_eq!(snap.display(Statistic::GdpContribution), "50.0");
        assert_eq!(snap.display(Statistic::ContainersMoved), "80,000");
    }

    #[test]
    fn rounding_apply() {
        assert_eq!(Rounding::Floor.apply(1999.99), 1999.0);
        assert_eq!(Rounding::OneDecimal.apply(2.449), 2.4);
        assert_eq!(Rounding::OneDecimal.apply(2.45000001), 2.5);
    }
}
