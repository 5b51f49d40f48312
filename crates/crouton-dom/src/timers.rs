#![forbid(unsafe_code)]

//! Cancelable one-shot and interval timers.
//!
//! Timers are owned resources: arming returns a [`TimerHandle`] and only
//! [`Timers::clear`] can cancel it. A cleared handle never fires late, even
//! if its deadline already passed inside the current [`Timers::advance`]
//! window. Time is logical and moves only through `advance`, which returns
//! the handles that expired, in deadline order (arm order breaks ties).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

/// Identifier of an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    // Repeat period (None = one-shot).
    period: Option<Duration>,
    // Arm-time sequence; interval re-arms keep it, so a timer armed first
    // keeps winning deadline ties for its whole lifetime.
    seq: u64,
}

/// One-shot and interval timer service with a manually advanced clock.
#[derive(Debug, Default)]
pub struct Timers {
    now: Duration,
    next_handle: u64,
    next_seq: u64,
    // (deadline, arm sequence, raw handle); canceled entries are skipped
    // lazily on pop.
    queue: BinaryHeap<Reverse<(Duration, u64, u64)>>,
    live: HashMap<u64, Armed>,
}

impl Timers {
    /// Creates a timer service at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    pub fn armed(&self) -> usize {
        self.live.len()
    }

    /// Arms a one-shot timer that fires once `delay` has elapsed.
    pub fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        self.arm(delay, None)
    }

    /// Arms an interval timer that fires every `period`.
    ///
    /// A zero period is clamped to the smallest representable tick so an
    /// `advance` call cannot loop forever.
    pub fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let period = period.max(Duration::from_nanos(1));
        self.arm(period, Some(period))
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>) -> TimerHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(handle, Armed { period, seq });
        self.queue.push(Reverse((self.now + delay, seq, handle)));
        #[cfg(feature = "tracing")]
        tracing::trace!(handle, ?delay, interval = period.is_some(), "arm timer");
        TimerHandle(handle)
    }

    /// Cancels a timer. Clearing an already-fired or already-cleared handle
    /// is a no-op.
    pub fn clear(&mut self, handle: TimerHandle) {
        self.live.remove(&handle.0);
    }

    /// Returns whether the handle is still armed.
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.live.contains_key(&handle.0)
    }

    /// Advances the clock by `dt` and returns the handles that expired.
    ///
    /// Interval timers catch up: if `dt` spans several periods, the handle
    /// appears once per elapsed period.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        let target = self.now + dt;
        let mut fired = Vec::new();
        while let Some(&Reverse((deadline, _, handle))) = self.queue.peek() {
            if deadline > target {
                break;
            }
            self.queue.pop();
            let Some(&armed) = self.live.get(&handle) else {
                continue;
            };
            fired.push(TimerHandle(handle));
            match armed.period {
                Some(period) => self
                    .queue
                    .push(Reverse((deadline + period, armed.seq, handle))),
                None => {
                    self.live.remove(&handle);
                }
            }
        }
        self.now = target;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_at_deadline() {
        let mut timers = Timers::new();
        let h = timers.set_timeout(Duration::from_millis(100));
        assert!(timers.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(timers.advance(Duration::from_millis(1)), vec![h]);
        assert!(!timers.is_armed(h));
        assert!(timers.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = Timers::new();
        let late = timers.set_timeout(Duration::from_millis(300));
        let early = timers.set_timeout(Duration::from_millis(100));
        assert_eq!(timers.advance(Duration::from_millis(300)), vec![early, late]);
    }

    #[test]
    fn equal_deadlines_fire_in_arm_order() {
        let mut timers = Timers::new();
        let first = timers.set_timeout(Duration::from_millis(100));
        let second = timers.set_timeout(Duration::from_millis(100));
        assert_eq!(timers.advance(Duration::from_millis(100)), vec![first, second]);
    }

    #[test]
    fn interval_repeats_and_catches_up() {
        let mut timers = Timers::new();
        let h = timers.set_interval(Duration::from_millis(10));
        assert_eq!(timers.advance(Duration::from_millis(10)), vec![h]);
        // A coarse advance spans three periods: the handle fires three times.
        assert_eq!(timers.advance(Duration::from_millis(30)), vec![h, h, h]);
        assert!(timers.is_armed(h));
    }

    #[test]
    fn interval_keeps_tie_priority_across_rearms() {
        let mut timers = Timers::new();
        let interval = timers.set_interval(Duration::from_millis(10));
        let one_shot = timers.set_timeout(Duration::from_millis(30));
        // At the shared 30ms deadline the interval was armed first, so its
        // third fire still precedes the one-shot.
        let fired = timers.advance(Duration::from_millis(30));
        assert_eq!(fired, vec![interval, interval, interval, one_shot]);
    }

    #[test]
    fn clear_prevents_fire() {
        let mut timers = Timers::new();
        let h = timers.set_timeout(Duration::from_millis(50));
        timers.clear(h);
        assert!(timers.advance(Duration::from_millis(100)).is_empty());
        assert_eq!(timers.armed(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut timers = Timers::new();
        let h = timers.set_timeout(Duration::from_millis(50));
        timers.clear(h);
        timers.clear(h);
        assert!(!timers.is_armed(h));
    }

    #[test]
    fn cleared_interval_stops() {
        let mut timers = Timers::new();
        let h = timers.set_interval(Duration::from_millis(10));
        assert_eq!(timers.advance(Duration::from_millis(10)).len(), 1);
        timers.clear(h);
        assert!(timers.advance(Duration::from_millis(100)).is_empty());
    }

    #[test]
    fn zero_period_interval_does_not_spin() {
        let mut timers = Timers::new();
        let h = timers.set_interval(Duration::ZERO);
        let fired = timers.advance(Duration::from_nanos(10));
        assert!(fired.iter().all(|f| *f == h));
        assert_eq!(fired.len(), 10);
    }

    #[test]
    fn clock_advances_even_when_idle() {
        let mut timers = Timers::new();
        timers.advance(Duration::from_secs(3));
        assert_eq!(timers.now(), Duration::from_secs(3));
        let h = timers.set_timeout(Duration::from_secs(1));
        assert_eq!(timers.advance(Duration::from_secs(1)), vec![h]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn one_shots_fire_in_deadline_then_arm_order(
                delays in proptest::collection::vec(0u64..5_000, 1..32)
            ) {
                let mut timers = Timers::new();
                let mut armed: Vec<(TimerHandle, u64)> = delays
                    .iter()
                    .map(|&d| (timers.set_timeout(Duration::from_millis(d)), d))
                    .collect();
                let fired = timers.advance(Duration::from_millis(5_000));
                // Stable sort keeps arm order on equal deadlines, which is
                // exactly the advertised tie-break.
                armed.sort_by_key(|&(_, d)| d);
                let expected: Vec<TimerHandle> = armed.into_iter().map(|(h, _)| h).collect();
                prop_assert_eq!(fired, expected);
                prop_assert_eq!(timers.armed(), 0);
            }
        }
    }
}
