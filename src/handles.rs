/// Opaque reference to a cancellable scheduled operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

#[derive(Debug)]
struct Timer {
    id: u64,
    step: usize,
    remaining: f32,
    period: Option<f32>,
    fired: bool,
    pending_ticks: u32,
}

/// The set of outstanding timers registered by the active step's renderer.
/// Driven by the frame loop's dt; the dispatcher bulk-cancels by step during
/// a transition. Cancelling a handle that no longer exists is a no-op.
#[derive(Debug, Default)]
pub struct TimerSet {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot timer: `fired` becomes (and stays) true once `delay` elapses.
    pub fn after(&mut self, step: usize, delay: f32) -> Handle {
        self.insert(step, delay.max(0.0), None)
    }

    /// Repeating timer: accumulates a tick every `period` seconds.
    pub fn every(&mut self, step: usize, period: f32) -> Handle {
        let period = period.max(FRAME_TIME_FLOOR);
        self.insert(step, period, Some(period))
    }

    fn insert(&mut self, step: usize, delay: f32, period: Option<f32>) -> Handle {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            step,
            remaining: delay,
            period,
            fired: false,
            pending_ticks: 0,
        });
        Handle(id)
    }

    pub fn update(&mut self, dt: f32) {
        for timer in &mut self.timers {
            if timer.fired && timer.period.is_none() {
                continue;
            }
            timer.remaining -= dt;
            while timer.remaining <= 0.0 {
                timer.fired = true;
                match timer.period {
                    Some(period) => {
                        timer.pending_ticks += 1;
                        timer.remaining += period;
                    }
                    None => {
                        timer.remaining = 0.0;
                        break;
                    }
                }
            }
        }
    }

    pub fn fired(&self, handle: Handle) -> bool {
        self.timers
            .iter()
            .find(|t| t.id == handle.0)
            .is_some_and(|t| t.fired)
    }

    /// Number of interval ticks accumulated since the last call. Cancelled
    /// handles report zero.
    pub fn take_ticks(&mut self, handle: Handle) -> u32 {
        match self.timers.iter_mut().find(|t| t.id == handle.0) {
            Some(timer) => std::mem::take(&mut timer.pending_ticks),
            None => 0,
        }
    }

    pub fn cancel(&mut self, handle: Handle) {
        self.timers.retain(|t| t.id != handle.0);
    }

    pub fn cancel_step(&mut self, step: usize) {
        self.timers.retain(|t| t.step != step);
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Handles belonging to any step other than `current`. Zero after every
    /// completed transition.
    pub fn foreign_count(&self, current: usize) -> usize {
        self.timers.iter().filter(|t| t.step != current).count()
    }
}

const FRAME_TIME_FLOOR: f32 = 0.001;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_and_stays_fired() {
        let mut timers = TimerSet::new();
        let h = timers.after(0, 0.3);
        assert!(!timers.fired(h));
        timers.update(0.2);
        assert!(!timers.fired(h));
        timers.update(0.2);
        assert!(timers.fired(h));
        timers.update(5.0);
        assert!(timers.fired(h));
    }

    #[test]
    fn interval_accumulates_ticks() {
        let mut timers = TimerSet::new();
        let h = timers.every(0, 0.5);
        timers.update(0.4);
        assert_eq!(timers.take_ticks(h), 0);
        timers.update(0.2);
        assert_eq!(timers.take_ticks(h), 1);
        // ticks accumulate across a long gap and drain on take
        timers.update(1.6);
        assert_eq!(timers.take_ticks(h), 3);
        assert_eq!(timers.take_ticks(h), 0);
    }

    #[test]
    fn cancel_is_tolerant_of_unknown_handles() {
        let mut timers = TimerSet::new();
        let h = timers.after(0, 0.1);
        timers.cancel(h);
        timers.cancel(h); // already gone
        timers.update(1.0);
        assert!(!timers.fired(h));
        assert_eq!(timers.take_ticks(h), 0);
    }

    #[test]
    fn cancel_step_removes_only_that_step() {
        let mut timers = TimerSet::new();
        let old = timers.after(2, 1.0);
        timers.every(2, 0.5);
        let kept = timers.after(4, 1.0);
        timers.cancel_step(2);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.foreign_count(4), 0);
        timers.update(1.5);
        assert!(timers.fired(kept));
        assert!(!timers.fired(old));
    }
}
