//! Cooperative timers for deferred field work (key repeat)
//!
//! Nothing here runs on its own thread. The host advances a
//! [`FrameScheduler`] once per frame and dispatches whatever tasks fell due.

use std::time::Duration;

use crate::field::FieldId;
use crate::keymap::Keystroke;

/// Opaque handle returned by [`Scheduler::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Work a timer performs when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Re-deliver a navigation keystroke to a field
    KeyRepeat { field: FieldId, keystroke: Keystroke },
}

/// Host timer service
pub trait Scheduler {
    /// Register a task to run after `delay`, and every `delay` thereafter
    /// when `repeats` is set.
    fn schedule(&mut self, delay: Duration, repeats: bool, task: TimerTask) -> TimerHandle;

    /// Stop a pending timer. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    delay: Duration,
    elapsed: Duration,
    repeats: bool,
    task: TimerTask,
}

/// Frame-driven scheduler
#[derive(Debug, Default)]
pub struct FrameScheduler {
    timers: Vec<Timer>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all timers by `dt` and return the tasks that fired, in
    /// registration order. A timer fires at most once per tick.
    pub fn tick(&mut self, dt: Duration) -> Vec<TimerTask> {
        let mut fired = Vec::new();

        self.timers.retain_mut(|timer| {
            timer.elapsed += dt;
            if timer.elapsed < timer.delay {
                return true;
            }

            fired.push(timer.task);
            if timer.repeats {
                timer.elapsed = (timer.elapsed - timer.delay).min(timer.delay);
                true
            } else {
                false
            }
        });

        fired
    }

    /// Number of live timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }
}

impl Scheduler for FrameScheduler {
    fn schedule(&mut self, delay: Duration, repeats: bool, task: TimerTask) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        tracing::trace!(?handle, ?delay, repeats, ?task, "timer scheduled");
        self.timers.push(Timer {
            handle,
            delay,
            elapsed: Duration::ZERO,
            repeats,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyCode;

    fn repeat_task() -> TimerTask {
        TimerTask::KeyRepeat {
            field: FieldId::next(),
            keystroke: Keystroke::key(KeyCode::Left),
        }
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = FrameScheduler::new();
        let task = repeat_task();
        let handle = scheduler.schedule(Duration::from_millis(200), false, task);

        assert!(scheduler.tick(Duration::from_millis(150)).is_empty());
        assert_eq!(scheduler.tick(Duration::from_millis(60)), vec![task]);
        assert!(!scheduler.is_scheduled(handle));
        assert!(scheduler.tick(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_repeating_fires_each_interval() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule(Duration::from_millis(200), true, repeat_task());

        let mut count = 0;
        for _ in 0..10 {
            count += scheduler.tick(Duration::from_millis(100)).len();
        }
        assert_eq!(count, 5);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_repeating_fires_at_most_once_per_tick() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule(Duration::from_millis(200), true, repeat_task());
        assert_eq!(scheduler.tick(Duration::from_secs(2)).len(), 1);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = FrameScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(10), true, repeat_task());
        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.tick(Duration::from_secs(1)).is_empty());
    }
}
