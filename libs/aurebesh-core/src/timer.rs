//! Cancellable one-shot timers driven by the host.
//!
//! The session never sleeps. It asks a [`TimerDriver`] to arm a timer and
//! expects the host to call back with the same [`TimerId`] when it fires.
//! Ids only grow, so a callback for a cancelled timer is recognisable.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Handle of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Why a timer was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPurpose {
    /// End of the study phase; starts the quiz.
    StudyCountdown,
    /// Pause after an answer before the next question.
    AnswerPause,
}

/// Host-side scheduler for one-shot callbacks.
pub trait TimerDriver {
    /// Schedule `id` to fire after `after`.
    fn arm(&mut self, id: TimerId, after: Duration);

    /// Drop a previously armed timer. Unknown ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Entry in a [`TimerLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Armed { id: TimerId, after: Duration },
    Cancelled { id: TimerId },
}

/// Driver that records requests for a polling host loop or for tests.
#[derive(Debug, Default, Clone)]
pub struct TimerLog {
    events: Vec<TimerEvent>,
    active: Vec<(TimerId, Duration)>,
}

impl TimerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TimerEvent] {
        &self.events
    }

    /// Timers armed and not yet cancelled or taken.
    pub fn active(&self) -> &[(TimerId, Duration)] {
        &self.active
    }

    /// Remove and return the oldest active timer, as if it fired.
    pub fn fire_next(&mut self) -> Option<TimerId> {
        if self.active.is_empty() {
            return None;
        }
        Some(self.active.remove(0).0)
    }
}

impl TimerDriver for TimerLog {
    fn arm(&mut self, id: TimerId, after: Duration) {
        self.events.push(TimerEvent::Armed { id, after });
        self.active.push((id, after));
    }

    fn cancel(&mut self, id: TimerId) {
        self.events.push(TimerEvent::Cancelled { id });
        self.active.retain(|(active, _)| *active != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_tracks_active_timers() {
        let mut log = TimerLog::new();
        log.arm(TimerId(1), Duration::from_secs(20));
        log.arm(TimerId(2), Duration::from_millis(350));
        log.cancel(TimerId(1));

        assert_eq!(log.active(), &[(TimerId(2), Duration::from_millis(350))]);
        assert_eq!(log.events().len(), 3);
        assert_eq!(log.fire_next(), Some(TimerId(2)));
        assert_eq!(log.fire_next(), None);
    }

    #[test]
    fn cancel_unknown_is_harmless() {
        let mut log = TimerLog::new();
        log.cancel(TimerId(9));
        assert!(log.active().is_empty());
    }
}
