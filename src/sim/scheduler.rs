//! Virtual-time timer queue
//!
//! Stands in for the browser's interval timers. Everything runs on one logical
//! thread: the driver asks for the next due timer, runs it to completion, and
//! asks again. Time only moves when the driver says so, which keeps tests
//! deterministic.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

/// Work a timer performs when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Spawn one falling object
    Spawn,
    /// Run one update tick
    Tick,
}

#[derive(Debug, Clone)]
struct Timer {
    task: Task,
    period_ms: u64,
}

/// A timer that came due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub task: Task,
    /// Virtual time the timer was due at
    pub at_ms: u64,
}

/// Repeating-timer scheduler driven by an explicit virtual clock
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    /// Live timers; cancelling removes the entry here
    timers: HashMap<TimerId, Timer>,
    /// Due queue ordered by (due time, id); may hold stale entries for cancelled timers
    queue: BTreeSet<(u64, TimerId)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time (ms)
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `task` to fire every `period_ms`, first at `now + period_ms`
    pub fn schedule_repeating(&mut self, task: Task, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, Timer { task, period_ms });
        self.queue.insert((self.now_ms + period_ms, id));
        id
    }

    /// Cancel a timer. Returns false if it was not live.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Period of a live timer
    pub fn period_ms(&self, id: TimerId) -> Option<u64> {
        self.timers.get(&id).map(|t| t.period_ms)
    }

    pub fn live_count(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest live timer due at or before `until_ms`.
    ///
    /// The clock moves to the timer's due time and the timer is re-armed for
    /// its next period. Returns None (and moves the clock to `until_ms`) once
    /// nothing else is due.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired> {
        loop {
            let (due, id) = match self.queue.first() {
                Some(&(due, id)) if due <= until_ms => (due, id),
                _ => {
                    self.now_ms = self.now_ms.max(until_ms);
                    return None;
                }
            };
            self.queue.remove(&(due, id));

            let Some(timer) = self.timers.get(&id) else {
                // Cancelled after it was queued
                continue;
            };

            self.now_ms = self.now_ms.max(due);
            self.queue.insert((due + timer.period_ms, id));
            return Some(Fired {
                id,
                task: timer.task,
                at_ms: due,
            });
        }
    }
}
