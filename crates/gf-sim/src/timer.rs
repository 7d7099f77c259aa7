//! `TimerQueue`: cancelable virtual-time deadlines.
//!
//! Every running playback loop owns exactly one pending entry.  Entries are
//! keyed by `(deadline, TimerId)`, so timers due at the same instant fire in
//! the order they were scheduled.  A side map from id to deadline makes
//! `cancel` O(log T) without scanning.
//!
//! Ids are never reused: once a timer fired or was canceled its id is dead,
//! and a stale handle can never cancel a newer timer.

use std::collections::{BTreeMap, HashMap};

use gf_core::{AgentId, SimTime, TimerId};

/// What a timer drives when it fires.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TimerTarget {
    /// The solo playback loop of one agent.
    Agent(AgentId),
    /// The shared fleet loop.
    Fleet,
}

#[derive(Default, Debug)]
pub struct TimerQueue {
    inner:     BTreeMap<(SimTime, TimerId), TimerTarget>,
    deadlines: HashMap<TimerId, SimTime>,
    next_id:   u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `target` to fire at `at` and return the handle to cancel it.
    pub fn push(&mut self, at: SimTime, target: TimerTarget) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.inner.insert((at, id), target);
        self.deadlines.insert(id, at);
        id
    }

    /// Cancel a pending timer.  Returns `false` if it already fired or was
    /// canceled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(at) => self.inner.remove(&(at, id)).is_some(),
            None => false,
        }
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: SimTime) -> Option<(SimTime, TimerId, TimerTarget)> {
        let (&(at, id), _) = self.inner.first_key_value()?;
        if at > now {
            return None;
        }
        let target = self.inner.remove(&(at, id))?;
        self.deadlines.remove(&id);
        Some((at, id, target))
    }

    /// Deadline of a pending timer.
    pub fn deadline(&self, id: TimerId) -> Option<SimTime> {
        self.deadlines.get(&id).copied()
    }

    /// The earliest pending deadline, or `None` if nothing is scheduled.
    pub fn next_deadline(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(at, _)| at)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
