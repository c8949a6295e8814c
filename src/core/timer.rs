//! Cancellable scheduled events.
//!
//! Countdowns (combo decay, autosave debounce, golden bonus spawn/expiry,
//! festival scheduling) are modelled as entries in a [`Scheduler`] rather
//! than ad-hoc counters. Rescheduling always cancels the previous handle
//! first, so a timer can never have two pending firings.

/// Handle to a pending scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Scheduled<E> {
    handle: TimerHandle,
    due_ms: i64,
    event: E,
}

/// Ordered set of pending events keyed by deadline.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    next_id: u64,
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Arm a new event due at `due_ms`.
    pub fn schedule(&mut self, due_ms: i64, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            due_ms,
            event,
        });
        handle
    }

    /// Cancel a pending event. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.handle != handle);
        self.pending.len() != before
    }

    /// Cancel whatever `slot` points at and arm a replacement.
    pub fn reschedule(&mut self, slot: &mut Option<TimerHandle>, due_ms: i64, event: E) {
        if let Some(previous) = slot.take() {
            self.cancel(previous);
        }
        *slot = Some(self.schedule(due_ms, event));
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    pub fn due_at(&self, handle: TimerHandle) -> Option<i64> {
        self.pending
            .iter()
            .find(|s| s.handle == handle)
            .map(|s| s.due_ms)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Remove and return every event due at or before `now_ms`, earliest
    /// first. Ties keep scheduling order.
    pub fn drain_due(&mut self, now_ms: i64) -> Vec<(TimerHandle, E)> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by_key(|s| (s.due_ms, s.handle.0));
        due.into_iter().map(|s| (s.handle, s.event)).collect()
    }
}
