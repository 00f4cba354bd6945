use crate::foundation::core::Millis;

/// Handle returned by [`TimerQueue::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TimerId(u64);

/// One-shot timeouts against the virtual clock.
///
/// Due timers fire in deadline order; ties fire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    pending: Vec<(Millis, u64, K)>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K> TimerQueue<K> {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `kind` at `at`.
    pub fn schedule(&mut self, at: Millis, kind: K) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let pos = self
            .pending
            .partition_point(|(deadline, s, _)| (*deadline, *s) <= (at, seq));
        self.pending.insert(pos, (at, seq, kind));
        TimerId(seq)
    }

    /// Drop a pending timer; `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.iter().position(|(_, s, _)| *s == id.0) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop every pending timer matching `pred`.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&K) -> bool) {
        self.pending.retain(|(_, _, k)| !pred(k));
    }

    /// Pop the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, K)> {
        match self.pending.first() {
            Some((deadline, _, _)) if *deadline <= now => {
                let (deadline, _, kind) = self.pending.remove(0);
                Some((deadline, kind))
            }
            _ => None,
        }
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.first().map(|(d, _, _)| *d)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/timers.rs"]
mod tests;
