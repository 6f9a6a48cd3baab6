//! Debounced, sequenced keyword search.
//!
//! One request per keystroke with no cancellation loses races: a slow
//! early response can land after a fast later one and overwrite it.
//! The session therefore waits out a quiet period before issuing the
//! request, tags every issued request with a sequence number and drops
//! any response that arrives out of order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ConsoleResult;
use crate::gateway::CourseQueries;
use crate::models::Course;

pub struct SearchSession<Q: CourseQueries> {
    queries: Arc<Q>,
    debounce: Duration,
    keystrokes: AtomicU64,
    issued: AtomicU64,
    applied: AtomicU64,
}

impl<Q: CourseQueries> SearchSession<Q> {
    pub fn new(queries: Arc<Q>, debounce: Duration) -> Self {
        Self {
            queries,
            debounce,
            keystrokes: AtomicU64::new(0),
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Handle one keystroke. Returns `None` when this keystroke was
    /// superseded inside the debounce window (no request issued) or when
    /// the response came back after a newer one was already applied.
    pub async fn input(&self, keyword: &str) -> Option<ConsoleResult<Vec<Course>>> {
        let token = self.keystrokes.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.debounce).await;
        if self.keystrokes.load(Ordering::SeqCst) != token {
            return None;
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.queries.search(keyword).await;
        if !self.apply(seq) {
            return None;
        }
        Some(result)
    }

    /// Record `seq` as applied unless a newer response already was.
    fn apply(&self, seq: u64) -> bool {
        let mut current = self.applied.load(Ordering::SeqCst);
        loop {
            if seq <= current {
                return false;
            }
            match self.applied.compare_exchange(
                current,
                seq,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }
}
