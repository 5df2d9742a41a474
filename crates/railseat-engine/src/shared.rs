//! Shared engine handle for multiple callers.
//!
//! The engine's operations read and write several components in sequence
//! (the section cursor, seat state, the ledger), so each call here holds one
//! lock over the whole engine for its entire duration.

use std::sync::Arc;

use tokio::sync::Mutex;

use railseat_core::config::EngineConfig;
use railseat_core::events::JournalEntry;
use railseat_core::result::AppResult;
use railseat_core::types::{
    AdminReport, BookingOutcome, CancellationReport, Direction, RequestType, SeatNumber, SeatView,
    Section,
};

use crate::engine::AllocationEngine;

/// Cloneable, mutex-guarded [`AllocationEngine`].
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<AllocationEngine>>,
}

impl SharedEngine {
    /// Wraps an existing engine.
    pub fn new(engine: AllocationEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Builds the engine from configuration, including the seat layout.
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        AllocationEngine::from_config(config).map(Self::new)
    }

    /// See [`AllocationEngine::add_seat`].
    pub async fn add_seat(&self, number: SeatNumber, section: Section) -> AppResult<()> {
        let mut engine = self.inner.lock().await;
        engine.add_seat(number, section).map(|_| ())
    }

    /// See [`AllocationEngine::book`].
    pub async fn book(
        &self,
        name: impl Into<String>,
        gender: &str,
        request_type: RequestType,
    ) -> AppResult<BookingOutcome> {
        let mut engine = self.inner.lock().await;
        engine.book(name, gender, request_type)
    }

    /// See [`AllocationEngine::cancel`].
    pub async fn cancel(&self) -> AppResult<CancellationReport> {
        let mut engine = self.inner.lock().await;
        engine.cancel()
    }

    /// See [`AllocationEngine::rotate`].
    pub async fn rotate(&self, direction: Direction) -> Vec<SeatNumber> {
        let mut engine = self.inner.lock().await;
        engine.rotate(direction)
    }

    /// See [`AllocationEngine::admin_report`].
    pub async fn admin_report(&self) -> AdminReport {
        self.inner.lock().await.admin_report()
    }

    /// See [`AllocationEngine::seat_map`].
    pub async fn seat_map(&self) -> Vec<SeatView> {
        self.inner.lock().await.seat_map()
    }

    /// See [`AllocationEngine::history`].
    pub async fn history(&self) -> Vec<JournalEntry> {
        self.inner.lock().await.history()
    }

    /// Number of seats.
    pub async fn seat_count(&self) -> usize {
        self.inner.lock().await.seat_count()
    }

    /// Runs a closure against the engine under the lock.
    pub async fn with_engine<R>(&self, f: impl FnOnce(&AllocationEngine) -> R) -> R {
        let engine = self.inner.lock().await;
        f(&engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_bookings_serialize() {
        let shared = SharedEngine::new(AllocationEngine::default());
        for n in 1..=3 {
            shared.add_seat(SeatNumber(n), Section::Front).await.unwrap();
        }

        let mut handles = Vec::new();
        for i in 0..8 {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared
                    .book(format!("p{i}"), "m", RequestType::Normal)
                    .await
                    .unwrap()
            }));
        }

        let mut seated = 0;
        let mut rac = 0;
        let mut waiting = 0;
        for handle in handles {
            match handle.await.unwrap() {
                BookingOutcome::Seated { .. } => seated += 1,
                BookingOutcome::Rac { .. } => rac += 1,
                BookingOutcome::Waitlisted { .. } => waiting += 1,
            }
        }

        assert_eq!(seated, 3);
        assert_eq!(rac, 5);
        assert_eq!(waiting, 0);
        // Only Front has seats: the first booking finds one on its first
        // attempt, every later one walks all three sections.
        assert_eq!(shared.with_engine(|e| e.section_attempts()).await, 1 + 7 * 3);
    }

    #[tokio::test]
    async fn test_cancel_on_empty_shared_engine() {
        let shared = SharedEngine::new(AllocationEngine::default());
        assert!(shared.cancel().await.is_err());
        assert_eq!(shared.admin_report().await, AdminReport::default());
    }
}
