//! Daily-reset quota tracking for the remote tier.
//!
//! A process-wide counter persisted across sessions, with lazy calendar-day
//! rollover: any read observing a stale `resetDate` replaces the state with
//! a fresh one for today before use. No background timer.

pub mod store;

pub use store::{FileQuotaStore, MemoryQuotaStore};

use serde::{Deserialize, Serialize};

/// Persisted quota record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaState {
    /// Remote-tier calls consumed today.
    pub count: u32,
    /// Calendar day (`%Y-%m-%d`, local time) the counter belongs to.
    #[serde(rename = "resetDate")]
    pub reset_date: String,
}

impl QuotaState {
    /// Fresh state for the given day.
    pub fn fresh(day: impl Into<String>) -> Self {
        Self {
            count: 0,
            reset_date: day.into(),
        }
    }

    /// Lazy daily rollover: a state from any other day becomes fresh.
    pub fn rolled_to(&self, day: &str) -> Self {
        if self.reset_date == day {
            self.clone()
        } else {
            Self::fresh(day)
        }
    }
}

/// Today's calendar-day stamp, local time.
pub fn today_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Injectable quota store. All operations are infallible: storage trouble
/// fails open to a fresh counter rather than blocking resolution.
pub trait QuotaStore: Send + Sync {
    /// Current state after rollover. Persists only if a rollover triggered.
    fn peek(&self) -> QuotaState;

    /// Roll over if needed, add one call to today's counter, persist.
    ///
    /// The only writer in normal flow; the orchestrator invokes it exactly
    /// once per settled remote call.
    fn increment(&self) -> QuotaState;

    /// Operator escape hatch: force the counter back to zero for today.
    fn reset(&self) -> QuotaState;
}
