//! The audit record store contract

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::models::{AuditEntry, AuditFilter, NewAuditEntry};
use crate::error::AppResult;

/// Append-only storage of audit entries.
///
/// Every multi-row read returns entries newest first: `changed_at`
/// descending, ties broken by `id` descending. Entries are never updated;
/// they leave the store only through [`delete_by_id`](Self::delete_by_id) or
/// [`delete_older_than`](Self::delete_older_than).
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Persist a change, stamping it with a fresh id and the current time.
    async fn append(&self, change: NewAuditEntry) -> AppResult<AuditEntry>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<AuditEntry>>;

    /// Returns `false` when no entry had that id.
    async fn delete_by_id(&self, id: i32) -> AppResult<bool>;

    /// Remove entries with `changed_at` strictly before `cutoff` and return
    /// how many were removed.
    async fn delete_older_than(&self, cutoff: NaiveDateTime) -> AppResult<u64>;

    async fn count_all(&self) -> AppResult<i64>;

    async fn count_by_new_state(&self, state: &str) -> AppResult<i64>;

    async fn find(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>>;

    async fn find_latest_for_reservation(
        &self,
        reservation_id: i32,
    ) -> AppResult<Option<AuditEntry>>;

    /// Case-insensitive substring match against prior or new state.
    async fn find_by_text(&self, text: &str) -> AppResult<Vec<AuditEntry>>;

    /// Ascending
    async fn distinct_reservation_ids(&self) -> AppResult<Vec<i32>>;

    /// Ascending
    async fn distinct_acting_user_ids(&self) -> AppResult<Vec<i32>>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> AppResult<()>;
}
