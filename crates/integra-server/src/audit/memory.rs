//! Process-local audit store
//!
//! Backs the `memory` backend and the test suites. Same ordering and
//! filtering rules as the PostgreSQL store.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use integra_common::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{AuditEntry, AuditFilter, NewAuditEntry};
use super::store::AuditStore;
use crate::error::AppResult;

#[derive(Debug, Default)]
struct Inner {
    last_id: i32,
    entries: Vec<AuditEntry>,
}

#[derive(Debug, Clone)]
pub struct MemoryAuditStore {
    inner: Arc<RwLock<Inner>>,
    clock: Arc<dyn Clock>,
}

impl MemoryAuditStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            clock,
        }
    }

    async fn select<F>(&self, keep: F) -> Vec<AuditEntry>
    where
        F: Fn(&AuditEntry) -> bool,
    {
        let inner = self.inner.read().await;
        let mut rows: Vec<AuditEntry> = inner.entries.iter().filter(|e| keep(e)).cloned().collect();
        sort_newest_first(&mut rows);
        rows
    }
}

fn sort_newest_first(rows: &mut [AuditEntry]) {
    rows.sort_by(|a, b| b.changed_at.cmp(&a.changed_at).then(b.id.cmp(&a.id)));
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    async fn append(&self, change: NewAuditEntry) -> AppResult<AuditEntry> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let entry = AuditEntry {
            id: inner.last_id,
            reservation_id: change.reservation_id,
            prior_state: change.prior_state,
            new_state: change.new_state,
            changed_at: self.clock.now(),
            acting_user_id: change.acting_user_id,
        };
        inner.entries.push(entry.clone());

        Ok(entry)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<AuditEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.entries.iter().find(|e| e.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id != id);
        Ok(inner.entries.len() < before)
    }

    async fn delete_older_than(&self, cutoff: NaiveDateTime) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|e| e.changed_at >= cutoff);
        Ok((before - inner.entries.len()) as u64)
    }

    async fn count_all(&self) -> AppResult<i64> {
        Ok(self.inner.read().await.entries.len() as i64)
    }

    async fn count_by_new_state(&self, state: &str) -> AppResult<i64> {
        let inner = self.inner.read().await;
        Ok(inner.entries.iter().filter(|e| e.new_state == state).count() as i64)
    }

    async fn find(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        Ok(self.select(|e| filter.matches(e)).await)
    }

    async fn find_latest_for_reservation(
        &self,
        reservation_id: i32,
    ) -> AppResult<Option<AuditEntry>> {
        let rows = self.select(|e| e.reservation_id == reservation_id).await;
        Ok(rows.into_iter().next())
    }

    async fn find_by_text(&self, text: &str) -> AppResult<Vec<AuditEntry>> {
        let needle = text.to_lowercase();
        Ok(self
            .select(|e| {
                e.prior_state
                    .as_deref()
                    .is_some_and(|s| contains_ignore_case(s, &needle))
                    || contains_ignore_case(&e.new_state, &needle)
            })
            .await)
    }

    async fn distinct_reservation_ids(&self) -> AppResult<Vec<i32>> {
        let inner = self.inner.read().await;
        let ids: BTreeSet<i32> = inner.entries.iter().map(|e| e.reservation_id).collect();
        Ok(ids.into_iter().collect())
    }

    async fn distinct_acting_user_ids(&self) -> AppResult<Vec<i32>> {
        let inner = self.inner.read().await;
        let ids: BTreeSet<i32> = inner.entries.iter().map(|e| e.acting_user_id).collect();
        Ok(ids.into_iter().collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
