//! Attaches reservation and user display data to audit entries

use std::sync::Arc;

use super::models::{AuditEntry, EnrichedAuditEntry};
use crate::directory::{ReservationDirectory, UserDirectory};
use crate::error::AppResult;

/// Label used when the acting user is unknown to the user module.
pub fn fallback_user_label(user_id: i32) -> String {
    format!("Usuario {}", user_id)
}

#[derive(Clone)]
pub struct Enricher {
    reservations: Arc<dyn ReservationDirectory>,
    users: Arc<dyn UserDirectory>,
}

impl Enricher {
    pub fn new(reservations: Arc<dyn ReservationDirectory>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            reservations,
            users,
        }
    }

    pub async fn enrich(&self, entry: AuditEntry) -> AppResult<EnrichedAuditEntry> {
        let reservation = self
            .reservations
            .find_reservation(entry.reservation_id)
            .await?
            .unwrap_or_default();

        let acting_user_name = match self.users.find_user(entry.acting_user_id).await? {
            Some(user) => user.full_name(),
            None => fallback_user_label(entry.acting_user_id),
        };

        Ok(EnrichedAuditEntry {
            entry,
            acting_user_name,
            space_name: reservation.space_name,
            requester_name: reservation.requester_name,
        })
    }

    /// Enrich each entry on its own, keeping the input order.
    pub async fn enrich_all(&self, entries: Vec<AuditEntry>) -> AppResult<Vec<EnrichedAuditEntry>> {
        let mut enriched = Vec::with_capacity(entries.len());
        for entry in entries {
            enriched.push(self.enrich(entry).await?);
        }
        Ok(enriched)
    }
}
