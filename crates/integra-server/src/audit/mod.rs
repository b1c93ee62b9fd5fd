//! Reservation audit trail
//!
//! Every reservation state transition is recorded once as an
//! [`AuditEntry`]. Entries are never updated; they are read back filtered,
//! enriched with reservation and user display data, and aggregated into
//! counters for the statistics dashboard.
//!
//! # Layers
//!
//! - [`store`]: the [`AuditStore`] contract, with [`PgAuditStore`] and
//!   [`MemoryAuditStore`] behind it
//! - [`models`]: entries, the conjunctive [`AuditFilter`] and the enriched view
//! - [`aggregation`]: outcome counters, per-day and per-month buckets
//! - [`enrichment`]: the [`Enricher`] joining entries with the directories
//!
//! All multi-row reads are ordered newest first, ties broken by highest id.

pub mod aggregation;
pub mod enrichment;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

use integra_common::Clock;
use std::sync::Arc;

pub use aggregation::{DayCount, OverviewStatistics, SummaryStatistics};
pub use enrichment::{fallback_user_label, Enricher};
pub use memory::MemoryAuditStore;
pub use models::{
    AuditEntry, AuditFilter, EnrichedAuditEntry, NewAuditEntry, STATE_APPROVED, STATE_CANCELLED,
    STATE_PENDING, STATE_REJECTED,
};
pub use postgres::PgAuditStore;
pub use store::AuditStore;

use crate::config::AuditConfig;

/// Everything an audit handler needs, cloned per request
#[derive(Clone)]
pub struct AuditContext {
    pub store: Arc<dyn AuditStore>,
    pub enricher: Enricher,
    pub clock: Arc<dyn Clock>,
    pub settings: AuditConfig,
}

impl AuditContext {
    pub fn new(
        store: Arc<dyn AuditStore>,
        enricher: Enricher,
        clock: Arc<dyn Clock>,
        settings: AuditConfig,
    ) -> Self {
        Self {
            store,
            enricher,
            clock,
            settings,
        }
    }
}
