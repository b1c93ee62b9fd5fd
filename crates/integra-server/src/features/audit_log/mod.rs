//! Reservation audit log feature
//!
//! Commands append, delete and purge entries; queries read them back
//! filtered, enriched and aggregated. Handlers take an
//! [`AuditContext`](crate::audit::AuditContext) and return
//! [`AppResult`](crate::error::AppResult).

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{DeleteAuditEntryResponse, PurgeResponse};
pub use queries::{RecentChangesQuery, ReservationActivity, TextSearchQuery, UserChangesQuery};
pub use routes::audit_log_routes;
