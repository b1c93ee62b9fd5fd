//! Feature slices of the IntegraUPT reporting API
//!
//! # Features
//!
//! - **audit_log**: reservation audit trail (record, query, aggregate, purge)
//! - **catalogs**: faculty and school lookups
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations
//! - `queries/` - Read operations
//! - `routes.rs` - HTTP route definitions
//!
//! Route handlers only extract parameters and call the matching `handle`
//! function; the handlers own the behavior.

pub mod audit_log;
pub mod catalogs;

use axum::Router;
use std::sync::Arc;

use crate::audit::AuditContext;
use crate::catalog::CatalogDirectory;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    pub audit: AuditContext,
    pub catalog: Arc<dyn CatalogDirectory>,
}

/// Creates the API router with all feature routes mounted
///
/// - `/auditoria-reservas` - Reservation audit trail
/// - `/catalogos` - Faculty and school catalogs
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest(
            "/auditoria-reservas",
            audit_log::audit_log_routes().with_state(state.audit),
        )
        .nest("/catalogos", catalogs::catalog_routes().with_state(state.catalog))
}
