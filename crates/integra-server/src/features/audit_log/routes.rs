//! Reservation audit API routes
//!
//! # Route Structure
//!
//! - `GET /api/auditoria-reservas` - All entries, enriched
//! - `POST /api/auditoria-reservas` - Record a reservation state change
//! - `GET /api/auditoria-reservas/:idAudit` - One raw entry or `null`
//! - `DELETE /api/auditoria-reservas/:idAudit` - Delete one entry
//! - `DELETE /api/auditoria-reservas/antiguas` - Retention purge
//! - `GET /api/auditoria-reservas/reserva/:idReserva` - History of one reservation
//! - `GET /api/auditoria-reservas/reserva/:idReserva/ultimo` - Latest change or `null`
//! - `GET /api/auditoria-reservas/reserva/:idReserva/actividad` - Change count
//! - `GET /api/auditoria-reservas/buscar` - Conjunctive filter
//! - `GET /api/auditoria-reservas/recientes?dias=` - Recent changes
//! - `GET /api/auditoria-reservas/texto?texto=` - Free-text search over states
//! - `GET /api/auditoria-reservas/usuario/:usuarioCambio` - Changes by one user
//! - `GET /api/auditoria-reservas/estadisticas` - Overview counters
//! - `GET /api/auditoria-reservas/resumen` - Counters plus per-day buckets
//! - `GET /api/auditoria-reservas/resumen-mensual/:anio` - Per-month counts
//! - `GET /api/auditoria-reservas/reservas` - Distinct reservation ids
//! - `GET /api/auditoria-reservas/usuarios` - Distinct acting user ids
//!
//! Every failure, including a malformed path, query string or body, is a
//! `500 Internal Server Error` with an empty body.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use std::collections::BTreeMap;

use super::commands::{self, DeleteAuditEntryResponse, PurgeResponse};
use super::queries::{
    self, RecentChangesQuery, ReservationActivity, TextSearchQuery, UserChangesQuery,
};
use crate::audit::{
    AuditContext, AuditEntry, AuditFilter, EnrichedAuditEntry, NewAuditEntry,
    OverviewStatistics, SummaryStatistics,
};
use crate::error::AppResult;

// ============================================================================
// Router Configuration
// ============================================================================

pub fn audit_log_routes() -> Router<AuditContext> {
    Router::new()
        .route("/", get(list_entries).post(record_change))
        .route("/antiguas", delete(purge_old_entries))
        .route("/buscar", get(search_entries))
        .route("/estadisticas", get(overview_statistics))
        .route("/resumen", get(summary_statistics))
        .route("/resumen-mensual/:year", get(monthly_summary))
        .route("/recientes", get(recent_changes))
        .route("/texto", get(text_search))
        .route("/reservas", get(reservation_ids))
        .route("/usuarios", get(acting_user_ids))
        .route("/usuario/:user_id", get(user_changes))
        .route("/reserva/:reservation_id", get(reservation_history))
        .route("/reserva/:reservation_id/ultimo", get(latest_change))
        .route("/reserva/:reservation_id/actividad", get(reservation_activity))
        .route("/:id", get(get_entry).delete(delete_entry))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /api/auditoria-reservas`
///
/// Body: `{"idReserva": 5, "estadoAnterior": "Pendiente", "estadoNuevo": "Aprobada",
/// "usuarioCambio": 3}`.
/// Responds `201 Created` with the stored entry.
async fn record_change(
    State(ctx): State<AuditContext>,
    body: Result<Json<NewAuditEntry>, JsonRejection>,
) -> AppResult<Response> {
    let Json(change) = body?;
    let entry = commands::record_change::handle(&ctx, change).await?;
    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

async fn delete_entry(
    State(ctx): State<AuditContext>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<DeleteAuditEntryResponse>> {
    let Path(id) = id?;
    Ok(Json(commands::delete::handle(&ctx, id).await?))
}

async fn purge_old_entries(State(ctx): State<AuditContext>) -> AppResult<Json<PurgeResponse>> {
    Ok(Json(commands::purge::handle(&ctx).await?))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

async fn list_entries(State(ctx): State<AuditContext>) -> AppResult<Json<Vec<EnrichedAuditEntry>>> {
    Ok(Json(queries::list::handle(&ctx).await?))
}

/// Responds `null` when the id is unknown.
async fn get_entry(
    State(ctx): State<AuditContext>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Option<AuditEntry>>> {
    let Path(id) = id?;
    Ok(Json(queries::get::handle(&ctx, id).await?))
}

async fn reservation_history(
    State(ctx): State<AuditContext>,
    reservation_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Vec<EnrichedAuditEntry>>> {
    let Path(reservation_id) = reservation_id?;
    Ok(Json(queries::history::handle(&ctx, reservation_id).await?))
}

async fn latest_change(
    State(ctx): State<AuditContext>,
    reservation_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Option<EnrichedAuditEntry>>> {
    let Path(reservation_id) = reservation_id?;
    Ok(Json(queries::latest::handle(&ctx, reservation_id).await?))
}

async fn reservation_activity(
    State(ctx): State<AuditContext>,
    reservation_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<ReservationActivity>> {
    let Path(reservation_id) = reservation_id?;
    Ok(Json(queries::activity::handle(&ctx, reservation_id).await?))
}

/// `GET /api/auditoria-reservas/buscar`
///
/// Optional parameters: `idReserva`, `usuarioCambio`, `estadoAnterior`, `estadoNuevo`,
/// `fechaInicio`, `fechaFin`. A blank value counts as absent.
///
/// Dates are ISO-8601 local date-times, e.g. `2024-05-01T00:00:00`.
async fn search_entries(
    State(ctx): State<AuditContext>,
    filter: Result<Query<AuditFilter>, QueryRejection>,
) -> AppResult<Json<Vec<EnrichedAuditEntry>>> {
    let Query(filter) = filter?;
    Ok(Json(queries::search::handle(&ctx, filter).await?))
}

async fn recent_changes(
    State(ctx): State<AuditContext>,
    query: Result<Query<RecentChangesQuery>, QueryRejection>,
) -> AppResult<Json<Vec<EnrichedAuditEntry>>> {
    let Query(query) = query?;
    Ok(Json(queries::recent::handle(&ctx, query).await?))
}

async fn text_search(
    State(ctx): State<AuditContext>,
    query: Result<Query<TextSearchQuery>, QueryRejection>,
) -> AppResult<Json<Vec<EnrichedAuditEntry>>> {
    let Query(query) = query?;
    Ok(Json(queries::text_search::handle(&ctx, query).await?))
}

async fn user_changes(
    State(ctx): State<AuditContext>,
    user_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<UserChangesQuery>, QueryRejection>,
) -> AppResult<Json<Vec<EnrichedAuditEntry>>> {
    let Path(user_id) = user_id?;
    let Query(query) = query?;
    Ok(Json(queries::user_changes::handle(&ctx, user_id, query).await?))
}

async fn overview_statistics(
    State(ctx): State<AuditContext>,
) -> AppResult<Json<OverviewStatistics>> {
    Ok(Json(queries::statistics::overview(&ctx).await?))
}

async fn summary_statistics(State(ctx): State<AuditContext>) -> AppResult<Json<SummaryStatistics>> {
    Ok(Json(queries::statistics::summary(&ctx).await?))
}

async fn monthly_summary(
    State(ctx): State<AuditContext>,
    year: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<BTreeMap<u32, i64>>> {
    let Path(year) = year?;
    Ok(Json(queries::monthly_summary::handle(&ctx, year).await?))
}

async fn reservation_ids(State(ctx): State<AuditContext>) -> AppResult<Json<Vec<i32>>> {
    Ok(Json(queries::distinct::reservation_ids(&ctx).await?))
}

async fn acting_user_ids(State(ctx): State<AuditContext>) -> AppResult<Json<Vec<i32>>> {
    Ok(Json(queries::distinct::acting_user_ids(&ctx).await?))
}
