use crate::audit::{AuditContext, EnrichedAuditEntry};
use crate::error::AppResult;

#[tracing::instrument(skip(ctx))]
pub async fn handle(
    ctx: &AuditContext,
    reservation_id: i32,
) -> AppResult<Option<EnrichedAuditEntry>> {
    match ctx.store.find_latest_for_reservation(reservation_id).await? {
        Some(entry) => Ok(Some(ctx.enricher.enrich(entry).await?)),
        None => Ok(None),
    }
}
