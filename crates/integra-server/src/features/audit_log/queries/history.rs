use crate::audit::{AuditContext, AuditFilter, EnrichedAuditEntry};
use crate::error::AppResult;

#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext, reservation_id: i32) -> AppResult<Vec<EnrichedAuditEntry>> {
    let entries = ctx
        .store
        .find(&AuditFilter::for_reservation(reservation_id))
        .await?;
    ctx.enricher.enrich_all(entries).await
}
