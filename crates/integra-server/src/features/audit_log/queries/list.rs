use crate::audit::{AuditContext, AuditFilter, EnrichedAuditEntry};
use crate::error::AppResult;

/// Every entry, enriched, newest first
#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext) -> AppResult<Vec<EnrichedAuditEntry>> {
    let entries = ctx.store.find(&AuditFilter::default()).await?;
    tracing::debug!(count = entries.len(), "Listing audit entries");
    ctx.enricher.enrich_all(entries).await
}
