use crate::audit::{AuditContext, AuditFilter, EnrichedAuditEntry};
use crate::error::AppResult;

/// Entries matching every filter field that is set
#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext, filter: AuditFilter) -> AppResult<Vec<EnrichedAuditEntry>> {
    let entries = ctx.store.find(&filter).await?;
    tracing::debug!(count = entries.len(), "Filtered audit entries");
    ctx.enricher.enrich_all(entries).await
}
