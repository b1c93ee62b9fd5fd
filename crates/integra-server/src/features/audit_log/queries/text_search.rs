use serde::{Deserialize, Serialize};

use crate::audit::{AuditContext, EnrichedAuditEntry};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSearchQuery {
    #[serde(rename = "texto")]
    pub text: String,
}

/// Entries whose prior or new state contains the text, ignoring case
#[tracing::instrument(skip(ctx))]
pub async fn handle(
    ctx: &AuditContext,
    query: TextSearchQuery,
) -> AppResult<Vec<EnrichedAuditEntry>> {
    let entries = ctx.store.find_by_text(&query.text).await?;
    ctx.enricher.enrich_all(entries).await
}
