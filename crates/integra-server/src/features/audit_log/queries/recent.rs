use serde::{Deserialize, Serialize};

use crate::audit::aggregation::days_before;
use crate::audit::{AuditContext, AuditFilter, EnrichedAuditEntry};
use crate::error::{AppError, AppResult};
use crate::params::empty_as_none;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentChangesQuery {
    /// Look-back window in days; the configured default when absent
    #[serde(rename = "dias", default, deserialize_with = "empty_as_none")]
    pub days: Option<i64>,
}

impl RecentChangesQuery {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(days) = self.days {
            if days < 0 {
                return Err(AppError::validation(format!(
                    "Recent window cannot be negative: {}",
                    days
                )));
            }
        }
        Ok(())
    }
}

/// Entries changed within the last `days` days, enriched
#[tracing::instrument(skip(ctx))]
pub async fn handle(
    ctx: &AuditContext,
    query: RecentChangesQuery,
) -> AppResult<Vec<EnrichedAuditEntry>> {
    query.validate()?;

    let days = query.days.unwrap_or(ctx.settings.recent_days);
    let since = days_before(ctx.clock.now(), days)?;
    let entries = ctx.store.find(&AuditFilter::since(since)).await?;

    ctx.enricher.enrich_all(entries).await
}
