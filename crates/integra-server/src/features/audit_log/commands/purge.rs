use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::audit::aggregation::months_before;
use crate::audit::AuditContext;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResponse {
    #[serde(rename = "eliminados")]
    pub removed: u64,
    /// Entries strictly before this instant were removed
    #[serde(rename = "fechaLimite")]
    pub cutoff: NaiveDateTime,
}

/// Drop entries older than the retention window
#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext) -> AppResult<PurgeResponse> {
    let cutoff = months_before(ctx.clock.now(), ctx.settings.retention_months)?;
    let removed = ctx.store.delete_older_than(cutoff).await?;

    tracing::info!(
        removed,
        %cutoff,
        retention_months = ctx.settings.retention_months,
        "Purged old audit entries"
    );

    Ok(PurgeResponse { removed, cutoff })
}
