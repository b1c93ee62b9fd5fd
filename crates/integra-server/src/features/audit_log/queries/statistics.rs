use crate::audit::aggregation::{self, OverviewStatistics, SummaryStatistics};
use crate::audit::AuditContext;
use crate::error::AppResult;

/// Total, approvals and cancellations
#[tracing::instrument(skip(ctx))]
pub async fn overview(ctx: &AuditContext) -> AppResult<OverviewStatistics> {
    aggregation::overview_statistics(ctx.store.as_ref()).await
}

/// Outcome counters plus per-day buckets over the configured window
#[tracing::instrument(skip(ctx))]
pub async fn summary(ctx: &AuditContext) -> AppResult<SummaryStatistics> {
    aggregation::summary_statistics(
        ctx.store.as_ref(),
        ctx.clock.now(),
        ctx.settings.summary_window_days,
    )
    .await
}
