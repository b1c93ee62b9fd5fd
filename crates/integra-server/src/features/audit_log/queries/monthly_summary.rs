use std::collections::BTreeMap;

use crate::audit::{aggregation, AuditContext};
use crate::error::AppResult;

/// Changes per month of `year`, keys `1..=12`
#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext, year: i32) -> AppResult<BTreeMap<u32, i64>> {
    aggregation::monthly_summary(ctx.store.as_ref(), year).await
}
