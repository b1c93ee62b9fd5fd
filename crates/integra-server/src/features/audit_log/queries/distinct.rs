use crate::audit::AuditContext;
use crate::error::AppResult;

#[tracing::instrument(skip(ctx))]
pub async fn reservation_ids(ctx: &AuditContext) -> AppResult<Vec<i32>> {
    ctx.store.distinct_reservation_ids().await
}

#[tracing::instrument(skip(ctx))]
pub async fn acting_user_ids(ctx: &AuditContext) -> AppResult<Vec<i32>> {
    ctx.store.distinct_acting_user_ids().await
}
