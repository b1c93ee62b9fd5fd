use crate::audit::{AuditContext, AuditEntry};
use crate::error::AppResult;

/// The raw entry; `None` when no entry has that id
#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext, id: i32) -> AppResult<Option<AuditEntry>> {
    ctx.store.get_by_id(id).await
}
