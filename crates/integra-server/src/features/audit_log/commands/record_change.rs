use crate::audit::{AuditContext, AuditEntry, NewAuditEntry};
use crate::error::AppResult;

/// Append one reservation state transition
#[tracing::instrument(
    skip(ctx, change),
    fields(reservation_id = change.reservation_id, new_state = %change.new_state)
)]
pub async fn handle(ctx: &AuditContext, change: NewAuditEntry) -> AppResult<AuditEntry> {
    change.validate()?;

    let entry = ctx.store.append(change).await?;

    tracing::info!(
        audit_id = entry.id,
        acting_user_id = entry.acting_user_id,
        "Recorded reservation change"
    );

    Ok(entry)
}
