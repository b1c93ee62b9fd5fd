use serde::{Deserialize, Serialize};

use crate::audit::AuditContext;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAuditEntryResponse {
    #[serde(rename = "idAudit")]
    pub id: i32,
    /// `false` when no entry had that id
    #[serde(rename = "eliminado")]
    pub deleted: bool,
}

#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext, id: i32) -> AppResult<DeleteAuditEntryResponse> {
    let deleted = ctx.store.delete_by_id(id).await?;

    if deleted {
        tracing::info!(audit_id = id, "Deleted audit entry");
    }

    Ok(DeleteAuditEntryResponse { id, deleted })
}
