use serde::{Deserialize, Serialize};

use crate::audit::{AuditContext, AuditFilter};
use crate::error::AppResult;

/// How much audit history a reservation has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationActivity {
    #[serde(rename = "idReserva")]
    pub reservation_id: i32,
    #[serde(rename = "totalCambios")]
    pub change_count: i64,
    #[serde(rename = "tieneAuditoria")]
    pub has_history: bool,
}

#[tracing::instrument(skip(ctx))]
pub async fn handle(ctx: &AuditContext, reservation_id: i32) -> AppResult<ReservationActivity> {
    let entries = ctx
        .store
        .find(&AuditFilter::for_reservation(reservation_id))
        .await?;

    Ok(ReservationActivity {
        reservation_id,
        change_count: entries.len() as i64,
        has_history: !entries.is_empty(),
    })
}
