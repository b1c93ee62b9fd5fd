use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditContext, AuditFilter, EnrichedAuditEntry};
use crate::error::AppResult;
use crate::params::empty_as_none;

/// Optional inclusive date range; an open side is unbounded
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserChangesQuery {
    #[serde(rename = "fechaInicio", default, deserialize_with = "empty_as_none")]
    pub from: Option<NaiveDateTime>,
    #[serde(rename = "fechaFin", default, deserialize_with = "empty_as_none")]
    pub to: Option<NaiveDateTime>,
}

impl UserChangesQuery {
    fn into_filter(self, acting_user_id: i32) -> AuditFilter {
        AuditFilter {
            acting_user_id: Some(acting_user_id),
            from: self.from,
            to: self.to,
            ..Default::default()
        }
    }
}

/// Changes made by one user, enriched
#[tracing::instrument(skip(ctx))]
pub async fn handle(
    ctx: &AuditContext,
    acting_user_id: i32,
    query: UserChangesQuery,
) -> AppResult<Vec<EnrichedAuditEntry>> {
    let entries = ctx.store.find(&query.into_filter(acting_user_id)).await?;
    ctx.enricher.enrich_all(entries).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_filter_keeps_range() {
        let from = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let filter = UserChangesQuery { from: Some(from), to: None }.into_filter(4);

        assert_eq!(filter.acting_user_id, Some(4));
        assert_eq!(filter.from, Some(from));
        assert!(filter.to.is_none());
        assert!(filter.reservation_id.is_none());
    }
}
