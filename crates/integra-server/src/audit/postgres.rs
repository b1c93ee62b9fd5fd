//! PostgreSQL-backed audit store
//!
//! Rows live in `auditoriareserva`. Queries are built at runtime and bound
//! positionally, so the crate builds without a live database.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use integra_common::Clock;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use super::models::{AuditEntry, AuditFilter, NewAuditEntry};
use super::store::AuditStore;
use crate::config::DEFAULT_PURGE_CHUNK_SIZE;
use crate::error::AppResult;

const SELECT_COLUMNS: &str = r#"
    id_audit AS id,
    id_reserva AS reservation_id,
    estado_anterior AS prior_state,
    estado_nuevo AS new_state,
    fecha_cambio AS changed_at,
    usuario_cambio AS acting_user_id
"#;

const NEWEST_FIRST: &str = " ORDER BY fecha_cambio DESC, id_audit DESC";

#[derive(Debug, Clone)]
pub struct PgAuditStore {
    pool: PgPool,
    clock: Arc<dyn Clock>,
    purge_chunk_size: i64,
}

impl PgAuditStore {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            pool,
            clock,
            purge_chunk_size: DEFAULT_PURGE_CHUNK_SIZE,
        }
    }

    /// Bound the number of rows a single retention DELETE may touch
    pub fn with_purge_chunk_size(mut self, chunk_size: i64) -> Self {
        self.purge_chunk_size = chunk_size.max(1);
        self
    }
}

/// `%text%` with LIKE metacharacters escaped, lowercased for a
/// case-insensitive comparison against `LOWER(column)`.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl AuditStore for PgAuditStore {
    async fn append(&self, change: NewAuditEntry) -> AppResult<AuditEntry> {
        let sql = format!(
            r#"
            INSERT INTO auditoriareserva (
                id_reserva, estado_anterior, estado_nuevo, fecha_cambio, usuario_cambio
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, AuditEntry>(&sql)
            .bind(change.reservation_id)
            .bind(&change.prior_state)
            .bind(&change.new_state)
            .bind(self.clock.now())
            .bind(change.acting_user_id)
            .fetch_one(&self.pool)
            .await?;

        debug!(
            audit_id = record.id,
            reservation_id = record.reservation_id,
            new_state = %record.new_state,
            "Appended audit entry"
        );

        Ok(record)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<AuditEntry>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM auditoriareserva WHERE id_audit = $1");
        let record = sqlx::query_as::<_, AuditEntry>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM auditoriareserva WHERE id_audit = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_older_than(&self, cutoff: NaiveDateTime) -> AppResult<u64> {
        let mut total = 0u64;

        loop {
            let removed = sqlx::query(
                r#"
                DELETE FROM auditoriareserva
                WHERE id_audit IN (
                    SELECT id_audit
                    FROM auditoriareserva
                    WHERE fecha_cambio < $1
                    ORDER BY id_audit
                    LIMIT $2
                )
                "#,
            )
            .bind(cutoff)
            .bind(self.purge_chunk_size)
            .execute(&self.pool)
            .await?
            .rows_affected();

            total += removed;
            debug!(removed, total, %cutoff, "Purged audit chunk");

            if removed < self.purge_chunk_size as u64 {
                break;
            }
        }

        Ok(total)
    }

    async fn count_all(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM auditoriareserva")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_by_new_state(&self, state: &str) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM auditoriareserva WHERE estado_nuevo = $1",
        )
        .bind(state)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn find(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>> {
        let mut sql = format!("SELECT {SELECT_COLUMNS} FROM auditoriareserva WHERE 1=1");

        let mut bind_count = 1;
        let mut conditions = Vec::new();

        if filter.reservation_id.is_some() {
            conditions.push(format!("id_reserva = ${}", bind_count));
            bind_count += 1;
        }
        if filter.acting_user_id.is_some() {
            conditions.push(format!("usuario_cambio = ${}", bind_count));
            bind_count += 1;
        }
        if filter.prior_state.is_some() {
            conditions.push(format!("estado_anterior = ${}", bind_count));
            bind_count += 1;
        }
        if filter.new_state.is_some() {
            conditions.push(format!("estado_nuevo = ${}", bind_count));
            bind_count += 1;
        }
        if filter.from.is_some() {
            conditions.push(format!("fecha_cambio >= ${}", bind_count));
            bind_count += 1;
        }
        if filter.to.is_some() {
            conditions.push(format!("fecha_cambio <= ${}", bind_count));
        }

        for condition in conditions {
            sql.push_str(" AND ");
            sql.push_str(&condition);
        }
        sql.push_str(NEWEST_FIRST);

        let mut query = sqlx::query_as::<_, AuditEntry>(&sql);

        if let Some(reservation_id) = filter.reservation_id {
            query = query.bind(reservation_id);
        }
        if let Some(acting_user_id) = filter.acting_user_id {
            query = query.bind(acting_user_id);
        }
        if let Some(prior_state) = &filter.prior_state {
            query = query.bind(prior_state);
        }
        if let Some(new_state) = &filter.new_state {
            query = query.bind(new_state);
        }
        if let Some(from) = filter.from {
            query = query.bind(from);
        }
        if let Some(to) = filter.to {
            query = query.bind(to);
        }

        let records = query.fetch_all(&self.pool).await?;

        debug!(count = records.len(), "Queried audit entries");

        Ok(records)
    }

    async fn find_latest_for_reservation(
        &self,
        reservation_id: i32,
    ) -> AppResult<Option<AuditEntry>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM auditoriareserva \
             WHERE id_reserva = $1{NEWEST_FIRST} LIMIT 1"
        );
        let record = sqlx::query_as::<_, AuditEntry>(&sql)
            .bind(reservation_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn find_by_text(&self, text: &str) -> AppResult<Vec<AuditEntry>> {
        let sql = format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM auditoriareserva
            WHERE LOWER(estado_anterior) LIKE $1 ESCAPE '\'
               OR LOWER(estado_nuevo) LIKE $1 ESCAPE '\'
            {NEWEST_FIRST}
            "#
        );
        let records = sqlx::query_as::<_, AuditEntry>(&sql)
            .bind(contains_pattern(text))
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn distinct_reservation_ids(&self) -> AppResult<Vec<i32>> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT DISTINCT id_reserva FROM auditoriareserva ORDER BY id_reserva",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn distinct_acting_user_ids(&self) -> AppResult<Vec<i32>> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT DISTINCT usuario_cambio FROM auditoriareserva ORDER BY usuario_cambio",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
