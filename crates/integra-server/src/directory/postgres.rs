//! Lookups against the reservation module's tables
//!
//! `reserva`, `espacio` and `usuario` belong to other modules of the
//! application; this layer only reads them.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ReservationDirectory, ReservationSummary, UserDirectory, UserSummary};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    space_name: Option<String>,
    requester_id: Option<i32>,
    requester_first_names: Option<String>,
    requester_last_names: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    first_names: Option<String>,
    last_names: Option<String>,
}

impl From<UserRow> for UserSummary {
    fn from(row: UserRow) -> Self {
        UserSummary::new(
            row.first_names.unwrap_or_default(),
            row.last_names.unwrap_or_default(),
        )
    }
}

#[async_trait]
impl ReservationDirectory for PgDirectory {
    async fn find_reservation(&self, reservation_id: i32) -> AppResult<Option<ReservationSummary>> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT
                e.nombre AS space_name,
                u.id_usuario AS requester_id,
                u.nombres AS requester_first_names,
                u.apellidos AS requester_last_names
            FROM reserva r
            LEFT JOIN espacio e ON e.id_espacio = r.id_espacio
            LEFT JOIN usuario u ON u.id_usuario = r.id_usuario
            WHERE r.id_reserva = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| ReservationSummary {
            space_name: row.space_name,
            requester_name: row.requester_id.map(|_| {
                UserSummary::from(UserRow {
                    first_names: row.requester_first_names,
                    last_names: row.requester_last_names,
                })
                .full_name()
            }),
        }))
    }
}

#[async_trait]
impl UserDirectory for PgDirectory {
    async fn find_user(&self, user_id: i32) -> AppResult<Option<UserSummary>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT nombres AS first_names, apellidos AS last_names
            FROM usuario
            WHERE id_usuario = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserSummary::from))
    }
}
