use async_trait::async_trait;
use sqlx::PgPool;

use super::{CatalogDirectory, CatalogItem};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogDirectory for PgCatalog {
    async fn list_faculties(&self) -> AppResult<Vec<CatalogItem>> {
        let items = sqlx::query_as::<_, CatalogItem>(
            "SELECT id_facultad AS id, nombre AS label FROM facultad ORDER BY id_facultad",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn list_schools(&self, faculty_id: Option<i32>) -> AppResult<Vec<CatalogItem>> {
        let items = match faculty_id {
            Some(faculty_id) => {
                sqlx::query_as::<_, CatalogItem>(
                    r#"
                    SELECT id_escuela AS id, nombre AS label
                    FROM escuela
                    WHERE id_facultad = $1
                    ORDER BY id_escuela
                    "#,
                )
                .bind(faculty_id)
                .fetch_all(&self.pool)
                .await?
            },
            None => {
                sqlx::query_as::<_, CatalogItem>(
                    "SELECT id_escuela AS id, nombre AS label FROM escuela ORDER BY id_escuela",
                )
                .fetch_all(&self.pool)
                .await?
            },
        };
        Ok(items)
    }
}
