//! Faculty and school catalogs
//!
//! Reference data owned by the academic module; read here for the
//! reservation front end's selectors.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub use memory::MemoryCatalog;
pub use postgres::PgCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CatalogItem {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub label: String,
}

impl CatalogItem {
    pub fn new(id: i32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Both listings are ordered by id.
#[async_trait]
pub trait CatalogDirectory: Send + Sync {
    async fn list_faculties(&self) -> AppResult<Vec<CatalogItem>>;

    /// Schools of one faculty, or every school when `faculty_id` is `None`
    async fn list_schools(&self, faculty_id: Option<i32>) -> AppResult<Vec<CatalogItem>>;
}
