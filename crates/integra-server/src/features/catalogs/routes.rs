//! Catalog API routes
//!
//! - `GET /api/catalogos/facultades` - All faculties
//! - `GET /api/catalogos/escuelas?facultadId=` - Schools, optionally of one faculty

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::queries::{self, ListSchoolsQuery};
use crate::catalog::{CatalogDirectory, CatalogItem};
use crate::error::AppResult;

pub fn catalog_routes() -> Router<Arc<dyn CatalogDirectory>> {
    Router::new()
        .route("/facultades", get(list_faculties))
        .route("/escuelas", get(list_schools))
}

async fn list_faculties(
    State(catalog): State<Arc<dyn CatalogDirectory>>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    Ok(Json(queries::list_faculties::handle(catalog.as_ref()).await?))
}

async fn list_schools(
    State(catalog): State<Arc<dyn CatalogDirectory>>,
    query: Result<Query<ListSchoolsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<CatalogItem>>> {
    let Query(query) = query?;
    Ok(Json(queries::list_schools::handle(catalog.as_ref(), query).await?))
}
