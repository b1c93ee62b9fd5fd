use crate::catalog::{CatalogDirectory, CatalogItem};
use crate::error::AppResult;

#[tracing::instrument(skip(catalog))]
pub async fn handle(catalog: &dyn CatalogDirectory) -> AppResult<Vec<CatalogItem>> {
    catalog.list_faculties().await
}
