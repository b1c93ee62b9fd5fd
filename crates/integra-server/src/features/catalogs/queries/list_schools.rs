use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogDirectory, CatalogItem};
use crate::error::AppResult;
use crate::params::empty_as_none;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSchoolsQuery {
    /// Restrict to one faculty; all schools when absent
    #[serde(rename = "facultadId", default, deserialize_with = "empty_as_none")]
    pub faculty_id: Option<i32>,
}

#[tracing::instrument(skip(catalog))]
pub async fn handle(
    catalog: &dyn CatalogDirectory,
    query: ListSchoolsQuery,
) -> AppResult<Vec<CatalogItem>> {
    catalog.list_schools(query.faculty_id).await
}
