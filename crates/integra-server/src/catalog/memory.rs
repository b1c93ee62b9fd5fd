use async_trait::async_trait;

use super::{CatalogDirectory, CatalogItem};
use crate::error::AppResult;

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    faculties: Vec<CatalogItem>,
    /// School paired with the id of its faculty
    schools: Vec<(i32, CatalogItem)>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faculty(mut self, id: i32, label: &str) -> Self {
        self.faculties.push(CatalogItem::new(id, label));
        self.faculties.sort_by_key(|item| item.id);
        self
    }

    pub fn with_school(mut self, id: i32, label: &str, faculty_id: i32) -> Self {
        self.schools.push((faculty_id, CatalogItem::new(id, label)));
        self.schools.sort_by_key(|(_, item)| item.id);
        self
    }
}

#[async_trait]
impl CatalogDirectory for MemoryCatalog {
    async fn list_faculties(&self) -> AppResult<Vec<CatalogItem>> {
        Ok(self.faculties.clone())
    }

    async fn list_schools(&self, faculty_id: Option<i32>) -> AppResult<Vec<CatalogItem>> {
        Ok(self
            .schools
            .iter()
            .filter(|(faculty, _)| faculty_id.map_or(true, |id| *faculty == id))
            .map(|(_, item)| item.clone())
            .collect())
    }
}
