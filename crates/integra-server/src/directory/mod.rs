//! Read-only lookups into the reservation and user modules
//!
//! Audit entries reference reservations and users by id only. These
//! directories resolve the display data used to enrich entries; a missing
//! row is `None`, never an error.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppResult;

pub use memory::MemoryDirectory;
pub use postgres::PgDirectory;

/// Display data of one reservation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationSummary {
    /// `None` when the reservation has no space assigned
    pub space_name: Option<String>,
    /// `None` when the reservation has no requester
    pub requester_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub first_names: String,
    pub last_names: String,
}

impl UserSummary {
    pub fn new(first_names: impl Into<String>, last_names: impl Into<String>) -> Self {
        Self {
            first_names: first_names.into(),
            last_names: last_names.into(),
        }
    }

    /// `"<nombres> <apellidos>"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
    }
}

#[async_trait]
pub trait ReservationDirectory: Send + Sync {
    async fn find_reservation(&self, reservation_id: i32) -> AppResult<Option<ReservationSummary>>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, user_id: i32) -> AppResult<Option<UserSummary>>;
}
