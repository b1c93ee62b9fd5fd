use async_trait::async_trait;
use std::collections::HashMap;

use super::{ReservationDirectory, ReservationSummary, UserDirectory, UserSummary};
use crate::error::AppResult;

/// Fixed lookup tables, filled once at construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    reservations: HashMap<i32, ReservationSummary>,
    users: HashMap<i32, UserSummary>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reservation(
        mut self,
        reservation_id: i32,
        space_name: Option<&str>,
        requester_name: Option<&str>,
    ) -> Self {
        self.reservations.insert(
            reservation_id,
            ReservationSummary {
                space_name: space_name.map(str::to_string),
                requester_name: requester_name.map(str::to_string),
            },
        );
        self
    }

    pub fn with_user(mut self, user_id: i32, first_names: &str, last_names: &str) -> Self {
        self.users
            .insert(user_id, UserSummary::new(first_names, last_names));
        self
    }
}

#[async_trait]
impl ReservationDirectory for MemoryDirectory {
    async fn find_reservation(&self, reservation_id: i32) -> AppResult<Option<ReservationSummary>> {
        Ok(self.reservations.get(&reservation_id).cloned())
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_user(&self, user_id: i32) -> AppResult<Option<UserSummary>> {
        Ok(self.users.get(&user_id).cloned())
    }
}
