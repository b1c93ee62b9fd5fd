//! Shared fixtures for the router-level tests
//!
//! Every [`TestApp`] runs on the in-memory backends with a manual clock, so
//! tests control timestamps exactly and need no database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use integra_common::ManualClock;
use integra_server::{
    api,
    audit::{AuditEntry, AuditStore, NewAuditEntry},
    catalog::MemoryCatalog,
    config::{AuditConfig, Config, StoreBackend},
    directory::MemoryDirectory,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const BASE: &str = "/api/auditoria-reservas";

/// Local date-time shorthand
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// 2024-06-15 10:00, the clock's starting point
pub fn start() -> NaiveDateTime {
    at(2024, 6, 15, 10, 0)
}

/// Reservation 5 is fully linked, reservation 6 has no space, user 3 exists.
pub fn directory() -> MemoryDirectory {
    MemoryDirectory::new()
        .with_reservation(5, Some("Auditorio Central"), Some("Luis Mamani"))
        .with_reservation(6, None, Some("Rosa Condori"))
        .with_user(3, "Ana", "Quispe")
}

pub fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_faculty(1, "Facultad de Derecho")
        .with_faculty(2, "Facultad de Ingeniería")
        .with_school(11, "Derecho", 1)
        .with_school(21, "Ingeniería de Sistemas", 2)
        .with_school(22, "Ingeniería Civil", 2)
}

pub struct TestApp {
    pub router: Router,
    pub clock: Arc<ManualClock>,
    pub store: Arc<dyn AuditStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(AuditConfig::default())
    }

    pub fn with_settings(settings: AuditConfig) -> Self {
        let clock = Arc::new(ManualClock::new(start()));
        let state = api::memory_state(clock.clone(), settings, directory(), catalog());
        let store = state.audit.store.clone();

        let mut config = Config::default();
        config.audit.backend = StoreBackend::Memory;

        Self {
            router: api::create_router(state, &config),
            clock,
            store,
        }
    }

    /// Append directly through the store at the clock's current time
    pub async fn record(
        &self,
        reservation_id: i32,
        prior_state: Option<&str>,
        new_state: &str,
        acting_user_id: i32,
    ) -> AuditEntry {
        self.store
            .append(NewAuditEntry::new(
                reservation_id,
                prior_state,
                new_state,
                acting_user_id,
            ))
            .await
            .unwrap()
    }

    /// Append at an absolute instant
    pub async fn record_at(
        &self,
        when: NaiveDateTime,
        reservation_id: i32,
        new_state: &str,
    ) -> AuditEntry {
        self.clock.set(when);
        self.record(reservation_id, None, new_state, 3).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, parse(&body))
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, String) {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self
            .send(
                Request::builder()
                    .uri(uri)
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;
        (status, parse(&body))
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

/// `Value::Null` for an empty body
pub fn parse(body: &str) -> Value {
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body).unwrap()
    }
}

/// Audit ids of a JSON array of entries, in response order
pub fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["idAudit"].as_i64().unwrap())
        .collect()
}
