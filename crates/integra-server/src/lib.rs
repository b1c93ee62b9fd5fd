//! IntegraUPT reservation audit server
//!
//! HTTP reporting backend over the reservation audit trail of the
//! IntegraUPT space-reservation system.
//!
//! # Overview
//!
//! - **Audit trail**: one immutable entry per reservation state transition
//! - **Queries**: conjunctive filters, free-text search, recent changes
//! - **Aggregation**: outcome counters, per-day and per-month buckets
//! - **Enrichment**: space, requester and acting-user names resolved from
//!   the reservation and user modules
//! - **Catalogs**: faculty and school lookups
//!
//! # Architecture
//!
//! Feature slices under [`features`] split each concern into `commands/`
//! (writes) and `queries/` (reads). Storage sits behind the
//! [`audit::AuditStore`], [`directory`] and [`catalog::CatalogDirectory`]
//! traits, each with a PostgreSQL and an in-memory implementation selected
//! by [`config::StoreBackend`].
//!
//! Every handler failure becomes a bare `500 Internal Server Error`; see
//! [`error::AppError`].
//!
//! # Example
//!
//! ```no_run
//! use integra_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await
//! }
//! ```

pub mod api;
pub mod audit;
pub mod catalog;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod features;
pub mod middleware;
pub mod params;

pub use error::{AppError, AppResult};
