//! IntegraUPT Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Pieces shared by the IntegraUPT reporting services.
//!
//! - **Logging**: `tracing` subscriber setup driven by `LOG_*` variables
//! - **Clock**: wall-clock abstraction so timestamps can be pinned in tests
//!
//! # Example
//!
//! ```no_run
//! use integra_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod logging;

pub use clock::{Clock, ManualClock, SystemClock};
