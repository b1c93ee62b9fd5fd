//! Audit data models
//!
//! JSON field names follow the reservation front end (`idAudit`,
//! `estadoNuevo`, ...); Rust field names describe the data.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::params::empty_as_none;

// ============================================================================
// Outcome Vocabulary
// ============================================================================

/// Reservation approved
pub const STATE_APPROVED: &str = "Aprobada";
/// Reservation cancelled
pub const STATE_CANCELLED: &str = "Cancelado";
/// Reservation rejected
pub const STATE_REJECTED: &str = "Rechazada";
/// Reservation waiting for a decision
pub const STATE_PENDING: &str = "Pendiente";

/// Width of the state columns in `auditoriareserva`.
pub const MAX_STATE_LENGTH: usize = 50;

/// A stored reservation state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditEntry {
    #[serde(rename = "idAudit")]
    pub id: i32,
    #[serde(rename = "idReserva")]
    pub reservation_id: i32,
    /// Absent for the first transition of a reservation
    #[serde(rename = "estadoAnterior")]
    pub prior_state: Option<String>,
    #[serde(rename = "estadoNuevo")]
    pub new_state: String,
    /// Assigned by the server when the entry is appended
    #[serde(rename = "fechaCambio")]
    pub changed_at: NaiveDateTime,
    #[serde(rename = "usuarioCambio")]
    pub acting_user_id: i32,
}

/// A state change to record. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuditEntry {
    #[serde(rename = "idReserva")]
    pub reservation_id: i32,
    #[serde(rename = "estadoAnterior", default)]
    pub prior_state: Option<String>,
    #[serde(rename = "estadoNuevo")]
    pub new_state: String,
    #[serde(rename = "usuarioCambio")]
    pub acting_user_id: i32,
}

impl NewAuditEntry {
    pub fn new(
        reservation_id: i32,
        prior_state: Option<&str>,
        new_state: &str,
        acting_user_id: i32,
    ) -> Self {
        Self {
            reservation_id,
            prior_state: prior_state.map(str::to_string),
            new_state: new_state.to_string(),
            acting_user_id,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.new_state.trim().is_empty() {
            return Err(AppError::validation("New state is required"));
        }
        if self.new_state.chars().count() > MAX_STATE_LENGTH {
            return Err(AppError::validation(format!(
                "New state must be at most {} characters",
                MAX_STATE_LENGTH
            )));
        }
        if let Some(prior) = &self.prior_state {
            if prior.chars().count() > MAX_STATE_LENGTH {
                return Err(AppError::validation(format!(
                    "Prior state must be at most {} characters",
                    MAX_STATE_LENGTH
                )));
            }
        }
        Ok(())
    }
}

/// Optional predicates over audit entries, combined with AND.
///
/// The date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFilter {
    #[serde(rename = "idReserva", default, deserialize_with = "empty_as_none")]
    pub reservation_id: Option<i32>,
    #[serde(rename = "usuarioCambio", default, deserialize_with = "empty_as_none")]
    pub acting_user_id: Option<i32>,
    #[serde(rename = "estadoAnterior", default)]
    pub prior_state: Option<String>,
    #[serde(rename = "estadoNuevo", default)]
    pub new_state: Option<String>,
    #[serde(rename = "fechaInicio", default, deserialize_with = "empty_as_none")]
    pub from: Option<NaiveDateTime>,
    #[serde(rename = "fechaFin", default, deserialize_with = "empty_as_none")]
    pub to: Option<NaiveDateTime>,
}

impl AuditFilter {
    pub fn for_reservation(reservation_id: i32) -> Self {
        Self {
            reservation_id: Some(reservation_id),
            ..Default::default()
        }
    }

    pub fn since(from: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            ..Default::default()
        }
    }

    pub fn between(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `entry` satisfies every predicate that is set
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        self.reservation_id.map_or(true, |id| entry.reservation_id == id)
            && self.acting_user_id.map_or(true, |id| entry.acting_user_id == id)
            && self
                .prior_state
                .as_deref()
                .map_or(true, |state| entry.prior_state.as_deref() == Some(state))
            && self
                .new_state
                .as_deref()
                .map_or(true, |state| entry.new_state == state)
            && self.from.map_or(true, |from| entry.changed_at >= from)
            && self.to.map_or(true, |to| entry.changed_at <= to)
    }
}

/// An audit entry with display data from the reservation and user modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedAuditEntry {
    #[serde(flatten)]
    pub entry: AuditEntry,
    /// Full name of the acting user, or `"Usuario <id>"` when unknown
    #[serde(rename = "nombreUsuario")]
    pub acting_user_name: String,
    #[serde(rename = "espacioReserva")]
    pub space_name: Option<String>,
    #[serde(rename = "solicitanteReserva")]
    pub requester_name: Option<String>,
}
