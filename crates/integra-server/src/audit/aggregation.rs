//! Outcome counters and time buckets over audit entries
//!
//! The pure functions here work on already-fetched entries; the async
//! wrappers pick the entries from a store first.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::models::{
    AuditEntry, AuditFilter, STATE_APPROVED, STATE_CANCELLED, STATE_PENDING, STATE_REJECTED,
};
use super::store::AuditStore;
use crate::error::{AppError, AppResult};

/// Entries changed on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    #[serde(rename = "fecha")]
    pub day: NaiveDate,
    #[serde(rename = "cantidad")]
    pub count: i64,
}

/// Counters of the statistics dashboard
///
/// The four named counters compare the new state against the fixed outcome
/// labels; any other label only counts toward `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total: i64,
    #[serde(rename = "aprobadas")]
    pub approved: i64,
    #[serde(rename = "canceladas")]
    pub cancelled: i64,
    #[serde(rename = "rechazadas")]
    pub rejected: i64,
    #[serde(rename = "pendientes")]
    pub pending: i64,
    /// Sparse, newest day first
    #[serde(rename = "porDia")]
    pub per_day: Vec<DayCount>,
}

/// The three counters shown on the audit list page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStatistics {
    #[serde(rename = "totalRegistros")]
    pub total: i64,
    #[serde(rename = "cambiosAprobacion")]
    pub approvals: i64,
    #[serde(rename = "cambiosCancelacion")]
    pub cancellations: i64,
}

/// `now` minus `days` whole days
pub fn days_before(now: NaiveDateTime, days: i64) -> AppResult<NaiveDateTime> {
    if days < 0 {
        return Err(AppError::validation(format!(
            "Day window cannot be negative: {}",
            days
        )));
    }
    TimeDelta::try_days(days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| AppError::validation(format!("Day window out of range: {}", days)))
}

/// `now` minus `months` calendar months
pub fn months_before(now: NaiveDateTime, months: u32) -> AppResult<NaiveDateTime> {
    now.checked_sub_months(Months::new(months))
        .ok_or_else(|| AppError::validation(format!("Month window out of range: {}", months)))
}

/// First and last representable instants of `year`
pub fn year_bounds(year: i32) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .and_then(|d| d.and_hms_micro_opt(23, 59, 59, 999_999));

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(AppError::validation(format!("Year out of range: {}", year))),
    }
}

/// Bucket entries changed within `[from, to]` by calendar day.
///
/// Days without changes are omitted. Newest day first.
pub fn per_day_counts(
    entries: &[AuditEntry],
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Vec<DayCount> {
    let mut buckets: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for entry in entries {
        if entry.changed_at >= from && entry.changed_at <= to {
            *buckets.entry(entry.changed_at.date()).or_default() += 1;
        }
    }

    buckets
        .into_iter()
        .rev()
        .map(|(day, count)| DayCount { day, count })
        .collect()
}

/// Count entries of `year` by month. Always twelve keys, `1..=12`.
pub fn monthly_counts(entries: &[AuditEntry], year: i32) -> BTreeMap<u32, i64> {
    let mut months: BTreeMap<u32, i64> = (1..=12).map(|month| (month, 0)).collect();
    for entry in entries.iter().filter(|e| e.changed_at.year() == year) {
        *months.entry(entry.changed_at.month()).or_default() += 1;
    }
    months
}

pub async fn summary_statistics(
    store: &dyn AuditStore,
    now: NaiveDateTime,
    window_days: i64,
) -> AppResult<SummaryStatistics> {
    let from = days_before(now, window_days)?;
    let window = store.find(&AuditFilter::between(from, now)).await?;

    Ok(SummaryStatistics {
        total: store.count_all().await?,
        approved: store.count_by_new_state(STATE_APPROVED).await?,
        cancelled: store.count_by_new_state(STATE_CANCELLED).await?,
        rejected: store.count_by_new_state(STATE_REJECTED).await?,
        pending: store.count_by_new_state(STATE_PENDING).await?,
        per_day: per_day_counts(&window, from, now),
    })
}

pub async fn overview_statistics(store: &dyn AuditStore) -> AppResult<OverviewStatistics> {
    Ok(OverviewStatistics {
        total: store.count_all().await?,
        approvals: store.count_by_new_state(STATE_APPROVED).await?,
        cancellations: store.count_by_new_state(STATE_CANCELLED).await?,
    })
}

pub async fn monthly_summary(store: &dyn AuditStore, year: i32) -> AppResult<BTreeMap<u32, i64>> {
    let (start, end) = year_bounds(year)?;
    let entries = store.find(&AuditFilter::between(start, end)).await?;
    Ok(monthly_counts(&entries, year))
}
