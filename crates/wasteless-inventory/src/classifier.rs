use chrono::{DateTime, NaiveDate, Utc};

use wasteless_models::{ExpirationStatus, InventoryItem};

/// Items expiring within this many days are critical.
pub const CRITICAL_WINDOW_DAYS: i64 = 5;
/// Items expiring within this many days (but outside the critical window) are a warning.
pub const WARNING_WINDOW_DAYS: i64 = 14;

/// Signed whole-day count from `reference` to `expiration`.
///
/// Negative means the item is already expired. Calendar dates carry no
/// sub-day component, so the difference is exact.
pub fn days_until_expiration(expiration: NaiveDate, reference: NaiveDate) -> i64 {
    expiration.signed_duration_since(reference).num_days()
}

/// Instant-based variant with ceiling semantics: an expiration a few hours
/// away still counts as 0 days remaining, not -1. Fractional days round
/// toward the later whole day.
pub fn days_until_expiration_at(expiration: DateTime<Utc>, reference: DateTime<Utc>) -> i64 {
    let seconds = expiration.signed_duration_since(reference).num_seconds();
    seconds.div_euclid(86_400) + if seconds.rem_euclid(86_400) > 0 { 1 } else { 0 }
}

/// Classify an expiration date against a reference date.
///
/// Thresholds are evaluated in fixed priority order: negative remaining days
/// is expired, then the critical window, then the warning window, then good.
pub fn classify(expiration: NaiveDate, reference: NaiveDate) -> ExpirationStatus {
    let days = days_until_expiration(expiration, reference);
    if days < 0 {
        ExpirationStatus::Expired
    } else if days <= CRITICAL_WINDOW_DAYS {
        ExpirationStatus::Critical
    } else if days <= WARNING_WINDOW_DAYS {
        ExpirationStatus::Warning
    } else {
        ExpirationStatus::Good
    }
}

/// Convenience wrapper over [`classify`] for a full record.
pub fn classify_item(item: &InventoryItem, reference: NaiveDate) -> ExpirationStatus {
    classify(item.expiration_date, reference)
}

/// Filter selection for the inventory view: everything, or one status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ExpirationStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "good" => Ok(StatusFilter::Only(ExpirationStatus::Good)),
            "warning" => Ok(StatusFilter::Only(ExpirationStatus::Warning)),
            "critical" => Ok(StatusFilter::Only(ExpirationStatus::Critical)),
            "expired" => Ok(StatusFilter::Only(ExpirationStatus::Expired)),
            other => Err(format!(
                "unknown status filter '{}' (expected all, good, warning, critical or expired)",
                other
            )),
        }
    }
}

/// Select the items whose derived status matches the filter.
///
/// `All` returns every item. Source order is preserved in both cases; the
/// result is a stable subsequence of the input, never re-sorted.
pub fn filter_by_status<'a>(
    items: &'a [InventoryItem],
    filter: StatusFilter,
    reference: NaiveDate,
) -> Vec<&'a InventoryItem> {
    match filter {
        StatusFilter::All => items.iter().collect(),
        StatusFilter::Only(status) => items
            .iter()
            .filter(|item| classify_item(item, reference) == status)
            .collect(),
    }
}
