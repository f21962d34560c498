//! Inventory expiration-status engine.
//!
//! Pure, deterministic classification of inventory records against an explicit
//! reference date. The reference date is always an argument, never read from a
//! system clock here, so identical inputs always yield identical results.

pub mod catalog;
pub mod classifier;

pub use classifier::{
    classify, classify_item, days_until_expiration, days_until_expiration_at, filter_by_status,
    StatusFilter, CRITICAL_WINDOW_DAYS, WARNING_WINDOW_DAYS,
};
