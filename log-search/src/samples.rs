//! Sample log entries simulating a few microservices.

use chrono::{DateTime, Utc};
use log_search_shared::LogEntry;

/// The entries indexed by a default run, all stamped with `timestamp`.
pub fn sample_entries(timestamp: DateTime<Utc>) -> Vec<LogEntry> {
    vec![
        LogEntry::info("auth-service", "User logged in successfully", timestamp),
        LogEntry::error("auth-service", "Failed to authenticate user", timestamp),
        LogEntry::info("order-service", "Order placed successfully", timestamp),
        LogEntry::error("order-service", "Failed to process order payment", timestamp),
        LogEntry::info("inventory-service", "Inventory updated", timestamp),
        LogEntry::warn("inventory-service", "Inventory low for product 1234", timestamp),
    ]
}
