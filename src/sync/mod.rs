//! Wallet synchronisation seam.
//!
//! Aggregations never look at where wallet candidates come from; they only
//! consume the list a [`WalletSource`] hands back.

use std::{thread, time::Duration as StdDuration};

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("wallet source `{0}` is unavailable")]
    Unavailable(String),
}

/// A spending candidate reported by a wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletTransaction {
    pub id: Uuid,
    pub date: NaiveDateTime,
    pub description: String,
    pub amount: i64,
}

pub trait WalletSource {
    fn name(&self) -> &str;

    /// Fetches the current candidate list. `now` anchors relative timestamps.
    fn fetch(&self, now: NaiveDateTime) -> Result<Vec<WalletTransaction>, SyncError>;
}

/// (description, amount, hours before `now`)
const MOCK_ENTRIES: [(&str, i64, i64); 4] = [
    ("Grab Food", 85_000, 3),
    ("Circle K", 32_000, 20),
    ("Highlands Coffee", 59_000, 30),
    ("Petrolimex", 120_000, 52),
];

/// Stand-in wallet that returns a fixed list after an optional delay.
#[derive(Debug, Clone, Default)]
pub struct MockWallet {
    latency: StdDuration,
}

impl MockWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: StdDuration) -> Self {
        Self { latency }
    }
}

impl WalletSource for MockWallet {
    fn name(&self) -> &str {
        "mock-wallet"
    }

    fn fetch(&self, now: NaiveDateTime) -> Result<Vec<WalletTransaction>, SyncError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        Ok(MOCK_ENTRIES
            .iter()
            .map(|(description, amount, hours_ago)| WalletTransaction {
                id: Uuid::new_v4(),
                date: now - Duration::hours(*hours_ago),
                description: (*description).to_string(),
                amount: *amount,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn mock_wallet_dates_entries_before_now() {
        let now = NaiveDate::from_ymd_opt(2024, 4, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let entries = MockWallet::new().fetch(now).unwrap();
        assert_eq!(entries.len(), MOCK_ENTRIES.len());
        assert!(entries.iter().all(|entry| entry.date < now && entry.amount > 0));
    }
}
