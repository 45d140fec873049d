use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::core::services::ServiceResult;
use crate::core::session::Session;
use crate::sync::WalletSource;

pub struct SyncService;

impl SyncService {
    /// Replaces the session's wallet candidates with a fresh fetch from `source`.
    /// The session is left untouched when the fetch fails.
    pub fn sync(
        session: &mut Session,
        source: &dyn WalletSource,
        now: NaiveDateTime,
    ) -> ServiceResult<usize> {
        let fetched = source.fetch(now).map_err(|err| {
            warn!(source = source.name(), error = %err, "wallet sync failed");
            err
        })?;
        let count = fetched.len();
        session.wallet_transactions = fetched;
        info!(source = source.name(), count, "wallet synced");
        Ok(count)
    }

    /// Sum of the synced wallet candidates.
    pub fn wallet_total(session: &Session) -> i64 {
        session
            .wallet_transactions
            .iter()
            .fold(0i64, |total, entry| total.saturating_add(entry.amount))
    }
}
