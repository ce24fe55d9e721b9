//! Best-effort persistence of completed sessions.

use log::warn;

use crate::record::SessionRecord;
use crate::store::{LifetimeStats, SessionStore};

/// Hand a finalized record to the persistence collaborator.
///
/// Appends the session record, then read-modify-writes the owner's lifetime
/// sales counters. The read-modify-write is not atomic and the whole call is
/// fire-and-forget relative to gameplay: every failure is logged and
/// swallowed, nothing is rolled back, and the caller keeps playing. The
/// record carries its own session id, so a late write can never be confused
/// with a newer session.
pub fn persist_session(record: &SessionRecord, store: &mut dyn SessionStore) {
    if let Err(e) = store.append_session(record) {
        warn!(
            "failed to persist session {} for {}: {e}",
            record.session_id, record.owner_id
        );
    }

    let current = match store.lifetime(&record.owner_id) {
        Ok(stats) => stats,
        Err(e) => {
            warn!(
                "failed to read lifetime counters for {}: {e}",
                record.owner_id
            );
            return;
        }
    };
    let updated = LifetimeStats {
        number_of_sales: current.number_of_sales + i64::from(record.sales_count),
        total_sales: current.total_sales + record.total_sales,
    };
    if let Err(e) = store.put_lifetime(&record.owner_id, updated) {
        warn!(
            "failed to update lifetime counters for {}: {e}",
            record.owner_id
        );
    }
}
