//! The open-payables list and the settle action.

use crate::records::{RecordSet, Status, TransactionRecord, require_text};
use crate::{LedgerError, ResultLedger};

use super::Ledger;

/// Marks every open record with exactly this party text as settled
/// and returns how many rows changed.
///
/// The books have no row identifier, so this is a batch update by a
/// non-unique free-text key: two unrelated open bookings that share
/// the party text are both closed by one call. That is the accepted
/// behavior of the sheet, not a bug to fix here. Records of the same
/// party that are already `Done` stay untouched, which also makes the
/// call idempotent.
pub fn close_matching(set: &mut RecordSet, party: &str) -> ResultLedger<usize> {
    let party = require_text(party, "Anlass/Person")?;

    let mut closed = 0;
    for record in &mut set.records {
        if record.party == party && record.status == Status::Open {
            record.status = Status::Done;
            closed += 1;
        }
    }

    if closed == 0 {
        return Err(LedgerError::NotFound(party));
    }
    Ok(closed)
}

impl Ledger {
    /// Open rows with a positive expense, with their sheet positions.
    pub fn payables(&self) -> ResultLedger<Vec<(usize, TransactionRecord)>> {
        let set = self.load()?;
        Ok(set
            .records
            .into_iter()
            .enumerate()
            .filter(|(_, r)| r.status == Status::Open && r.expense.is_positive())
            .collect())
    }

    /// One full cycle: load, close every open match, overwrite.
    pub fn close_party(&mut self, party: &str) -> ResultLedger<usize> {
        let mut set = self.load()?;
        let closed = close_matching(&mut set, party)?;
        self.persist(&set)?;
        tracing::info!(party, closed, "payments settled");
        Ok(closed)
    }
}
