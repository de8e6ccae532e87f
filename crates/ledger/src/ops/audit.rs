//! The review workflow operations.

use crate::audit::{AuditCursor, AuditState};
use crate::export;
use crate::records::{AuditResult, RecordSet, TransactionRecord};
use crate::{LedgerError, ResultLedger};

use super::Ledger;

/// A reviewer's decision for the record under review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditVerdict {
    Ok,
    Error,
    /// Leave the record unreviewed and move on; nothing is persisted.
    Skip,
}

/// Sets result and note on exactly the record at `index`. Skip never
/// reaches this function.
pub fn record_verdict(
    set: &mut RecordSet,
    index: usize,
    result: AuditResult,
    note: &str,
) -> ResultLedger<()> {
    if !set.audit_columns {
        return Err(LedgerError::AuditDisabled);
    }
    let record = set
        .records
        .get_mut(index)
        .ok_or_else(|| LedgerError::NotFound(format!("record #{index}")))?;
    record.audit_result = Some(result);
    record.audit_note = note.trim().to_string();
    Ok(())
}

impl Ledger {
    /// Current review state plus a copy of the record under review.
    pub fn audit_state(
        &self,
        cursor: &mut AuditCursor,
    ) -> ResultLedger<(AuditState, Option<TransactionRecord>)> {
        let set = self.load()?;
        if !set.audit_columns {
            return Err(LedgerError::AuditDisabled);
        }
        let state = cursor.state(&set);
        let current = match state {
            AuditState::Reviewing { index, .. } => set.records.get(index).cloned(),
            AuditState::Complete => None,
        };
        Ok((state, current))
    }

    /// Applies a verdict to the record under review and advances.
    ///
    /// `Ok`/`Error` persist result and note and re-scan; `Skip` only
    /// defers the position in memory, so the record stays unreviewed
    /// in the store.
    pub fn audit_verdict(
        &mut self,
        cursor: &mut AuditCursor,
        verdict: AuditVerdict,
        note: &str,
    ) -> ResultLedger<(AuditState, Option<TransactionRecord>)> {
        let mut set = self.load()?;
        if !set.audit_columns {
            return Err(LedgerError::AuditDisabled);
        }

        let Some(index) = cursor.next_position(&set) else {
            return Err(LedgerError::NotFound(
                "no record left to review".to_string(),
            ));
        };

        match verdict {
            AuditVerdict::Skip => cursor.defer(index),
            AuditVerdict::Ok => {
                record_verdict(&mut set, index, AuditResult::Ok, note)?;
                self.persist(&set)?;
            }
            AuditVerdict::Error => {
                record_verdict(&mut set, index, AuditResult::Error, note)?;
                self.persist(&set)?;
            }
        }

        let state = cursor.state(&set);
        let current = match state {
            AuditState::Reviewing { index, .. } => set.records.get(index).cloned(),
            AuditState::Complete => None,
        };
        Ok((state, current))
    }

    /// Archive export: the full current set as one CSV sheet.
    pub fn audit_archive(&self) -> ResultLedger<Vec<u8>> {
        export::to_csv(&self.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoneyCents;
    use crate::records::{Account, Status};

    fn unreviewed(party: &str) -> TransactionRecord {
        TransactionRecord {
            date: None,
            party: party.to_string(),
            income: MoneyCents::ZERO,
            expense: MoneyCents::new(1000),
            note: String::new(),
            account: Account::Bank,
            has_invoice: true,
            status: Status::Open,
            audit_result: None,
            audit_note: String::new(),
        }
    }

    #[test]
    fn verdict_sets_result_and_note() {
        let mut set = RecordSet {
            records: vec![unreviewed("a")],
            audit_columns: true,
        };
        record_verdict(&mut set, 0, AuditResult::Error, " Beleg fehlt ").unwrap();
        assert_eq!(set.records[0].audit_result, Some(AuditResult::Error));
        assert_eq!(set.records[0].audit_note, "Beleg fehlt");
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let mut set = RecordSet {
            records: vec![unreviewed("a")],
            audit_columns: true,
        };
        assert!(record_verdict(&mut set, 5, AuditResult::Ok, "").is_err());
    }

    #[test]
    fn disabled_audit_columns_are_rejected() {
        let mut set = RecordSet {
            records: vec![unreviewed("a")],
            audit_columns: false,
        };
        assert_eq!(
            record_verdict(&mut set, 0, AuditResult::Ok, ""),
            Err(LedgerError::AuditDisabled)
        );
    }
}
