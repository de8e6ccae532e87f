//! Appending new bookings.

use crate::records::{EntryKind, NewEntry, RecordSet, Status, TransactionRecord, require_text};
use crate::{LedgerError, MoneyCents, ResultLedger};

use super::Ledger;

/// Builds one record from a validated entry and appends it, leaving
/// every prior record untouched. Rejects an empty party and a
/// non-positive amount without mutating the set.
pub fn append(set: &mut RecordSet, entry: NewEntry) -> ResultLedger<usize> {
    let party = require_text(&entry.party, "Anlass/Person")?;
    if !entry.amount.is_positive() {
        return Err(LedgerError::Validation(
            "amount must be greater than zero".to_string(),
        ));
    }

    let (income, expense) = match entry.kind {
        EntryKind::Income => (entry.amount, MoneyCents::ZERO),
        EntryKind::Expense => (MoneyCents::ZERO, entry.amount),
    };
    let status = entry
        .status
        .unwrap_or_else(|| Status::default_for(&entry.account));

    set.records.push(TransactionRecord {
        date: entry.date,
        party,
        income,
        expense,
        note: entry.note.trim().to_string(),
        account: entry.account,
        has_invoice: entry.has_invoice,
        status,
        audit_result: None,
        audit_note: String::new(),
    });

    Ok(set.len() - 1)
}

impl Ledger {
    /// One full cycle: load, append, overwrite. Returns the position
    /// of the new record.
    pub fn add_entry(&mut self, entry: NewEntry) -> ResultLedger<usize> {
        let mut set = self.load()?;
        let position = append(&mut set, entry)?;
        self.persist(&set)?;
        tracing::info!(position, "booking appended");
        Ok(position)
    }
}
