//! Keyword search for the per-project profit/loss view.

use crate::records::{RecordSet, TransactionRecord, require_text};
use crate::{MoneyCents, ResultLedger};

use super::Ledger;

/// Case-insensitive substring match on party OR note. Returns the
/// matching positions and the net total (income − expense) over the
/// matches; a positive net is a surplus, a negative one a deficit.
/// An empty term is not a search and is rejected.
pub fn filter_by_keyword<'a>(
    set: &'a RecordSet,
    term: &str,
) -> ResultLedger<(Vec<(usize, &'a TransactionRecord)>, MoneyCents)> {
    let term = require_text(term, "search term")?.to_lowercase();

    let matches: Vec<(usize, &TransactionRecord)> = set
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.party.to_lowercase().contains(&term) || r.note.to_lowercase().contains(&term)
        })
        .collect();

    let net_total = matches.iter().map(|(_, r)| r.income - r.expense).sum();
    Ok((matches, net_total))
}

impl Ledger {
    /// Loads the books and filters by keyword.
    pub fn search(
        &self,
        term: &str,
    ) -> ResultLedger<(Vec<(usize, TransactionRecord)>, MoneyCents)> {
        let set = self.load()?;
        let (matches, net_total) = filter_by_keyword(&set, term)?;
        let owned = matches
            .into_iter()
            .map(|(position, record)| (position, record.clone()))
            .collect();
        Ok((owned, net_total))
    }
}
