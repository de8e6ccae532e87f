//! The three headline figures of the dashboard.

use crate::MoneyCents;
use crate::ResultLedger;
use crate::records::{RecordSet, Status, TransactionRecord};

use super::Ledger;

/// Count and pending total of one open-items definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenItems {
    pub count: usize,
    /// Sum of the expense side of the matching rows — the money that
    /// still has to leave the account.
    pub total: MoneyCents,
}

/// Aggregates over one record set.
///
/// `available_budget` and `real_balance` are deliberately different
/// aggregates over the same data: the budget nets **every** committed
/// booking, the real balance only those that have settled
/// (`Status::Done`). Collapsing the two would break the whole point
/// of the cockpit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Net of all committed income and expense, regardless of status.
    pub available_budget: MoneyCents,
    /// Net of settled records only — what actually sits on the
    /// account.
    pub real_balance: MoneyCents,
    /// Open rows with a positive expense (the classic payables list).
    pub open_expenses: OpenItems,
    /// Open rows with either amount pending. The books switched
    /// between the two definitions over time, so both are computed
    /// and the presentation picks one.
    pub open_any: OpenItems,
}

/// Computes the summary. Tolerates an empty set (all zeros) and never
/// assumes a record has only one amount populated — raw data can
/// carry both, and both still sum correctly.
pub fn summarize(set: &RecordSet) -> Summary {
    let mut summary = Summary::default();

    for record in &set.records {
        let delta = record.income - record.expense;
        summary.available_budget += delta;
        if record.status == Status::Done {
            summary.real_balance += delta;
        }
        if record.status == Status::Open {
            if record.expense.is_positive() {
                summary.open_expenses.count += 1;
                summary.open_expenses.total += record.expense;
            }
            if record.expense.is_positive() || record.income.is_positive() {
                summary.open_any.count += 1;
                summary.open_any.total += record.expense;
            }
        }
    }

    summary
}

impl Ledger {
    /// Loads the books and computes the headline figures.
    pub fn summary(&self) -> ResultLedger<Summary> {
        Ok(summarize(&self.load()?))
    }

    /// The full journal in ingestion order. Display layers re-sort
    /// (most-recent-first) on their side; the stable order here is
    /// what makes that deterministic.
    pub fn journal(&self) -> ResultLedger<RecordSet> {
        self.load()
    }
}
