//! Turns raw sheet rows into a typed [`RecordSet`].
//!
//! The normalizer is deliberately forgiving: a single bad cell never
//! fails the load. Unparseable dates become `None`, unparseable
//! amounts become zero, unknown status text reads as settled. Only a
//! wholesale failure to obtain the table at all surfaces, and that
//! happens in the store, not here.

use chrono::NaiveDate;

use crate::records::{
    AUDIT_HEADER, Account, AuditResult, BASE_HEADER, RecordSet, Status, TransactionRecord,
    parse_invoice_cell,
};
use crate::MoneyCents;

/// Accepted date shapes, day-first precedence. ISO is a fallback for
/// rows appended by tooling rather than by hand.
const DATE_FORMATS: [&str; 4] = ["%d.%m.%Y", "%d.%m.%y", "%d/%m/%Y", "%Y-%m-%d"];

pub(crate) fn parse_date_cell(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

impl RecordSet {
    /// Builds a record set from raw rows, header first.
    ///
    /// Rows that are empty across all columns are dropped. The audit
    /// feature is enabled when the header carries the two trailing
    /// audit columns; an entirely empty table counts as freshly
    /// created and gets the full shape.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let Some((header, data)) = rows.split_first() else {
            return Self::empty();
        };

        let audit_columns = header.len() >= BASE_HEADER.len() + AUDIT_HEADER.len();
        let mut records = Vec::with_capacity(data.len());

        for row in data {
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            records.push(TransactionRecord {
                date: parse_date_cell(cell(row, 0)),
                party: cell(row, 1).trim().to_string(),
                income: MoneyCents::parse_cell(cell(row, 2)),
                expense: MoneyCents::parse_cell(cell(row, 3)),
                note: cell(row, 4).trim().to_string(),
                account: Account::parse_cell(cell(row, 5)),
                has_invoice: parse_invoice_cell(cell(row, 6)),
                status: Status::parse_cell(cell(row, 7)),
                audit_result: if audit_columns {
                    AuditResult::parse_cell(cell(row, 8))
                } else {
                    None
                },
                audit_note: if audit_columns {
                    cell(row, 9).trim().to_string()
                } else {
                    String::new()
                },
            });
        }

        Self {
            records,
            audit_columns,
        }
    }
}
