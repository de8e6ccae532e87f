//! Record primitives.
//!
//! A `TransactionRecord` is one row of the club's books. Row identity
//! is positional: a record is "the n-th row of the sheet" and nothing
//! else, because the external table carries no key column.

use chrono::NaiveDate;

use crate::{LedgerError, MoneyCents, ResultLedger};

/// Date format written back to the sheet (day first, as entered by
/// hand in the original books).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Settlement status of a record.
///
/// `Open` means committed but not yet flowed (a transfer still to be
/// made); `Done` means the money actually moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    Open,
    #[default]
    Done,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Offen",
            Self::Done => "Erledigt",
        }
    }

    /// Lenient cell parser. Only the exact open marker yields `Open`;
    /// anything else reads as settled, so a garbled cell can never
    /// resurface as an open payable.
    pub fn parse_cell(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("offen") {
            Self::Open
        } else {
            Self::Done
        }
    }

    /// Data-entry default: bank bookings usually wait for a transfer,
    /// cash box and sub-account bookings settle on the spot. This is
    /// a form default only; status stays freely mutable afterwards.
    pub fn default_for(account: &Account) -> Self {
        match account {
            Account::Bank => Self::Open,
            _ => Self::Done,
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Offen" => Ok(Self::Open),
            "Erledigt" => Ok(Self::Done),
            other => Err(LedgerError::Validation(format!(
                "invalid status: {other}"
            ))),
        }
    }
}

/// Account a record is booked against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Account {
    #[default]
    Bank,
    CashBox,
    SubAccount,
    Other(String),
}

impl Account {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bank => "Bank",
            Self::CashBox => "Handkassa",
            Self::SubAccount => "Minikonto",
            Self::Other(name) => name,
        }
    }

    pub fn parse_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "Bank" => Self::Bank,
            "Handkassa" => Self::CashBox,
            "Minikonto" => Self::SubAccount,
            "" => Self::Bank,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Reviewer's verdict recorded against one transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditResult {
    Ok,
    Error,
}

impl AuditResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Error => "Fehler",
        }
    }

    /// Lenient cell parser; anything unrecognized counts as "not yet
    /// reviewed" so the audit cursor will pick the row up again.
    pub fn parse_cell(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("ok") {
            Some(Self::Ok)
        } else if trimmed.eq_ignore_ascii_case("fehler") || trimmed.eq_ignore_ascii_case("error") {
            Some(Self::Error)
        } else {
            None
        }
    }
}

/// Direction of a new booking. Exactly one of the two amount columns
/// is populated from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

/// One row of the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRecord {
    /// `None` when the sheet cell could not be parsed as a date; the
    /// record is kept and displayed as unknown.
    pub date: Option<NaiveDate>,
    /// Person or occasion the booking belongs to (free text, the only
    /// "key" the books have).
    pub party: String,
    pub income: MoneyCents,
    pub expense: MoneyCents,
    pub note: String,
    pub account: Account,
    pub has_invoice: bool,
    pub status: Status,
    pub audit_result: Option<AuditResult>,
    pub audit_note: String,
}

impl TransactionRecord {
    /// `true` when nobody has recorded a verdict yet.
    pub fn is_unreviewed(&self) -> bool {
        self.audit_result.is_none()
    }

    fn to_row(&self, audit_columns: bool) -> Vec<String> {
        let mut row = vec![
            self.date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            self.party.clone(),
            self.income.to_decimal_string(),
            self.expense.to_decimal_string(),
            self.note.clone(),
            self.account.as_str().to_string(),
            if self.has_invoice { "Ja" } else { "Nein" }.to_string(),
            self.status.as_str().to_string(),
        ];
        if audit_columns {
            row.push(
                self.audit_result
                    .map(|r| r.as_str().to_string())
                    .unwrap_or_default(),
            );
            row.push(self.audit_note.clone());
        }
        row
    }
}

/// Validated input for one new booking, as delivered by the entry
/// form. Building and validating the record itself happens in
/// [`crate::ops`].
#[derive(Clone, Debug)]
pub struct NewEntry {
    pub date: Option<NaiveDate>,
    pub party: String,
    pub kind: EntryKind,
    pub amount: MoneyCents,
    pub note: String,
    pub account: Account,
    pub has_invoice: bool,
    /// `None` falls back to [`Status::default_for`] the account.
    pub status: Option<Status>,
}

/// The complete in-memory record collection for one load cycle.
///
/// `audit_columns` tracks whether the sheet carries the two optional
/// audit columns; without them the audit workflow is disabled and
/// writes preserve the narrower eight-column shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSet {
    pub records: Vec<TransactionRecord>,
    pub audit_columns: bool,
}

/// Positional column contract of the external table.
pub const BASE_HEADER: [&str; 8] = [
    "Datum",
    "Anlass_Person",
    "Einnahme",
    "Ausgabe",
    "Bemerkung",
    "Konto",
    "Rechnung_Vorhanden",
    "Status",
];

/// Optional trailing audit columns (additive across sheet revisions).
pub const AUDIT_HEADER: [&str; 2] = ["Pruefung", "Pruefvermerk"];

impl RecordSet {
    /// An empty set with audit columns enabled — the shape we write
    /// when starting a fresh sheet that we own.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            audit_columns: true,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the full set back to the positional row contract,
    /// header included. Every persist overwrites the table wholesale;
    /// there is no row-level write.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let mut header: Vec<String> = BASE_HEADER.iter().map(ToString::to_string).collect();
        if self.audit_columns {
            header.extend(AUDIT_HEADER.iter().map(ToString::to_string));
        }

        let mut rows = Vec::with_capacity(self.records.len() + 1);
        rows.push(header);
        for record in &self.records {
            rows.push(record.to_row(self.audit_columns));
        }
        rows
    }
}

pub(crate) fn parse_invoice_cell(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.eq_ignore_ascii_case("ja")
        || trimmed.eq_ignore_ascii_case("yes")
        || trimmed.eq_ignore_ascii_case("true")
}

pub(crate) fn require_text(value: &str, label: &str) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}
