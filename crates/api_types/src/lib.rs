use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Settlement status as it travels over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    Done,
}

/// One ledger row as presented to clients.
///
/// `position` is the row's offset in the sheet — the only identity a
/// record has. Amounts are integer cents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordView {
    pub position: usize,
    pub date: Option<NaiveDate>,
    pub party: String,
    pub income_cents: i64,
    pub expense_cents: i64,
    pub note: String,
    pub account: String,
    pub has_invoice: bool,
    pub status: Status,
    pub audit_result: Option<AuditResult>,
    pub audit_note: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditResult {
    Ok,
    Error,
}

pub mod summary {
    use super::*;

    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct OpenItemsView {
        pub count: usize,
        pub total_cents: i64,
    }

    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct SummaryResponse {
        pub available_budget_cents: i64,
        pub real_balance_cents: i64,
        /// Open rows with a positive expense.
        pub open_expenses: OpenItemsView,
        /// Open rows with either amount pending (alternate definition
        /// kept alongside the classic one).
        pub open_any: OpenItemsView,
    }
}

pub mod journal {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct JournalResponse {
        /// Most-recent-first (descending sheet position).
        pub records: Vec<RecordView>,
    }
}

pub mod entries {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum EntryKind {
        Income,
        Expense,
    }

    /// A new booking from the entry form. `amount` is a decimal
    /// string ("12,50" and "12.50" both work); the server parses it
    /// strictly.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub date: Option<NaiveDate>,
        pub party: String,
        pub kind: EntryKind,
        pub amount: String,
        #[serde(default)]
        pub note: String,
        /// Account name ("Bank", "Handkassa", "Minikonto" or free
        /// text); omitted means "Bank".
        pub account: Option<String>,
        #[serde(default)]
        pub has_invoice: bool,
        /// Omitted: defaults by account (Bank → open, else done).
        pub status: Option<Status>,
    }

    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct EntryCreated {
        pub position: usize,
    }
}

pub mod payables {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct PayablesResponse {
        pub items: Vec<RecordView>,
    }

    /// Settle every open booking with exactly this party text. There
    /// is no row id; duplicate names are all closed together.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct CloseRequest {
        pub party: String,
    }

    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct CloseResponse {
        pub closed: usize,
    }
}

pub mod audit {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Verdict {
        Ok,
        Error,
        Skip,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct VerdictRequest {
        pub verdict: Verdict,
        #[serde(default)]
        pub note: String,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AuditPhase {
        Reviewing,
        Complete,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct AuditStateResponse {
        pub phase: AuditPhase,
        pub current: Option<RecordView>,
        /// Unreviewed records left, the current one included.
        pub remaining: usize,
        /// Positions skipped so far this session.
        pub deferred: usize,
    }
}

pub mod search {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SearchQuery {
        pub term: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SearchResponse {
        pub matches: Vec<RecordView>,
        /// Income minus expense over the matches; negative = deficit.
        pub net_total_cents: i64,
    }
}

pub mod documents {
    use super::*;

    /// Fields of the funding-request template.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct FundingRequestNew {
        pub project_name: String,
        pub period: String,
        /// Decimal string, parsed like an entry amount.
        pub total_cost: String,
        pub applicant: String,
    }
}
