//! Mapping between ledger types and wire DTOs.

use api_types::{AuditResult as ApiAuditResult, RecordView, Status as ApiStatus};
use ledger::{AuditResult, Status, TransactionRecord};

pub(crate) fn map_status(status: Status) -> ApiStatus {
    match status {
        Status::Open => ApiStatus::Open,
        Status::Done => ApiStatus::Done,
    }
}

pub(crate) fn map_status_back(status: ApiStatus) -> Status {
    match status {
        ApiStatus::Open => Status::Open,
        ApiStatus::Done => Status::Done,
    }
}

pub(crate) fn map_audit_result(result: AuditResult) -> ApiAuditResult {
    match result {
        AuditResult::Ok => ApiAuditResult::Ok,
        AuditResult::Error => ApiAuditResult::Error,
    }
}

pub(crate) fn map_record(position: usize, record: &TransactionRecord) -> RecordView {
    RecordView {
        position,
        date: record.date,
        party: record.party.clone(),
        income_cents: record.income.cents(),
        expense_cents: record.expense.cents(),
        note: record.note.clone(),
        account: record.account.as_str().to_string(),
        has_invoice: record.has_invoice,
        status: map_status(record.status),
        audit_result: record.audit_result.map(map_audit_result),
        audit_note: record.audit_note.clone(),
    }
}
