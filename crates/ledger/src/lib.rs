pub use audit::{AuditCursor, AuditState};
pub use error::LedgerError;
pub use money::MoneyCents;
pub use ops::{AuditVerdict, Ledger, OpenItems, Summary, summarize};
pub use records::{
    Account, AuditResult, EntryKind, NewEntry, RecordSet, Status, TransactionRecord,
};
pub use store::{CsvTableStore, MemoryTableStore, TableStore};

mod audit;
pub mod document;
mod error;
mod export;
mod money;
mod normalize;
pub mod ops;
mod records;
mod store;

type ResultLedger<T> = Result<T, LedgerError>;
