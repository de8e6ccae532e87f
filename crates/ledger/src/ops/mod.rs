use crate::records::RecordSet;
use crate::store::TableStore;
use crate::{LedgerError, ResultLedger};

mod audit;
mod entries;
mod payables;
mod search;
mod summary;

pub use audit::{AuditVerdict, record_verdict};
pub use entries::append;
pub use payables::close_matching;
pub use search::filter_by_keyword;
pub use summary::{OpenItems, Summary, summarize};

/// The ledger: every dashboard operation is a synchronous
/// read-modify-write cycle against the table store behind it. Nothing
/// is cached across operations; each call re-fetches the full table
/// so a concurrent edit in the sheet is picked up on the next action.
pub struct Ledger {
    store: Box<dyn TableStore>,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").finish_non_exhaustive()
    }
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Fetches and normalizes the full table.
    pub fn load(&self) -> ResultLedger<RecordSet> {
        let rows = self.store.fetch_all()?;
        Ok(RecordSet::from_rows(&rows))
    }

    /// Overwrites the external table with the full set.
    pub(crate) fn persist(&mut self, set: &RecordSet) -> ResultLedger<()> {
        self.store.replace_all(&set.to_rows())
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    store: Option<Box<dyn TableStore>>,
}

impl LedgerBuilder {
    /// Pass the required table store.
    pub fn store(mut self, store: impl TableStore + 'static) -> LedgerBuilder {
        self.store = Some(Box::new(store));
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> ResultLedger<Ledger> {
        let store = self
            .store
            .ok_or_else(|| LedgerError::Validation("a table store is required".to_string()))?;
        Ok(Ledger { store })
    }
}
