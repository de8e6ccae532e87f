//! The sequential audit cursor.
//!
//! The review workflow is a linear walk over unreviewed rows: pick
//! the first record without a verdict, judge it, re-scan. "Skip" must
//! not persist anything, so a pure re-scan would present the same
//! record forever. The cursor therefore layers an in-memory deferred
//! set on top of the re-scan: skipped positions are passed over until
//! everything else has been seen, then the set resets and the skipped
//! records come around again. The set lives only for the session and
//! is never written to the store.

use std::collections::HashSet;

use crate::records::RecordSet;

/// State of the review screen, computed fresh from the record set on
/// every entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditState {
    Reviewing {
        /// Position of the record currently under review.
        index: usize,
        /// Unreviewed records left, the current one included.
        remaining: usize,
        /// Positions skipped so far this session.
        deferred: usize,
    },
    /// Nothing left to review; the only remaining action is the
    /// archive export.
    Complete,
}

#[derive(Debug, Default)]
pub struct AuditCursor {
    deferred: HashSet<usize>,
}

impl AuditCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// First unreviewed, non-deferred position in ingestion order.
    ///
    /// When every unreviewed record has been deferred the deferred
    /// set is cleared and the scan starts over, so skipping never
    /// fakes completion.
    pub fn next_position(&mut self, set: &RecordSet) -> Option<usize> {
        if let Some(index) = self.scan(set) {
            return Some(index);
        }
        if set.records.iter().any(|r| r.is_unreviewed()) {
            self.deferred.clear();
            return self.scan(set);
        }
        None
    }

    /// Marks the position as skipped for the rest of the session.
    pub fn defer(&mut self, index: usize) {
        self.deferred.insert(index);
    }

    /// Current state plus the position under review, if any.
    pub fn state(&mut self, set: &RecordSet) -> AuditState {
        match self.next_position(set) {
            Some(index) => AuditState::Reviewing {
                index,
                remaining: set.records.iter().filter(|r| r.is_unreviewed()).count(),
                deferred: self.deferred.len(),
            },
            None => AuditState::Complete,
        }
    }

    fn scan(&self, set: &RecordSet) -> Option<usize> {
        set.records
            .iter()
            .enumerate()
            .find(|(index, record)| record.is_unreviewed() && !self.deferred.contains(index))
            .map(|(index, _)| index)
    }
}
