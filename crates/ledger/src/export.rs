//! Archive export at audit completion: the full record set as one
//! flat CSV sheet, header row plus one row per record, in the same
//! positional contract as the store.

use crate::records::RecordSet;
use crate::{LedgerError, ResultLedger};

pub fn to_csv(set: &RecordSet) -> ResultLedger<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in set.to_rows() {
        writer
            .write_record(&row)
            .map_err(|err| LedgerError::Write(err.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|err| LedgerError::Write(err.to_string()))
}
