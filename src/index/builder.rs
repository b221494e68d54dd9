use std::io::BufRead;

use tracing::debug;

use crate::core::error::PairError;
use crate::core::key::normalize_header;
use crate::core::types::PairingConfig;
use crate::index::table::HashIndex;
use crate::parsing::fastq::{check_truncation, FastqReader, RawRecord};

/// Index every record of the left file by its normalized read name.
///
/// The reader must be positioned at the start of the file. Each entry stores
/// the byte offset of its record's header line so the record can be read
/// again later without holding its contents in memory.
///
/// # Errors
///
/// Returns `PairError::Allocation` if the index cannot be allocated or grown,
/// `PairError::TruncatedRecord` for a short trailing record under the strict
/// policy, or any read error from the underlying stream.
pub fn build_index<R: BufRead>(
    reader: &mut FastqReader<R>,
    config: &PairingConfig,
) -> Result<HashIndex, PairError> {
    let mut index = HashIndex::with_table_size(config.table_size)?;
    let mut record = RawRecord::new();

    while reader.read_record(&mut record)? {
        check_truncation(&record, reader.name(), config.truncated_records)?;
        index.insert(normalize_header(record.header()), record.offset())?;
    }

    debug!(
        "Indexed {} records from {} into {} buckets",
        index.len(),
        reader.name(),
        index.table_size()
    );

    Ok(index)
}
