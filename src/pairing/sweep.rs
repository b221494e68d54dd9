use std::io::Write;

use crate::core::error::PairError;
use crate::index::table::HashIndex;
use crate::pairing::read_left_record;
use crate::parsing::fastq::{RawRecord, RecordSource};

/// Write every left record that never found a mate to `out`.
///
/// Records come out in index order (bucket, then chain), not in the order
/// they appear in the left file. Returns the number written.
///
/// # Errors
///
/// Returns any seek, read or write error.
pub fn sweep_left_singles<L, W>(
    left: &mut L,
    index: &HashIndex,
    out: &mut W,
) -> Result<u64, PairError>
where
    L: RecordSource,
    W: Write,
{
    let mut record = RawRecord::new();
    let mut count = 0;

    for entry in index.entries().filter(|entry| !entry.matched) {
        read_left_record(left, entry.offset, &mut record)?;
        out.write_all(record.as_bytes())?;
        count += 1;
    }

    Ok(count)
}
