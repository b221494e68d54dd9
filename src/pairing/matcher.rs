use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::error::PairError;
use crate::core::key::normalize_header;
use crate::core::types::{PairingConfig, PairingSummary};
use crate::index::table::HashIndex;
use crate::pairing::outputs::PairWriters;
use crate::pairing::read_left_record;
use crate::parsing::fastq::{check_truncation, FastqReader, RawRecord, RecordSource};

/// Stream the right file once, pairing each record with its left mate.
///
/// A right record whose key is in the index marks every left entry with that
/// key as matched. The left record at the resolved offset then goes to
/// left-paired and the right record to right-paired. Unmatched right records
/// go to right-single. Records are written exactly as read.
///
/// Returns the paired and right-single counts; `left_single` is left at zero
/// for the sweep to fill in.
///
/// # Errors
///
/// Returns any read, seek or write error, or `PairError::TruncatedRecord`
/// under the strict policy.
pub fn match_right<L, R, W>(
    left: &mut L,
    right: &mut FastqReader<R>,
    index: &mut HashIndex,
    writers: &mut PairWriters<W>,
    config: &PairingConfig,
) -> Result<PairingSummary, PairError>
where
    L: RecordSource,
    R: BufRead,
    W: Write,
{
    let mut summary = PairingSummary::default();
    let mut right_record = RawRecord::new();
    let mut left_record = RawRecord::new();

    while right.read_record(&mut right_record)? {
        check_truncation(&right_record, right.name(), config.truncated_records)?;

        let key = normalize_header(right_record.header());
        if let Some(offset) = index.mark_matched(key) {
            read_left_record(left, offset, &mut left_record)?;
            writers.left_paired.write_all(left_record.as_bytes())?;
            summary.left_paired += 1;

            writers.right_paired.write_all(right_record.as_bytes())?;
            summary.right_paired += 1;
        } else {
            writers.right_single.write_all(right_record.as_bytes())?;
            summary.right_single += 1;
        }
    }

    debug!(
        "Matched {} of {} records from {}",
        summary.right_paired,
        summary.right_total(),
        right.name()
    );

    Ok(summary)
}
