//! Pairing of two FASTQ files by read name.
//!
//! A run has three stages, each reading its input once:
//!
//! 1. **Index** the left file: read name -> byte offset ([`crate::index`])
//! 2. **Match** the right file against the index ([`matcher`]), pulling left
//!    mates back in by offset
//! 3. **Sweep** the index for left records that were never matched ([`sweep`])
//!
//! The left file is the only one read by offset; the right file is streamed
//! exactly once. Output records are byte-for-byte copies of the input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastq_pair::{pair_files, PairingConfig};
//! use std::path::Path;
//!
//! let config = PairingConfig::new(100_003).unwrap();
//! let summary = pair_files(Path::new("sample_R1.fq"), Path::new("sample_R2.fq"), &config).unwrap();
//! eprintln!("{summary}");
//! ```

use std::io::{self, BufRead, Seek, Write};
use std::path::Path;

use tracing::info;

use crate::core::error::PairError;
use crate::core::types::{PairingConfig, PairingSummary};
use crate::index::builder::build_index;
use crate::parsing::fastq::{open_left, open_right, FastqReader, RawRecord, RecordSource};

pub mod matcher;
pub mod outputs;
pub mod sweep;

use matcher::match_right;
use outputs::{OutputPaths, PairWriters};
use sweep::sweep_left_singles;

/// Pair two FASTQ files on disk, writing the four `.paired.fq`/`.single.fq`
/// outputs next to the inputs.
///
/// Bucket diagnostics, when enabled, go to stdout.
///
/// # Errors
///
/// Returns the first error hit by any stage. Outputs already written are left
/// on disk.
pub fn pair_files(
    left_path: &Path,
    right_path: &Path,
    config: &PairingConfig,
) -> Result<PairingSummary, PairError> {
    let mut left = open_left(left_path, config.max_line_length)?;
    let mut right = open_right(right_path, config.max_line_length)?;

    let paths = OutputPaths::for_inputs(left_path, right_path);
    let mut writers = PairWriters::create(&paths)?;

    pair_readers(&mut left, &mut right, &mut writers, io::stdout().lock(), config)
}

/// Run all three stages over already-opened streams.
///
/// `left` must be positioned at its start.
///
/// # Errors
///
/// Returns the first error hit by any stage.
pub fn pair_readers<L, R, W, D>(
    left: &mut FastqReader<L>,
    right: &mut FastqReader<R>,
    writers: &mut PairWriters<W>,
    diagnostics: D,
    config: &PairingConfig,
) -> Result<PairingSummary, PairError>
where
    L: BufRead + Seek,
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut index = build_index(left, config)?;

    if config.print_table_counts {
        index.write_bucket_counts(diagnostics)?;
    }

    let mut summary = match_right(left, right, &mut index, writers, config)?;
    summary.left_single = sweep_left_singles(left, &index, &mut writers.left_single)?;
    writers.flush()?;

    info!(
        "Paired {} records; {} left and {} right records have no mate",
        summary.left_paired, summary.left_single, summary.right_single
    );

    Ok(summary)
}

/// Read the left record at `offset`, which the index guarantees is a header.
pub(crate) fn read_left_record<L: RecordSource>(
    left: &mut L,
    offset: u64,
    record: &mut RawRecord,
) -> Result<(), PairError> {
    if left.read_record_at(offset, record)? {
        Ok(())
    } else {
        Err(PairError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("no record at indexed offset {offset}; was the left file modified?"),
        )))
    }
}
