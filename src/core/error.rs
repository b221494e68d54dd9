use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot allocate memory for {0}; try a smaller table size")]
    Allocation(String),

    #[error("Invalid table size {0}: must be a positive number of buckets")]
    InvalidTableSize(usize),

    #[error("Invalid maximum line length {0}: must be at least one byte")]
    InvalidMaxLineLength(usize),

    #[error("Can't open input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Can't create output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Left input {} is compressed; it must be a plain FASTQ file because it is read by offset",
        .0.display()
    )]
    CompressedLeftInput(PathBuf),

    #[error("Line at byte {offset} of {source_name} exceeds the maximum line length of {limit}")]
    LineTooLong {
        source_name: String,
        offset: u64,
        limit: usize,
    },

    #[error("Truncated record at byte {offset} of {source_name}: found {lines} of 4 lines")]
    TruncatedRecord {
        source_name: String,
        offset: u64,
        lines: usize,
    },
}
