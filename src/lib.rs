//! # fastq-pair
//!
//! Re-synchronize two FASTQ files whose mates were filtered independently.
//!
//! Quality or adapter filtering applied to each end of a paired-end run
//! separately leaves the two files with different reads missing, so their
//! records no longer line up. `fastq-pair` finds, for every record in each
//! file, whether its mate exists in the other file. It then splits both
//! files into a *paired* and a *single* output.
//!
//! Only read names and byte offsets are held in memory. The left file is
//! indexed once, the right file is streamed once, and left records are pulled
//! back in by seeking to their saved offsets.
//!
//! ## Features
//!
//! - **Mate-suffix aware**: `/1`, `/2`, `/f`, `/r` markers and anything after
//!   the first whitespace are ignored when comparing names
//! - **Byte-exact output**: records are copied verbatim, line endings included
//! - **Duplicate tolerant**: repeated names resolve to their first left occurrence
//! - **Compressed right input**: the streamed file may be gzip/bgzip
//!
//! ## Example
//!
//! ```rust
//! use fastq_pair::pairing::outputs::PairWriters;
//! use fastq_pair::parsing::fastq::FastqReader;
//! use fastq_pair::{pair_readers, PairingConfig};
//! use std::io::{sink, Cursor};
//!
//! let left = b"@readA/1\nACGT\n+\nIIII\n@readB/1\nGGCC\n+\nIIII\n".to_vec();
//! let right = b"@readA/2\nTTAA\n+\nIIII\n".to_vec();
//!
//! let mut left = FastqReader::new(Cursor::new(left), "left.fq", 100_000);
//! let mut right = FastqReader::new(Cursor::new(right), "right.fq", 100_000);
//! let mut writers = PairWriters::in_memory();
//!
//! let summary = pair_readers(
//!     &mut left,
//!     &mut right,
//!     &mut writers,
//!     sink(),
//!     &PairingConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(summary.left_paired, 1);
//! assert_eq!(writers.left_single, b"@readB/1\nGGCC\n+\nIIII\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Matching keys, configuration, summary and error types
//! - [`index`]: The read-name hash index over the left file
//! - [`parsing`]: Bounded, offset-tracking FASTQ record reader
//! - [`pairing`]: Matching, singleton sweep and output handling
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod pairing;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::error::PairError;
pub use crate::core::key::normalize_header;
pub use crate::core::types::*;
pub use crate::index::table::{HashIndex, IndexEntry};
pub use crate::pairing::{pair_files, pair_readers};
