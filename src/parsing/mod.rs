//! Readers for the FASTQ inputs.
//!
//! - [`fastq::FastqReader`]: bounded line reader yielding raw four-line records
//! - [`fastq::RecordSource`]: "seek to offset, read one record" over seekable input
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastq_pair::parsing::fastq::{open_left, RawRecord, RecordSource};
//! use std::path::Path;
//!
//! let mut left = open_left(Path::new("reads_R1.fq"), 100_000).unwrap();
//! let mut record = RawRecord::new();
//! left.read_record_at(0, &mut record).unwrap();
//! ```
//!
//! The left file is read by offset, so it must be plain text. The right file
//! is only streamed and may be gzip or bgzip compressed.

pub mod fastq;
