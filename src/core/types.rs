use serde::Serialize;

use crate::core::error::PairError;
use crate::utils::validation::{validate_max_line_length, validate_table_size};

/// Default number of buckets in the read-name index
pub const DEFAULT_TABLE_SIZE: usize = 100_003;

/// Default upper bound on the length of a single FASTQ line, in bytes
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100_000;

/// Number of lines in one FASTQ record
pub const LINES_PER_RECORD: usize = 4;

/// How to treat a trailing record with fewer than four lines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TruncatedRecordPolicy {
    /// Write whatever was read and log a warning
    #[default]
    Warn,
    /// Fail the run
    Strict,
    /// Write whatever was read without mentioning it
    Silent,
}

/// Settings for a pairing run, built once and shared by reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingConfig {
    /// Number of buckets in the hash index
    pub table_size: usize,

    /// Emit `<bucket>\t<chain length>` diagnostics after indexing
    pub print_table_counts: bool,

    /// Longest line accepted before the run fails
    pub max_line_length: usize,

    /// How a trailing record with fewer than four lines is handled
    pub truncated_records: TruncatedRecordPolicy,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            print_table_counts: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            truncated_records: TruncatedRecordPolicy::default(),
        }
    }
}

impl PairingConfig {
    /// Create a config with the given table size and default everything else
    ///
    /// # Errors
    ///
    /// Returns `PairError::InvalidTableSize` if `table_size` is zero.
    pub fn new(table_size: usize) -> Result<Self, PairError> {
        validate_table_size(table_size)?;
        Ok(Self {
            table_size,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_table_counts(mut self, print_table_counts: bool) -> Self {
        self.print_table_counts = print_table_counts;
        self
    }

    /// # Errors
    ///
    /// Returns `PairError::InvalidMaxLineLength` if the length is zero.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Result<Self, PairError> {
        validate_max_line_length(max_line_length)?;
        self.max_line_length = max_line_length;
        Ok(self)
    }

    #[must_use]
    pub fn with_truncated_records(mut self, policy: TruncatedRecordPolicy) -> Self {
        self.truncated_records = policy;
        self
    }
}

/// Record counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PairingSummary {
    pub left_paired: u64,
    pub right_paired: u64,
    pub left_single: u64,
    pub right_single: u64,
}

impl PairingSummary {
    /// Total number of records read from the left file
    #[must_use]
    pub fn left_total(&self) -> u64 {
        self.left_paired + self.left_single
    }

    /// Total number of records read from the right file
    #[must_use]
    pub fn right_total(&self) -> u64 {
        self.right_paired + self.right_single
    }
}

impl std::fmt::Display for PairingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Left paired: {}\t\tRight paired: {}",
            self.left_paired, self.right_paired
        )?;
        write!(
            f,
            "Left single: {}\t\tRight single: {}",
            self.left_single, self.right_single
        )
    }
}
