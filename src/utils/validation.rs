//! Centralized validation and helper functions.

use std::path::Path;

use crate::core::error::PairError;

/// Check that a hash table size is usable.
///
/// # Errors
///
/// Returns `PairError::InvalidTableSize` if `table_size` is zero.
pub fn validate_table_size(table_size: usize) -> Result<(), PairError> {
    if table_size == 0 {
        return Err(PairError::InvalidTableSize(table_size));
    }
    Ok(())
}

/// Check that a maximum line length is usable.
///
/// # Errors
///
/// Returns `PairError::InvalidMaxLineLength` if `max_line_length` is zero.
pub fn validate_max_line_length(max_line_length: usize) -> Result<(), PairError> {
    if max_line_length == 0 {
        return Err(PairError::InvalidMaxLineLength(max_line_length));
    }
    Ok(())
}

/// Check if the path names a gzip or bgzip compressed file.
///
/// # Examples
///
/// ```
/// use fastq_pair::utils::validation::is_gzipped;
/// use std::path::Path;
///
/// assert!(is_gzipped(Path::new("reads_R2.fastq.gz")));
/// assert!(is_gzipped(Path::new("reads_R2.FQ.BGZ")));
/// assert!(!is_gzipped(Path::new("reads_R1.fastq")));
/// ```
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Name used for a path in log messages and errors.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.display().to_string()
}
