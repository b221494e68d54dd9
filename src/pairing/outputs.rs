use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::error::PairError;

pub const PAIRED_SUFFIX: &str = ".paired.fq";
pub const SINGLE_SUFFIX: &str = ".single.fq";

/// Paths of the four output files, derived from the input paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub left_paired: PathBuf,
    pub right_paired: PathBuf,
    pub left_single: PathBuf,
    pub right_single: PathBuf,
}

impl OutputPaths {
    /// Append `.paired.fq` / `.single.fq` to the full input paths
    pub fn for_inputs(left: &Path, right: &Path) -> Self {
        Self {
            left_paired: append_suffix(left, PAIRED_SUFFIX),
            right_paired: append_suffix(right, PAIRED_SUFFIX),
            left_single: append_suffix(left, SINGLE_SUFFIX),
            right_single: append_suffix(right, SINGLE_SUFFIX),
        }
    }
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// The four record sinks of a pairing run
#[derive(Debug)]
pub struct PairWriters<W> {
    pub left_paired: W,
    pub right_paired: W,
    pub left_single: W,
    pub right_single: W,
}

impl PairWriters<BufWriter<File>> {
    /// Create (or truncate) all four output files.
    ///
    /// # Errors
    ///
    /// Returns `PairError::CreateOutput` naming the first file that could not
    /// be created.
    pub fn create(paths: &OutputPaths) -> Result<Self, PairError> {
        Ok(Self {
            left_paired: create_output(&paths.left_paired)?,
            left_single: create_output(&paths.left_single)?,
            right_paired: create_output(&paths.right_paired)?,
            right_single: create_output(&paths.right_single)?,
        })
    }
}

impl<W: Write> PairWriters<W> {
    /// # Errors
    ///
    /// Returns `PairError::Io` if any writer fails to flush.
    pub fn flush(&mut self) -> Result<(), PairError> {
        self.left_paired.flush()?;
        self.right_paired.flush()?;
        self.left_single.flush()?;
        self.right_single.flush()?;
        Ok(())
    }
}

impl PairWriters<Vec<u8>> {
    /// In-memory writers, used by tests and callers that post-process output
    pub fn in_memory() -> Self {
        Self {
            left_paired: Vec::new(),
            right_paired: Vec::new(),
            left_single: Vec::new(),
            right_single: Vec::new(),
        }
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>, PairError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| PairError::CreateOutput {
            path: path.to_path_buf(),
            source,
        })
}
