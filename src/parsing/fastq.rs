//! Line-oriented FASTQ record reader.
//!
//! Records are never parsed beyond their header: each one is the raw bytes
//! of four consecutive lines, terminators included, so it can be written back
//! out unchanged. The reader tracks the byte offset of every record it
//! returns, and readers over seekable streams can jump back to any offset
//! through [`RecordSource`].
//!
//! Lines longer than the configured bound are reported as
//! [`PairError::LineTooLong`] rather than being split or truncated.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::{debug, warn};

use crate::core::error::PairError;
use crate::core::types::{TruncatedRecordPolicy, LINES_PER_RECORD};
use crate::utils::validation::{display_name, is_gzipped};

/// One FASTQ record as raw bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    data: Vec<u8>,
    header_len: usize,
    lines: usize,
    offset: u64,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The header line, including its terminator if it had one
    pub fn header(&self) -> &[u8] {
        &self.data[..self.header_len]
    }

    /// Every byte of the record exactly as read
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of the header line in its source
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn is_complete(&self) -> bool {
        self.lines == LINES_PER_RECORD
    }

    fn clear(&mut self, offset: u64) {
        self.data.clear();
        self.header_len = 0;
        self.lines = 0;
        self.offset = offset;
    }
}

/// Random access to records by byte offset.
///
/// Implementors must position themselves explicitly on every call; callers
/// never rely on where a previous read left the stream.
pub trait RecordSource {
    /// Seek to `offset` and read the record starting there.
    ///
    /// Returns `false` if the stream ends at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `PairError::Io` if seeking or reading fails, or
    /// `PairError::LineTooLong` if a line exceeds the reader's bound.
    fn read_record_at(&mut self, offset: u64, record: &mut RawRecord) -> Result<bool, PairError>;
}

/// Bounded FASTQ reader over any buffered stream
pub struct FastqReader<R> {
    inner: R,
    name: String,
    position: u64,
    max_line_length: usize,
}

impl<R: BufRead> FastqReader<R> {
    /// Wrap a stream positioned at byte 0.
    ///
    /// `max_line_length` counts the line terminator.
    pub fn new(inner: R, name: impl Into<String>, max_line_length: usize) -> Self {
        Self {
            inner,
            name: name.into(),
            position: 0,
            max_line_length,
        }
    }

    /// Name used in diagnostics, normally the file path
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte offset of the next line to be read
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read the next record sequentially.
    ///
    /// Returns `false` at end of stream. A record cut short by end of stream
    /// holds whatever lines were available; see [`RawRecord::is_complete`].
    ///
    /// # Errors
    ///
    /// Returns `PairError::Io` if reading fails, or `PairError::LineTooLong`
    /// if a line exceeds the bound.
    pub fn read_record(&mut self, record: &mut RawRecord) -> Result<bool, PairError> {
        record.clear(self.position);

        let header_len = self.read_line(&mut record.data)?;
        if header_len == 0 {
            return Ok(false);
        }
        record.header_len = header_len;
        record.lines = 1;

        while record.lines < LINES_PER_RECORD {
            if self.read_line(&mut record.data)? == 0 {
                break;
            }
            record.lines += 1;
        }

        Ok(true)
    }

    /// Append one line to `buf`, returning the number of bytes read.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, PairError> {
        let limit = (self.max_line_length as u64).saturating_add(1);
        let n = self.inner.by_ref().take(limit).read_until(b'\n', buf)?;

        if n > self.max_line_length {
            return Err(PairError::LineTooLong {
                source_name: self.name.clone(),
                offset: self.position,
                limit: self.max_line_length,
            });
        }

        self.position += n as u64;
        Ok(n)
    }
}

impl<R: BufRead + Seek> RecordSource for FastqReader<R> {
    fn read_record_at(&mut self, offset: u64, record: &mut RawRecord) -> Result<bool, PairError> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        self.read_record(record)
    }
}

/// Apply the truncated-record policy to a record that was just read.
///
/// # Errors
///
/// Returns `PairError::TruncatedRecord` under [`TruncatedRecordPolicy::Strict`]
/// when the record has fewer than four lines.
pub fn check_truncation(
    record: &RawRecord,
    source_name: &str,
    policy: TruncatedRecordPolicy,
) -> Result<(), PairError> {
    if record.is_complete() {
        return Ok(());
    }

    match policy {
        TruncatedRecordPolicy::Strict => Err(PairError::TruncatedRecord {
            source_name: source_name.to_string(),
            offset: record.offset(),
            lines: record.line_count(),
        }),
        TruncatedRecordPolicy::Warn => {
            warn!(
                "Truncated record at byte {} of {}: {} of {} lines, writing it as-is",
                record.offset(),
                source_name,
                record.line_count(),
                LINES_PER_RECORD
            );
            Ok(())
        }
        TruncatedRecordPolicy::Silent => Ok(()),
    }
}

/// Open the left file, which must be seekable plain text.
///
/// # Errors
///
/// Returns `PairError::CompressedLeftInput` for a `.gz`/`.bgz` path and
/// `PairError::OpenInput` if the file cannot be opened.
pub fn open_left(
    path: &Path,
    max_line_length: usize,
) -> Result<FastqReader<BufReader<File>>, PairError> {
    if is_gzipped(path) {
        return Err(PairError::CompressedLeftInput(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| PairError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FastqReader::new(
        BufReader::new(file),
        display_name(path),
        max_line_length,
    ))
}

/// Open the right file for a single forward pass, decompressing gzip input.
///
/// # Errors
///
/// Returns `PairError::OpenInput` if the file cannot be opened.
pub fn open_right(
    path: &Path,
    max_line_length: usize,
) -> Result<FastqReader<Box<dyn BufRead>>, PairError> {
    let file = File::open(path).map_err(|source| PairError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn BufRead> = if is_gzipped(path) {
        debug!("Reading {} as gzip", path.display());
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(FastqReader::new(reader, display_name(path), max_line_length))
}
