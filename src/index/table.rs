use std::collections::TryReserveError;
use std::io::Write;

use crate::core::error::PairError;
use crate::utils::validation::validate_table_size;

/// Multiplicative string hash over the key bytes, wrapping on overflow.
///
/// Both passes must bucket keys identically, so this never changes.
#[must_use]
pub fn hash_key(key: &[u8]) -> u32 {
    key.iter()
        .fold(0u32, |acc, &b| u32::from(b).wrapping_add(acc.wrapping_mul(31)))
}

/// Location of one left-file record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: Vec<u8>,
    /// Byte offset of the record's header line
    pub offset: u64,
    /// Set once a right-file record with the same key has been seen
    pub matched: bool,
}

/// Fixed-size chained hash table from read keys to record offsets.
///
/// Each bucket holds its chain in insertion order; chain order (newest first)
/// is that vector walked backwards. Duplicate keys are kept, never replaced.
#[derive(Debug)]
pub struct HashIndex {
    buckets: Vec<Vec<IndexEntry>>,
    len: usize,
}

impl HashIndex {
    /// Allocate an empty index with `table_size` buckets.
    ///
    /// # Errors
    ///
    /// Returns `PairError::InvalidTableSize` for zero buckets, or
    /// `PairError::Allocation` if the bucket array cannot be allocated.
    pub fn with_table_size(table_size: usize) -> Result<Self, PairError> {
        validate_table_size(table_size)?;

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(table_size)
            .map_err(|e| allocation_error(&format!("a table of {table_size} buckets"), &e))?;
        buckets.resize_with(table_size, Vec::new);

        Ok(Self { buckets, len: 0 })
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries across all buckets
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_of(&self, key: &[u8]) -> usize {
        hash_key(key) as usize % self.buckets.len()
    }

    /// Put a new entry at the head of its bucket's chain.
    ///
    /// # Errors
    ///
    /// Returns `PairError::Allocation` if the chain cannot grow.
    pub fn insert(&mut self, key: &[u8], offset: u64) -> Result<(), PairError> {
        let bucket = self.bucket_of(key);
        let chain = &mut self.buckets[bucket];

        chain
            .try_reserve(1)
            .map_err(|e| allocation_error("a new index entry", &e))?;
        chain.push(IndexEntry {
            key: key.to_vec(),
            offset,
            matched: false,
        });

        self.len += 1;
        Ok(())
    }

    /// All entries whose key equals `key`, in chain order
    pub fn find_all<'a>(&'a self, key: &'a [u8]) -> impl Iterator<Item = &'a IndexEntry> + 'a {
        self.buckets[self.bucket_of(key)]
            .iter()
            .rev()
            .filter(move |entry| entry.key == key)
    }

    /// Mark every entry with this key as matched.
    ///
    /// Returns the offset of the last entry visited in chain order, which is
    /// the earliest inserted, so duplicate names resolve to their first
    /// occurrence in the left file. Returns `None` if the key is absent.
    pub fn mark_matched(&mut self, key: &[u8]) -> Option<u64> {
        let bucket = self.bucket_of(key);
        let mut resolved = None;

        for entry in self.buckets[bucket].iter_mut().rev() {
            if entry.key == key {
                entry.matched = true;
                resolved = Some(entry.offset);
            }
        }

        resolved
    }

    /// Every entry, bucket by bucket, each chain in chain order.
    ///
    /// This is not the order records appear in the left file.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    /// `(bucket index, chain length)` for every bucket
    pub fn bucket_lengths(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.buckets.iter().map(Vec::len).enumerate()
    }

    /// Write the `Bucket sizes` table, one `<bucket>\t<count>` line per bucket.
    ///
    /// # Errors
    ///
    /// Returns `PairError::Io` if writing fails.
    pub fn write_bucket_counts<W: Write>(&self, mut out: W) -> Result<(), PairError> {
        writeln!(out, "Bucket sizes")?;
        for (bucket, count) in self.bucket_lengths() {
            writeln!(out, "{bucket}\t{count}")?;
        }
        out.flush()?;
        Ok(())
    }
}

fn allocation_error(what: &str, err: &TryReserveError) -> PairError {
    PairError::Allocation(format!("{what} ({err})"))
}
