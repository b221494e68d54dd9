//! Read-name index over the left file.
//!
//! The index keeps only names and byte offsets, never record contents.
//! Buckets are fixed at construction and chains are never reordered, so the
//! same input and table size always produce the same layout.

pub mod builder;
pub mod table;
