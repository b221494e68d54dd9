//! Core types shared by the indexing and pairing stages.
//!
//! - [`key`]: derives the matching key from a FASTQ header line
//! - [`types`]: run configuration, truncation policy and the final summary
//! - [`error`]: the [`PairError`](error::PairError) returned throughout the library
//!
//! ## Matching keys
//!
//! | Left header | Right header | Key |
//! |-------------|--------------|-----|
//! | `@read42/1` | `@read42/2` | `@read42/` |
//! | `@frag/f` | `@frag/r` | `@frag/` |
//! | `@id 1:N:0` | `@id 2:N:0` | `@id` |

pub mod error;
pub mod key;
pub mod types;
