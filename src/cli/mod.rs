//! Command-line interface for fastq-pair.
//!
//! ## Usage
//!
//! ```text
//! # Re-pair two independently filtered FASTQ files
//! fastq-pair sample_R1.fq sample_R2.fq
//!
//! # Larger table for ~10M reads, with bucket diagnostics
//! fastq-pair -t 10000019 -p sample_R1.fq sample_R2.fq
//!
//! # Compressed right file, JSON summary for scripting
//! fastq-pair sample_R1.fq sample_R2.fq.gz --format json
//! ```

use clap::Parser;

pub mod pair;

#[derive(Parser)]
#[command(name = "fastq-pair")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Re-pair two FASTQ files whose mates were filtered independently")]
#[command(
    long_about = "fastq-pair matches records between two FASTQ files by read name and splits each file into records that have a mate in the other file and records that do not.\n\nFor inputs A and B it writes:\n- A.paired.fq and B.paired.fq: mates, in the order of B\n- A.single.fq and B.single.fq: records without a mate\n\nRead names are compared up to the first whitespace, ignoring one trailing 1, 2, f or r (as in /1, /2, /f, /r)."
)]
pub struct Cli {
    #[command(flatten)]
    pub pair: pair::PairArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
