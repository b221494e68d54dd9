use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::{
    PairingConfig, PairingSummary, TruncatedRecordPolicy, DEFAULT_MAX_LINE_LENGTH,
    DEFAULT_TABLE_SIZE,
};
use crate::pairing::outputs::OutputPaths;
use crate::pairing::pair_files;

#[derive(Args)]
pub struct PairArgs {
    /// Left FASTQ file; read by offset, so it must be uncompressed
    #[arg(required = true)]
    pub left: PathBuf,

    /// Right FASTQ file; streamed once, may be gzip compressed
    #[arg(required = true)]
    pub right: PathBuf,

    /// Number of buckets in the read-name hash table.
    /// A prime near the number of reads keeps chains short.
    #[arg(
        short = 't',
        long,
        default_value_t = DEFAULT_TABLE_SIZE as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub table_size: u32,

    /// Print the number of entries in each hash table bucket
    #[arg(short = 'p', long)]
    pub print_table_counts: bool,

    /// Longest accepted FASTQ line in bytes, including the newline
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_LINE_LENGTH as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_line_length: u64,

    /// What to do with a final record that has fewer than four lines
    #[arg(long, value_enum, default_value = "warn")]
    pub truncated_records: TruncatedRecordPolicy,
}

impl PairArgs {
    /// Build the immutable run configuration from the parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not fit the platform's `usize`.
    pub fn to_config(&self) -> anyhow::Result<PairingConfig> {
        let max_line_length = usize::try_from(self.max_line_length)
            .context("--max-line-length is too large for this platform")?;

        let config = PairingConfig::new(self.table_size as usize)?
            .with_table_counts(self.print_table_counts)
            .with_max_line_length(max_line_length)?
            .with_truncated_records(self.truncated_records);

        Ok(config)
    }
}

/// Execute a pairing run
///
/// # Errors
///
/// Returns an error if an input cannot be read, an output cannot be written,
/// or a record violates the configured limits.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PairArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.to_config()?;

    if verbose {
        eprintln!(
            "Pairing {} with {} using {} buckets",
            args.left.display(),
            args.right.display(),
            config.table_size
        );
    }

    let paths = OutputPaths::for_inputs(&args.left, &args.right);
    eprintln!(
        "Writing the paired reads to {} and {}",
        paths.left_paired.display(),
        paths.right_paired.display()
    );
    eprintln!(
        "Writing the single reads to {} and {}",
        paths.left_single.display(),
        paths.right_single.display()
    );

    let summary = pair_files(&args.left, &args.right, &config).with_context(|| {
        format!(
            "Failed to pair {} and {}",
            args.left.display(),
            args.right.display()
        )
    })?;

    info!(
        "{} of {} left records and {} of {} right records are paired",
        summary.left_paired,
        summary.left_total(),
        summary.right_paired,
        summary.right_total()
    );

    match format {
        OutputFormat::Text => eprintln!("{summary}"),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_json_summary(summary: &PairingSummary) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn print_tsv_summary(summary: &PairingSummary) {
    println!("left_paired\tright_paired\tleft_single\tright_single");
    println!(
        "{}\t{}\t{}\t{}",
        summary.left_paired, summary.right_paired, summary.left_single, summary.right_single
    );
}
