use clap::Parser;
use fastq_pair::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fastq_pair=debug,info")
    } else {
        EnvFilter::new("fastq_pair=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::pair::run(cli.pair, cli.format, cli.verbose)?;

    Ok(())
}
