use clap::Parser;

/// Runtime switches. The job itself is configured through environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "fill-csv-ai")]
#[command(about = "Fill a CSV column with answers from an OpenRouter chat model")]
pub struct CliArgs {
    /// Directory the input path is resolved against and the output file is written to
    #[arg(long, default_value = ".")]
    pub workdir: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Show the prompts that would be sent without calling the API or writing output
    #[arg(long)]
    pub dry_run: bool,
}
