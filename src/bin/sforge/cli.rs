use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "sforge",
    about = "Stoichiometry enumeration and job preparation for multi-chain structure prediction",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one JSON job per combination up to a stoichiometry
    #[command(visible_alias = "j")]
    Json(JsonArgs),

    /// Write FASTA and TSV jobs for every unique sequence multiset
    #[command(visible_alias = "m")]
    Multisets(MultisetArgs),

    /// Map template chain labels of a job basename to target chain ids
    #[command(visible_alias = "c")]
    Chains(ChainsArgs),

    /// Create the output and temporary directories named in a workflow config
    Setup(SetupArgs),
}

/// Reporting options shared by all commands.
#[derive(Args)]
pub struct ReportOptions {
    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct JsonArgs {
    /// Input FASTA file; records are labeled A, B, C … in order
    #[arg(value_name = "FASTA")]
    pub fasta: PathBuf,

    /// Maximum copies per record, e.g. 5A4B3C
    #[arg(value_name = "STOICHIOMETRY")]
    pub stoichiometry: String,

    /// Directory receiving one <job>.json per combination
    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        default_value = "json_output"
    )]
    pub output_dir: PathBuf,

    /// Only generate combinations where all chains have the same number of copies
    #[arg(short, long)]
    pub uniform_copies: bool,

    #[command(flatten)]
    pub report: ReportOptions,
}

#[derive(Args)]
pub struct MultisetArgs {
    /// Input FASTA file
    #[arg(value_name = "FASTA")]
    pub fasta: PathBuf,

    /// Minimum combination size; a value of 0 or above --max-size is an error
    #[arg(long, value_name = "N", default_value = "2")]
    pub min_size: usize,

    /// Maximum combination size
    #[arg(long, value_name = "N", default_value = "6")]
    pub max_size: usize,

    /// Base name for the TSV output file
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "unique_combinations.tsv"
    )]
    pub output: PathBuf,

    /// Top-level output directory
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory containing template PDB files
    #[arg(short, long, value_name = "DIR", default_value = "templates")]
    pub templates_dir: PathBuf,

    #[command(flatten)]
    pub report: ReportOptions,
}

#[derive(Args)]
pub struct ChainsArgs {
    /// Job basename such as 1A1B2C
    #[arg(value_name = "BASENAME")]
    pub basename: String,

    /// How target chain ids are chosen
    #[arg(long, value_name = "POLICY", default_value = "disjoint")]
    pub policy: TargetPolicy,

    #[command(flatten)]
    pub report: ReportOptions,
}

#[derive(Args)]
pub struct SetupArgs {
    /// Workflow configuration (YAML, or TOML for a .toml file)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    #[command(flatten)]
    pub report: ReportOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TargetPolicy {
    /// Skip characters used by template labels (a-z, then A-Z)
    Disjoint,
    /// Count from A regardless of template labels (A-Z, then a-z)
    Sequential,
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Json(args) => args.report.quiet,
            Command::Multisets(args) => args.report.quiet,
            Command::Chains(args) => args.report.quiet,
            Command::Setup(args) => args.report.quiet,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
