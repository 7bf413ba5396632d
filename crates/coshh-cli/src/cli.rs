//! CLI argument definitions for the COSHH form generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "coshh",
    version,
    about = "COSHH form generator - populate safety assessments from GHS hazard codes",
    long_about = "Populate a COSHH safety-assessment document from a submission of\n\
                  chemicals with GHS hazard statement codes.\n\n\
                  Each chemical becomes one table row, annotated with the exposure\n\
                  routes that apply and the control measures required, rendered from\n\
                  a pre-authored ticks template."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a completed COSHH form from a submission file.
    Generate(GenerateArgs),

    /// List the hazard-category trigger tables.
    Measures,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the submission JSON (array of {name, amount, hazards[]}).
    #[arg(value_name = "SUBMISSION_JSON")]
    pub submission: PathBuf,

    /// Path to the COSHH form template (.docx).
    #[arg(long = "form", value_name = "DOCX")]
    pub form: PathBuf,

    /// Path to the ticks reference template (.docx).
    #[arg(long = "ticks", value_name = "DOCX")]
    pub ticks: PathBuf,

    /// Output path for the completed form.
    #[arg(long = "output", value_name = "DOCX", default_value = "COSHH.docx")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
