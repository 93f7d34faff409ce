use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Rename the files in a folder to a sequential naming scheme (<prefix><n><extension>)
#[derive(Parser, Debug)]
#[command(name = "seqrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder whose files should be renamed
    #[arg(default_value = ".")]
    pub folder: PathBuf,

    /// Prefix for new names; files already starting with it are skipped [default: file_]
    #[arg(short, long, env = "SEQRENAME_PREFIX", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Extension appended to every new name, including the dot [default: .txt]
    #[arg(short, long, env = "SEQRENAME_EXTENSION", allow_hyphen_values = true)]
    pub extension: Option<String>,

    /// Read defaults from this config file instead of .seqrename/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (defaults from config if not specified)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Print a one-line summary instead of per-file progress
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
