use crate::types::FileKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (defaults to config.toml in the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sequence analysis HTTP API
    Serve {
        /// Address to bind (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: 5000)
        #[arg(short = 'p', long)]
        port: Option<u16>,

        /// Largest accepted upload in MiB (default: 64)
        #[arg(long)]
        max_upload_mb: Option<usize>,

        /// Directory for temporary BAM files
        #[arg(long)]
        upload_dir: Option<PathBuf>,
    },

    /// Analyze a local FASTA or BAM file and print the result as JSON
    Analyze {
        /// Input FASTA (.fasta, .fas, .fa) or BAM (.bam) file
        file: PathBuf,

        /// Treat the input as this format instead of guessing from the extension
        #[arg(long, value_enum)]
        format: Option<FileKind>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Do not show a progress spinner
        #[arg(short = 'q', long)]
        quiet: bool,
    },
}
