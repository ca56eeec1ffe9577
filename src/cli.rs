use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the version properties file, relative to the
/// build root.
pub const DEFAULT_PROPERTIES_PATH: &str = "buildprocess/version.properties";

/// Resolve CI-aware build versions and upload CycloneDX BOMs to Dependency-Track
#[derive(Parser, Debug)]
#[command(name = "bomship")]
#[command(version)]
#[command(about = "Resolve CI-aware build versions and upload CycloneDX BOMs", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build version from version.properties and the CI environment
    Version {
        /// Path to the version properties file
        #[arg(short, long, default_value = DEFAULT_PROPERTIES_PATH)]
        properties: PathBuf,

        /// Continue with an empty property set if the file is missing or unreadable
        #[arg(long)]
        lenient: bool,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload a BOM document to the inventory server
    Upload {
        /// Path to the BOM file to upload
        #[arg(short, long)]
        bom: PathBuf,

        /// Upload endpoint, e.g. https://dtrack.example/api/v1/bom
        #[arg(short, long)]
        uri: String,

        /// API key sent as the X-Api-Key header
        #[arg(long)]
        api_key: String,

        /// Project identifier included in the payload
        #[arg(short, long)]
        project: String,

        /// Accept any server certificate (insecure, for self-signed internal endpoints)
        #[arg(long)]
        trust_all: bool,

        /// Treat a rejected upload as a warning instead of a failure
        #[arg(long)]
        ignore_failures: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
