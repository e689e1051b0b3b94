//! clap-based command-line interface.
//!
//! Defines the [`Cli`] struct with subcommands [`Command`] (smoke, status)
//! and global flags (--base-url, --timeout, --verbose).

use clap::{Parser, Subcommand};

/// Integration-test client for the UP42 workflow and job API.
#[derive(Debug, Parser)]
#[command(name = "up42-qa", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the API base URL for this session.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Maximum seconds to wait for job completion.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose output.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the end-to-end workflow smoke scenario against the configured project.
    Smoke,

    /// Query the current status of a single job, once.
    Status {
        /// Id of the job to query.
        job_id: String,
    },
}
