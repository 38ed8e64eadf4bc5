//! kvlock - Entry Point
//!
//! Binary entry point for the `kvlock` command line. Lives in the facade
//! crate next to the library so the command definitions stay testable.

// Force-link kvlock-providers to ensure linkme registrations are included
extern crate kvlock_providers;

use std::process::ExitCode;

use clap::Parser;
use kvlock::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    Cli::parse().run().await
}
