//! `kvlock` command line
//!
//! | Command | Description |
//! |---------|-------------|
//! | `kvlock lock <KEY>` | Acquire a lock and print its token |
//! | `kvlock unlock <KEY> <TOKEN>` | Release a lock held with `TOKEN` |
//! | `kvlock providers` | List registered store providers |
//!
//! `lock` and `unlock` exit with a failure status when nothing was acquired
//! or released.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use kvlock_application::ports::registry::list_store_providers;
use kvlock_domain::{LockOptions, LockProtocol, LockProvider, LockToken};
use kvlock_infrastructure::logging::init_logging;
use kvlock_infrastructure::{AppConfig, ConfigLoader, LockContext, TimedOperation};
use tracing::info;

/// Command line interface for kvlock
#[derive(Parser, Debug)]
#[command(name = "kvlock")]
#[command(about = "Distributed locks over a shared key-value store")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Acquire a lock and print its token
    Lock {
        /// Lock key
        key: String,

        /// Maximum time the lock is held before it expires
        #[arg(long, value_name = "MS")]
        hold_ms: Option<u64>,

        /// Maximum time to wait for the lock
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,

        #[command(flatten)]
        protocol: ProtocolArg,
    },

    /// Release a lock
    Unlock {
        /// Lock key
        key: String,

        /// Token printed by `lock`
        token: String,

        #[command(flatten)]
        protocol: ProtocolArg,
    },

    /// List registered store providers
    Providers,
}

/// Protocol override shared by `lock` and `unlock`
#[derive(Args, Debug, Clone, Copy)]
pub struct ProtocolArg {
    /// Lock protocol (scripted or get-set), defaults to the configured one
    #[arg(long)]
    pub protocol: Option<LockProtocol>,
}

impl Cli {
    /// Load configuration, apply command line overrides and run the command
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match &self.command {
            Command::Providers => {
                for (name, description) in list_store_providers() {
                    println!("{name}\t{description}");
                }
                Ok(ExitCode::SUCCESS)
            }
            Command::Lock {
                key,
                hold_ms,
                timeout_ms,
                protocol,
            } => {
                let provider = self.lock_provider(*protocol)?;
                let mut options = LockOptions::new();
                if let Some(ms) = *hold_ms {
                    options = options.with_hold_millis(ms);
                }
                if let Some(ms) = *timeout_ms {
                    options = options.with_acquire_timeout_millis(ms);
                }

                let timer = TimedOperation::start();
                match provider.try_lock(key, options).await {
                    Some(token) => {
                        info!(key = %key, elapsed_ms = timer.elapsed_ms(), "Acquired from command line");
                        println!("{token}");
                        Ok(ExitCode::SUCCESS)
                    }
                    None => {
                        eprintln!("lock '{key}' not acquired after {} ms", timer.elapsed_ms());
                        Ok(ExitCode::FAILURE)
                    }
                }
            }
            Command::Unlock {
                key,
                token,
                protocol,
            } => {
                let provider = self.lock_provider(*protocol)?;
                if provider.unlock(key, &LockToken::new(token.as_str())).await {
                    Ok(ExitCode::SUCCESS)
                } else {
                    eprintln!("lock '{key}' was not held with this token");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }

    fn lock_provider(&self, protocol: ProtocolArg) -> anyhow::Result<Arc<dyn LockProvider>> {
        let mut config = self.load_config()?;
        init_logging(config.logging.clone()).context("Failed to initialize logging")?;
        protocol.apply(&mut config);
        let context = LockContext::from_config(config).context("Failed to build lock context")?;
        Ok(context.lock_provider())
    }

    /// Configuration from the `--config` file (or default locations) and environment
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        };
        loader.load().context("Failed to load configuration")
    }
}

impl ProtocolArg {
    fn apply(self, config: &mut AppConfig) {
        if let Some(protocol) = self.protocol {
            config.lock.protocol = protocol;
        }
    }
}
