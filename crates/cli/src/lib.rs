//! Command-line harness for jus-report.
//!
//! Plays the host application's role: builds the runtime, sends method
//! calls over the bound channels and prints the responses.

mod commands;
mod util;

use clap::{Parser, Subcommand, ValueEnum};
use jus_report::CHANNEL_NAME;
use jus_report_runtime::Runtime;
use util::{CliResult, map_runtime_error};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "jus-report-cli", version, about = "Send method calls to the jus-report plugin")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the platform version over the jus_report channel.
    Version,
    /// Send an arbitrary method call and print its response.
    Call {
        /// Method name to invoke.
        method: String,
        /// Channel to send the call on.
        #[arg(long, default_value = CHANNEL_NAME)]
        channel: String,
        /// Optional JSON arguments for the call.
        #[arg(long)]
        args: Option<String>,
    },
    /// List bound channels and the methods they answer.
    Channels,
}

pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let runtime = Runtime::new().map_err(map_runtime_error)?;
    let output = match &cli.command {
        Command::Version => commands::version::run(&runtime, cli.format)?,
        Command::Call { method, channel, args } => {
            commands::call::run(&runtime, channel, method, args.as_deref(), cli.format)?
        }
        Command::Channels => commands::channels::run(&runtime, cli.format)?,
    };
    println!("{output}");
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn call_defaults_to_the_jus_report_channel() {
        let cli = Cli::try_parse_from(["jus-report-cli", "call", "getPlatformVersion"])
            .expect("parse");
        match cli.command {
            Command::Call { channel, method, args } => {
                assert_eq!(channel, CHANNEL_NAME);
                assert_eq!(method, "getPlatformVersion");
                assert_eq!(args, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
