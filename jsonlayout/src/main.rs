use clap::{Parser, Subcommand};
use jsonlayout_core::cli;
use jsonlayout_core::cli::stream::EventKind;
use jsonlayout_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jsonlayout",
    version,
    about = "jsonlayout: project log and access events into JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project application log events read from stdin
    Log {
        /// Path to the layout config file
        #[arg(long, default_value = "config/layouts.hcl")]
        config: PathBuf,
    },

    /// Project HTTP access events read from stdin
    Access {
        #[arg(long, default_value = "config/layouts.hcl")]
        config: PathBuf,
    },

    /// Validate a layout config file
    Check {
        #[arg(long, default_value = "config/layouts.hcl")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Log { config } => {
            init_logging();
            cli::stream::run_stream(EventKind::Log, &config).map(|_| ())
        }

        Command::Access { config } => {
            init_logging();
            cli::stream::run_stream(EventKind::Access, &config).map(|_| ())
        }

        Command::Check { config } => cli::check::check(&config),
    };

    if let Err(e) = result {
        eprintln!("jsonlayout error: {e:#}");
        std::process::exit(1);
    }
}
