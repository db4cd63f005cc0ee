//! # sectfig repair demo
//!
//! Loads (and if needed repairs) a configuration file, then prints the
//! outcome. Edit the file between runs to see missing, invalid and undeclared
//! settings being reported and fixed.
//!
//! ## Running
//!
//! | What                     | Command                                                        |
//! |--------------------------|----------------------------------------------------------------|
//! | Load and repair          | `cargo run --example repair_demo -- demo.toml`                 |
//! | Load only, never write   | `cargo run --example repair_demo -- demo.toml --check`         |
//! | Outcome as JSON          | `cargo run --example repair_demo -- demo.toml --json`          |
//! | Undeclared keys invalid  | `cargo run --example repair_demo -- demo.toml --strict`        |
//! | Debug logging            | `RUST_LOG=debug cargo run --example repair_demo -- demo.toml`  |

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sectfig::{ConfigError, ConfigFile};

use config::DemoConfig;

/// sectfig repair demo: load a configuration file and report what it holds.
#[derive(Parser, Debug)]
#[command(name = "repair-demo")]
struct Cli {
    /// Configuration file to load. Created with defaults if absent.
    path: PathBuf,

    /// Only load and report; never back up or rewrite the file.
    #[arg(long)]
    check: bool,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Treat undeclared keys as making the file invalid.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let mut file = ConfigFile::builder(DemoConfig::default())
        .path(cli.path.clone())
        .strict(cli.strict)
        .build();

    let outcome = if cli.check {
        file.load(None)?
    } else {
        file.load_and_repair(None, true)?
    };

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("error: could not serialize outcome: {e}"),
        }
    } else {
        println!("{outcome}");
    }

    let config = file.schema();
    println!(
        "\nserver: {}:{} (max {} connections, origins: {})",
        config.server.host,
        config.server.port,
        config.server.max_connections,
        config.server.allowed_origins.join(", ")
    );
    println!(
        "display: color={} verbose={}",
        config.display.color, config.display.verbose
    );
    Ok(())
}
