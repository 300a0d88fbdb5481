//! CLI binary for inspecting and demonstrating debug patterns

use clap::{Parser, Subcommand};
use nsdebug::{emit, Emitter, PatternSet, VERSION};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nsd")]
#[command(about = "Namespace debug logging - pattern inspection and demo", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose internal logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Report which namespaces a pattern enables
    Check {
        /// Debug pattern, e.g. "*,-foo,bar:*"
        #[arg(short, long, env = "DEBUG")]
        pattern: String,

        /// Namespaces to evaluate
        #[arg(required = true)]
        namespaces: Vec<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit sample lines through a few demo namespaces
    Demo {
        /// Debug pattern to enable
        #[arg(short, long, default_value = "*")]
        pattern: String,
    },
}

#[derive(Serialize)]
struct CheckResult {
    namespace: String,
    enabled: bool,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let exit_code = run(cli).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        2
    });

    std::process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nsdebug=debug")
    } else {
        EnvFilter::new("nsdebug=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> nsdebug::Result<i32> {
    match cli.command {
        Command::Check {
            pattern,
            namespaces,
            json,
        } => check(&pattern, &namespaces, json),
        Command::Demo { pattern } => demo(&pattern),
    }
}

/// Evaluate each namespace against the pattern.
///
/// Exits 0 if at least one namespace is enabled, 1 otherwise.
fn check(pattern: &str, namespaces: &[String], json: bool) -> nsdebug::Result<i32> {
    let set = PatternSet::compile(pattern)?;

    let results: Vec<CheckResult> = namespaces
        .iter()
        .map(|ns| CheckResult {
            namespace: ns.clone(),
            enabled: set.allows(ns),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            let verdict = if result.enabled { "enabled" } else { "disabled" };
            println!("{} {}", result.namespace, verdict);
        }
    }

    Ok(if results.iter().any(|r| r.enabled) { 0 } else { 1 })
}

fn demo(pattern: &str) -> nsdebug::Result<i32> {
    nsdebug::enable(pattern);

    let server = Emitter::new("demo:server");
    let db = Emitter::new("demo:db");
    let cache = Emitter::new("demo:cache");

    emit!(server, "listening on port {}", 8080);

    for i in 0..3 {
        std::thread::sleep(Duration::from_millis(25));
        emit!(db, "query {} returned {} rows", i, 10 * (i + 1));
        std::thread::sleep(Duration::from_millis(5));
        emit!(cache, "hit ratio {:.2}", 0.93);
    }

    emit!(server, "shutting down");

    Ok(0)
}
