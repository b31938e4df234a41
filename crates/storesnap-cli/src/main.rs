//! Storesnap CLI - dump record stores to one deterministic JSON document.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{digest, dump, list};

#[derive(Parser)]
#[command(name = "storesnap")]
#[command(about = "Dump record stores to canonical JSON for diffing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump a store to a canonical JSON document
    Dump {
        /// Path to the store description file
        store: String,
        /// Output file (stdout if not provided)
        #[arg(long, short)]
        output: Option<String>,
        /// Omit the legacy "dummy" placeholder member
        #[arg(long)]
        no_placeholder: bool,
    },
    /// List entries in a store
    List {
        /// Path to the store description file
        store: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the SHA-256 digest of a store's canonical document
    Digest {
        /// Path to the store description file
        store: String,
        /// Omit the legacy "dummy" placeholder member
        #[arg(long)]
        no_placeholder: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dump {
            store,
            output,
            no_placeholder,
        } => dump::run(store, output, no_placeholder),
        Commands::List { store, json } => list::run(store, json),
        Commands::Digest {
            store,
            no_placeholder,
        } => digest::run(store, no_placeholder),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
