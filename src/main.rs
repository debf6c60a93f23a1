use std::{io, process};

use clap::{ArgAction, Parser};
use int_bst::{Key, Tree, TreeError};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Builds a binary search tree, prints it, removes keys from it and prints it again.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Keys to insert, in order
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [10, 8, 6, 14, 16, 12, 11, 9]
    )]
    insert: Vec<Key>,

    /// Keys to remove once the tree is built. The tree is printed after each removal
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [8]
    )]
    remove: Vec<Key>,

    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

/// Everything that can stop the demo. Reported once, from `main`.
#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("failed to print tree: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("\n[ERR] {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let mut tree = Tree::from_keys(cli.insert.iter().copied())?;
    info!(count = tree.count(), height = tree.height(), "tree built");
    tree.print()?;

    for &key in &cli.remove {
        let removed = tree.remove(key);
        debug!(key, removed, count = tree.count());
        tree.print()?;
    }

    println!();
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // `RUST_LOG` wins over the flag when set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
