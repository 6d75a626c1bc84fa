//! mdsplice CLI - regenerate directive blocks in markdown files.
//!
//! Walks a directory tree for markdown files and rewrites the block under
//! each `<!-- |command,... -->` directive:
//! - `insert`: contents of another file, as a code block or comment
//! - `toc`: table of contents of the headings below
//! - `documentation`: the directive reference

mod error;
mod output;
mod update;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use output::Output;
use update::{Status, UpdateArgs};

/// mdsplice - splice generated content into markdown.
#[derive(Parser)]
#[command(name = "mdsplice", version, about)]
struct Cli {
    #[command(flatten)]
    args: UpdateArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.args.execute(&output) {
        Ok(Status::Clean) => {}
        Ok(Status::Stale) => std::process::exit(1),
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
