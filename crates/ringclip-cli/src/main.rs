//! ringclip - clip, union and inspect multi-ring polygons from the command line
//!
//! Usage:
//!   ringclip clip <subject.json> <boundary.json> [--outside]
//!   ringclip hull <input.json>
//!   ringclip overlap <a.json> <b.json>
//!   ringclip import <file.svg>
//!
//! Polygon files are JSON documents of the form `{"polygons": [...]}`.
//! Logs go to stderr (`RUST_LOG` or `--verbose`), results to stdout or `-o`.

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::common::OutputArgs;

#[derive(Parser)]
#[command(name = "ringclip", version)]
#[command(about = "Clip and combine multi-ring polygons")]
struct Cmd {
    /// Log progress at info level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Clip every subject polygon's outline against the boundary polygons
    Clip {
        subject: PathBuf,
        boundary: PathBuf,
        /// Keep the parts outside the boundary instead of inside
        #[arg(long)]
        outside: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Union boundary of all polygons in a file
    Hull {
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print whether the first polygons of two files overlap
    Overlap { a: PathBuf, b: PathBuf },
    /// Convert the paths of an SVG file to polygon JSON
    Import {
        svg: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);

    match cmd.action {
        Action::Clip { subject, boundary, outside, output } => cli::cmd_clip(&subject, &boundary, outside, &output),
        Action::Hull { input, output } => cli::cmd_hull(&input, &output),
        Action::Overlap { a, b } => cli::cmd_overlap(&a, &b),
        Action::Import { svg, output } => cli::cmd_import(&svg, &output),
    }
}

/// stderr only, so stdout stays clean for SVG/JSON
fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
