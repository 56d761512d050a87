//! pkgstitch CLI - reassemble a package from its piece manifest
//!
//! ```text
//! pkgstitch [-o PATH] URL
//! ```
//!
//! `URL` is a manifest URL, or a package URL with a known suffix that is
//! rewritten to the manifest next to it.

mod commands;
mod error;
mod logging;
mod progress;

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};

use commands::fetch::{self, FetchArgs};
use progress::ConsoleProgress;

#[derive(Parser)]
#[command(name = "pkgstitch", version, about, long_about = None)]
struct Cli {
    /// Save the assembled file to PATH
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Manifest URL, or a package URL ending in _sc.pkg, -DP.pkg or _0.pkg
    url: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let Some(url) = cli.url else {
        // Missing URL prints usage and exits non-zero; a broken stdout
        // does not change the exit code.
        Cli::command().print_help().ok();
        println!();
        process::exit(1);
    };

    let bar = progress::status_bar();

    if let Err(e) = logging::init(cli.verbose, &bar) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let args = FetchArgs {
        url,
        output: cli.output,
        user_agent: cli.user_agent,
    };

    if let Err(e) = fetch::run(args, ConsoleProgress::new(bar)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
