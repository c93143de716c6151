//! htmangl CLI - combine a template HTML file with a content HTML file
//!
//! ```text
//! $ htmangl template.html home_partial.html > home.html
//! ```

use clap::error::ErrorKind;
use clap::Parser;
use htmangl::{html, merge_files};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "htmangl")]
#[command(about = "Combine a template HTML file with a content HTML file")]
#[command(version)]
struct Cli {
    /// Template document supplying the page outline
    base: PathBuf,

    /// Content document merged into the template
    apply: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    htmangl::telemetry::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("htmangl: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let merged = merge_files(&cli.base, &cli.apply)?;

    // Render fully before writing so a failure leaves no partial output
    let mut rendered = Vec::new();
    html::render(&mut rendered, &merged).map_err(htmangl::Error::Write)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&rendered)
        .and_then(|()| stdout.flush())
        .map_err(htmangl::Error::Write)?;

    Ok(())
}
