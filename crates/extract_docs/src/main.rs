// crates/extract_docs/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::env;

use extract_docs::extract_docs;

fn main() {
    let matches = Command::new("tsdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the triple-slash documentation of the Go sources under the current folder")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

/// RUST_LOG wins when set; otherwise `--verbose` picks debug over warn.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<()> {
    let pwd = env::current_dir().context("Cannot get present folder")?;
    let doc = extract_docs(&pwd, true).with_context(|| {
        format!(
            "Error creating of documentation from folder `{}`",
            pwd.display()
        )
    })?;
    println!("{}", doc);
    Ok(())
}
