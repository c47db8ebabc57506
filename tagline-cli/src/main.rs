//! Command-line interface for tagline
//! This binary converts tagline shorthand files into HTML.
//!
//! Usage:
//!   tagline `<path>` [--output `<file>`] [--config `<file>`] [--format html|json] [--strict]
//!
//! The HTML goes to stdout unless `--output` is given. Logs go to stderr and
//! are controlled by `RUST_LOG` (or `--verbose`).

use clap::{Arg, ArgAction, ArgMatches, Command};
use tagline_config::{Loader, TaglineConfig};
use tagline_parser::{DepthPolicy, DocumentLoader, LinePolicy, LoaderError};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("tagline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert indentation-based tag shorthand into HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the shorthand source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["html", "json"])
                .default_value("html"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on unrecognized lines and malformed indentation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parsing details to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    let output = matches.get_one::<String>("output");

    if let Err(e) = handle_convert_command(path, format, output.map(String::as_str), config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer the user's config file and command-line overrides over the defaults
fn load_config(matches: &ArgMatches) -> Result<TaglineConfig, Box<dyn std::error::Error>> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    let mut config = loader.build()?;
    if matches.get_flag("strict") {
        config.parsing.unrecognized_lines = LinePolicy::Reject;
        config.parsing.depth = DepthPolicy::Reject;
    }
    Ok(config)
}

/// Handle the convert command
fn handle_convert_command(
    path: &str,
    format: &str,
    output: Option<&str>,
    config: TaglineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let loader = DocumentLoader::from_path(path)?
        .with_parse_options(config.parsing)
        .with_render_options(config.rendering);

    match (format, output) {
        ("json", out) => {
            let doc = loader.parse_document()?;
            let json = serde_json::to_string_pretty(&doc)?;
            match out {
                Some(out) => std::fs::write(out, &json)
                    .map_err(|e| LoaderError::IoError(format!("cannot write {}: {}", out, e)))?,
                None => print!("{}", json),
            }
        }
        (_, Some(out)) => loader.write_html(out)?,
        (_, None) => print!("{}", loader.to_html()?),
    }
    if let Some(out) = output {
        tracing::info!(output = out, "wrote result");
    }
    Ok(())
}
