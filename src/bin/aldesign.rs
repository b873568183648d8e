//! Command-line interface for aldesign
//! Parses AL object files into symbol trees and prints them in different formats.
//!
//! Usage:
//!   aldesign parse `<path>` [--format `<format>`] [--properties] [--config `<file>`]  - Print the symbol tree
//!   aldesign summary `<path>`                                      - Print type, name and fields
//!   aldesign list-formats                                          - List output formats

use aldesign::al::config::{AlConfig, Loader};
use aldesign::al::error::{AlError, AlResult};
use aldesign::al::formats::FormatRegistry;
use aldesign::al::pipeline::{read_source, ObjectParser};
use aldesign::al::summary::summarize;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("aldesign")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse AL object definitions into symbol trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse an object and print its symbol tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the .al file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'treeviz', 'json', 'yaml')"),
                )
                .arg(
                    Arg::new("properties")
                        .long("properties")
                        .short('p')
                        .action(ArgAction::SetTrue)
                        .help("Include region properties in treeviz output"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Print object type, name and field names without building the tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the .al file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    if let Err(e) = run(&matches) {
        error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> AlResult<()> {
    let config = load_config(matches)?;
    init_tracing(&config);

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches, &config),
        Some(("summary", summary_matches)) => handle_summary_command(summary_matches),
        Some(("list-formats", _)) => handle_list_formats_command(&config),
        _ => unreachable!(),
    }
}

/// Defaults, then `--config`, then the `parse` flags as overrides.
fn load_config(matches: &ArgMatches) -> AlResult<AlConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(("parse", parse_matches)) = matches.subcommand() {
        if let Some(format) = parse_matches.get_one::<String>("format") {
            loader = loader.set_override("output.format", format.as_str())?;
        }
        if parse_matches.get_flag("properties") {
            loader = loader.set_override("output.show_properties", true)?;
        }
    }
    Ok(loader.build()?)
}

fn init_tracing(config: &AlConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &AlConfig) -> AlResult<()> {
    let Some(path) = matches.get_one::<String>("path") else {
        unreachable!("path is required")
    };

    let parsed = ObjectParser::from_config(config).parse_file(path)?;
    for diagnostic in &parsed.diagnostics {
        eprintln!("{}: {}", path, diagnostic);
    }

    let output = FormatRegistry::from_config(&config.output)
        .serialize(&parsed.object, &config.output.format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the summary command
fn handle_summary_command(matches: &ArgMatches) -> AlResult<()> {
    let Some(path) = matches.get_one::<String>("path") else {
        unreachable!("path is required")
    };
    let source = read_source(path)?;
    let summary = summarize(&source).ok_or_else(|| AlError::NoObject {
        path: PathBuf::from(path),
    })?;

    println!("{} {} {}", summary.object_type, summary.id, summary.name);
    if !summary.sub_type.is_empty() {
        println!("  type: {}", summary.sub_type);
    }
    for field in &summary.fields {
        println!("  field: {}", field);
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &AlConfig) -> AlResult<()> {
    let registry = FormatRegistry::from_config(&config.output);
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let marker = if name == config.output.format {
            " (default)"
        } else {
            ""
        };
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}{}", name, marker);
        println!("    {}", description);
    }
    Ok(())
}
