//! Command-line interface for promptlist
//! This binary edits checklist documents and renders their preview from the shell.
//!
//! Usage:
//!   promptlist preview `<path>` [--separator `<s>`] [--newline] ...  - Render the active phrases
//!   promptlist toggle `<path>` `<line>`                            - Switch one line on or off
//!   promptlist weight `<path>` `<line>` (--up | --down | --delta `<d>`) - Step a line's weight
//!   promptlist toggle-group `<path>` `<name>`                      - Switch a whole group
//!   promptlist groups `<path>` [--json]                            - List groups with their status
//!   promptlist entries `<path>` [--json]                           - Show the checklist rows
//!
//! `<path>` may be `-` to read the document from stdin.

use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use log::LevelFilter;
use promptlist::checklist::{document, groups, preview, transform, Error, Result};
use promptlist::config::Loader;
use std::io::Read;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the checklist document, or '-' for stdin")
        .required(true)
        .index(1)
}

fn in_place_arg() -> Arg {
    Arg::new("in-place")
        .long("in-place")
        .short('i')
        .help("Rewrite the file instead of printing the new document")
        .action(ArgAction::SetTrue)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print JSON instead of plain text")
        .action(ArgAction::SetTrue)
}

fn line_arg() -> Arg {
    Arg::new("line")
        .help("Zero-based line index")
        .required(true)
        .index(2)
        .value_parser(value_parser!(usize))
}

fn build_cli() -> Command {
    Command::new("promptlist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Edit prompt checklists and render their preview")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log engine decisions to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("preview")
                .about("Render the active phrases as one string")
                .arg(path_arg())
                .arg(
                    Arg::new("separator")
                        .long("separator")
                        .short('s')
                        .allow_hyphen_values(true)
                        .help("Text placed between phrases"),
                )
                .arg(
                    Arg::new("newline")
                        .long("newline")
                        .help("Append a line break to the preview")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("separator-newline")
                        .long("separator-newline")
                        .help("Follow every separator with a line break")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("trailing-separator")
                        .long("trailing-separator")
                        .help("Append one separator after the last phrase")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .allow_hyphen_values(true)
                        .help("Line emitted before the phrases"),
                ),
        )
        .subcommand(
            Command::new("toggle")
                .about("Switch one line between active and deactivated")
                .arg(path_arg())
                .arg(line_arg())
                .arg(in_place_arg()),
        )
        .subcommand(
            Command::new("weight")
                .about("Step the weight of one line")
                .arg(path_arg())
                .arg(line_arg())
                .arg(
                    Arg::new("up")
                        .long("up")
                        .help("Increase by the configured step")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("down")
                        .long("down")
                        .help("Decrease by the configured step")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("delta")
                        .long("delta")
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64))
                        .help("Explicit weight delta, e.g. -0.3"),
                )
                .group(
                    ArgGroup::new("direction")
                        .args(["up", "down", "delta"])
                        .required(true),
                )
                .arg(in_place_arg()),
        )
        .subcommand(
            Command::new("toggle-group")
                .about("Switch every line of a group")
                .arg(path_arg())
                .arg(
                    Arg::new("name")
                        .help("Group name (case-sensitive)")
                        .required(true)
                        .index(2),
                )
                .arg(in_place_arg()),
        )
        .subcommand(
            Command::new("groups")
                .about("List groups with their status")
                .arg(path_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("entries")
                .about("Show one row per phrase line")
                .arg(path_arg())
                .arg(json_arg()),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        log::debug!("layering configuration from {}", path);
        loader = loader.with_file(path);
    }

    match matches.subcommand() {
        Some(("preview", sub)) => handle_preview_command(sub, loader),
        Some(("toggle", sub)) => {
            let index = *sub.get_one::<usize>("line").expect("line is required");
            handle_edit_command(sub, |doc| transform::toggle_line(doc, index))
        }
        Some(("weight", sub)) => {
            let index = *sub.get_one::<usize>("line").expect("line is required");
            let delta = weight_delta(sub, loader)?;
            handle_edit_command(sub, |doc| transform::adjust_line_weight(doc, index, delta))
        }
        Some(("toggle-group", sub)) => {
            let name = sub.get_one::<String>("name").expect("name is required");
            handle_edit_command(sub, |doc| groups::toggle_group(doc, name))
        }
        Some(("groups", sub)) => handle_groups_command(sub),
        Some(("entries", sub)) => handle_entries_command(sub),
        _ => unreachable!(),
    }
}

fn read_document(path: &str) -> Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| Error::io("<stdin>", e))?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }
}

fn weight_delta(matches: &ArgMatches, loader: Loader) -> Result<f64> {
    if let Some(delta) = matches.get_one::<f64>("delta") {
        return Ok(*delta);
    }
    let step = loader.build()?.weight.step;
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "weight.step must be a positive number, got {}",
            step
        )));
    }
    Ok(if matches.get_flag("up") { step } else { -step })
}

/// Apply a document rewrite and print the result or store it back.
fn handle_edit_command<F>(matches: &ArgMatches, edit: F) -> Result<()>
where
    F: FnOnce(&str) -> String,
{
    let path = matches.get_one::<String>("path").expect("path is required");
    let source = read_document(path)?;
    let updated = edit(&source);

    if matches.get_flag("in-place") {
        if path == "-" {
            return Err(Error::InvalidArgument(
                "--in-place needs a file path, not stdin".to_string(),
            ));
        }
        if updated != source {
            std::fs::write(path, &updated).map_err(|e| Error::io(path.as_str(), e))?;
        }
        log::debug!("wrote {} bytes to {}", updated.len(), path);
    } else {
        print!("{}", updated);
    }
    Ok(())
}

fn handle_preview_command(matches: &ArgMatches, mut loader: Loader) -> Result<()> {
    if let Some(separator) = matches.get_one::<String>("separator") {
        loader = loader.set_override("preview.separator", separator.as_str())?;
    }
    for (flag, key) in [
        ("newline", "preview.add_newline"),
        ("separator-newline", "preview.separator_newline"),
        ("trailing-separator", "preview.trailing_separator"),
    ] {
        if matches.get_flag(flag) {
            loader = loader.set_override(key, true)?;
        }
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        loader = loader.set_override("preview.prefix", prefix.as_str())?;
    }

    let options = loader.build()?.preview;
    let path = matches.get_one::<String>("path").expect("path is required");
    let source = read_document(path)?;
    print!("{}", preview::render_preview(&source, &options));
    Ok(())
}

fn handle_groups_command(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("path").expect("path is required");
    let summaries = document::group_summaries(&read_document(path)?);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for summary in summaries {
        println!("{}\t{}", summary.name, summary.status);
    }
    Ok(())
}

fn handle_entries_command(matches: &ArgMatches) -> Result<()> {
    let path = matches.get_one::<String>("path").expect("path is required");
    let entries = document::entries(&read_document(path)?);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in entries {
        for caption in &entry.captions {
            println!("      # {}", caption);
        }
        let check = if entry.active { "x" } else { " " };
        let mut row = format!("{:>4} [{}] {}", entry.index, check, entry.text);
        if !entry.weight_label.is_empty() {
            row.push_str(&format!(" ({})", entry.weight_label));
        }
        if !entry.groups.is_empty() {
            row.push_str(&format!(" {{{}}}", entry.groups.join(", ")));
        }
        println!("{}", row);
    }
    Ok(())
}
