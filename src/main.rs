//! `main.rs` contains the command-line interface for bluecite. It collects the
//! values and options, sets up the logger, assembles the configuration, and
//! passes the configuration to the main function.
#[macro_use]
extern crate slog;

use ansi_term::Color;
use bluecite::{
    config::{BlueciteCommand, BlueciteConfig, Emphasis, Format, Output},
    extraction::Extraction,
};
use clap::{crate_version, App, Arg, SubCommand};
use slog::{debug, Drain, Level};
use std::{fs::OpenOptions, process, sync::Mutex};

fn main() {
    // Get the command-line arguments and options
    let matches = App::new("bluecite")
        .version(crate_version!())
        .about("Builds Bluebook case citations from case-law viewer text")
        .arg(
            Arg::with_name("input")
                .value_name("INPUT FILE")
                .help("A JSON extraction file (blank builds from the field options)")
                .index(1)
                .required(false)
                .conflicts_with_all(&[
                    "case", "reporter", "info", "date", "url", "heading", "short",
                ]),
        )
        .arg(
            Arg::with_name("case")
                .long("case")
                .value_name("CASE NAME")
                .help("The full case name"),
        )
        .arg(
            Arg::with_name("reporter")
                .long("reporter")
                .value_name("REPORTER")
                .help("The reporter string as printed (e.g., \"158 N.E.3d 124, 126\")"),
        )
        .arg(
            Arg::with_name("info")
                .long("info")
                .value_name("FRAGMENT")
                .help("A document-info line: court, docket, or date (repeatable)")
                .takes_value(true)
                .multiple_occurrences(true),
        )
        .arg(
            Arg::with_name("date")
                .long("date")
                .value_name("DATE")
                .help("The full decision date"),
        )
        .arg(
            Arg::with_name("url")
                .long("url")
                .value_name("URL")
                .help("The source page"),
        )
        .arg(
            Arg::with_name("heading")
                .long("heading")
                .value_name("HEADING")
                .help("The page heading, used when nothing else identifies the case"),
        )
        .arg(
            Arg::with_name("short")
                .long("short")
                .value_name("SHORT NAME")
                .help("Replaces the derived short case name"),
        )
        .arg(
            Arg::with_name("court_map")
                .short('c')
                .long("court_map")
                .value_name("COURT MAP FILE")
                .help("A RON or JSON file mapping court names to citation forms"),
        )
        .arg(
            Arg::with_name("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("The output format")
                .possible_values(["text", "json", "yaml"])
                .global(true),
        )
        .arg(
            Arg::with_name("emphasis")
                .short('e')
                .long("emphasis")
                .value_name("EMPHASIS")
                .help("How case names are emphasized")
                .possible_values(["markdown", "html", "plain"])
                .global(true),
        )
        .arg(
            Arg::with_name("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT FILE")
                .help("The output file (blank outputs to terminal)")
                .global(true),
        )
        .arg(
            Arg::with_name("debug")
                .short('d')
                .long("debug")
                .takes_value(false)
                .help("Outputs debug log to bluecite-log.json")
                .hidden_short_help(true)
                .hidden_long_help(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short('v')
                .long("verbose")
                .value_name("NUMBER")
                .help("Verbosity level between 0 and 5")
                .hidden_short_help(true)
                .hidden_long_help(true)
                .default_value("1"),
        )
        .subcommand(SubCommand::with_name("cm").about("For creating a blank court-map file"))
        .subcommand(
            SubCommand::with_name("record")
                .about("Renders a saved (and possibly edited) JSON record")
                .arg(
                    Arg::with_name("record")
                        .value_name("RECORD FILE")
                        .help("The JSON record file")
                        .index(1)
                        .required(true),
                ),
        )
        .get_matches();

    // Setup the logger.
    //
    // If the debug flag is set, the log is also output to a file
    // `bluecite-log.json`.
    let debug = matches.is_present("debug");
    let min_log_level = match matches.value_of("verbose").unwrap_or("1") {
        "0" => Level::Critical,
        "1" => Level::Error,
        "2" => Level::Warning,
        "3" => Level::Info,
        "4" => Level::Debug,
        "5" => Level::Trace,
        _ => Level::Info,
    };

    let term_decorator = slog_term::TermDecorator::new().build();
    let term_drain = slog_term::CompactFormat::new(term_decorator).build().fuse();
    let term_drain = term_drain.filter_level(min_log_level).fuse();

    let _guard: slog_scope::GlobalLoggerGuard = if debug {
        // Setup the file AND terminal loggers
        let log_file = match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open("./bluecite-log.json")
        {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "{} Could not open the log file: {}",
                    Color::Red.paint("ERRO"),
                    e
                );
                process::exit(1);
            }
        };
        let file_drain = slog_json::Json::new(log_file)
            .set_pretty(true)
            .add_default_keys()
            .build()
            .fuse();
        let file_drain = file_drain.filter_level(Level::Trace).fuse();
        let dual_logger = slog::Logger::root(
            Mutex::new(slog::Duplicate(term_drain, file_drain)).fuse(),
            o!("version" => crate_version!()),
        );
        slog_scope::set_global_logger(dual_logger)
    } else {
        // Setup just the terminal logger
        let term_logger = slog::Logger::root(
            Mutex::new(term_drain).fuse(),
            o!("version" => crate_version!()),
        );
        slog_scope::set_global_logger(term_logger)
    };

    debug!(slog_scope::logger(), "Logger setup");

    // Setup the configuration variables.
    //
    // Global options given after a subcommand land in its matches.
    let options = match matches.subcommand() {
        Some((_, sub_matches)) => sub_matches,
        None => &matches,
    };
    let format = Format::from_name(options.value_of("format").unwrap_or("text"));
    let emphasis = Emphasis::from_name(options.value_of("emphasis").unwrap_or("markdown"));
    let output = options.value_of("output");
    let court_map = matches.value_of("court_map");

    // Subcommands, then the input file, then the field options
    let command = match matches.subcommand() {
        Some(("cm", _)) => BlueciteCommand::NewCourtMapFile,
        Some(("record", sub_matches)) => match sub_matches.value_of("record") {
            Some(r) => BlueciteCommand::Record(r),
            None => {
                eprintln!("{} No record file was given", Color::Red.paint("ERRO"));
                process::exit(1);
            }
        },
        _ => match matches.value_of("input") {
            Some(i) => BlueciteCommand::ExtractionFile(i),
            None => BlueciteCommand::ExtractionFields(Extraction {
                case_name: matches.value_of("case").unwrap_or_default().to_string(),
                reporter_raw: matches.value_of("reporter").unwrap_or_default().to_string(),
                info_fragments: matches
                    .values_of("info")
                    .map(|v| v.map(str::to_string).collect())
                    .unwrap_or_default(),
                full_date: matches.value_of("date").map(str::to_string),
                source_url: matches.value_of("url").unwrap_or_default().to_string(),
                heading: matches.value_of("heading").map(str::to_string),
                short_case_name: matches.value_of("short").map(str::to_string),
            }),
        },
    };

    // Deal with command-line errors.
    //
    // Refuse to overwrite the input file with the output.
    let input = match &command {
        BlueciteCommand::ExtractionFile(i) | BlueciteCommand::Record(i) => Some(*i),
        _ => None,
    };
    if output.is_some() && input == output {
        eprintln!(
            "{} The input file ({}) and output file ({}) are the same.",
            Color::Red.paint("ERRO"),
            Color::Blue.paint(input.unwrap_or_default()),
            Color::Blue.paint(output.unwrap_or_default())
        );
        process::exit(1);
    }

    let output_option = match output {
        Some(f) => Output::File(f),
        None => Output::StandardOut,
    };

    // Create the configuration
    let config = BlueciteConfig::new(command, output_option, format, emphasis, court_map);

    // Run the program.
    if let Err(e) = bluecite::bluecite(config) {
        error!(slog_scope::logger(), "{}", e);
        eprintln!("{} {}", Color::Red.paint("ERRO"), e);
        process::exit(1);
    }
}
