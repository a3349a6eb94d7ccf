//! Cricket match simulator CLI.
//!
//! Usage:
//!   crease [OPTIONS]
//!
//! Examples:
//!   crease                        # Built-in CSK vs MI, 2 overs
//!   crease --seed 42 -o 5         # Reproducible 5-over match
//!   crease -r setup.json --json   # Custom rosters, save JSON report

use crease::build_info;
use crease::simulator::{run_simulation, SimConfig};
use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::path::Path;
use std::process::ExitCode;

/// Writes log records to stderr so they never mix with the narration.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'crease --help' for usage.");
            return ExitCode::from(2);
        }
    };

    init_logging(config.verbosity);

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Match aborted: {}", err);
            eprintln!("Match aborted: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if config.verbosity == 0 {
        println!("{}", report.summary_text());
    } else {
        println!("{}", report.to_text());
    }

    if config.json {
        match report.write_json(Path::new(".")) {
            Ok(path) => println!("JSON report saved to: {}", path.display()),
            Err(err) => {
                eprintln!("Failed to write JSON report: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// `Ok(None)` means the request was fully handled (help or version).
fn parse_args(args: &[String]) -> Result<Option<SimConfig>, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, &mut i)?);
            }
            "-o" | "--overs" => {
                config.total_overs = Some(parse_value(args, &mut i)?);
            }
            "-r" | "--rosters" => {
                config.setup_path = Some(parse_value::<String>(args, &mut i)?.into());
            }
            "--json" => {
                config.json = true;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-v" | "--verbose" => {
                config.verbosity = config.verbosity.max(1).saturating_add(1);
            }
            flag if flag.starts_with("-vv") && flag[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.max(1).saturating_add(count);
            }
            "--version" => {
                println!("{}", build_info::version_line());
                return Ok(None);
            }
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = &args[*i];
    let raw = args
        .get(*i + 1)
        .ok_or_else(|| format!("{} needs a value", flag))?;
    *i += 1;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn print_help() {
    println!("Crease - Cricket Match Simulator");
    println!();
    println!("USAGE:");
    println!("    crease [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -o, --overs <N>     Overs per innings (default: 2)");
    println!("    -r, --rosters <F>   Load teams and field from a JSON setup file");
    println!("    --json              Save JSON report");
    println!("    -q, --quiet         Print the result only");
    println!("    -v, --verbose       Engine logs on stderr (-vv debug, -vvv trace)");
    println!("    --version           Show version information");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    crease                          # CSK vs MI, 2 overs");
    println!("    crease --seed 42 -o 5           # Reproducible 5-over match");
    println!("    crease -r setup.json --json     # Custom rosters with JSON report");
}
