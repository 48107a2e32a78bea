//! `find-meeting` CLI -- find shared free slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for the request in the document (stdin → stdout, JSON)
//! find-meeting query < day.json
//!
//! # Human-readable slots, reading from a file
//! find-meeting query -i day.json --format text
//!
//! # Refuse zero-length meetings
//! find-meeting query -i day.json --strict
//!
//! # Merged busy time of some attendees
//! find-meeting busy -i day.json --attendee alice --attendee bob
//!
//! # Trace the fallback decision on stderr
//! find-meeting --debug query -i day.json
//! ```
//!
//! The input document is `{ "events": [...], "request": {...} }`; see
//! `meeting_query::input` for the format.

use std::collections::BTreeSet;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_query::{
    busy_intervals, parse_query_input, Attendance, FindMeetingQuery, QueryOutcome, TimeRange,
};
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find shared free meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot that fits the document's meeting request
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Reject requests with a zero-minute duration
        #[arg(long)]
        strict: bool,
    },
    /// Show the merged busy time of the given attendees
    Busy {
        /// Attendee to include (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    Json,
    /// One `HH:MM-HH:MM (N min)` line per range
    Text,
}

#[derive(Serialize)]
struct BusyOutput<'a> {
    attendees: &'a BTreeSet<String>,
    busy: &'a [TimeRange],
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    // stdout carries results, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            input,
            output,
            format,
            strict,
        } => {
            let json = read_input(input.as_deref())?;
            let document = parse_query_input(&json).context("Failed to parse query document")?;
            let request = document
                .request
                .context("Query document has no \"request\" section")?;
            if strict {
                request.validate().context("Rejected meeting request")?;
            }

            debug!(
                events = document.events.len(),
                duration = request.duration,
                "running meeting query"
            );
            let outcome = FindMeetingQuery::new().query_outcome(&document.events, &request);

            let rendered = match format {
                Format::Json => render_json(&outcome)?,
                Format::Text => render_outcome(&outcome),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            attendees,
            input,
            output,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let document = parse_query_input(&json).context("Failed to parse query document")?;
            let attendees: BTreeSet<String> = attendees.into_iter().collect();

            let busy = busy_intervals(&document.events, &attendees);

            let rendered = match format {
                Format::Json => render_json(&BusyOutput {
                    attendees: &attendees,
                    busy: &busy,
                })?,
                Format::Text => render_ranges(&busy, "no busy time"),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn render_outcome(outcome: &QueryOutcome) -> String {
    let slots = render_ranges(&outcome.slots, "no available slot");
    if outcome.attendance == Attendance::RequiredOnly {
        format!("# optional attendees could not be included\n{}", slots)
    } else {
        slots
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

fn render_ranges(ranges: &[TimeRange], empty: &str) -> String {
    if ranges.is_empty() {
        return format!("{}\n", empty);
    }
    ranges
        .iter()
        .map(|r| format!("{} ({} min)\n", r, r.duration()))
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
