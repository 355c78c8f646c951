//! `club-events` CLI — list, highlight and filter the club's events.
//!
//! ## Usage
//!
//! ```sh
//! # Sorted listing with date labels and status
//! club-events -i events.json list
//!
//! # The one event that gets "Register Now"
//! club-events -i events.json highlight
//!
//! # Next three events, as JSON
//! club-events -i events.json --json upcoming -n 3
//!
//! # Events tagged with anything containing "python"
//! club-events -i events.json tag python
//!
//! # Pin the clock and zone (default: host local time)
//! club-events -i events.json --now 2025-09-01T09:00:00 list
//! club-events -i events.json --timezone America/Chicago cards
//! ```

use std::io::{self, IsTerminal, Read};

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Parser, Subcommand};
use event_engine::{Event, DEFAULT_UPCOMING_COUNT};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "club-events",
    version,
    about = "Club event listing, highlight and filter tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Events JSON file (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Local wall-clock time to evaluate against (YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
    #[arg(long, global = true)]
    now: Option<String>,

    /// IANA time zone used to read the current time (ignored with --now)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Print event lists as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease log verbosity (-q warn, -qq error)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// All active events: one-off by date, then weekly series by next occurrence
    List,
    /// The soonest one-off event that has not passed
    Highlight,
    /// The first N events of the sorted listing
    Upcoming {
        /// How many events to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_UPCOMING_COUNT)]
        count: usize,
    },
    /// Active events with a tag containing TAG (case-insensitive)
    Tag {
        tag: String,
    },
    /// Date label and status of a single event by title
    Status {
        title: String,
    },
    /// Event card view models as JSON
    Cards,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let now = resolve_now(cli.now.as_deref(), cli.timezone.as_deref())?;
    let json = read_input(cli.input.as_deref())?;
    let events = event_engine::load_events(&json).context("Failed to load events")?;
    info!(count = events.len(), %now, "evaluating events");

    match cli.command {
        Commands::List => {
            let sorted = event_engine::sort_events_by_date(&events, now);
            print_events(&sorted, now, cli.json)?;
        }
        Commands::Highlight => match event_engine::next_highlight_event(&events, now) {
            Some(event) => print_events(&[event], now, cli.json)?,
            None if cli.json => println!("null"),
            None => println!("No upcoming one-off event."),
        },
        Commands::Upcoming { count } => {
            let upcoming = event_engine::upcoming_events(&events, count, now);
            print_events(&upcoming, now, cli.json)?;
        }
        Commands::Tag { tag } => {
            let matched = event_engine::filter_events_by_tag(&events, &tag);
            debug!(tag = %tag, matched = matched.len(), "tag filter");
            print_events(&matched, now, cli.json)?;
        }
        Commands::Status { title } => {
            let event = events
                .iter()
                .find(|e| e.title == title)
                .ok_or_else(|| anyhow!("No event titled '{}'", title))?;
            print_status(event, now, cli.json)?;
        }
        Commands::Cards => {
            let cards = event_engine::build_event_cards(&events, now);
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8, quiet: u8) -> Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

/// Resolve the local wall-clock "now" from `--now`, `--timezone`, or the host.
fn resolve_now(now: Option<&str>, timezone: Option<&str>) -> Result<NaiveDateTime> {
    if let Some(raw) = now {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Ok(parsed);
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }
        bail!(
            "Invalid --now '{}': expected YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
            raw
        );
    }

    match timezone {
        Some(name) => {
            let tz: Tz = name
                .parse()
                .map_err(|_| anyhow!("Unknown time zone: '{}'", name))?;
            Ok(Utc::now().with_timezone(&tz).naive_local())
        }
        None => Ok(Local::now().naive_local()),
    }
}

fn print_events(events: &[&Event], now: NaiveDateTime, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(events)?);
        return Ok(());
    }
    for event in events {
        println!(
            "{} | {} | {}",
            event.title,
            event_engine::display_date(event, now),
            event_engine::event_status(event, now)
        );
    }
    Ok(())
}

fn print_status(event: &Event, now: NaiveDateTime, json: bool) -> Result<()> {
    let label = event_engine::display_date(event, now);
    let status = event_engine::event_status(event, now);
    let next = event_engine::next_occurrence(event, now);

    if json {
        let value = serde_json::json!({
            "title": event.title,
            "displayDate": label.as_str(),
            "status": status,
            "today": event_engine::is_event_today(event, now),
            "passed": event_engine::has_event_passed(event, now),
            "thisWeek": event_engine::is_event_this_week(event, now),
            "nextOccurrence": next.map(|d| d.format("%Y-%m-%d").to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Title:      {}", event.title);
    println!("Date:       {}", label);
    println!("Status:     {}", status);
    println!(
        "This week:  {}",
        if event_engine::is_event_this_week(event, now) {
            "yes"
        } else {
            "no"
        }
    );
    if let Some(next) = next {
        println!("Next:       {}", next.format("%Y-%m-%d"));
    }
    Ok(())
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
