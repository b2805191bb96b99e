//! FILENAME: app/dashboard/src/cli.rs
// PURPOSE: Command-line front end.
// CONTEXT: Prints the initial view as one JSON line, then applies JSON-lines
// interaction events from a file or stdin, printing the notification and the
// re-rendered view after each.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::AppError;
use crate::events::InteractionEvent;
use crate::session::RenderedView;
use crate::{create_app_state, log_info, log_warn, logging, AppState};

pub const DEFAULT_CONFIG: &str = "dashboard.json";

pub const USAGE: &str = "\
Usage: dashboard [OPTIONS]

Options:
  --config PATH    Dashboard config (default: dashboard.json)
  --details PATH   Order details table, .csv or .xlsx
  --orders PATH    Orders table, .csv or .xlsx
  --adapter NAME   echarts | plotly | vega-lite
  --events PATH    JSON-lines interaction events (default: stdin)
  --log PATH       Write the log to PATH as well as stderr
  -h, --help       Show this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub details: Option<PathBuf>,
    pub orders: Option<PathBuf>,
    pub adapter: Option<String>,
    pub events: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub help: bool,
}

impl CliArgs {
    /// Command-line values override the config file.
    pub fn apply(&self, config: &mut DashboardConfig) {
        if let Some(path) = &self.details {
            config.details_path = path.clone();
        }
        if let Some(path) = &self.orders {
            config.orders_path = path.clone();
        }
        if let Some(name) = &self.adapter {
            config.adapter = name.clone();
        }
        if let Some(path) = &self.log {
            config.log_file = Some(path.clone());
        }
    }
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, AppError> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| AppError::Usage(format!("Missing value for {}", flag)))
        };
        match a.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--details" => parsed.details = Some(PathBuf::from(value("--details")?)),
            "--orders" => parsed.orders = Some(PathBuf::from(value("--orders")?)),
            "--adapter" => parsed.adapter = Some(value("--adapter")?),
            "--events" => parsed.events = Some(PathBuf::from(value("--events")?)),
            "--log" => parsed.log = Some(PathBuf::from(value("--log")?)),
            "-h" | "--help" => parsed.help = true,
            _ => return Err(AppError::Usage(format!("Unknown arg: {}", a))),
        }
    }
    Ok(parsed)
}

/// Loads config and data, then drives one session from the event stream.
pub fn run(args: CliArgs) -> Result<(), AppError> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = DashboardConfig::load(&config_path)?;
    args.apply(&mut config);
    config.validate()?;

    if let Some(path) = &config.log_file {
        match logging::init_log_file(path) {
            Ok(path) => log_info!("SYS", "log file {}", path.display()),
            Err(e) => eprintln!("[LOG_INIT] {}; continuing with stderr only", e),
        }
    }

    let state = create_app_state(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.events {
        Some(path) => {
            let file = File::open(path)?;
            run_session(&state, BufReader::new(file), &mut out)
        }
        None => run_session(&state, io::stdin().lock(), &mut out),
    }
}

#[derive(Debug, Serialize)]
struct EventOutput<'a> {
    notification: Option<String>,
    view: &'a RenderedView,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Opens a session and processes `events` line by line. Malformed lines are
/// logged and skipped. Without data only the "no data" view is written.
pub fn run_session<R: BufRead, W: Write>(state: &AppState, events: R, out: &mut W) -> Result<(), AppError> {
    let id = match state.open_session() {
        Some(id) => id,
        None => return write_json(out, &state.no_data_view()),
    };

    write_json(out, &state.render(id))?;

    for (index, line) in events.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = match InteractionEvent::parse_line(&line) {
            Ok(event) => event,
            Err(source) => {
                log_warn!("EVENT", "{}", AppError::Event { line: index + 1, source });
                continue;
            }
        };
        let notification = state.handle_event(id, &event).map(|c| c.message());
        let view = state.render(id);
        write_json(
            out,
            &EventOutput {
                notification,
                view: &view,
            },
        )?;
    }

    state.close_session(id);
    Ok(())
}

/// Convenience for tests and scripts: run events from a file into a buffer.
pub fn run_events_file(state: &AppState, path: &Path) -> Result<Vec<u8>, AppError> {
    let mut out = Vec::new();
    run_session(state, BufReader::new(File::open(path)?), &mut out)?;
    Ok(out)
}
