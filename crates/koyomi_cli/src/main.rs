use clap::{Parser, Subcommand};
use koyomi_core::{
    CalendarConfig, SolarTerm, TermKind, assemble_year, latest_new_moon, resolve_epoch_millis,
};
use koyomi_ephem::Orrery;
use koyomi_time::{CivilDateTime, epoch_millis_from_jd, jd_from_epoch_millis};
use tracing_subscriber::EnvFilter;

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["koyomi_cli", "koyomi_core", "koyomi_ephem", "koyomi_time"];

#[derive(Parser)]
#[command(name = "koyomi", version, about = "Lunisolar calendar CLI")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a civil datetime to its lunisolar date
    Date {
        /// Civil datetime (YYYY-MM-DD[Thh:mm[:ss]]) at the calendar offset
        datetime: String,
    },
    /// Print the lunisolar year containing an instant
    Year {
        /// Civil datetime, or a bare year number
        anchor: String,
    },
    /// Find the solar-term instant closest to a datetime
    Term {
        /// Civil datetime at the calendar offset
        datetime: String,
        /// Target ecliptic longitude in degrees (snapped down to a multiple of 15)
        #[arg(long, default_value = "270")]
        degree: i32,
    },
    /// Find the most recent new moon at or before a datetime
    NewMoon {
        /// Civil datetime at the calendar offset
        datetime: String,
    },
}

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_civil(s: &str, offset_seconds: i32) -> Result<CivilDateTime, String> {
    // Parse "YYYY-MM-DD", "YYYY-MM-DDThh:mm" or "YYYY-MM-DDThh:mm:ss",
    // read at the calendar's fixed UTC offset.
    let (date, time) = match s.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD[Thh:mm[:ss]], got {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let (mut hour, mut minute, mut second) = (0u32, 0u32, 0u32);
    if let Some(time) = time {
        let time_parts: Vec<&str> = time.split(':').collect();
        if time_parts.len() < 2 || time_parts.len() > 3 {
            return Err(format!("invalid time format: {s}"));
        }
        hour = time_parts[0].parse().map_err(|e| format!("{e}"))?;
        minute = time_parts[1].parse().map_err(|e| format!("{e}"))?;
        if let Some(part) = time_parts.get(2) {
            second = part.parse().map_err(|e| format!("{e}"))?;
        }
    }
    Ok(CivilDateTime::new(
        year,
        month,
        day,
        hour,
        minute,
        second,
        0,
        offset_seconds,
    ))
}

fn require_civil(s: &str, offset_seconds: i32) -> CivilDateTime {
    parse_civil(s, offset_seconds).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CalendarConfig::tenpo();
    let offset = config.utc_offset_seconds;

    match cli.command {
        Commands::Date { datetime } => {
            let civil = require_civil(&datetime, offset);
            match resolve_epoch_millis(&Orrery, &config, civil.to_epoch_millis()) {
                Ok(date) => println!("{date}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Year { anchor } => {
            // A bare year number anchors at noon on its first of December;
            // the solstice pin makes any twelfth-month instant equivalent.
            let civil = match anchor.parse::<i32>() {
                Ok(year) => CivilDateTime::new(year, 12, 1, 12, 0, 0, 0, offset),
                Err(_) => require_civil(&anchor, offset),
            };
            let jd = jd_from_epoch_millis(civil.to_epoch_millis());
            match assemble_year(&Orrery, &config, jd) {
                Ok(year) => println!("{year}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Term { datetime, degree } => {
            let civil = require_civil(&datetime, offset);
            let jd = jd_from_epoch_millis(civil.to_epoch_millis());
            let term = SolarTerm::of_closest(&Orrery, &config, jd, degree);
            let kind = match term.kind {
                TermKind::MidClimate => "mid-climate",
                TermKind::PreClimate => "pre-climate",
            };
            println!(
                "Closest {} deg term: {}",
                term.longitude,
                CivilDateTime::from_epoch_millis(term.epoch_millis, offset)
            );
            println!(
                "  actual longitude: {:.4} deg  kind: {kind}  sequence index: {}",
                term.actual_longitude, term.term_index
            );
        }

        Commands::NewMoon { datetime } => {
            let civil = require_civil(&datetime, offset);
            let jd = jd_from_epoch_millis(civil.to_epoch_millis());
            let moon = latest_new_moon(&Orrery, &config, jd);
            println!(
                "Latest new moon: {}",
                CivilDateTime::from_epoch_millis(epoch_millis_from_jd(moon), offset)
            );
            println!("  JD {moon:.5}");
        }
    }
}
