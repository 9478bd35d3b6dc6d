use std::io::{self, BufRead, Write};
use std::thread;

use chrono::{Local, NaiveDateTime};
use clap::{Parser, ValueEnum};
use crossbeam_channel::{select, tick, unbounded, Receiver};
use log::*;

use rapid_tracker::board::Board;
use rapid_tracker::data::Direction;
use rapid_tracker::display;
use rapid_tracker::error::TrackerError;
use rapid_tracker::settings::{TrackerConfig, DEFAULT_CONFIG};
use rapid_tracker::source::source_for;
use rapid_tracker::state::Tracker;

/// live departure board for the Ookayama / Suzukakedai rapid express
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// config file name; the extension is inferred
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG))]
    config: String,
    /// base URL or directory holding the timetable files. overrides the config.
    #[arg(short, long)]
    source: Option<String>,
    /// direction to show first. overrides the config.
    #[arg(short, long, value_enum)]
    direction: Option<DirectionArg>,
    /// print a single board and exit
    #[arg(long)]
    once: bool,
    /// fixed clock instead of local time, e.g. 2026-10-17T08:00:00
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    OokayamaToSuzukakedai,
    SuzukakedaiToOokayama,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::OokayamaToSuzukakedai => Direction::OokayamaToSuzukakedai,
            DirectionArg::SuzukakedaiToOokayama => Direction::SuzukakedaiToOokayama,
        }
    }
}

enum Command {
    Tick,
    Toggle,
    Quit,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(args) {
        Ok(_) => info!("finished."),
        Err(e) => {
            error!("rapid-tracker failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<(), TrackerError> {
    let config = TrackerConfig::load(&args.config)?;
    let location = args.source.unwrap_or_else(|| config.source.clone());
    let direction = args.direction.map(Direction::from).unwrap_or(config.direction);
    let fixed_now = args.now;
    let clock = move || fixed_now.unwrap_or_else(|| Local::now().naive_local());

    info!("Reading timetables from {}", location);
    let mut tracker = Tracker::new(source_for(&location), direction, clock());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let board = Board::from(tracker.snapshot().as_ref());
    if args.once {
        writeln!(out, "{}", board)?;
        return Ok(());
    }
    display::draw(&mut out, &board)?;

    let commands = spawn_input_reader();
    let ticker = tick(config.refresh_interval());
    loop {
        let command = select! {
            recv(ticker) -> _ => Command::Tick,
            recv(commands) -> cmd => cmd.unwrap_or(Command::Quit),
        };
        let snapshot = match command {
            Command::Tick => tracker.tick(clock()),
            Command::Toggle => tracker.toggle_direction(clock()),
            Command::Quit => break,
        };
        display::draw(&mut out, &Board::from(snapshot.as_ref()))?;
    }
    Ok(())
}

/// Forwards keyboard commands from stdin: an empty line or `t` toggles the
/// direction, `q` quits. Closing stdin also quits.
fn spawn_input_reader() -> Receiver<Command> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let command = match line.as_deref().map(str::trim) {
                Ok("q") | Ok("quit") => Command::Quit,
                Ok("") | Ok("t") => Command::Toggle,
                Ok(other) => {
                    warn!("Unknown command {:?}", other);
                    continue;
                }
                Err(e) => {
                    warn!("Could not read input: {}", e);
                    break;
                }
            };
            if tx.send(command).is_err() {
                break;
            }
        }
    });
    rx
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("Invalid time {s:?}: {e}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_direction_flag() {
        let args =
            Args::try_parse_from(["rapid-tracker", "-d", "suzukakedai-to-ookayama"]).unwrap();
        let direction = args.direction.map(Direction::from);
        assert_eq!(direction, Some(Direction::SuzukakedaiToOokayama));

        let args = Args::try_parse_from(["rapid-tracker"]).unwrap();
        assert!(args.direction.is_none());
        assert!(Args::try_parse_from(["rapid-tracker", "-d", "shibuya"]).is_err());
    }

    #[test]
    fn test_now_flag() {
        let args =
            Args::try_parse_from(["rapid-tracker", "--once", "--now", "2026-10-17T08:00:00"])
                .unwrap();
        assert!(args.once);
        let now = args.now.map(|now| now.to_string());
        assert_eq!(now, Some("2026-10-17 08:00:00".to_owned()));
    }
}
