mod logging;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Weekday;
use monthgrid::{config::AppConfig, Calendar};

const USAGE: &str = "\
usage: mgrid [YEAR [MONTH]] [--week-start DAY]
       mgrid days [YEAR [MONTH]]

Omitted or zero YEAR/MONTH mean the current one.";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(inv) = Invocation::parse(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    let (cfg, cfg_err) = AppConfig::load_or_default();
    let _guard = logging::init(&cfg)?;
    if let Some(e) = cfg_err {
        tracing::warn!("ignoring config file: {e:#}");
    }
    tracing::debug!(?inv, "parsed arguments");

    let calendar = Calendar::new();
    match inv.command {
        // ── mgrid days ───────────────────────────────────────────────────────
        Command::Days => {
            println!("{}", calendar.days_in_month(inv.year, inv.month)?);
        }
        // ── mgrid ────────────────────────────────────────────────────────────
        Command::Grid => {
            let week_start = inv.week_start.unwrap_or_else(|| cfg.week_start());
            let grid = calendar.month_calendar(inv.year, inv.month, week_start)?;
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
    }
    Ok(())
}

// ─── Argument parsing ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Grid,
    Days,
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command:    Command,
    year:       i32,
    month:      i32,
    week_start: Option<Weekday>,
}

impl Invocation {
    /// `Ok(None)` when help was requested.
    fn parse(args: &[String]) -> Result<Option<Self>> {
        let mut args = args.iter().map(String::as_str).peekable();
        let command = if args.peek() == Some(&"days") {
            args.next();
            Command::Days
        } else {
            Command::Grid
        };

        let mut positional = Vec::new();
        let mut week_start = None;
        while let Some(arg) = args.next() {
            match arg {
                "-h" | "--help" => return Ok(None),
                "--week-start" => {
                    let day = args.next().ok_or_else(|| anyhow!("--week-start needs a day"))?;
                    week_start = Some(parse_weekday(day)?);
                }
                _ if arg.starts_with("--week-start=") => {
                    week_start = Some(parse_weekday(&arg["--week-start=".len()..])?);
                }
                _ if arg.starts_with("--") => bail!("unknown option {arg}\n\n{USAGE}"),
                _ => positional.push(
                    arg.parse::<i32>().with_context(|| format!("not a number: {arg}"))?,
                ),
            }
        }

        if command == Command::Days && week_start.is_some() {
            bail!("--week-start has no effect on `days`");
        }
        let (year, month) = match positional[..] {
            []                => (0, 0),
            [year]            => (year, 0),
            [year, month]     => (year, month),
            _                 => bail!("too many arguments\n\n{USAGE}"),
        };
        Ok(Some(Self { command, year, month, week_start }))
    }
}

fn parse_weekday(s: &str) -> Result<Weekday> {
    s.parse::<Weekday>().map_err(|_| anyhow!("not a weekday: {s}"))
}
