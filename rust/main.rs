use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use tradingcal::scheduling::parse_date;
use tradingcal::trading::{CalendarConfig, TradingCal, TradingCalendar};
use tradingcal::JSON;

#[derive(Parser)]
#[command(name = "tradingcal")]
#[command(about = "Exchange trading days with daily options flags", long_about = None)]
struct Cli {
    /// JSON configuration file with `exchange`, `start` and `end` keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exchange name or alias (e.g. NYSE, XNYS)
    #[arg(long)]
    exchange: Option<String>,

    /// First date, YYYY-MM-DD (default: today)
    #[arg(long)]
    start: Option<String>,

    /// Last date, YYYY-MM-DD (default: a year after today)
    #[arg(long)]
    end: Option<String>,

    #[arg(long, value_enum, default_value_t = Filter::All)]
    filter: Filter,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    /// Every calendar day
    All,
    /// Options days only
    Options,
    /// Options days on a Thursday or Friday
    EndOfWeek,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn load_config(cli: &Cli) -> Result<CalendarConfig> {
    let mut config = match &cli.config {
        Some(path) => CalendarConfig::from_file(path)
            .with_context(|| format!("read config {}", path.display()))?,
        None => CalendarConfig::default(),
    };
    if let Some(exchange) = &cli.exchange {
        config.exchange = exchange.clone();
    }
    if let Some(start) = &cli.start {
        config.start = Some(parse_date(start).context("--start")?);
    }
    if let Some(end) = &cli.end {
        config.end = Some(parse_date(end).context("--end")?);
    }
    Ok(config)
}

fn apply_filter(calendar: &TradingCalendar, filter: Filter) -> TradingCalendar {
    match filter {
        Filter::All => calendar.clone(),
        Filter::Options => calendar.options_only(),
        Filter::EndOfWeek => calendar.end_of_week(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut tc = TradingCal::from_config(&config)
        .with_context(|| format!("exchange {}", config.exchange))?;
    let (start, end) = tc.set_dates(None, None);
    info!("building {} calendar {start}..={end}", config.exchange);

    let calendar = tc
        .build_full_calendar(None, None)
        .context("build trading calendar")?;
    let calendar = apply_filter(&calendar, cli.filter);

    match cli.format {
        Format::Table => println!("{calendar}"),
        Format::Json => println!("{}", calendar.to_json_pretty()?),
    }
    Ok(())
}
