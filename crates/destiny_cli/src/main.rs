use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use destiny_config::DestinyConfig;
use destiny_core::{AngleUnit, Body, GeoLocation, Longitude, Observation};
use destiny_rs::{
    Analysis, AnalysisRequest, DestinyError, NatalChart, NatalSource, TabulatedEphemeris,
    TimelineRow, TransitConfig, analyze, init_logging, timeline_rows, write_csv, write_json,
    write_table,
};
use destiny_time::{Clock, FixedClock, SystemClock, parse_utc};
use destiny_zodiac::{ZodiacIndex, sign_position};
use log::debug;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "destiny", version, about = "Transit forecast CLI")]
struct Cli {
    /// Log spec, e.g. `info` or `warn,destiny_transit=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Ecliptic longitude (degrees unless --radians)
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Interpret LON as radians
        #[arg(long)]
        radians: bool,
    },
    /// Sun and Moon signs at birth
    Natal {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Full transit timeline
    Scan {
        #[command(flatten)]
        forecast: ForecastArgs,
    },
    /// First occurrence of each non-zero event kind
    Events {
        #[command(flatten)]
        forecast: ForecastArgs,
    },
}

#[derive(Args, Default)]
struct SourceArgs {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON longitude table (overrides [ephemeris].table)
    #[arg(long)]
    table: Option<PathBuf>,
    /// Birth instant, YYYY-MM-DDThh:mm:ssZ or YYYY-MM-DD (overrides [subject].birth)
    #[arg(long)]
    birth: Option<String>,
    /// Birth latitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,
    /// Birth longitude in degrees
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,
}

#[derive(Args, Default)]
struct ForecastArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Natal Moon sign index 0-11 (skips the natal chart)
    #[arg(long, conflicts_with = "birth")]
    natal_index: Option<u8>,
    /// Forecast horizon in years
    #[arg(long)]
    years: Option<f64>,
    /// Body scored as the growth return
    #[arg(long)]
    growth: Option<Body>,
    /// Body scored as the pressure return
    #[arg(long)]
    pressure: Option<Body>,
    /// Scan start date (defaults to now)
    #[arg(long)]
    start: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DestinyError> {
    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Sign { lon, radians } => {
            start_logging(cli.log_level.as_deref(), None)?;
            let unit = if radians {
                AngleUnit::Radians
            } else {
                AngleUnit::Degrees
            };
            print_sign(&mut out, Longitude::new(lon, unit))
        }
        Commands::Natal { source } => {
            let config = load_config(source.config.as_deref())?;
            start_logging(cli.log_level.as_deref(), config.as_ref())?;
            let oracle = load_table(&source, config.as_ref())?;
            let observation = birth_observation(&source, config.as_ref())?.ok_or_else(|| {
                DestinyError::Usage("no birth given; use --birth or a config [subject]".into())
            })?;
            let chart = NatalChart::compute(&oracle, &observation)?;
            print_chart(&mut out, &chart)
        }
        Commands::Scan { forecast } => {
            let config = load_config(forecast.source.config.as_deref())?;
            start_logging(cli.log_level.as_deref(), config.as_ref())?;
            let analysis = run_forecast(&forecast, config.as_ref())?;
            let rows = timeline_rows(&analysis.series, analysis.series.records());
            emit(&mut out, forecast.format, &rows)?;
            if forecast.format == OutputFormat::Table {
                print_summary(&mut out, &analysis)?;
            }
            Ok(())
        }
        Commands::Events { forecast } => {
            let config = load_config(forecast.source.config.as_deref())?;
            start_logging(cli.log_level.as_deref(), config.as_ref())?;
            let analysis = run_forecast(&forecast, config.as_ref())?;
            let rows = timeline_rows(&analysis.series, &analysis.key_events);
            emit(&mut out, forecast.format, &rows)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Option<DestinyConfig>, DestinyError> {
    path.map(DestinyConfig::load).transpose().map_err(Into::into)
}

fn start_logging(flag: Option<&str>, config: Option<&DestinyConfig>) -> Result<(), DestinyError> {
    let level = flag
        .or(config.map(|c| c.logging.level.as_str()))
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let directory = config.and_then(|c| c.logging.directory.as_deref());
    init_logging(level, directory)
}

fn load_table(
    source: &SourceArgs,
    config: Option<&DestinyConfig>,
) -> Result<TabulatedEphemeris, DestinyError> {
    let path = source
        .table
        .as_deref()
        .or(config.and_then(|c| c.ephemeris.as_ref()).map(|e| e.table.as_path()))
        .ok_or_else(|| {
            DestinyError::Usage("no ephemeris table; use --table or a config [ephemeris]".into())
        })?;
    debug!("loading ephemeris table {}", path.display());
    Ok(TabulatedEphemeris::load(path)?)
}

/// Birth from flags, else from the config's `[subject]`.
fn birth_observation(
    source: &SourceArgs,
    config: Option<&DestinyConfig>,
) -> Result<Option<Observation>, DestinyError> {
    if let Some(birth) = &source.birth {
        let instant = parse_utc(birth)?;
        let location = match (source.lat, source.lon) {
            (Some(lat), Some(lon)) => Some(
                GeoLocation::new(lat, lon).map_err(|e| DestinyError::Usage(e.to_string()))?,
            ),
            _ => None,
        };
        return Ok(Some(Observation::new(instant, location)));
    }
    match config.and_then(|c| c.subject.as_ref()) {
        Some(subject) => Ok(Some(subject.observation()?)),
        None => Ok(None),
    }
}

fn build_request(
    forecast: &ForecastArgs,
    config: Option<&DestinyConfig>,
) -> Result<AnalysisRequest, DestinyError> {
    let mut transit = config
        .map(|c| destiny_rs::transit_config(&c.forecast))
        .unwrap_or_else(|| TransitConfig::new(destiny_config::ForecastConfig::default().horizon_years));
    if let Some(years) = forecast.years {
        transit.horizon_years = years;
    }
    if let Some(body) = forecast.growth {
        transit.growth_body = body;
    }
    if let Some(body) = forecast.pressure {
        transit.pressure_body = body;
    }

    let natal = match forecast.natal_index {
        Some(idx) => NatalSource::Index(ZodiacIndex::new(idx)?),
        None => NatalSource::Birth(birth_observation(&forecast.source, config)?.ok_or_else(
            || {
                DestinyError::Usage(
                    "no natal reference; use --natal-index, --birth or a config [subject]".into(),
                )
            },
        )?),
    };
    Ok(AnalysisRequest { natal, transit })
}

fn run_forecast(
    forecast: &ForecastArgs,
    config: Option<&DestinyConfig>,
) -> Result<Analysis, DestinyError> {
    let request = build_request(forecast, config)?;
    let oracle = load_table(&forecast.source, config)?;
    let clock: Box<dyn Clock> = match &forecast.start {
        Some(start) => Box::new(FixedClock::new(parse_utc(start)?)),
        None => Box::new(SystemClock),
    };
    analyze(&request, &oracle, clock.as_ref())
}

fn emit<W: Write>(out: &mut W, format: OutputFormat, rows: &[TimelineRow]) -> Result<(), DestinyError> {
    match format {
        OutputFormat::Table => write_table(out, rows),
        OutputFormat::Csv => write_csv(out, rows),
        OutputFormat::Json => write_json(out, rows),
    }
}

fn print_sign<W: Write>(out: &mut W, lon: Longitude) -> Result<(), DestinyError> {
    let pos = sign_position(lon.to_degrees())?;
    let dms = pos.dms;
    writeln!(
        out,
        "{} ({}) index {} - {} deg {} min {:.1} sec ({:.4} deg in sign)",
        pos.sign.name(),
        pos.sign.vedic_name(),
        pos.index,
        dms.degrees,
        dms.minutes,
        dms.seconds,
        pos.degrees_in_sign
    )?;
    Ok(())
}

fn print_chart<W: Write>(out: &mut W, chart: &NatalChart) -> Result<(), DestinyError> {
    writeln!(out, "Birth: {}", chart.observation.instant.to_rfc3339())?;
    if let Some(loc) = chart.observation.location {
        writeln!(out, "Place: {:.4}, {:.4}", loc.latitude_deg, loc.longitude_deg)?;
    }
    for p in [&chart.sun, &chart.moon] {
        writeln!(
            out,
            "{:<5} {:>9.4} deg  {} ({:.2} deg in sign)",
            p.body.name(),
            p.longitude_deg,
            p.position.sign,
            p.position.degrees_in_sign
        )?;
    }
    writeln!(
        out,
        "Natal reference: {} (index {})",
        chart.moon.position.sign,
        chart.natal_reference()
    )?;
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, analysis: &Analysis) -> Result<(), DestinyError> {
    let s = &analysis.summary;
    writeln!(out)?;
    writeln!(
        out,
        "Natal: {}  Steps: {}  Growth: {}  Pressure: {}  Trine only: {}  Mean: {:.2}",
        analysis.natal_reference.sign(),
        s.steps,
        s.growth_returns,
        s.pressure_returns,
        s.trine_only_steps,
        s.mean_score
    )?;
    if let (Some(score), Some(date)) = (s.peak_score, s.peak_date) {
        writeln!(out, "Peak:   {score:+} on {}", date.date_naive())?;
    }
    if let (Some(score), Some(date)) = (s.trough_score, s.trough_date) {
        writeln!(out, "Trough: {score:+} on {}", date.date_naive())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_longitude() {
        let cli = Cli::try_parse_from(["destiny", "sign", "-30", "--radians"]).unwrap();
        assert!(matches!(cli.command, Commands::Sign { lon, radians: true } if lon == -30.0));
    }

    #[test]
    fn natal_index_conflicts_with_birth() {
        let parsed = Cli::try_parse_from([
            "destiny", "scan", "--natal-index", "3", "--birth", "1990-01-01",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn sign_output() {
        let mut buf = Vec::new();
        print_sign(&mut buf, Longitude::degrees(-30.0)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Pisces (Meena) index 11"), "{text}");

        let mut buf = Vec::new();
        print_sign(&mut buf, Longitude::degrees(-31.0)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Aquarius (Kumbha) index 10"), "{text}");
    }

    #[test]
    fn flags_override_config() {
        let config = DestinyConfig::parse(
            "[subject]\nbirth = \"1990-06-15\"\n[forecast]\nhorizon_years = 4.0\n",
        )
        .unwrap();
        let forecast = ForecastArgs {
            years: Some(2.5),
            growth: Some(Body::Venus),
            ..ForecastArgs::default()
        };
        let req = build_request(&forecast, Some(&config)).unwrap();
        assert_eq!(req.transit.horizon_years, 2.5);
        assert_eq!(req.transit.growth_body, Body::Venus);
        assert_eq!(req.transit.pressure_body, Body::Saturn);
        assert!(matches!(req.natal, NatalSource::Birth(_)));
    }

    #[test]
    fn natal_index_flag_and_missing_natal() {
        let forecast = ForecastArgs {
            natal_index: Some(7),
            ..ForecastArgs::default()
        };
        let req = build_request(&forecast, None).unwrap();
        assert_eq!(req.natal, NatalSource::Index(ZodiacIndex::new(7).unwrap()));
        assert_eq!(req.transit.horizon_years, 15.0);

        let forecast = ForecastArgs {
            natal_index: Some(12),
            ..ForecastArgs::default()
        };
        assert!(matches!(
            build_request(&forecast, None),
            Err(DestinyError::Zodiac(_))
        ));
        assert!(matches!(
            build_request(&ForecastArgs::default(), None),
            Err(DestinyError::Usage(_))
        ));
    }

    #[test]
    fn scan_with_fixed_start_uses_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("eph.json");
        std::fs::write(
            &table,
            r#"{"bodies":{
                "jupiter":[{"date":"2024-01-01","longitude":95.0},{"date":"2026-01-01","longitude":125.0}],
                "saturn":[{"date":"2024-01-01","longitude":340.0},{"date":"2026-01-01","longitude":355.0}]}}"#,
        )
        .unwrap();
        let forecast = ForecastArgs {
            source: SourceArgs {
                table: Some(table),
                ..SourceArgs::default()
            },
            natal_index: Some(3),
            years: Some(1.0),
            start: Some("2024-01-01".to_string()),
            ..ForecastArgs::default()
        };
        let a = run_forecast(&forecast, None).unwrap();
        assert_eq!(a.series.len(), 13);
        assert_eq!(a.series.records()[0].energy_score, 3);
    }
}
