use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skyglance::{CurrentWeatherService, SkyglanceConfig, WeatherPanel};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skyglance", version, about = "Current weather conditions for any place name")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "SKYGLANCE_CONFIG")]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show current conditions for one place
    Weather {
        /// Place name, e.g. "Boston" or "New York"
        #[arg(short, long)]
        location: String,
        /// Print conditions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read place names from stdin and keep a panel updated
    Interactive,
}

fn init_logging(config: &SkyglanceConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let Cli {
        config: config_path,
        verbose,
        cmd,
    } = cli;

    let config = SkyglanceConfig::load_from_path(config_path.clone())
        .with_context(|| "Failed to load configuration")?;
    init_logging(&config, verbose);
    debug!("Loaded configuration: {:?}", config);

    match cmd {
        None => {
            print_banner(config_path, verbose, &config);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Weather { location, json }) => weather(&config, &location, json),
        Some(Command::Interactive) => interactive(&config),
    }
}

fn print_banner(config_path: Option<PathBuf>, verbose: bool, config: &SkyglanceConfig) {
    println!("SkyGlance v{}", skyglance::VERSION);
    println!("Weather data by Open-Meteo (no setup required).");
    println!("Try: skyglance weather --location \"Boston\"");

    if verbose {
        let path = config_path
            .or_else(SkyglanceConfig::get_config_path)
            .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());
        println!("Using config from: {path}");
        println!("Geocoding API: {}", config.api.geocoding_base_url);
        println!("Forecast API: {}", config.api.forecast_base_url);
        println!("Forecast time zone: {}", config.api.timezone);
        println!("Log level: {}", config.logging.level);
    }
}

fn weather(config: &SkyglanceConfig, location: &str, json: bool) -> Result<ExitCode> {
    let service = CurrentWeatherService::from_config(config)?;

    match service.try_search(location) {
        Ok(conditions) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&conditions)?);
            } else {
                let mut panel = WeatherPanel::new();
                panel.apply(Some(conditions));
                println!("{panel}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(code = e.code().as_str(), "Weather search failed: {}", e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn interactive(config: &SkyglanceConfig) -> Result<ExitCode> {
    let service = CurrentWeatherService::from_config(config)?;
    let mut panel = WeatherPanel::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{panel}\n")?;
    write!(stdout, "Search> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.with_context(|| "Failed to read from stdin")?;
        let query = line.trim();

        if !query.is_empty() {
            if panel.apply(service.search(query)) {
                writeln!(stdout, "{panel}\n")?;
            } else {
                writeln!(stdout, "No update for '{query}'\n")?;
            }
        }

        write!(stdout, "Search> ")?;
        stdout.flush()?;
    }

    writeln!(stdout)?;
    Ok(ExitCode::SUCCESS)
}
