//! Dashboard entry point — CLI wiring and config-driven pipeline.

use std::path::{Path, PathBuf};
use std::process;

use energy_dash::config::AppConfig;
use energy_dash::dashboard::{build_dashboard, localized_error};
use energy_dash::data::DatasetCache;
use energy_dash::forecast::forecast_fossil_share;
use energy_dash::i18n::Locale;
use energy_dash::io::export::{export_series_csv, write_forecast_csv};
use energy_dash::report::print_dashboard;
use energy_dash::series::{Aggregate, Measure, yearly_series};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    data_path: Option<String>,
    lang: Option<String>,
    export_out: Option<String>,
    export_series: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: Option<u16>,
}

fn print_help() {
    eprintln!("energy-dash — G7 vs. BRICS energy transition dashboard");
    eprintln!();
    eprintln!("Usage: energy-dash [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load app config from TOML file");
    eprintln!("  --data <path>            Override dataset CSV path");
    eprintln!("  --lang <en|id>           Override report locale");
    eprintln!("  --export-out <path>      Export forecast points to CSV");
    eprintln!("  --export-series <path>   Export aggregated yearly series to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start JSON API server after the report");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("Without --config, built-in defaults are used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        data_path: None,
        lang: None,
        export_out: None,
        export_series: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(args[i].clone());
            }
            "--lang" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --lang requires a locale argument (en or id)");
                    process::exit(1);
                }
                cli.lang = Some(args[i].clone());
            }
            "--export-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-out requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            "--export-series" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-series requires a path argument");
                    process::exit(1);
                }
                cli.export_series = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "energy_dash=info".into()),
        )
        .init();

    let cli = parse_args();

    let mut config = if let Some(ref path) = cli.config_path {
        match AppConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        AppConfig::default()
    };

    // Apply CLI overrides before validation
    if let Some(ref path) = cli.data_path {
        config.data.path = path.clone();
    }
    if let Some(ref lang) = cli.lang {
        config.display.locale = lang.clone();
    }
    #[cfg(feature = "api")]
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let locale = config.locale();
    let data_path = PathBuf::from(&config.data.path);
    let cache = DatasetCache::new();

    let dataset = match cache.get_or_load(&data_path) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("{}", localized_error(locale, &e));
            process::exit(1);
        }
    };

    let dashboard = build_dashboard(&dataset, locale);
    print_dashboard(&dashboard);

    if let Some(ref path) = cli.export_series {
        let mut all_series = Vec::new();
        for (measure, aggregate) in [
            (Measure::FossilShareEnergy, Aggregate::Mean),
            (Measure::EnergyPerGdp, Aggregate::Mean),
            (Measure::FossilFuelConsumption, Aggregate::Sum),
            (Measure::LowCarbonShareEnergy, Aggregate::Mean),
        ] {
            all_series.extend(yearly_series(&dataset, measure, aggregate));
        }
        if let Err(e) = export_series_csv(&all_series, Path::new(path)) {
            eprintln!("error: failed to write series CSV: {e}");
            process::exit(1);
        }
        eprintln!("Series written to {path}");
    }

    if let Some(ref path) = cli.export_out {
        let blocs = forecast_fossil_share(&dataset);
        let file = match std::fs::File::create(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("error: failed to create {path}: {e}");
                process::exit(1);
            }
        };
        if let Err(e) = write_forecast_csv(&blocs, std::io::BufWriter::new(file)) {
            eprintln!("error: failed to write forecast CSV: {e}");
            process::exit(1);
        }
        eprintln!("Forecast written to {path}");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(energy_dash::api::AppState {
            cache,
            data_path,
            default_locale: locale,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(energy_dash::api::serve(state, addr));
    }
}
