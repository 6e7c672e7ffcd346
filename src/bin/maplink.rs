//! MapLauncher demo host
//!
//! Builds a launcher over a host whose installed apps come from the settings
//! file, and prints the deep link instead of opening it.
//!
//! Usage:
//!   maplink --app <NAME> --to <LAT,LON> [--from <LAT,LON>] [OPTIONS]
//!   maplink --list

use std::path::PathBuf;

use map_launcher::config::{ConfigStore, ConfigStoreConfig, LauncherSettings};
use map_launcher::logging::{ConsoleStream, LogLevel, LoggingConfig, LoggingSystem};
use map_launcher::{CallbackHost, Coordinate, LauncherError, MapLauncher, NavApp, NavPoint};

/// Command line arguments
struct Args {
    /// Display name of the app to launch
    app: Option<String>,
    from: Option<Coordinate>,
    to: Option<Coordinate>,
    from_name: String,
    to_name: String,
    from_address: String,
    to_address: String,
    /// Settings file; the per-user default when absent
    config: Option<PathBuf>,
    /// Print installed apps and exit
    list: bool,
    /// Enable verbose logging
    verbose: bool,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = std::env::args().skip(1);
        let mut parsed = Self {
            app: None,
            from: None,
            to: None,
            from_name: String::new(),
            to_name: String::new(),
            from_address: String::new(),
            to_address: String::new(),
            config: None,
            list: false,
            verbose: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--app" | "-a" => {
                    parsed.app = Some(required_value(&mut args, &arg)?);
                }
                "--from" | "-f" => {
                    parsed.from = Some(parse_lat_lon(&required_value(&mut args, &arg)?)?);
                }
                "--to" | "-t" => {
                    parsed.to = Some(parse_lat_lon(&required_value(&mut args, &arg)?)?);
                }
                "--from-name" => parsed.from_name = required_value(&mut args, &arg)?,
                "--to-name" => parsed.to_name = required_value(&mut args, &arg)?,
                "--from-address" => parsed.from_address = required_value(&mut args, &arg)?,
                "--to-address" => parsed.to_address = required_value(&mut args, &arg)?,
                "--config" | "-c" => {
                    parsed.config = Some(PathBuf::from(required_value(&mut args, &arg)?));
                }
                "--list" | "-l" => {
                    parsed.list = true;
                }
                "--verbose" | "-v" => {
                    parsed.verbose = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("Unknown argument: {}", arg));
                }
            }
        }

        if !parsed.list && parsed.app.is_none() {
            return Err("--app is required unless --list is given".to_string());
        }

        Ok(parsed)
    }
}

fn required_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{} expects a value", flag))
}

fn parse_lat_lon(value: &str) -> Result<Coordinate, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("Invalid coordinate {:?}, expected LAT,LON", value))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude {:?}", lat))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude {:?}", lon))?;
    Ok(Coordinate::new(latitude, longitude))
}

fn print_help() {
    println!(
        r#"MapLauncher demo host

USAGE:
    maplink [OPTIONS] --app <NAME> --to <LAT,LON>
    maplink [OPTIONS] --list

OPTIONS:
    -a, --app <NAME>            Navigation app display name, e.g. "Waze"
    -f, --from <LAT,LON>        Route start
    -t, --to <LAT,LON>          Route destination
        --from-name <TEXT>      Label for the start point
        --to-name <TEXT>        Label for the destination
        --from-address <TEXT>   Street address of the start point
        --to-address <TEXT>     Street address of the destination
    -c, --config <PATH>         Settings file (default: per-user settings.json)
    -l, --list                  Print the apps the host reports as installed
    -v, --verbose               Enable verbose logging
    -h, --help                  Print this help message

DESCRIPTION:
    Apps count as installed when their URL prefix is listed in the
    "installed_schemes" setting. Apple Maps is always available.
    Launching prints the deep link to stdout instead of opening it.
"#
    );
}

fn load_settings(path: Option<PathBuf>) -> Result<LauncherSettings, LauncherError> {
    let store = match path {
        Some(path) => ConfigStore::new(ConfigStoreConfig::at(path)),
        None => ConfigStore::new(ConfigStoreConfig::default()),
    };
    Ok(store.load()?)
}

fn build_host(settings: &LauncherSettings) -> CallbackHost {
    let schemes = settings.installed_schemes.clone();
    CallbackHost::new(
        move |url| schemes.iter().any(|s| s == url),
        |url| {
            println!("{}", url);
            true
        },
    )
    .with_bundle_name("maplink")
}

/// Stdout carries links and app names, so console logging is kept on stderr
fn logging_config(settings: &LauncherSettings, verbose: bool) -> LoggingConfig {
    let config = settings
        .logging
        .clone()
        .with_console_stream(ConsoleStream::Stderr);
    if verbose {
        config.with_level(LogLevel::Debug)
    } else {
        config
    }
}

fn point(coordinate: Option<Coordinate>, name: &str, address: &str) -> Option<NavPoint> {
    coordinate.map(|c| NavPoint::new(c, name, address))
}

fn run(args: Args) -> Result<bool, LauncherError> {
    let settings = load_settings(args.config.clone())?;
    let _logging = LoggingSystem::init(logging_config(&settings, args.verbose))?;

    let launcher = MapLauncher::with_options(build_host(&settings), settings.link_options());

    if args.list {
        for name in launcher.get_map_apps() {
            println!("{}", name);
        }
        return Ok(true);
    }

    let name = args.app.unwrap_or_default();
    let app: NavApp = name.parse()?;
    let from = point(args.from, &args.from_name, &args.from_address);
    let to = point(args.to, &args.to_name, &args.to_address);

    Ok(launcher.launch_map_app(app, from.as_ref(), to.as_ref()))
}

fn main() {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Launch failed");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
