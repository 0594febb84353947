mod cli;
mod commands;
mod error_fmt;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::cli::{Cli, Commands, FILE_GUARD, JSON_MODE};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            if JSON_MODE.get().copied().unwrap_or(false) {
                println!("{}", error_fmt::format_error_json(&e));
            } else {
                eprintln!("Error: {}", error_fmt::humanize(&e));
            }
            std::process::exit(error_fmt::exit_code_for_error(&e));
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    color_eyre::install()?;

    let raw = std::fs::read_to_string(&cli.config)
        .wrap_err_with(|| format!("failed to read config file {}", cli.config.display()))?;
    let config = beeper_config::load_toml(&raw)
        .wrap_err_with(|| format!("failed to parse config file {}", cli.config.display()))?;
    config.validate()?;

    init_logging(&cli, &config.logging)?;

    let mut beeper = beeper_core::Beeper::builder()
        .with_transport(make_transport()?)
        .with_address(config.bus.address)
        .with_suppressed(config.bus.suppressed || cli.suppress_bus)
        .with_seed(beeper_core::SeedCfg::from(&config.device))
        .build()?;

    match cli.cmd {
        Commands::Get { attr } => Ok(commands::get(&beeper, attr, cli.json)),
        Commands::Set { attr, value } => commands::set(&mut beeper, attr, &value, cli.json),
        Commands::Beep {
            payload,
            repeat,
            interval_ms,
        } => commands::beep(beeper, payload.as_deref(), repeat, interval_ms, cli.json),
    }
}

/// Console logs always go to stderr so stdout stays parseable; an optional
/// file sink is driven by the `[logging]` config section.
fn init_logging(cli: &Cli, logging: &beeper_config::Logging) -> Result<()> {
    let console_filter = EnvFilter::try_new(&cli.log_level)
        .wrap_err_with(|| format!("invalid --log-level {:?}", cli.log_level))?;
    let console = if cli.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    };

    let file = match &logging.file {
        Some(path) => Some(file_layer(path, logging)?),
        None => None,
    };

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(())
}

fn file_layer<S>(
    path: &str,
    logging: &beeper_config::Logging,
) -> Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    use tracing_appender::rolling;

    let path = std::path::Path::new(path);
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => std::path::Path::new("."),
    };
    let name = path
        .file_name()
        .map_or_else(|| std::ffi::OsString::from("beeper.log"), ToOwned::to_owned);

    let appender = match logging.rotation.as_deref() {
        None | Some("never") => rolling::never(dir, name),
        Some("daily") => rolling::daily(dir, name),
        Some("hourly") => rolling::hourly(dir, name),
        Some(other) => {
            eyre::bail!("unknown logging.rotation {other:?} (expected never, daily or hourly)")
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);
    // The guard must outlive main or buffered lines are lost.
    let _ = FILE_GUARD.set(guard);

    let filter = EnvFilter::try_new(logging.level.as_deref().unwrap_or("info"))
        .wrap_err("invalid logging.level in config")?;
    Ok(fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(filter)
        .boxed())
}

#[cfg(feature = "hardware")]
fn make_transport() -> Result<impl beeper_traits::BusTransport + Send + 'static> {
    let bus = beeper_hardware::i2c::I2cBus::new()?;
    Ok(bus)
}

#[cfg(not(feature = "hardware"))]
fn make_transport() -> Result<impl beeper_traits::BusTransport + Send + 'static> {
    Ok(beeper_hardware::SimulatedBus::new())
}
