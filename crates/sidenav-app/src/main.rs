mod cli;
mod replay;

use sidenav_common::Size;
use sidenav_config::SideNavConfig;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr; stdout carries the JSON lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(args.log_level.as_deref()))
        .init();

    tracing::info!("Sidenav v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

const DEFAULT_LOG_DIRECTIVE: &str = "sidenav=info";

/// `RUST_LOG` plus the `--log-level` directive. An unparsable directive
/// falls back to the default one.
fn log_filter(directive: Option<&str>) -> EnvFilter {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    match directive.parse() {
        Ok(parsed) => EnvFilter::from_default_env().add_directive(parsed),
        Err(e) => {
            eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
            EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
        }
    }
}

fn run(args: cli::Args) -> sidenav_common::Result<()> {
    let config = load_config(&args)?;

    if args.dump_config {
        println!("{}", sidenav_config::config_to_json(&config));
        return Ok(());
    }

    let size = Size::new(args.width, args.height);
    let events = match &args.script {
        Some(path) => {
            tracing::info!("Replaying script: {}", path.display());
            replay::load_script(path)?
        }
        None => {
            tracing::info!("No script given, running the demo");
            replay::demo_script(size)
        }
    };
    tracing::info!(
        "Host {}x{}, {} events",
        size.width,
        size.height,
        events.len()
    );

    let mut replay = replay::Replay::new(config, size);
    let output = replay.run(&events);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &output {
        let json = serde_json::to_string(line)
            .map_err(|e| sidenav_common::SideNavError::Other(format!("serialize output: {e}")))?;
        writeln!(out, "{json}")?;
    }
    out.flush()?;

    tracing::info!("{}", replay.summary());
    Ok(())
}

/// An explicit `--config` must load; the default path falls back to
/// stock settings on failure.
fn load_config(args: &cli::Args) -> sidenav_common::Result<SideNavConfig> {
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
        return Ok(sidenav_config::load_config_from(path)?);
    }
    let config = sidenav_config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SideNavConfig::default()
    });
    Ok(config)
}
