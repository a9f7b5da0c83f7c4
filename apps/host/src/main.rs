use anyhow::Context;
use ign_launcher::Launcher;
use ign_logger::{LevelFilter, Logger};
use ignition::domain::config::{LaunchConfig, LoggingConfig};
use ignition::domain::launch::LaunchOptions;
use ignition::kernel::config::load_config;

mod integrations;

fn main() -> anyhow::Result<()> {
    let cfg: LaunchConfig =
        load_config(Some("host")).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging).context("Failed to initialize logging")?;

    let options = platform_options();

    let launcher = Launcher::builder()
        .config(cfg)
        .integration(integrations::MapsSdk::default())
        .integration(integrations::AnalyticsSdk::default())
        .registrar(|cfg: &LaunchConfig| ignition::init(cfg))
        .build()?;

    let proceed = launcher.on_launch(&options)?;
    if !proceed {
        anyhow::bail!("launch delegate vetoed continuation");
    }

    let state = launcher.state().context("launch state missing after launch")?;
    tracing::info!(
        launch_id = launcher.launch_id(),
        integrations = state.integrations().bits(),
        extensions = state.extension_count(),
        "Host ready"
    );

    Ok(())
}

fn init_logger(logging: &LoggingConfig) -> Result<Logger, ign_logger::LoggerError> {
    let level = logging.level.parse().unwrap_or(LevelFilter::INFO);

    let mut builder = Logger::builder(env!("CARGO_PKG_NAME")).console(logging.console).level(level);
    if let Some(path) = &logging.path {
        builder = builder.path(path);
    }
    if let Some(filter) = &logging.env_filter {
        builder = builder.env_filter(filter);
    }

    builder.init()
}

/// Launch options as delivered by this platform: `IGN_OPT_`-prefixed
/// environment variables, lowercased.
fn platform_options() -> LaunchOptions {
    std::env::vars()
        .filter_map(|(key, value)| {
            key.strip_prefix("IGN_OPT_").map(|opt| (opt.to_ascii_lowercase(), value))
        })
        .collect()
}
