use std::io::{Read, Write};

use anyhow::{bail, Context};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use restored_from_backup_plugin::config::{LogFormat, PluginConfig, DEFAULT_LOG_FILTER};
use restored_from_backup_plugin::plugin::{
    dispatch, ExecuteInput, RestoreEnvAction, RestoreItemAction, PLUGIN_NAME,
};

fn main() -> anyhow::Result<()> {
    let config = PluginConfig::from_env()?;
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        plugin = PLUGIN_NAME,
        "Starting restored-from-backup plugin"
    );

    let action = RestoreEnvAction::new();
    let command = std::env::args().nth(1);

    let result = match command.as_deref() {
        Some("applies-to") => applies_to(&action),
        None | Some("execute") => execute(&action),
        Some(other) => bail!("unknown command '{other}', expected applies-to or execute"),
    };

    if let Err(e) = &result {
        error!(error = %e, "Restore item action failed");
    }
    result
}

fn init_tracing(config: &PluginConfig) {
    // stdout carries the output document
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn applies_to(action: &impl RestoreItemAction) -> anyhow::Result<()> {
    let selector = action.applies_to()?;
    write_json(&selector)
}

fn execute(action: &dyn RestoreItemAction) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("Failed to read input from stdin")?;
    let input = ExecuteInput::from_slice(&buf).context("Failed to decode input bundle")?;

    let output = dispatch(action, input)?;
    write_json(&output)
}

fn write_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, value).context("Failed to encode output")?;
    writeln!(stdout)?;
    Ok(())
}
