use rescuedogs_mcp_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call after `init_logging`.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        api_url = %config.api.base_url,
        image_url = %config.images.base_url,
        cache_ttl_secs = config.cache.default_ttl_secs,
        sweep_interval_secs = config.cache.sweep_interval_secs,
        "Configuration loaded"
    );
}
