use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    config_from(&configuration_directory, file)
}

/// Loads `file` from `configuration_directory`, layered with `APP_` prefixed
/// environment variables (`APP_PARKING__CAPACITY=5` sets `parking.capacity`).
pub fn config_from<Settings: DeserializeOwned>(
    configuration_directory: &Path,
    file: &str,
) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join(file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build configuration from {file}"))?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
