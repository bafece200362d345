use serde::Deserialize;
use shared_kernel::configuration::{config, config_from};
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub parking: ParkingSettings,
}

#[derive(Debug, Deserialize)]
pub struct ParkingSettings {
    pub capacity: usize,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }

    pub fn parse_from(configuration_directory: &Path, file: &str) -> anyhow::Result<Self> {
        config_from::<Settings>(configuration_directory, file)
    }
}
