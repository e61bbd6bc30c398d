use serde::{Deserialize, Serialize};

use crate::provider::MapProviderConfig;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub silent_start: bool,
    pub theme: Theme,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapProviderSettings {
    /// Google Maps API key
    ///
    /// None 或占位值表示 demo 模式；
    /// 环境变量 GOOGLE_MAPS_API_KEY 在启动时优先于该字段。
    pub api_key: Option<String>,
}

impl MapProviderSettings {
    pub fn to_provider_config(&self) -> MapProviderConfig {
        MapProviderConfig::new(self.api_key.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub map_provider: MapProviderSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}
