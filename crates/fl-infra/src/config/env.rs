//! Map provider credential resolution
//! 地图服务凭据解析

use std::env;

use fl_core::provider::MapProviderConfig;
use fl_core::settings::model::Settings;

/// 环境变量优先于设置文件里的 api_key
pub const CREDENTIAL_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Resolve the map provider config from settings + environment.
///
/// Called once by the composition root at startup; the result is passed
/// down explicitly and never re-read while the process runs.
pub fn resolve_provider_config(settings: &Settings) -> MapProviderConfig {
    match env::var(CREDENTIAL_ENV_VAR).ok().filter(|v| !v.is_empty()) {
        Some(credential) => MapProviderConfig::new(Some(credential)),
        None => settings.map_provider.to_provider_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn settings_with_key(key: Option<&str>) -> Settings {
        let mut settings = Settings::default();
        settings.map_provider.api_key = key.map(|k| k.to_string());
        settings
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_settings() {
        env::set_var(CREDENTIAL_ENV_VAR, "env-key");

        let config = resolve_provider_config(&settings_with_key(Some("file-key")));
        assert_eq!(config.credential.as_deref(), Some("env-key"));

        env::remove_var(CREDENTIAL_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_settings_key_used_when_env_absent() {
        env::remove_var(CREDENTIAL_ENV_VAR);

        let config = resolve_provider_config(&settings_with_key(Some("file-key")));
        assert_eq!(config.credential.as_deref(), Some("file-key"));
    }

    #[test]
    #[serial]
    fn test_empty_env_var_is_ignored() {
        env::set_var(CREDENTIAL_ENV_VAR, "");

        let config = resolve_provider_config(&settings_with_key(Some("file-key")));
        assert_eq!(config.credential.as_deref(), Some("file-key"));

        env::remove_var(CREDENTIAL_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_no_source_means_no_credential() {
        env::remove_var(CREDENTIAL_ENV_VAR);

        let config = resolve_provider_config(&settings_with_key(None));
        assert!(config.credential.is_none());
        assert!(!config.is_configured());
    }
}
