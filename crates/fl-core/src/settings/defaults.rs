use super::model::*;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            silent_start: false,
            theme: Theme::System,
            language: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            map_provider: MapProviderSettings::default(),
        }
    }
}
