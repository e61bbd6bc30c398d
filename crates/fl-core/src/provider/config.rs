use serde::{Deserialize, Serialize};

/// 表示「刻意禁用」的占位凭据
pub const PLACEHOLDER_DISABLED: &str = "demo_key_disabled";

/// 模板里从未被替换的占位凭据
pub const PLACEHOLDER_TEMPLATE: &str = "YOUR_GOOGLE_MAPS_API_KEY_HERE";

/// Map provider configuration.
///
/// Built once by the composition root and passed down explicitly;
/// components never read ambient environment state themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapProviderConfig {
    /// Google Maps API credential, if any
    pub credential: Option<String>,
}

/// 真实地图可用 / 降级展示 的二元判定结果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderMode {
    /// 凭据可用，真实地图可挂载
    Configured,
    /// 无凭据或占位凭据，展示降级视图
    Demo,
}

impl MapProviderConfig {
    pub fn new(credential: Option<String>) -> Self {
        Self { credential }
    }

    /// 判定凭据是否「已配置」
    ///
    /// 只要求：存在、非空、不是两个占位值之一。
    /// 凭据对提供方是否真的有效不在本层职责内。
    pub fn mode(&self) -> ProviderMode {
        match self.credential.as_deref() {
            Some(c) if !c.is_empty() && c != PLACEHOLDER_DISABLED && c != PLACEHOLDER_TEMPLATE => {
                ProviderMode::Configured
            }
            _ => ProviderMode::Demo,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.mode() == ProviderMode::Configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_credential_is_demo() {
        assert_eq!(MapProviderConfig::new(None).mode(), ProviderMode::Demo);
    }

    #[test]
    fn test_empty_credential_is_demo() {
        let config = MapProviderConfig::new(Some(String::new()));
        assert_eq!(config.mode(), ProviderMode::Demo);
    }

    #[test]
    fn test_disabled_placeholder_is_demo() {
        let config = MapProviderConfig::new(Some("demo_key_disabled".to_string()));
        assert_eq!(config.mode(), ProviderMode::Demo);
    }

    #[test]
    fn test_template_placeholder_is_demo() {
        let config = MapProviderConfig::new(Some("YOUR_GOOGLE_MAPS_API_KEY_HERE".to_string()));
        assert_eq!(config.mode(), ProviderMode::Demo);
    }

    #[test]
    fn test_any_other_value_is_configured() {
        let config = MapProviderConfig::new(Some("a-real-key-123".to_string()));
        assert_eq!(config.mode(), ProviderMode::Configured);
        assert!(config.is_configured());
    }

    #[test]
    fn test_validity_is_not_checked_here() {
        // 一个对 Google 无效的 key 在本层依然算 configured
        let config = MapProviderConfig::new(Some("obviously-bogus".to_string()));
        assert!(config.is_configured());
    }
}
