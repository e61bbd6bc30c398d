//! Use case for building the provider configuration banner
//! 构建地图服务配置横幅的用例

use fl_core::provider::{MapProviderConfig, ProviderMode};

use crate::models::{
    BannerAlertView, BulletColor, DocLinkView, FeatureItemView, ProviderBannerView,
};

use super::ProviderDocLink;

const SETUP_STEPS: [&str; 4] = [
    "Get a Google Maps API key from Google Cloud Console",
    "Enable the Maps JavaScript API",
    "Set the environment variable GOOGLE_MAPS_API_KEY",
    "Restart the development server",
];

const FEATURES: [&str; 4] = [
    "Interactive donation tracking",
    "Real-time volunteer locations",
    "Route optimization & directions",
    "Live delivery tracking",
];

/// Use case: render the configured/demo decision into banner state.
///
/// 整个横幅只是单个布尔判定的渲染结果，没有其他逻辑。
#[derive(Debug, Default)]
pub struct BuildProviderBanner;

impl BuildProviderBanner {
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case.
    pub fn execute(&self, config: &MapProviderConfig) -> ProviderBannerView {
        let mode = config.mode();

        let alert = match mode {
            ProviderMode::Configured => BannerAlertView {
                title: "Google Maps is configured!".to_string(),
                body: "You can now view live tracking with interactive maps, real-time \
                       location updates, and detailed route information."
                    .to_string(),
            },
            ProviderMode::Demo => BannerAlertView {
                title: "Google Maps API not configured.".to_string(),
                body: "The app is running in demo mode with a fallback map interface. To \
                       enable live Google Maps tracking, you need to set up a Google Maps \
                       API key."
                    .to_string(),
            },
        };

        // 功能清单的圆点颜色跟随配置判定
        let bullet = match mode {
            ProviderMode::Configured => BulletColor::Green,
            ProviderMode::Demo => BulletColor::Yellow,
        };

        let status_note = match mode {
            ProviderMode::Configured => None,
            ProviderMode::Demo => Some(
                "Using fallback map with mock data. All tracking features are functional, \
                 but without real Google Maps integration."
                    .to_string(),
            ),
        };

        ProviderBannerView {
            mode,
            alert,
            setup_steps: SETUP_STEPS.iter().map(|s| s.to_string()).collect(),
            features: FEATURES
                .iter()
                .map(|label| FeatureItemView {
                    label: label.to_string(),
                    bullet,
                })
                .collect(),
            doc_links: vec![
                DocLinkView {
                    label: "Google Cloud Console".to_string(),
                    url: ProviderDocLink::CloudConsole.url().to_string(),
                },
                DocLinkView {
                    label: "API Key Guide".to_string(),
                    url: ProviderDocLink::ApiKeyGuide.url().to_string(),
                },
            ],
            status_note,
        }
    }
}
