use serde::{Deserialize, Serialize};

use fl_core::provider::ProviderMode;

/// Banner state for the map-provider configuration card.
///
/// 纯粹是 configured/demo 判定的渲染结果，不含其他逻辑。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderBannerView {
    pub mode: ProviderMode,

    /// 两种互斥的提示之一（configured / demo）
    pub alert: BannerAlertView,

    pub setup_steps: Vec<String>,

    /// 功能清单；圆点颜色跟随 configured/demo 判定
    pub features: Vec<FeatureItemView>,

    pub doc_links: Vec<DocLinkView>,

    /// demo 模式下的「当前状态」补充说明；configured 时为 None
    pub status_note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerAlertView {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureItemView {
    pub label: String,
    pub bullet: BulletColor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BulletColor {
    Green,
    Yellow,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocLinkView {
    pub label: String,
    pub url: String,
}
