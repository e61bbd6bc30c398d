use serde::{Deserialize, Serialize};

use fl_core::tracking::{NetworkStats, StatusBadge};

/// A read-only projection of one donation,
/// optimized for card rendering in the fallback list.
///
/// This is NOT a domain entity.
/// This model may change as the card layout evolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationCardView {
    pub id: String,

    pub donor_name: String,

    /// Status badge (color token + icon token + label)
    pub badge: StatusBadge,

    pub food_quantity: String,

    pub address: String,

    /// "2h 15m" / "45m" / "Expired"
    pub time_remaining: String,

    /// 距最近「可用且有坐标」志愿者的公里数（一位小数）；无候选为 None
    pub nearest_volunteer_km: Option<String>,

    /// 已指派志愿者的展示行；未指派为 None
    pub volunteer: Option<VolunteerLineView>,

    /// 仅用于高亮样式；选中状态由调用方持有
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerLineView {
    pub name: String,

    /// "14:30"；无 ETA 则不渲染该行的 ETA 部分
    pub eta: Option<String>,
}

/// 静态示意面板（真实地图不可用时的替代展示，非交互）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapPanelView {
    /// 面板展示的静态图片
    pub image_url: String,

    /// 点击整个面板后在新上下文打开的外部地图地址
    pub external_map_url: String,

    /// "Updated: 14:30:05"
    pub updated_label: String,

    pub quick_actions: Vec<String>,

    /// 叠加在图片上的实时计数浮层
    pub overlay: LiveOverlayView,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiveOverlayView {
    pub en_route: usize,
    pub available: usize,
    pub delivered: usize,
}

/// Two-pane fallback view: illustrative map panel + selectable card list
/// + aggregate stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingFallbackView {
    pub map_panel: MapPanelView,
    pub cards: Vec<DonationCardView>,
    pub stats: NetworkStats,
}
