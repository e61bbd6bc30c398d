use serde::{Deserialize, Serialize};

use crate::donation::DonationStatus;

/// 状态徽章颜色 token（前端映射到具体样式类）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Yellow,
    Blue,
    Orange,
    Green,
    Gray,
}

/// 状态徽章图标 token
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Clock,
    Person,
    Truck,
    Check,
    Warning,
}

/// 捐赠卡片上的状态徽章
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBadge {
    pub color: StatusColor,
    pub icon: StatusIcon,
    /// 展示用标签（"in_transit" -> "In Transit"）
    pub label: String,
}

impl StatusBadge {
    /// 状态 -> (颜色, 图标, 标签) 的全函数映射
    ///
    /// `Unknown` 一律落到 gray/warning，不会 panic。
    pub fn classify(status: DonationStatus) -> Self {
        let (color, icon, label) = match status {
            DonationStatus::Pending => (StatusColor::Yellow, StatusIcon::Clock, "Pending"),
            DonationStatus::Assigned => (StatusColor::Blue, StatusIcon::Person, "Assigned"),
            DonationStatus::InTransit => (StatusColor::Orange, StatusIcon::Truck, "In Transit"),
            DonationStatus::Delivered => (StatusColor::Green, StatusIcon::Check, "Delivered"),
            DonationStatus::Unknown => (StatusColor::Gray, StatusIcon::Warning, "Unknown"),
        };

        Self {
            color,
            icon,
            label: label.to_string(),
        }
    }
}
