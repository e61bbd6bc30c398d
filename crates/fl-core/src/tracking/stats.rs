use serde::{Deserialize, Serialize};

use crate::donation::{DonationStatus, TrackingSnapshot};

/// 聚合网络指标（Network Status 面板与地图浮层共用）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkStats {
    pub total_donations: usize,

    /// `is_available == true` 的志愿者数
    pub available_volunteers: usize,

    pub in_transit: usize,

    pub delivered: usize,

    /// round(100 * delivered / total)；total 为 0 时恒为 0
    pub success_rate: u32,
}

impl NetworkStats {
    pub fn from_snapshot(snapshot: &TrackingSnapshot) -> Self {
        let total_donations = snapshot.donations.len();
        let delivered = snapshot
            .donations
            .iter()
            .filter(|d| d.status == DonationStatus::Delivered)
            .count();
        let in_transit = snapshot
            .donations
            .iter()
            .filter(|d| d.status == DonationStatus::InTransit)
            .count();
        let available_volunteers = snapshot
            .volunteers
            .iter()
            .filter(|v| v.is_available)
            .count();

        // total 为 0 时直接给 0，避免除零渲染出 NaN
        let success_rate = if total_donations == 0 {
            0
        } else {
            (delivered as f64 / total_donations as f64 * 100.0).round() as u32
        };

        Self {
            total_donations,
            available_volunteers,
            in_transit,
            delivered,
            success_rate,
        }
    }
}
