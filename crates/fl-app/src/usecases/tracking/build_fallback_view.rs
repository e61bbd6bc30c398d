//! Use case for building the tracking fallback view
//! 构建追踪降级视图的用例

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tracing::debug;

use fl_core::donation::{Donation, DonationId, TrackingSnapshot, Volunteer};
use fl_core::ports::ClockPort;
use fl_core::tracking::{
    format_distance_km, haversine_km, time_remaining, NetworkStats, StatusBadge,
};

use crate::models::{
    DonationCardView, LiveOverlayView, MapPanelView, TrackingFallbackView, VolunteerLineView,
};

use super::EXTERNAL_MAP_URL;

/// 示意面板使用的静态图片（真实地图不可用时展示）
pub const PANEL_IMAGE_URL: &str = "https://cdn.builder.io/api/v1/image/assets%2Fc8e502a783604533b5c478ab95726ead%2Fdf20984a15e54a7e8cc83957fbfad2cb?format=webp&width=800";

const QUICK_ACTIONS: [&str; 3] = ["Find Donation", "Track Route", "Contact Volunteer"];

/// Use case for projecting a tracking snapshot into the fallback view.
///
/// ## Behavior / 行为
/// - 纯投影：不修改输入，不做缓存，每次调用都从头推导
/// - "now" 只通过注入的时钟进入，推导路径上没有任何 I/O
pub struct BuildTrackingFallbackView {
    clock: Arc<dyn ClockPort>,
}

impl BuildTrackingFallbackView {
    /// Create a new use case instance.
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    /// Execute the use case.
    ///
    /// 输入快照只读；`selected` 仅决定哪张卡片带高亮标记。
    pub fn execute(
        &self,
        snapshot: &TrackingSnapshot,
        selected: Option<&DonationId>,
    ) -> TrackingFallbackView {
        let now_ms = self.clock.now_ms();
        let stats = NetworkStats::from_snapshot(snapshot);

        debug!(
            donations = snapshot.donations.len(),
            volunteers = snapshot.volunteers.len(),
            "Building tracking fallback view"
        );

        let cards = snapshot
            .donations
            .iter()
            .map(|donation| card_for(donation, &snapshot.volunteers, selected, now_ms))
            .collect();

        TrackingFallbackView {
            map_panel: MapPanelView {
                image_url: PANEL_IMAGE_URL.to_string(),
                external_map_url: EXTERNAL_MAP_URL.to_string(),
                updated_label: format!("Updated: {}", format_clock_time(now_ms)),
                quick_actions: QUICK_ACTIONS.iter().map(|s| s.to_string()).collect(),
                overlay: LiveOverlayView {
                    en_route: stats.in_transit,
                    available: stats.available_volunteers,
                    delivered: stats.delivered,
                },
            },
            cards,
            stats,
        }
    }
}

fn card_for(
    donation: &Donation,
    volunteers: &[Volunteer],
    selected: Option<&DonationId>,
    now_ms: i64,
) -> DonationCardView {
    DonationCardView {
        id: donation.id.inner().to_string(),
        donor_name: donation.donor_name.clone(),
        badge: StatusBadge::classify(donation.status),
        food_quantity: donation.food_quantity.clone(),
        address: donation.location.address.clone(),
        time_remaining: time_remaining(now_ms, donation.expiry_time.timestamp_millis()),
        nearest_volunteer_km: nearest_available_km(donation, volunteers),
        volunteer: donation.volunteer.as_ref().map(|v| VolunteerLineView {
            name: v.name.clone(),
            eta: v
                .estimated_arrival
                .map(|eta| eta.format("%H:%M").to_string()),
        }),
        selected: selected.map(|id| *id == donation.id).unwrap_or(false),
    }
}

/// 距该捐赠最近的「可用且有坐标」志愿者的公里数
fn nearest_available_km(donation: &Donation, volunteers: &[Volunteer]) -> Option<String> {
    volunteers
        .iter()
        .filter(|v| v.is_available)
        .filter_map(|v| v.coordinates.as_ref())
        .map(|c| {
            haversine_km(
                donation.location.latitude,
                donation.location.longitude,
                c.latitude,
                c.longitude,
            )
        })
        .min_by(|a, b| a.total_cmp(b))
        .map(format_distance_km)
}

fn format_clock_time(now_ms: i64) -> String {
    match Utc.timestamp_millis_opt(now_ms).single() {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => {
            log::warn!("Clock returned out-of-range timestamp: {}", now_ms);
            "--:--:--".to_string()
        }
    }
}
