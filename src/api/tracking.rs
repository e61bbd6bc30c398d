//! Tracking-related Tauri commands
//! 追踪相关的 Tauri 命令

use serde_json::Value;
use tauri::State;

use fl_core::donation::{DonationId, TrackingSnapshot};
use fl_tauri::TrackingRuntime;

use super::map_err;

/// Build the fallback tracking view for one snapshot
/// 为一次快照构建降级追踪视图
///
/// The frontend owns the snapshot and the selection state; this command
/// is a pure projection of the arguments it receives.
///
/// ## Returns / 返回值
/// - JSON representation of the TrackingFallbackView
#[tauri::command]
pub async fn get_tracking_view(
    runtime: State<'_, TrackingRuntime>,
    snapshot: Value,
    selected_donation_id: Option<String>,
) -> Result<Value, String> {
    let snapshot: TrackingSnapshot = serde_json::from_value(snapshot)
        .map_err(|e| format!("Failed to parse tracking snapshot: {}", e))?;
    let selected = selected_donation_id.map(DonationId::from);

    let view = runtime
        .usecases()
        .build_fallback_view()
        .execute(&snapshot, selected.as_ref());

    serde_json::to_value(&view).map_err(|e| format!("Failed to serialize tracking view: {}", e))
}

/// Forward a donation card click to the selection owner
/// 把卡片点击转发给持有选中状态的一方
#[tauri::command]
pub async fn select_donation(
    runtime: State<'_, TrackingRuntime>,
    donation_id: String,
) -> Result<(), String> {
    runtime
        .usecases()
        .select_donation()
        .execute(&DonationId::from(donation_id))
        .map_err(|e| e.to_string())
}

/// Open the external map site in a new browsing context
/// 在新上下文打开外部地图站点
#[tauri::command]
pub async fn open_tracking_map(runtime: State<'_, TrackingRuntime>) -> Result<(), String> {
    runtime
        .usecases()
        .open_external_map()
        .execute()
        .map_err(map_err)
}
