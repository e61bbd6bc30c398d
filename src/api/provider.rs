//! Provider-banner Tauri commands
//! 地图服务配置横幅相关的 Tauri 命令

use serde_json::Value;
use tauri::State;

use fl_app::usecases::provider::ProviderDocLink;
use fl_tauri::TrackingRuntime;

use super::map_err;

/// Render the provider configuration banner
/// 渲染地图服务配置横幅
///
/// The credential was resolved once at startup; this command never
/// touches ambient environment state.
#[tauri::command]
pub async fn get_provider_banner(runtime: State<'_, TrackingRuntime>) -> Result<Value, String> {
    let view = runtime
        .usecases()
        .build_provider_banner()
        .execute(runtime.provider_config());

    serde_json::to_value(&view).map_err(|e| format!("Failed to serialize banner: {}", e))
}

/// Open one of the provider documentation pages
#[tauri::command]
pub async fn open_provider_doc(
    runtime: State<'_, TrackingRuntime>,
    link: ProviderDocLink,
) -> Result<(), String> {
    runtime
        .usecases()
        .open_provider_doc()
        .execute(link)
        .map_err(map_err)
}
