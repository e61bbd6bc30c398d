//! FoodLink composition root.
//!
//! Loads settings, freezes the map-provider credential, wires the ports
//! into the tracking runtime, and starts the Tauri shell.

pub mod api;
mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tauri::Manager;

use fl_core::ports::SettingsPort;
use fl_core::settings::model::Settings;
use fl_infra::config::resolve_provider_config;
use fl_infra::settings::FileSettingsRepository;
use fl_infra::time::SystemClock;
use fl_tauri::adapters::{EventSelectionSink, OpenerLink};
use fl_tauri::TrackingRuntime;

/// 设置文件位置：<config_dir>/foodlink/settings.json
fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("foodlink")
        .join("settings.json")
}

/// 加载用户设置；失败时退回默认配置并尝试落盘
async fn load_settings() -> Settings {
    let repo = FileSettingsRepository::new(settings_path());
    match repo.load().await {
        Ok(settings) => settings,
        Err(e) => {
            error!("加载配置失败: {}", e);
            let defaults = Settings::default();
            if let Err(e) = repo.save(&defaults).await {
                error!("保存默认配置失败: {}", e);
            }
            defaults
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // 注意: 日志系统将在 Builder 插件注册时初始化
    dotenvy::dotenv().ok();

    let settings = tauri::async_runtime::block_on(load_settings());

    // 凭据在这里解析一次，之后作为显式配置传递，不再读环境
    let provider_config = resolve_provider_config(&settings);
    let silent_start = settings.general.silent_start;

    let mut builder = tauri::Builder::default()
        .plugin(utils::logging::get_builder().build())
        .plugin(tauri_plugin_opener::init());

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        builder = builder.plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {}));
    }

    builder
        .setup(move |app| {
            let win_builder =
                tauri::WebviewWindowBuilder::new(app, "main", tauri::WebviewUrl::default())
                    .title("FoodLink")
                    .inner_size(1200.0, 760.0)
                    .min_inner_size(960.0, 640.0);

            // 静默启动时初始不可见
            let win_builder = if silent_start {
                win_builder.visible(false)
            } else {
                win_builder
            };

            let _window = win_builder.build().expect("Failed to build main window");

            let handle = app.handle().clone();
            let runtime = TrackingRuntime::new(
                Arc::new(SystemClock),
                Arc::new(OpenerLink::new(handle.clone())),
                Arc::new(EventSelectionSink::new(handle)),
                provider_config.clone(),
            );
            app.manage(runtime);

            info!("Map provider mode: {:?}", provider_config.mode());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::tracking::get_tracking_view,
            api::tracking::select_donation,
            api::tracking::open_tracking_map,
            api::provider::get_provider_banner,
            api::provider::open_provider_doc,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
