use log::LevelFilter;
use tauri_plugin_log::{Target, TargetKind, TimezoneStrategy};

use crate::utils::env::is_development;

/// 初始化日志系统构建器
pub fn get_builder() -> tauri_plugin_log::Builder {
    let is_dev = is_development();
    let level = if is_dev {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let builder = tauri_plugin_log::Builder::new()
        .timezone_strategy(TimezoneStrategy::UseLocal)
        .level(level);

    if is_dev {
        // 开发环境: 输出到 Webview DevTools 与终端
        builder
            .target(Target::new(TargetKind::Webview))
            .target(Target::new(TargetKind::Stdout))
    } else {
        // 生产环境: 输出到日志目录
        builder.target(Target::new(TargetKind::LogDir {
            file_name: Some("foodlink.log".to_string()),
        }))
    }
}
