use anyhow::{Context, Result};
use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;

use fl_core::ports::LinkOpenerPort;

/// [`LinkOpenerPort`] backed by tauri-plugin-opener.
///
/// 用系统默认浏览器打开，不传参数也不等待结果。
pub struct OpenerLink {
    app: AppHandle,
}

impl OpenerLink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl LinkOpenerPort for OpenerLink {
    fn open_external(&self, url: &str) -> Result<()> {
        self.app
            .opener()
            .open_url(url, None::<&str>)
            .with_context(|| format!("open external url failed: {}", url))
    }
}
