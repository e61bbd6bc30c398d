//! Use case for opening the external map site
//! 打开外部地图站点的用例

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use fl_core::ports::LinkOpenerPort;

/// 点击示意面板后跳转的外部地图地址
pub const EXTERNAL_MAP_URL: &str = "https://maps.google.com";

/// Use case: open the external mapping site in a new browsing context.
///
/// Fire-and-forget：不带参数、不读响应，打开后的上下文与本系统解耦。
pub struct OpenExternalMap {
    opener: Arc<dyn LinkOpenerPort>,
}

impl OpenExternalMap {
    /// Create a new use case instance.
    pub fn new(opener: Arc<dyn LinkOpenerPort>) -> Self {
        Self { opener }
    }

    /// Execute the use case.
    pub fn execute(&self) -> Result<()> {
        info!("Opening external map: {}", EXTERNAL_MAP_URL);
        self.opener.open_external(EXTERNAL_MAP_URL)
    }
}
