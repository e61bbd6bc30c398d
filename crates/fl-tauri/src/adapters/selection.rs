use anyhow::{Context, Result};
use tauri::{AppHandle, Emitter};

use fl_core::donation::DonationId;
use fl_core::ports::SelectionSinkPort;

/// 选中通知的事件名（前端监听）
pub const DONATION_SELECTED_EVENT: &str = "tracking://donation-selected";

/// [`SelectionSinkPort`] that emits a Tauri event to the webview.
///
/// The frontend owns selection state; this adapter only notifies it.
pub struct EventSelectionSink {
    app: AppHandle,
}

impl EventSelectionSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl SelectionSinkPort for EventSelectionSink {
    fn donation_selected(&self, id: &DonationId) -> Result<()> {
        self.app
            .emit(DONATION_SELECTED_EVENT, id.inner().to_string())
            .with_context(|| format!("emit selection event failed: {}", id.inner()))
    }
}
