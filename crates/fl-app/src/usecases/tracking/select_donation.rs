//! Use case for forwarding a donation selection
//! 转发捐赠卡片选中事件的用例

use std::sync::Arc;

use tracing::debug;

use fl_core::donation::DonationId;
use fl_core::ports::SelectionSinkPort;

/// Error type for the select-donation use case
#[derive(Debug, thiserror::Error)]
pub enum SelectDonationError {
    #[error("Selection sink rejected donation {0}: {1}")]
    Sink(String, String),
}

/// Use case: hand a clicked donation id to whoever owns selection state.
///
/// 本层不解释「选中」意味着什么，也不校验 id 是否存在于某个快照中。
pub struct SelectDonation {
    sink: Arc<dyn SelectionSinkPort>,
}

impl SelectDonation {
    /// Create a new use case instance.
    pub fn new(sink: Arc<dyn SelectionSinkPort>) -> Self {
        Self { sink }
    }

    /// Execute the use case: exactly one sink notification per call.
    pub fn execute(&self, id: &DonationId) -> Result<(), SelectDonationError> {
        debug!(donation_id = %id.inner(), "Forwarding donation selection");

        self.sink
            .donation_selected(id)
            .map_err(|e| SelectDonationError::Sink(id.inner().to_string(), e.to_string()))
    }
}
