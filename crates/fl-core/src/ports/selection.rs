use anyhow::Result;

use crate::donation::DonationId;

/// Receives selection changes.
///
/// 「选中」意味着什么由持有选中状态的一方决定，本层只负责通知。
pub trait SelectionSinkPort: Send + Sync {
    fn donation_selected(&self, id: &DonationId) -> Result<()>;
}
