use serde::{Deserialize, Serialize};

use super::{Donation, Volunteer};

/// The data for one render pass, as fetched by the upstream collaborator.
///
/// 注意：
/// - 不缓存、不做 diff
/// - 每个渲染周期都从头重新推导
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackingSnapshot {
    pub donations: Vec<Donation>,
    pub volunteers: Vec<Volunteer>,
}
