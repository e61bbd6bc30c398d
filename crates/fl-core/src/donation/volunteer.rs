use serde::{Deserialize, Serialize};

use super::model::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VolunteerId(pub String);

impl VolunteerId {
    pub fn inner(&self) -> &str {
        &self.0
    }
}

impl From<String> for VolunteerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VolunteerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 志愿者快照
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Volunteer {
    pub id: VolunteerId,

    pub name: String,

    pub is_available: bool,

    /// 当前坐标；有坐标才参与距离推导
    pub coordinates: Option<GeoPoint>,
}
