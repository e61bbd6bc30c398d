use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DonationId(pub String);

impl DonationId {
    pub fn inner(&self) -> &str {
        &self.0
    }
}

impl From<String> for DonationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DonationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// 捐赠生命周期状态
///
/// 未识别的字符串一律落入 [`DonationStatus::Unknown`]，
/// 快照解析永远不会因为上游新增状态而失败。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Pending,
    Assigned,
    InTransit,
    Delivered,
    Unknown,
}

impl From<&str> for DonationStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => DonationStatus::Pending,
            "assigned" => DonationStatus::Assigned,
            "in_transit" => DonationStatus::InTransit,
            "delivered" => DonationStatus::Delivered,
            _ => DonationStatus::Unknown, // Fail safe for future lifecycle states
        }
    }
}

impl From<String> for DonationStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl<'de> Deserialize<'de> for DonationStatus {
    /// Total over all string inputs: unknown values become `Unknown`
    /// instead of a deserialization error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(DonationStatus::from(s.as_str()))
    }
}

/// 经纬度坐标（十进制度）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// 展示用地址
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// 已指派志愿者的内嵌快照（随捐赠记录一起下发）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignedVolunteer {
    pub name: String,
    /// 预计到达时间；没有则不展示 ETA 行
    pub estimated_arrival: Option<DateTime<Utc>>,
}

/// A read-only snapshot of one donation as supplied by the upstream
/// data layer.
///
/// 本层从不修改捐赠记录；`delivered` 之后 volunteer/ETA 字段仅作展示。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    pub id: DonationId,

    pub donor_name: String,

    /// 食品数量描述（自由文本，例如 "12 meal boxes"）
    pub food_quantity: String,

    pub location: Location,

    /// 过期时间（绝对时间点）
    pub expiry_time: DateTime<Utc>,

    pub status: DonationStatus,

    /// 已指派的志愿者；未指派则为 None
    pub volunteer: Option<AssignedVolunteer>,
}
