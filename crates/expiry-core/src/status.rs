//! 衍生值：有效門檻與效期狀態（不持久化）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 單一批次使用的有效門檻
///
/// 不強制 `warning_days >= urgent_days`；倒置時 Warning 區段不可達。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveThresholds {
    /// 警告門檻（天）
    pub warning_days: u32,
    /// 緊急門檻（天）
    pub urgent_days: u32,
}

impl EffectiveThresholds {
    pub fn new(warning_days: u32, urgent_days: u32) -> Self {
        Self {
            warning_days,
            urgent_days,
        }
    }

    /// 僅有緊急門檻（警告區段寬度為 0）
    pub fn urgent_only(urgent_days: u32) -> Self {
        Self::new(urgent_days, urgent_days)
    }

    /// 警告區段寬度（天）
    pub fn warning_band_width(&self) -> u32 {
        self.warning_days.saturating_sub(self.urgent_days)
    }

    /// 警告門檻是否比緊急門檻更緊
    pub fn is_inverted(&self) -> bool {
        self.warning_days < self.urgent_days
    }
}

/// 批次效期狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    /// 已過期
    Expired,
    /// 緊急
    Urgent,
    /// 警告
    Warning,
    /// 正常
    Ok,
}

impl ExpiryStatus {
    /// 全部狀態（嚴重度由高到低）
    pub const ALL: [ExpiryStatus; 4] = [
        ExpiryStatus::Expired,
        ExpiryStatus::Urgent,
        ExpiryStatus::Warning,
        ExpiryStatus::Ok,
    ];

    /// 嚴重度（數字越大越嚴重）
    pub fn severity(&self) -> u8 {
        match self {
            ExpiryStatus::Expired => 3,
            ExpiryStatus::Urgent => 2,
            ExpiryStatus::Warning => 1,
            ExpiryStatus::Ok => 0,
        }
    }

    /// 是否需要員工處理
    pub fn needs_attention(&self) -> bool {
        *self != ExpiryStatus::Ok
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Urgent => "urgent",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Ok => "ok",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
