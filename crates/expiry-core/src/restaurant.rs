//! 餐廳（租戶）模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 租戶預設門檻本身無效時使用的硬編碼緊急天數
pub const FALLBACK_ALERT_DAYS: u32 = 3;

/// 餐廳（租戶）配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// 餐廳ID
    pub id: Uuid,

    /// 餐廳名稱
    pub name: String,

    /// 全店預設的緊急門檻（天）
    ///
    /// 保留原始值：≤ 0 為無效設定，解析時退回 [`FALLBACK_ALERT_DAYS`]。
    #[serde(
        default = "default_alert_days",
        deserialize_with = "crate::lenient::required_days"
    )]
    pub alert_days_before_expiry: i64,
}

fn default_alert_days() -> i64 {
    i64::from(FALLBACK_ALERT_DAYS)
}

impl Restaurant {
    /// 創建新的餐廳（預設 3 天提醒）
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            alert_days_before_expiry: default_alert_days(),
        }
    }

    /// 建構器模式：設置ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：設置預設提醒天數
    pub fn with_alert_days_before_expiry(mut self, days: i64) -> Self {
        self.alert_days_before_expiry = days;
        self
    }

    /// 預設提醒天數是否有效（> 0）
    pub fn has_valid_alert_days(&self) -> bool {
        self.alert_days_before_expiry > 0
    }
}
