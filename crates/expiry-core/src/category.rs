//! 商品分類模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 商品分類（可覆寫餐廳預設門檻）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// 分類ID
    pub id: Uuid,

    /// 所屬餐廳
    pub restaurant_id: Uuid,

    /// 分類名稱
    pub name: String,

    /// 緊急門檻覆寫（天）
    #[serde(
        default,
        alias = "alertDaysBeforeExpiry",
        deserialize_with = "crate::lenient::option_days"
    )]
    pub urgent_alert_days: Option<i64>,

    /// 警告門檻覆寫（天）
    #[serde(
        default,
        alias = "warningDaysBeforeExpiry",
        deserialize_with = "crate::lenient::option_days"
    )]
    pub warning_alert_days: Option<i64>,
}

impl Category {
    /// 創建新的分類（不覆寫任何門檻）
    pub fn new(restaurant_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            restaurant_id,
            name,
            urgent_alert_days: None,
            warning_alert_days: None,
        }
    }

    /// 建構器模式：設置ID
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// 建構器模式：設置緊急門檻覆寫
    pub fn with_urgent_alert_days(mut self, days: i64) -> Self {
        self.urgent_alert_days = Some(days);
        self
    }

    /// 建構器模式：設置警告門檻覆寫
    pub fn with_warning_alert_days(mut self, days: i64) -> Self {
        self.warning_alert_days = Some(days);
        self
    }

    /// 有效的緊急覆寫（> 0）
    pub fn urgent_override(&self) -> Option<u32> {
        positive_days(self.urgent_alert_days)
    }

    /// 有效的警告覆寫（> 0）
    pub fn warning_override(&self) -> Option<u32> {
        positive_days(self.warning_alert_days)
    }

    /// 是否完全沒有有效覆寫
    pub fn uses_defaults(&self) -> bool {
        self.urgent_override().is_none() && self.warning_override().is_none()
    }
}

/// 只接受 > 0 的天數，過大的值飽和到 `u32::MAX`
pub(crate) fn positive_days(days: Option<i64>) -> Option<u32> {
    match days {
        Some(d) if d > 0 => Some(u32::try_from(d).unwrap_or(u32::MAX)),
        _ => None,
    }
}
