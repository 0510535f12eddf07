//! 門檻解析
//!
//! 優先順序：分類覆寫 → 餐廳預設 → 硬編碼降級值（3 天）。
//! 警告門檻沒有覆寫時收斂為緊急門檻（警告區段寬度為 0）。

use expiry_core::{Category, EffectiveThresholds, Restaurant, FALLBACK_ALERT_DAYS};

/// 門檻解析器
pub struct ThresholdResolver;

impl ThresholdResolver {
    /// 解析單一批次的有效門檻
    ///
    /// 無效值（≤ 0 或無法解析）一律視為缺省，往下一層退回。
    pub fn resolve(restaurant_default: i64, category: Option<&Category>) -> EffectiveThresholds {
        let urgent_days = category
            .and_then(Category::urgent_override)
            .unwrap_or_else(|| Self::effective_default(restaurant_default));

        let warning_days = category
            .and_then(Category::warning_override)
            .unwrap_or(urgent_days);

        EffectiveThresholds {
            warning_days,
            urgent_days,
        }
    }

    /// 以餐廳記錄解析
    pub fn resolve_for_restaurant(
        restaurant: &Restaurant,
        category: Option<&Category>,
    ) -> EffectiveThresholds {
        Self::resolve(restaurant.alert_days_before_expiry, category)
    }

    /// 租戶層級的有效緊急門檻
    pub fn effective_default(restaurant_default: i64) -> u32 {
        if restaurant_default > 0 {
            u32::try_from(restaurant_default).unwrap_or(u32::MAX)
        } else {
            FALLBACK_ALERT_DAYS
        }
    }
}
