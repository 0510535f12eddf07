//! 寬鬆的門檻天數解析
//!
//! 持久化資料中的門檻欄位可能是整數、數字字串、浮點數、null 或任意垃圾值。
//! 這裡只負責「能否讀成整數」；是否 > 0 由門檻解析器統一判斷。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 將 JSON 值解析為天數
///
/// - 整數：原樣返回（包含 0 與負數）
/// - 整數值的浮點數（如 `5.0`）：轉為整數
/// - 數字字串（如 `"7"`、`" 7 "`、`"7.0"`）：轉為整數
/// - 其他（小數、布林、非數字字串、物件、null）：`None`
pub fn parse_days(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// serde `deserialize_with`：可選的門檻覆寫
pub fn option_days<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_days(&value))
}

/// serde `deserialize_with`：必填的餐廳預設門檻
///
/// 無法解析時返回 0，讓解析器走硬編碼的降級值。
pub fn required_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_days(&value).unwrap_or(0))
}
