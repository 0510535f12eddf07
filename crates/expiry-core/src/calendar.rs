//! 日曆日計算
//!
//! 所有效期判斷都以日曆日為單位，絕不使用時間戳相減。

use chrono::{DateTime, Duration, NaiveDate, TimeZone};

use crate::{ExpiryError, Result};

/// 從 `today` 到 `expiry` 的完整日曆天數
///
/// 今天到期為 0，昨天到期為 -1。
pub fn days_between(today: NaiveDate, expiry: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// 取時間戳在其自身時區下的日曆日
///
/// 持有時間戳的呼叫端需先用此函數轉成日期，再交給分級引擎。
pub fn calendar_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// 日期加減天數（溢出返回 `None`）
pub fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// 解析到期日
///
/// 接受 `YYYY-MM-DD` 或 RFC 3339 時間戳（取時間戳自身偏移下的日期）。
/// 這是呼叫端的前置檢查：分級引擎本身假設日期一定有效。
pub fn parse_expiry_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ExpiryError::InvalidDate("到期日為空".to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|stamp| calendar_date(&stamp))
        .map_err(|_| ExpiryError::InvalidDate(trimmed.to_string()))
}
