//! 效期狀態分級

use chrono::NaiveDate;
use expiry_core::{days_between, EffectiveThresholds, ExpiryStatus, ProductBatch};
use serde::Serialize;
use uuid::Uuid;

/// 效期分級器
pub struct ExpiryClassifier;

impl ExpiryClassifier {
    /// 依今天、到期日與有效門檻分級
    pub fn classify(
        today: NaiveDate,
        expiry_date: NaiveDate,
        thresholds: &EffectiveThresholds,
    ) -> ExpiryStatus {
        Self::classify_days(days_between(today, expiry_date), thresholds)
    }

    /// 依剩餘天數分級
    ///
    /// 先比對者優先。門檻倒置時不重新排序，Warning 因此不可達。
    pub fn classify_days(days_to_expiry: i64, thresholds: &EffectiveThresholds) -> ExpiryStatus {
        if days_to_expiry < 0 {
            ExpiryStatus::Expired
        } else if days_to_expiry <= i64::from(thresholds.urgent_days) {
            ExpiryStatus::Urgent
        } else if days_to_expiry <= i64::from(thresholds.warning_days) {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Ok
        }
    }

    /// 評估單一批次
    pub fn assess(
        today: NaiveDate,
        batch: &ProductBatch,
        thresholds: EffectiveThresholds,
    ) -> BatchAssessment {
        let days_to_expiry = days_between(today, batch.expiry_date);
        BatchAssessment {
            batch_id: batch.id,
            name: batch.name.clone(),
            expiry_date: batch.expiry_date,
            days_to_expiry,
            thresholds,
            status: Self::classify_days(days_to_expiry, &thresholds),
        }
    }
}

/// 單一批次的分級結果（供呈現層標示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAssessment {
    pub batch_id: Uuid,
    pub name: String,
    pub expiry_date: NaiveDate,
    /// 剩餘日曆天數（負數表示已過期）
    pub days_to_expiry: i64,
    pub thresholds: EffectiveThresholds,
    pub status: ExpiryStatus,
}
