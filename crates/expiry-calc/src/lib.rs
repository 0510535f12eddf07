//! # Expiry Calculation Engine
//!
//! 效期分級引擎：門檻解析、狀態分級、彙總計數

pub mod aggregation;
pub mod classification;
pub mod thresholds;
pub mod tracker;

// Re-export 主要類型
pub use aggregation::{ExpiryAggregator, ExpirySummary};
pub use classification::{BatchAssessment, ExpiryClassifier};
pub use thresholds::ThresholdResolver;
pub use tracker::{ExpiryReport, ExpiryTracker};

/// 門檻配置警告
///
/// 只做診斷用途，不會改變任何批次的分級結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdWarning {
    /// 相關分類（租戶層級警告為 `None`）
    pub category_id: Option<uuid::Uuid>,
    pub message: String,
    pub kind: ThresholdWarningKind,
}

impl ThresholdWarning {
    pub fn new(
        category_id: Option<uuid::Uuid>,
        message: String,
        kind: ThresholdWarningKind,
    ) -> Self {
        Self {
            category_id,
            message,
            kind,
        }
    }

    /// 分類的警告門檻比緊急門檻更緊，Warning 狀態不可達
    pub fn inverted_bands(category_id: uuid::Uuid, message: String) -> Self {
        Self::new(Some(category_id), message, ThresholdWarningKind::InvertedBands)
    }

    /// 批次引用的分類不在本餐廳的分類中，已改用餐廳預設門檻
    pub fn unknown_category(category_id: uuid::Uuid, message: String) -> Self {
        Self::new(Some(category_id), message, ThresholdWarningKind::UnknownCategory)
    }

    /// 餐廳預設門檻無效，已使用硬編碼降級值
    pub fn invalid_tenant_default(message: String) -> Self {
        Self::new(None, message, ThresholdWarningKind::InvalidTenantDefault)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdWarningKind {
    InvertedBands,
    InvalidTenantDefault,
    UnknownCategory,
}
