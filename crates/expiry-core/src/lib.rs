//! # Expiry Core
//!
//! 核心資料模型與類型定義

pub mod batch;
pub mod calendar;
pub mod category;
pub mod lenient;
pub mod restaurant;
pub mod status;

// Re-export 主要類型
pub use batch::{BatchLifecycle, ProductBatch};
pub use calendar::{calendar_date, days_between, parse_expiry_date};
pub use category::Category;
pub use restaurant::{Restaurant, FALLBACK_ALERT_DAYS};
pub use status::{EffectiveThresholds, ExpiryStatus};

/// 效期追蹤錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ExpiryError {
    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("批次 {batch_id} 不屬於餐廳 {restaurant_id}")]
    TenantMismatch {
        batch_id: uuid::Uuid,
        restaurant_id: uuid::Uuid,
    },

    #[error("序列化錯誤: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ExpiryError {
    fn from(err: serde_json::Error) -> Self {
        ExpiryError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExpiryError>;
