//! # Expiry
//!
//! 餐廳庫存效期追蹤：依批次到期日與分類門檻分級，並彙總為租戶層級計數。
//!
//! ```
//! use chrono::NaiveDate;
//! use expiry::{ExpiryClassifier, ExpiryStatus, ThresholdResolver};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
//!
//! let thresholds = ThresholdResolver::resolve(3, None);
//! assert_eq!(
//!     ExpiryClassifier::classify(today, expiry, &thresholds),
//!     ExpiryStatus::Urgent
//! );
//! ```

pub use expiry_calc::{
    BatchAssessment, ExpiryAggregator, ExpiryClassifier, ExpiryReport, ExpirySummary,
    ExpiryTracker, ThresholdResolver, ThresholdWarning, ThresholdWarningKind,
};
pub use expiry_core::{
    calendar_date, days_between, parse_expiry_date, BatchLifecycle, Category,
    EffectiveThresholds, ExpiryError, ExpiryStatus, ProductBatch, Restaurant, Result,
    FALLBACK_ALERT_DAYS,
};
