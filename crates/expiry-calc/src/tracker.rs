//! 效期追蹤主流程

use chrono::NaiveDate;
use expiry_core::{
    Category, EffectiveThresholds, ExpiryError, ExpiryStatus, ProductBatch, Restaurant,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::aggregation::ExpirySummary;
use crate::classification::{BatchAssessment, ExpiryClassifier};
use crate::thresholds::ThresholdResolver;
use crate::ThresholdWarning;

/// 單一餐廳的效期追蹤器
///
/// 不保留呼叫間的狀態，可跨執行緒共用。
#[derive(Debug, Clone)]
pub struct ExpiryTracker {
    /// 餐廳配置
    restaurant: Restaurant,

    /// 分類索引（只含本餐廳的分類）
    categories: HashMap<Uuid, Category>,
}

impl ExpiryTracker {
    /// 創建新的追蹤器
    pub fn new(restaurant: Restaurant, categories: Vec<Category>) -> Self {
        let mut index = HashMap::with_capacity(categories.len());
        for category in categories {
            if category.restaurant_id != restaurant.id {
                tracing::debug!(
                    "分類 {} 不屬於餐廳 {}，忽略",
                    category.id,
                    restaurant.id
                );
                continue;
            }
            index.insert(category.id, category);
        }

        Self {
            restaurant,
            categories: index,
        }
    }

    /// 主評估入口
    ///
    /// 非 ACTIVE 批次會被略過；其他餐廳的批次視為資料錯誤。
    /// 未知分類退回餐廳預設門檻，並以警告回報。
    pub fn evaluate(
        &self,
        today: NaiveDate,
        batches: &[ProductBatch],
    ) -> expiry_core::Result<ExpiryReport> {
        tracing::info!(
            "開始效期評估：餐廳 {}，批次 {} 筆，基準日 {}",
            self.restaurant.id,
            batches.len(),
            today
        );

        let start_time = std::time::Instant::now();

        // Step 1: 篩選在庫批次
        let active: Vec<&ProductBatch> = batches.iter().filter(|b| b.is_active()).collect();
        let skipped_inactive = batches.len() - active.len();
        tracing::debug!(
            "Step 1: 在庫批次 {} 筆，略過 {} 筆",
            active.len(),
            skipped_inactive
        );

        // Step 2: 解析門檻並分級
        tracing::debug!("Step 2: 解析門檻並分級");
        let mut assessments = Vec::with_capacity(active.len());
        let mut inverted_categories = Vec::new();
        let mut unknown_categories = Vec::new();
        let mut seen_categories = HashSet::new();

        for batch in active {
            let thresholds = self.thresholds_for(batch)?;

            if let Some(category_id) = batch.category_id {
                if seen_categories.insert(category_id) {
                    if !self.categories.contains_key(&category_id) {
                        unknown_categories.push(category_id);
                    } else if thresholds.is_inverted() {
                        inverted_categories.push((category_id, thresholds));
                    }
                }
            }

            assessments.push(ExpiryClassifier::assess(today, batch, thresholds));
        }

        // Step 3: 彙總計數
        tracing::debug!("Step 3: 彙總計數");
        let summary = ExpirySummary::from_statuses(assessments.iter().map(|a| a.status));

        // Step 4: 配置警告
        let warnings = self.collect_warnings(&inverted_categories, &unknown_categories);
        for warning in &warnings {
            tracing::warn!("{}", warning.message);
        }

        let report = ExpiryReport {
            today,
            assessments,
            summary,
            warnings,
            skipped_inactive,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!(
            "效期評估完成，耗時 {:?}：過期 {}，緊急 {}，警告 {}，正常 {}",
            start_time.elapsed(),
            summary.expired,
            summary.urgent,
            summary.warning,
            summary.ok
        );

        Ok(report)
    }

    /// 解析單一批次的有效門檻
    ///
    /// 分類不在索引中時視同無分類。
    pub fn thresholds_for(&self, batch: &ProductBatch) -> expiry_core::Result<EffectiveThresholds> {
        if batch.restaurant_id != self.restaurant.id {
            return Err(ExpiryError::TenantMismatch {
                batch_id: batch.id,
                restaurant_id: self.restaurant.id,
            });
        }

        let category = batch.category_id.and_then(|id| self.categories.get(&id));

        Ok(ThresholdResolver::resolve_for_restaurant(
            &self.restaurant,
            category,
        ))
    }

    fn collect_warnings(
        &self,
        inverted_categories: &[(Uuid, EffectiveThresholds)],
        unknown_categories: &[Uuid],
    ) -> Vec<ThresholdWarning> {
        let mut warnings = Vec::new();

        if !self.restaurant.has_valid_alert_days() {
            warnings.push(ThresholdWarning::invalid_tenant_default(format!(
                "餐廳 {} 的預設提醒天數 {} 無效，使用 {} 天",
                self.restaurant.id,
                self.restaurant.alert_days_before_expiry,
                ThresholdResolver::effective_default(self.restaurant.alert_days_before_expiry)
            )));
        }

        for category_id in unknown_categories {
            warnings.push(ThresholdWarning::unknown_category(
                *category_id,
                format!(
                    "分類 {} 不屬於餐廳 {}，改用餐廳預設門檻",
                    category_id, self.restaurant.id
                ),
            ));
        }

        for (category_id, thresholds) in inverted_categories {
            let name = self
                .categories
                .get(category_id)
                .map(|c| c.name.as_str())
                .unwrap_or_default();
            warnings.push(ThresholdWarning::inverted_bands(
                *category_id,
                format!(
                    "分類 {} 的警告門檻 {} 天小於緊急門檻 {} 天，警告狀態不會出現",
                    name, thresholds.warning_days, thresholds.urgent_days
                ),
            ));
        }

        warnings
    }

    /// 獲取餐廳配置引用
    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// 查詢分類
    pub fn category(&self, id: &Uuid) -> Option<&Category> {
        self.categories.get(id)
    }
}

/// 效期評估結果
#[derive(Debug, Clone)]
pub struct ExpiryReport {
    /// 基準日
    pub today: NaiveDate,

    /// 每筆在庫批次的分級
    pub assessments: Vec<BatchAssessment>,

    /// 租戶層級計數
    pub summary: ExpirySummary,

    /// 配置警告
    pub warnings: Vec<ThresholdWarning>,

    /// 略過的非在庫批次數
    pub skipped_inactive: usize,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ExpiryReport {
    /// 需要處理的批次，最緊迫的在前
    ///
    /// 排序：嚴重度由高到低，再依剩餘天數、名稱。
    pub fn attention_list(&self) -> Vec<&BatchAssessment> {
        let mut list: Vec<&BatchAssessment> = self
            .assessments
            .iter()
            .filter(|a| a.status.needs_attention())
            .collect();
        list.sort_by(|a, b| {
            b.status
                .severity()
                .cmp(&a.status.severity())
                .then(a.days_to_expiry.cmp(&b.days_to_expiry))
                .then_with(|| a.name.cmp(&b.name))
        });
        list
    }

    /// 篩選某狀態的批次
    pub fn by_status(&self, status: ExpiryStatus) -> impl Iterator<Item = &BatchAssessment> {
        self.assessments.iter().filter(move |a| a.status == status)
    }

    /// 查詢單一批次的狀態
    pub fn status_of(&self, batch_id: &Uuid) -> Option<ExpiryStatus> {
        self.assessments
            .iter()
            .find(|a| a.batch_id == *batch_id)
            .map(|a| a.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThresholdWarningKind;
    use expiry_core::calendar::shift_days;
    use expiry_core::BatchLifecycle;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
    }

    fn day(offset: i64) -> NaiveDate {
        shift_days(today(), offset).unwrap()
    }

    fn batch(restaurant: &Restaurant, name: &str, offset: i64) -> ProductBatch {
        ProductBatch::new(
            restaurant.id,
            name.to_string(),
            Decimal::from(1),
            "kg".to_string(),
            day(offset),
        )
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn test_evaluate_mixed_batches() {
        init_tracing();
        let restaurant = Restaurant::new("Trattoria".to_string());
        let dairy = Category::new(restaurant.id, "Dairy".to_string())
            .with_urgent_alert_days(3)
            .with_warning_alert_days(7);
        let tracker = ExpiryTracker::new(restaurant.clone(), vec![dairy.clone()]);

        let batches = vec![
            batch(&restaurant, "Milk", -1),
            batch(&restaurant, "Basil", 2),
            batch(&restaurant, "Yogurt", 5).with_category(dairy.id),
            batch(&restaurant, "Flour", 30),
            batch(&restaurant, "Old cream", -10).with_status(BatchLifecycle::Discarded),
        ];

        let report = tracker.evaluate(today(), &batches).unwrap();

        assert_eq!(
            report.summary,
            ExpirySummary {
                expired: 1,
                urgent: 1,
                warning: 1,
                ok: 1,
            }
        );
        assert_eq!(report.skipped_inactive, 1);
        assert_eq!(report.assessments.len(), 4);
        assert!(report.warnings.is_empty());
        assert_eq!(report.status_of(&batches[2].id), Some(ExpiryStatus::Warning));
        assert_eq!(report.status_of(&batches[4].id), None);
    }

    #[test]
    fn test_attention_list_order() {
        let restaurant = Restaurant::new("Diner".to_string()).with_alert_days_before_expiry(5);
        let tracker = ExpiryTracker::new(restaurant.clone(), vec![]);

        let batches = vec![
            batch(&restaurant, "Eggs", 4),
            batch(&restaurant, "Butter", 1),
            batch(&restaurant, "Ham", -3),
            batch(&restaurant, "Apples", 1),
            batch(&restaurant, "Rice", 90),
            batch(&restaurant, "Fish", -1),
        ];

        let report = tracker.evaluate(today(), &batches).unwrap();
        let names: Vec<&str> = report
            .attention_list()
            .iter()
            .map(|a| a.name.as_str())
            .collect();

        assert_eq!(names, vec!["Ham", "Fish", "Apples", "Butter", "Eggs"]);
        assert_eq!(report.by_status(ExpiryStatus::Ok).count(), 1);
    }

    #[test]
    fn test_inverted_bands_warning_once() {
        let restaurant = Restaurant::new("Bistro".to_string());
        let odd = Category::new(restaurant.id, "Frozen".to_string())
            .with_urgent_alert_days(10)
            .with_warning_alert_days(5);
        let tracker = ExpiryTracker::new(restaurant.clone(), vec![odd.clone()]);

        let batches = vec![
            batch(&restaurant, "Peas", 7).with_category(odd.id),
            batch(&restaurant, "Corn", 3).with_category(odd.id),
        ];

        let report = tracker.evaluate(today(), &batches).unwrap();

        assert_eq!(report.summary.urgent, 2);
        assert_eq!(report.summary.warning, 0);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, ThresholdWarningKind::InvertedBands);
        assert_eq!(report.warnings[0].category_id, Some(odd.id));
    }

    #[test]
    fn test_invalid_tenant_default_warning() {
        let restaurant = Restaurant::new("Cafe".to_string()).with_alert_days_before_expiry(-2);
        let tracker = ExpiryTracker::new(restaurant.clone(), vec![]);

        let report = tracker
            .evaluate(today(), &[batch(&restaurant, "Bread", 3)])
            .unwrap();

        assert_eq!(report.summary.urgent, 1);
        assert_eq!(report.assessments[0].thresholds, EffectiveThresholds::urgent_only(3));
        assert_eq!(
            report.warnings[0].kind,
            ThresholdWarningKind::InvalidTenantDefault
        );
    }

    #[test]
    fn test_unknown_category_falls_back_to_tenant_default() {
        let restaurant = Restaurant::new("Cafe".to_string()).with_alert_days_before_expiry(4);
        let dairy = Category::new(restaurant.id, "Dairy".to_string())
            .with_urgent_alert_days(2)
            .with_warning_alert_days(6);
        let foreign = Category::new(Uuid::new_v4(), "Elsewhere".to_string())
            .with_urgent_alert_days(1);
        let tracker = ExpiryTracker::new(restaurant.clone(), vec![dairy.clone(), foreign.clone()]);

        assert!(tracker.category(&foreign.id).is_none());

        let missing = Uuid::new_v4();
        let batches = vec![
            batch(&restaurant, "Yogurt", 5).with_category(dairy.id),
            batch(&restaurant, "Bread", 3),
            batch(&restaurant, "Tofu", 2).with_category(missing),
            batch(&restaurant, "Miso", 10).with_category(missing),
            batch(&restaurant, "Kimchi", 3).with_category(foreign.id),
        ];

        let report = tracker.evaluate(today(), &batches).unwrap();

        // 其他批次不受影響
        assert_eq!(report.assessments.len(), 5);
        assert_eq!(report.assessments[0].status, ExpiryStatus::Warning);
        assert_eq!(report.assessments[1].status, ExpiryStatus::Urgent);

        // 未知分類使用餐廳預設 4/4
        for assessment in &report.assessments[2..] {
            assert_eq!(assessment.thresholds, EffectiveThresholds::urgent_only(4));
        }
        assert_eq!(report.assessments[3].status, ExpiryStatus::Ok);
        assert_eq!(report.summary.total(), 5);

        // 每個分類只警告一次
        let unknown: Vec<Option<Uuid>> = report
            .warnings
            .iter()
            .filter(|w| w.kind == ThresholdWarningKind::UnknownCategory)
            .map(|w| w.category_id)
            .collect();
        assert_eq!(unknown, vec![Some(missing), Some(foreign.id)]);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_foreign_batch_is_error() {
        let restaurant = Restaurant::new("Cafe".to_string());
        let other = Restaurant::new("Other".to_string());
        let tracker = ExpiryTracker::new(restaurant, vec![]);

        let result = tracker.evaluate(today(), &[batch(&other, "Lamb", 2)]);
        assert!(matches!(result, Err(ExpiryError::TenantMismatch { .. })));
    }

    #[test]
    fn test_tracker_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExpiryTracker>();
        assert_send_sync::<ExpiryReport>();
    }
}
