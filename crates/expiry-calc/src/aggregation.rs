//! 狀態彙總

use chrono::NaiveDate;
use expiry_core::{EffectiveThresholds, ExpiryStatus};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classification::ExpiryClassifier;

/// 租戶層級的狀態計數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirySummary {
    pub expired: usize,
    pub urgent: usize,
    pub warning: usize,
    pub ok: usize,
}

impl ExpirySummary {
    /// 空的計數
    pub fn empty() -> Self {
        Self::default()
    }

    /// 記錄一筆狀態
    pub fn record(&mut self, status: ExpiryStatus) {
        match status {
            ExpiryStatus::Expired => self.expired += 1,
            ExpiryStatus::Urgent => self.urgent += 1,
            ExpiryStatus::Warning => self.warning += 1,
            ExpiryStatus::Ok => self.ok += 1,
        }
    }

    /// 合併兩份計數（滿足交換律與結合律）
    pub fn merge(self, other: Self) -> Self {
        Self {
            expired: self.expired + other.expired,
            urgent: self.urgent + other.urgent,
            warning: self.warning + other.warning,
            ok: self.ok + other.ok,
        }
    }

    /// 某狀態的數量
    pub fn count(&self, status: ExpiryStatus) -> usize {
        match status {
            ExpiryStatus::Expired => self.expired,
            ExpiryStatus::Urgent => self.urgent,
            ExpiryStatus::Warning => self.warning,
            ExpiryStatus::Ok => self.ok,
        }
    }

    /// 總批次數
    pub fn total(&self) -> usize {
        self.expired + self.urgent + self.warning + self.ok
    }

    /// 需要處理的批次數（非 Ok）
    pub fn needs_attention(&self) -> usize {
        self.expired + self.urgent + self.warning
    }

    /// 由已分級的狀態彙總
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ExpiryStatus>,
    {
        statuses.into_iter().fold(Self::empty(), |mut summary, status| {
            summary.record(status);
            summary
        })
    }
}

/// 狀態彙總器
///
/// 呼叫端須先排除非 ACTIVE 批次；這裡視每筆輸入為有效。
pub struct ExpiryAggregator;

impl ExpiryAggregator {
    /// 單次掃描彙總
    pub fn aggregate(
        today: NaiveDate,
        batches: &[(NaiveDate, EffectiveThresholds)],
    ) -> ExpirySummary {
        ExpirySummary::from_statuses(
            batches
                .iter()
                .map(|(expiry_date, thresholds)| {
                    ExpiryClassifier::classify(today, *expiry_date, thresholds)
                }),
        )
    }

    /// 並行彙總（大量批次時使用，結果與 [`Self::aggregate`] 相同）
    pub fn aggregate_par(
        today: NaiveDate,
        batches: &[(NaiveDate, EffectiveThresholds)],
    ) -> ExpirySummary {
        batches
            .par_iter()
            .fold(ExpirySummary::empty, |mut summary, (expiry_date, thresholds)| {
                summary.record(ExpiryClassifier::classify(today, *expiry_date, thresholds));
                summary
            })
            .reduce(ExpirySummary::empty, ExpirySummary::merge)
    }
}
