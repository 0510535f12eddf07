//! 商品批次模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 批次生命週期狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchLifecycle {
    /// 在庫中（唯一會被分級的狀態）
    Active,
    /// 已使用完畢
    Consumed,
    /// 已報廢
    Discarded,
    /// 已封存
    Archived,
}

/// 商品批次
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBatch {
    /// 批次ID
    pub id: Uuid,

    /// 所屬餐廳
    pub restaurant_id: Uuid,

    /// 商品名稱
    pub name: String,

    /// 數量
    pub quantity: Decimal,

    /// 單位（kg、瓶、盒…）
    pub unit: String,

    /// 到期日
    pub expiry_date: NaiveDate,

    /// 生命週期狀態
    pub status: BatchLifecycle,

    /// 分類（可選，決定門檻覆寫）
    pub category_id: Option<Uuid>,

    /// 存放位置（不參與分級）
    pub storage_location_id: Option<Uuid>,
}

impl ProductBatch {
    /// 創建新的在庫批次
    pub fn new(
        restaurant_id: Uuid,
        name: String,
        quantity: Decimal,
        unit: String,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            restaurant_id,
            name,
            quantity,
            unit,
            expiry_date,
            status: BatchLifecycle::Active,
            category_id: None,
            storage_location_id: None,
        }
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// 建構器模式：設置存放位置
    pub fn with_storage_location(mut self, location_id: Uuid) -> Self {
        self.storage_location_id = Some(location_id);
        self
    }

    /// 建構器模式：設置生命週期狀態
    pub fn with_status(mut self, status: BatchLifecycle) -> Self {
        self.status = status;
        self
    }

    /// 是否在庫中
    pub fn is_active(&self) -> bool {
        self.status == BatchLifecycle::Active
    }
}
