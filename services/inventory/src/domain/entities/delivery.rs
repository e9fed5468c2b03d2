//! 到货记录
//!
//! 不是独立的表：即 product_provider 关联行上非空的到货日期与数量。
//! 删除到货只是把这两个字段置回 NULL，关联行本身保留

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductId, ProviderId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub delivery_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    pub product: DeliveryProduct,
    pub provider: DeliveryProvider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryProduct {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryProvider {
    pub provider_id: ProviderId,
    pub name: String,
    pub email: String,
}
