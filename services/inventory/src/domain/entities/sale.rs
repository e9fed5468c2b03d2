//! 销售记录

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ClientId, ProductId, SaleId};

/// 销售记录（硬删除）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: SaleId,
    pub date: NaiveDate,
    pub amount: i32,
    pub total: Decimal,
    #[serde(rename = "sub_total", skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    pub product: SaleProduct,
    /// 客户被删除后置空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<SaleClient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleProduct {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleClient {
    pub client_id: ClientId,
    pub name: String,
}
