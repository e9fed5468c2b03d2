//! 产品读模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;
use crate::domain::value_objects::{ProductId, ProviderId};

/// 产品
///
/// 由 product、category、product_provider、provider 四表内连接得到，
/// 没有供应商关联的产品不会出现在列表中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub amount: i32,
    pub description: String,
    pub category: Category,
    pub provider: ProviderSummary,
}

/// 产品列表中展示的供应商信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub provider_id: ProviderId,
    pub name: String,
    pub email: String,
    pub phone: String,
}
