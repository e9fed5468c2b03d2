//! 输入 DTO
//!
//! JSON 字段名与既有前端保持一致

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::value_objects::{CategoryId, ClientId, ProductId, ProviderId};

/// 创建 / 更新产品
///
/// 更新是整行替换，并同时改写产品的当前供应商
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub amount: i32,
    pub description: String,
    pub category_id: CategoryId,
    pub provider_id: ProviderId,
}

/// 创建 / 更新供应商
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enterprise: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// 创建 / 更新销售记录
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaleDto {
    pub product_id: ProductId,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    /// 缺省时取数据库当天日期
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub total: Decimal,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    pub amount: i32,
}

/// 创建 / 更新客户
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientDto {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// 登记到货（写入已有的产品-供应商关联行）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeliveryDto {
    pub product_id: ProductId,
    pub provider_id: ProviderId,
    pub delivery_date: NaiveDate,
    pub amount: i32,
}
