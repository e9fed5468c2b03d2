//! 数据库行映射结构

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// 产品列表行（四表内连接）
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub product_id: i32,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub amount: i32,
    pub description: String,
    pub category_id: i32,
    pub category_name: String,
    pub provider_id: i32,
    pub provider_name: String,
    pub provider_email: String,
    pub provider_phone: String,
}

#[derive(Debug, FromRow)]
pub struct ProviderRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub enterprise: String,
    pub address: Option<String>,
    pub price: Option<Decimal>,
}

/// 销售列表行（客户为左连接）
#[derive(Debug, FromRow)]
pub struct SaleRow {
    pub sale_id: i32,
    pub date: NaiveDate,
    pub total: Decimal,
    pub subtotal: Option<Decimal>,
    pub amount: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_brand: String,
    pub product_price: Decimal,
    pub client_id: Option<i32>,
    pub client_name: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct ClientRow {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// 到货列表行
#[derive(Debug, FromRow)]
pub struct DeliveryRow {
    pub product_id: i32,
    pub product_name: String,
    pub product_brand: String,
    pub provider_id: i32,
    pub provider_name: String,
    pub provider_email: String,
    pub delivery_date: NaiveDate,
    pub amount: Option<i32>,
}

#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
}
