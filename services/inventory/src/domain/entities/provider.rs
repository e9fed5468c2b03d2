//! 供应商

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProviderId;

/// 供应商
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: ProviderId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// 所属企业（品牌列表即其去重集合）
    pub enterprise: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// 供应商报价
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}
