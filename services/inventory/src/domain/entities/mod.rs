//! 实体模块（反规范化读模型）

mod category;
mod client;
mod delivery;
mod product;
mod provider;
mod sale;

pub use category::Category;
pub use client::Client;
pub use delivery::{Delivery, DeliveryProduct, DeliveryProvider};
pub use product::{Product, ProviderSummary};
pub use provider::Provider;
pub use sale::{Sale, SaleClient, SaleProduct};
