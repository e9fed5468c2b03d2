//! 仓储接口模块
//!
//! 写操作返回受影响行数；`0` 是唯一的“未找到”信号，仓储本身从不返回 `NotFound`

mod catalog_repository;
mod client_repository;
mod delivery_repository;
mod product_repository;
mod provider_repository;
mod sale_repository;

pub use catalog_repository::CatalogRepository;
pub use client_repository::ClientRepository;
pub use delivery_repository::DeliveryRepository;
pub use product_repository::ProductRepository;
pub use provider_repository::ProviderRepository;
pub use sale_repository::SaleRepository;

/// 完整的库存仓储能力
///
/// 请求处理层只依赖这个组合接口，由启动代码注入具体实现
pub trait InventoryRepository:
    ProductRepository
    + ProviderRepository
    + SaleRepository
    + ClientRepository
    + DeliveryRepository
    + CatalogRepository
{
}

impl<T> InventoryRepository for T where
    T: ProductRepository
        + ProviderRepository
        + SaleRepository
        + ClientRepository
        + DeliveryRepository
        + CatalogRepository
{
}
