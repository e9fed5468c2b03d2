//! 数据库行到领域对象的转换

use crate::domain::entities::{
    Category, Client, Delivery, DeliveryProduct, DeliveryProvider, Product, Provider,
    ProviderSummary, Sale, SaleClient, SaleProduct,
};
use crate::domain::value_objects::{CategoryId, ClientId, ProductId, ProviderId, SaleId};

use super::rows::{CategoryRow, ClientRow, DeliveryRow, ProductRow, ProviderRow, SaleRow};

pub fn product_from_row(row: ProductRow) -> Product {
    Product {
        product_id: ProductId(row.product_id),
        name: row.name,
        brand: row.brand,
        price: row.price,
        amount: row.amount,
        description: row.description,
        category: Category {
            category_id: CategoryId(row.category_id),
            name: row.category_name,
        },
        provider: ProviderSummary {
            provider_id: ProviderId(row.provider_id),
            name: row.provider_name,
            email: row.provider_email,
            phone: row.provider_phone,
        },
    }
}

pub fn provider_from_row(row: ProviderRow) -> Provider {
    Provider {
        provider_id: ProviderId(row.id),
        name: row.name,
        email: row.email,
        phone: row.phone,
        enterprise: row.enterprise,
        address: row.address,
        price: row.price,
    }
}

pub fn sale_from_row(row: SaleRow) -> Sale {
    // 客户 ID 与名称同时来自左连接，二者同空同非空
    let client = match (row.client_id, row.client_name) {
        (Some(id), Some(name)) => Some(SaleClient {
            client_id: ClientId(id),
            name,
        }),
        _ => None,
    };

    Sale {
        sale_id: SaleId(row.sale_id),
        date: row.date,
        amount: row.amount,
        total: row.total,
        subtotal: row.subtotal,
        product: SaleProduct {
            product_id: ProductId(row.product_id),
            name: row.product_name,
            brand: row.product_brand,
            price: row.product_price,
        },
        client,
    }
}

pub fn client_from_row(row: ClientRow) -> Client {
    Client {
        client_id: ClientId(row.id),
        name: row.name,
        address: row.address,
        phone: row.phone,
    }
}

pub fn delivery_from_row(row: DeliveryRow) -> Delivery {
    Delivery {
        delivery_date: row.delivery_date,
        amount: row.amount,
        product: DeliveryProduct {
            product_id: ProductId(row.product_id),
            name: row.product_name,
            brand: row.product_brand,
        },
        provider: DeliveryProvider {
            provider_id: ProviderId(row.provider_id),
            name: row.provider_name,
            email: row.provider_email,
        },
    }
}

pub fn category_from_row(row: CategoryRow) -> Category {
    Category {
        category_id: CategoryId(row.id),
        name: row.name,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn sale_row(client_id: Option<i32>, client_name: Option<&str>) -> SaleRow {
        SaleRow {
            sale_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            total: Decimal::new(3998, 2),
            subtotal: None,
            amount: 2,
            product_id: 9,
            product_name: "Pad".to_string(),
            product_brand: "Bosch".to_string(),
            product_price: Decimal::new(1999, 2),
            client_id,
            client_name: client_name.map(str::to_string),
        }
    }

    #[test]
    fn test_sale_without_client() {
        let sale = sale_from_row(sale_row(None, None));
        assert!(sale.client.is_none());
        assert_eq!(sale.product.product_id, ProductId(9));
    }

    #[test]
    fn test_sale_with_client() {
        let sale = sale_from_row(sale_row(Some(3), Some("Juan")));
        assert_eq!(
            sale.client,
            Some(SaleClient {
                client_id: ClientId(3),
                name: "Juan".to_string(),
            })
        );
    }

    #[test]
    fn test_product_nests_category_and_provider() {
        let product = product_from_row(ProductRow {
            product_id: 1,
            name: "Pad".to_string(),
            brand: "Bosch".to_string(),
            price: Decimal::new(1999, 2),
            amount: 10,
            description: "desc".to_string(),
            category_id: 4,
            category_name: "Brakes".to_string(),
            provider_id: 2,
            provider_name: "ACME".to_string(),
            provider_email: "a@x.com".to_string(),
            provider_phone: "5551234".to_string(),
        });

        assert_eq!(product.category.name, "Brakes");
        assert_eq!(product.provider.provider_id, ProviderId(2));
        assert_eq!(product.price.to_string(), "19.99");
    }
}
