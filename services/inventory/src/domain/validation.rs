//! 输入校验
//!
//! 每个 DTO 显式列出必填字段，不做运行时反射

use email_address::EmailAddress;
use refa_errors::{AppError, AppResult};
use rust_decimal::Decimal;

use super::dto::{ClientDto, DeliveryDto, ProductDto, ProviderDto, SaleDto};

/// 输入校验
pub trait Validate {
    fn validate(&self) -> AppResult<()>;
}

/// 必填字符串字段（去除首尾空白后不能为空）
fn require(fields: &[(&str, &str)]) -> AppResult<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(AppError::validation(format!("{} is required", name))),
        None => Ok(()),
    }
}

fn require_positive_id(name: &str, id: i32) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::validation(format!("{} must be a positive id", name)));
    }
    Ok(())
}

fn require_non_negative_amount(name: &str, amount: i32) -> AppResult<()> {
    if amount < 0 {
        return Err(AppError::validation(format!("{} must not be negative", name)));
    }
    Ok(())
}

fn require_non_negative_price(name: &str, price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::validation(format!("{} must not be negative", name)));
    }
    Ok(())
}

/// 电话号码只允许数字
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::is_valid(email)
}

impl Validate for ProductDto {
    fn validate(&self) -> AppResult<()> {
        require(&[
            ("name", self.name.as_str()),
            ("brand", self.brand.as_str()),
            ("description", self.description.as_str()),
        ])?;
        require_non_negative_price("price", self.price)?;
        require_non_negative_amount("amount", self.amount)?;
        require_positive_id("category_id", self.category_id.0)?;
        require_positive_id("provider_id", self.provider_id.0)
    }
}

impl Validate for ProviderDto {
    fn validate(&self) -> AppResult<()> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("enterprise", self.enterprise.as_str()),
        ])?;
        if let Some(address) = &self.address {
            require(&[("address", address.as_str())])?;
        }
        if !is_valid_email(&self.email) {
            return Err(AppError::validation("email is not a valid address"));
        }
        if !is_valid_phone(&self.phone) {
            return Err(AppError::validation("phone must contain digits only"));
        }
        if let Some(price) = self.price {
            require_non_negative_price("price", price)?;
        }
        Ok(())
    }
}

impl Validate for SaleDto {
    fn validate(&self) -> AppResult<()> {
        require_positive_id("product_id", self.product_id.0)?;
        if let Some(client_id) = self.client_id {
            require_positive_id("client_id", client_id.0)?;
        }
        require_non_negative_amount("amount", self.amount)?;
        require_non_negative_price("total", self.total)?;
        if let Some(subtotal) = self.subtotal {
            require_non_negative_price("subtotal", subtotal)?;
        }
        Ok(())
    }
}

impl Validate for ClientDto {
    fn validate(&self) -> AppResult<()> {
        require(&[
            ("name", self.name.as_str()),
            ("address", self.address.as_str()),
            ("phone", self.phone.as_str()),
        ])?;
        if !is_valid_phone(&self.phone) {
            return Err(AppError::validation("phone must contain digits only"));
        }
        Ok(())
    }
}

impl Validate for DeliveryDto {
    fn validate(&self) -> AppResult<()> {
        require_positive_id("product_id", self.product_id.0)?;
        require_positive_id("provider_id", self.provider_id.0)?;
        require_non_negative_amount("amount", self.amount)
    }
}
