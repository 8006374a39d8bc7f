use serde::{Deserialize, Serialize};
use thiserror::Error;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{Product, ProductDetails};
use business::domain::product::value_objects::{Price, ProductId, Quantity};

/// A stored number. Prices are written as two-digit strings, quantities as
/// integers, but either shape is accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredNumber {
    Number(serde_json::Number),
    Text(String),
}

impl StoredNumber {
    fn as_text(&self) -> String {
        match self {
            StoredNumber::Number(n) => n.to_string(),
            StoredNumber::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("entity.empty_id")]
    EmptyId,
    #[error("entity.invalid_field")]
    InvalidField(#[from] ProductError),
}

/// Serialized shape of one product in the storage slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub quantity: StoredNumber,
    pub price: StoredNumber,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            quantity: StoredNumber::Number(product.quantity.value().into()),
            price: StoredNumber::Text(product.price.formatted()),
        }
    }

    /// Re-validates everything; stored data is not trusted.
    pub fn into_domain(self) -> Result<Product, EntityError> {
        if self.id.trim().is_empty() {
            return Err(EntityError::EmptyId);
        }

        let quantity: Quantity = self.quantity.as_text().parse()?;
        let price: Price = self.price.as_text().parse()?;
        let details = ProductDetails::new(&self.name, &self.brand, quantity, price)?;

        Ok(Product::from_repository(ProductId::new(self.id), details))
    }
}
