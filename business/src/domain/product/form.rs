use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::model::{Product, ProductDetails};
use super::value_objects::{FormField, Price, Quantity};

/// Raw text of the four form inputs, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub brand: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Form populated from an existing record, used when entering edit mode.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            quantity: product.quantity.to_string(),
            price: product.price.formatted(),
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Every field must be non-empty before any number is looked at, so a
    /// half-filled form always reports the "fill in all fields" failure.
    pub fn validate(&self) -> Result<ProductDetails, ProductError> {
        let fields = [
            (FormField::Name, &self.name),
            (FormField::Brand, &self.brand),
            (FormField::Quantity, &self.quantity),
            (FormField::Price, &self.price),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ProductError::FieldEmpty(*field));
        }

        let quantity: Quantity = self.quantity.parse()?;
        let price: Price = self.price.parse()?;

        ProductDetails::new(&self.name, &self.brand, quantity, price)
    }
}
