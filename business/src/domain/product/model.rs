use super::errors::ProductError;
use super::value_objects::{FormField, Price, ProductId, Quantity};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub quantity: Quantity,
    pub price: Price,
}

/// Validated, id-less product fields. Name and brand are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub brand: String,
    pub quantity: Quantity,
    pub price: Price,
}

impl ProductDetails {
    pub fn new(
        name: &str,
        brand: &str,
        quantity: Quantity,
        price: Price,
    ) -> Result<Self, ProductError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProductError::FieldEmpty(FormField::Name));
        }

        let brand = brand.trim();
        if brand.is_empty() {
            return Err(ProductError::FieldEmpty(FormField::Brand));
        }

        Ok(Self {
            name: name.to_string(),
            brand: brand.to_string(),
            quantity,
            price,
        })
    }
}

impl Product {
    /// Creates a new record with a freshly generated id.
    pub fn new(details: ProductDetails) -> Self {
        Self::from_repository(ProductId::generate(), details)
    }

    /// Constructor for records already persisted in the repository.
    pub fn from_repository(id: ProductId, details: ProductDetails) -> Self {
        Self {
            id,
            name: details.name,
            brand: details.brand,
            quantity: details.quantity,
            price: details.price,
        }
    }

    /// Replaces every field except the id.
    pub fn apply(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.brand = details.brand;
        self.quantity = details.quantity;
        self.price = details.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, brand: &str) -> Result<ProductDetails, ProductError> {
        ProductDetails::new(
            name,
            brand,
            Quantity::new(3),
            "1.5".parse::<Price>().unwrap(),
        )
    }

    #[test]
    fn should_trim_name_and_brand() {
        let details = details("  Widget ", " Acme  ").unwrap();
        assert_eq!(details.name, "Widget");
        assert_eq!(details.brand, "Acme");
    }

    #[test]
    fn should_reject_whitespace_only_name() {
        assert_eq!(
            details("   ", "Acme").unwrap_err(),
            ProductError::FieldEmpty(FormField::Name)
        );
    }

    #[test]
    fn should_reject_empty_brand() {
        assert_eq!(
            details("Widget", "").unwrap_err(),
            ProductError::FieldEmpty(FormField::Brand)
        );
    }

    #[test]
    fn should_keep_id_when_applying_changes() {
        let mut product = Product::new(details("Widget", "Acme").unwrap());
        let id = product.id.clone();

        product.apply(details("Gadget", "Globex").unwrap());

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.brand, "Globex");
    }
}
