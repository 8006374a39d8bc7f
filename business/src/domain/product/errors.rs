use super::value_objects::FormField;

/// Validation failures raised while turning form input into a product.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("product.field_empty")]
    FieldEmpty(FormField),
    #[error("product.negative_number")]
    NegativeNumber(FormField),
    #[error("product.invalid_number")]
    InvalidNumber(FormField),
}

impl ProductError {
    pub fn field(&self) -> FormField {
        match self {
            ProductError::FieldEmpty(field)
            | ProductError::NegativeNumber(field)
            | ProductError::InvalidNumber(field) => *field,
        }
    }

    /// Message shown to the user in the alert dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProductError::FieldEmpty(_) => "Please fill in all fields",
            ProductError::NegativeNumber(_) => "Quantity and price must be positive numbers",
            ProductError::InvalidNumber(_) => "Quantity and price must be valid numbers",
        }
    }
}
