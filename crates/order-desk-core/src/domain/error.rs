//! Validation Errors
//!
//! Raised when user input fails a field constraint. Each error names the
//! input it came from so the UI can mark that field invalid.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input fields that can be flagged invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    TaskText,
    OrderName,
    OrderPrice,
    OrderQuantity,
}

/// Editable order fields (inventory inline edit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Text,
    Price,
    Quantity,
}

impl OrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Text => "text",
            OrderField::Price => "price",
            OrderField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OrderField::Text),
            "price" => Ok(OrderField::Price),
            "quantity" => Ok(OrderField::Quantity),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl From<OrderField> for InputField {
    fn from(field: OrderField) -> Self {
        match field {
            OrderField::Text => InputField::OrderName,
            OrderField::Price => InputField::OrderPrice,
            OrderField::Quantity => InputField::OrderQuantity,
        }
    }
}

/// A field constraint failed; the operation was aborted without changes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a task")]
    EmptyTask,

    #[error("Please enter order name")]
    EmptyName,

    #[error("Please enter a valid price greater than 0")]
    InvalidPrice,

    #[error("Please enter a valid quantity greater than 0")]
    InvalidQuantity,

    #[error("Quantity must be a whole number of 0 or more")]
    NegativeQuantity,

    #[error("Quantity is too large")]
    QuantityTooLarge,

    #[error("Unknown order field: {0}")]
    UnknownField(String),
}

impl ValidationError {
    /// The input to highlight, if any
    pub fn field(&self) -> Option<InputField> {
        match self {
            ValidationError::EmptyTask => Some(InputField::TaskText),
            ValidationError::EmptyName => Some(InputField::OrderName),
            ValidationError::InvalidPrice => Some(InputField::OrderPrice),
            ValidationError::InvalidQuantity
            | ValidationError::NegativeQuantity
            | ValidationError::QuantityTooLarge => {
                Some(InputField::OrderQuantity)
            }
            ValidationError::UnknownField(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_field_parse() {
        assert_eq!("price".parse::<OrderField>(), Ok(OrderField::Price));
        assert_eq!(OrderField::Quantity.as_str(), "quantity");
        assert!(matches!(
            "colour".parse::<OrderField>(),
            Err(ValidationError::UnknownField(f)) if f == "colour"
        ));
    }

    #[test]
    fn test_error_points_at_field() {
        assert_eq!(ValidationError::EmptyName.field(), Some(InputField::OrderName));
        assert_eq!(ValidationError::NegativeQuantity.field(), Some(InputField::OrderQuantity));
        assert_eq!(InputField::from(OrderField::Price), InputField::OrderPrice);
    }
}
