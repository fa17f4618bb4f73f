//! Order Record
//!
//! An order line (name, unit price, quantity). The same collection backs
//! the inventory view.
//!
//! Validation policy, checked in field order:
//! - add / edit: name trimmed non-empty, price finite > 0, quantity > 0.
//!   All-or-nothing.
//! - inline inventory edit: name trimmed non-empty, price finite > 0
//!   (leading currency symbol allowed), quantity >= 0. Per field.
//!
//! Quantities above `MAX_QUANTITY` are rejected on every path.

use serde::{Deserialize, Serialize};
use super::error::{OrderField, ValidationError};
use super::parse;
use super::record::Record;

/// Largest accepted quantity (2^53 - 1, exact in a JSON number)
pub const MAX_QUANTITY: u64 = (1 << 53) - 1;

/// An order as persisted under the `orders` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub text: String,
    /// Unit price, always finite and > 0
    pub price: f64,
    pub quantity: u64,
    pub done: bool,
}

impl Order {
    /// Line value (price x quantity)
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Apply an inline edit to a single field.
    ///
    /// Returns `Ok(true)` when the field changed. On error the order is
    /// left untouched.
    pub fn apply_field(
        &mut self,
        field: OrderField,
        raw: &str,
        currency_symbol: &str,
    ) -> Result<bool, ValidationError> {
        match field {
            OrderField::Text => {
                let text = check_name(raw)?;
                let changed = self.text != text;
                self.text = text;
                Ok(changed)
            }
            OrderField::Price => {
                let raw = raw.trim();
                let raw = raw.strip_prefix(currency_symbol).unwrap_or(raw);
                let price = check_price(parse::number(raw))?;
                let changed = self.price != price;
                self.price = price;
                Ok(changed)
            }
            OrderField::Quantity => {
                let quantity = check_quantity(parse::integer(raw), 0)
                    .map_err(|e| match e {
                        ValidationError::InvalidQuantity => ValidationError::NegativeQuantity,
                        other => other,
                    })?;
                let changed = self.quantity != quantity;
                self.quantity = quantity;
                Ok(changed)
            }
        }
    }
}

impl Record for Order {
    const KIND: &'static str = "order";

    fn is_done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

/// Candidate values for a new or replacement order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl OrderDraft {
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Check every field; yields a pending order on success
    pub fn validate(&self) -> Result<Order, ValidationError> {
        let text = check_name(&self.name)?;
        let price = check_price(Some(self.price))?;
        let quantity = check_quantity(Some(self.quantity), 1)?;
        Ok(Order {
            text,
            price,
            quantity,
            done: false,
        })
    }
}

/// Raw form values, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderInput {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl OrderInput {
    pub fn new(name: impl Into<String>, price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Parse leniently and validate with the add/edit policy
    pub fn parse(&self) -> Result<Order, ValidationError> {
        let text = check_name(&self.name)?;
        let price = check_price(parse::number(&self.price))?;
        let quantity = check_quantity(parse::integer(&self.quantity), 1)?;
        Ok(Order {
            text,
            price,
            quantity,
            done: false,
        })
    }
}

fn check_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

fn check_price(price: Option<f64>) -> Result<f64, ValidationError> {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => Ok(p),
        _ => Err(ValidationError::InvalidPrice),
    }
}

fn check_quantity(quantity: Option<i64>, min: i64) -> Result<u64, ValidationError> {
    match quantity {
        Some(q) if q < min => Err(ValidationError::InvalidQuantity),
        Some(q) => match u64::try_from(q) {
            Ok(q) if q <= MAX_QUANTITY => Ok(q),
            _ => Err(ValidationError::QuantityTooLarge),
        },
        None => Err(ValidationError::InvalidQuantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Order {
        OrderDraft::new("Pen", 1.5, 10).validate().unwrap()
    }

    #[test]
    fn test_draft_validation() {
        let order = pen();
        assert_eq!(order.text, "Pen");
        assert_eq!(order.quantity, 10);
        assert!(!order.done);
        assert_eq!(order.total_value(), 15.0);
    }

    #[test]
    fn test_draft_reports_first_failing_field() {
        let err = OrderDraft::new("  ", -1.0, 0).validate().unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);

        let err = OrderDraft::new("Pen", f64::NAN, 0).validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);

        let err = OrderDraft::new("Pen", f64::INFINITY, 1).validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice);

        let err = OrderDraft::new("Pen", 2.0, 0).validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidQuantity);
    }

    #[test]
    fn test_input_parse_is_lenient() {
        let order = OrderInput::new(" Pen ", "1.50", "10.9").parse().unwrap();
        assert_eq!(order.text, "Pen");
        assert_eq!(order.price, 1.5);
        assert_eq!(order.quantity, 10);

        assert_eq!(OrderInput::new("Pen", "free", "1").parse(), Err(ValidationError::InvalidPrice));
        assert_eq!(OrderInput::new("Pen", "1", "").parse(), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn test_inline_price_strips_currency() {
        let mut order = pen();
        assert_eq!(order.apply_field(OrderField::Price, " $2.75", "$"), Ok(true));
        assert_eq!(order.price, 2.75);

        assert_eq!(order.apply_field(OrderField::Price, "$0", "$"), Err(ValidationError::InvalidPrice));
        assert_eq!(order.price, 2.75);
    }

    #[test]
    fn test_inline_quantity_allows_zero() {
        let mut order = pen();
        assert_eq!(order.apply_field(OrderField::Quantity, "0", "$"), Ok(true));
        assert_eq!(order.quantity, 0);

        assert_eq!(
            order.apply_field(OrderField::Quantity, "-4", "$"),
            Err(ValidationError::NegativeQuantity)
        );
        assert_eq!(order.quantity, 0);
    }

    #[test]
    fn test_large_quantities() {
        let order = OrderInput::new("Bolts", "0.01", "5000000000").parse().unwrap();
        assert_eq!(order.quantity, 5_000_000_000);

        let too_many = (MAX_QUANTITY + 1).to_string();
        assert_eq!(
            OrderInput::new("Bolts", "0.01", too_many.as_str()).parse(),
            Err(ValidationError::QuantityTooLarge)
        );
        assert_eq!(
            OrderInput::new("Bolts", "0.01", "99999999999999999999999").parse(),
            Err(ValidationError::QuantityTooLarge)
        );

        let mut order = pen();
        assert_eq!(
            order.apply_field(OrderField::Quantity, &too_many, "$"),
            Err(ValidationError::QuantityTooLarge)
        );
        assert_eq!(order.quantity, 10);
    }

    #[test]
    fn test_inline_text_rejects_blank() {
        let mut order = pen();
        assert_eq!(order.apply_field(OrderField::Text, "   ", "$"), Err(ValidationError::EmptyName));
        assert_eq!(order.text, "Pen");
        assert_eq!(order.apply_field(OrderField::Text, " Pencil ", "$"), Ok(true));
        assert_eq!(order.text, "Pencil");
        assert_eq!(order.apply_field(OrderField::Text, "Pencil", "$"), Ok(false));
    }
}
