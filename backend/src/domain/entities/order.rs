//! Checkout order record and its embedded line items.

use serde::{Deserialize, Serialize};

use super::validation::{
    ensure_email, ensure_min_quantity, ensure_non_negative_amount, round_to_cents,
};
use crate::domain::schema::ValidationError;

/// One line of an order.
///
/// `product_id` is a soft reference: it is stored as given and never checked
/// against the product collection, so a vanished or malformed identifier
/// does not invalidate the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Soft reference to the purchased product.
    pub product_id: String,
    /// Product title captured at checkout time.
    pub title: String,
    /// Quantity; must be >= 1.
    pub qty: i64,
    /// Unit price; must be >= 0.
    pub price: f64,
}

/// Persisted order.
///
/// `total` is derived by the checkout calculator and must equal the sum of
/// item subtotals rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Customer email address.
    pub user_email: String,
    /// Ordered line items.
    pub items: Vec<OrderItem>,
    /// Order total; must be >= 0 and consistent with the items.
    pub total: f64,
    /// Payment lifecycle tag; starts as `pending`.
    #[serde(default = "default_payment_status")]
    pub payment_status: String,
    /// Reference to an external checkout session, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_session_id: Option<String>,
}

fn default_payment_status() -> String {
    "pending".to_owned()
}

impl Order {
    /// Enforce field-level rules and the total-consistency invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_email(&self.user_email, "user_email")?;
        for item in &self.items {
            ensure_min_quantity(item.qty, "qty")?;
            ensure_non_negative_amount(item.price, "price")?;
        }
        ensure_non_negative_amount(self.total, "total")?;
        let expected = round_to_cents(
            self.items
                .iter()
                .map(|item| item.qty as f64 * item.price)
                .sum(),
        );
        if (self.total - expected).abs() > 1e-9 {
            return Err(ValidationError::new(
                "total",
                format!("must equal the sum of item subtotals ({expected}), got {}", self.total),
            ));
        }
        Ok(())
    }
}
