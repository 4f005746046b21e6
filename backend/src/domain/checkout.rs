//! Checkout calculator: turns a validated cart into a persisted order.

use std::sync::Arc;

use crate::domain::DomainResult;
use crate::domain::entities::validation::round_to_cents;
use crate::domain::entities::{Order, OrderItem};
use crate::domain::error::Error;
use crate::domain::ports::DocumentStore;
use crate::domain::schema::{EntityKind, SchemaRegistry, ValidationError};

/// Payment provider tag echoed back when the client names none.
pub const DEFAULT_PROVIDER: &str = "stripe";

/// Customer email recorded when the client submits none.
const GUEST_EMAIL: &str = "guest@example.com";

/// Fixed note returned by the placeholder checkout.
const CHECKOUT_NOTE: &str =
    "Demo checkout created. Integrate Stripe/Razorpay by replacing this endpoint.";

/// One validated cart line.
///
/// Construction rejects structurally invalid entries up front instead of
/// silently coercing them; missing values fall back to the documented
/// defaults (quantity 1, price 0).
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product_id: String,
    title: String,
    qty: i64,
    price: f64,
}

impl CartLine {
    /// Build a cart line from loosely supplied fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the quantity is below 1 or the price
    /// is negative or non-finite.
    pub fn new(
        product_id: Option<String>,
        title: Option<String>,
        qty: Option<i64>,
        price: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let qty = qty.unwrap_or(1);
        if qty < 1 {
            return Err(ValidationError::new("qty", format!("must be >= 1, got {qty}")));
        }
        let price = price.unwrap_or(0.0);
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::new(
                "price",
                format!("must be a finite number >= 0, got {price}"),
            ));
        }
        Ok(Self {
            product_id: product_id.unwrap_or_default(),
            title: title.unwrap_or_else(|| "Product".to_owned()),
            qty,
            price,
        })
    }

    /// Line subtotal (`qty × price`).
    pub fn subtotal(&self) -> f64 {
        self.qty as f64 * self.price
    }

    fn into_order_item(self) -> OrderItem {
        OrderItem {
            product_id: self.product_id,
            title: self.title,
            qty: self.qty,
            price: self.price,
        }
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// Mock checkout URL derived from the new order's identifier.
    pub checkout_url: String,
    /// Identifier of the persisted order.
    pub order_id: String,
    /// Payment provider tag echoed to the client.
    pub provider: String,
    /// Fixed integration-placeholder note.
    pub note: &'static str,
}

/// Aggregates a cart into an order, validates it, and persists it.
///
/// No real payment-provider call occurs; the returned checkout reference is
/// an explicit integration placeholder.
#[derive(Clone)]
pub struct CheckoutService {
    store: Arc<dyn DocumentStore>,
    registry: SchemaRegistry,
}

impl CheckoutService {
    /// Create a checkout service over the given store.
    pub fn new(store: Arc<dyn DocumentStore>, registry: SchemaRegistry) -> Self {
        Self { store, registry }
    }

    /// Compute the order total, validate the order, and persist it.
    ///
    /// The total is the sum of line subtotals rounded to two decimal places;
    /// it is derived here, never supplied by the caller, so a total mismatch
    /// cannot occur on this path.
    pub async fn checkout(
        &self,
        lines: Vec<CartLine>,
        customer_email: Option<String>,
        provider: Option<String>,
    ) -> DomainResult<CheckoutOutcome> {
        let total = round_to_cents(lines.iter().map(CartLine::subtotal).sum());
        let items: Vec<OrderItem> = lines.into_iter().map(CartLine::into_order_item).collect();
        let user_email = customer_email
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| GUEST_EMAIL.to_owned());

        let order = Order {
            user_email,
            items,
            total,
            payment_status: "pending".to_owned(),
            checkout_session_id: None,
        };
        let raw = serde_json::to_value(&order).map_err(|err| Error::internal(err.to_string()))?;
        let record = self.registry.validate(EntityKind::Order, raw)?;
        let order_id = self
            .store
            .insert(EntityKind::Order.collection(), record.into_body())
            .await?;

        Ok(CheckoutOutcome {
            checkout_url: format!("/pay/mock/{order_id}"),
            order_id: order_id.to_string(),
            provider: provider.unwrap_or_else(|| DEFAULT_PROVIDER.to_owned()),
            note: CHECKOUT_NOTE,
        })
    }
}
