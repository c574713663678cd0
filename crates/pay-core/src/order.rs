//! # Order Types
//!
//! Orders accumulate line items and carry a status. They know nothing about
//! payment mechanics: the only status mutation is `mark_paid`, which payment
//! processors call after their own authorization checks.

use crate::error::{PaymentError, PaymentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name (e.g., "Keyboard")
    pub name: String,

    /// Quantity, always > 0
    pub quantity: u32,

    /// Unit price, always >= 0
    pub unit_price: f64,
}

impl LineItem {
    /// Calculate the total price for this line item
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Accepting items, awaiting payment
    #[default]
    Open,
    /// Paid (terminal)
    Paid,
}

/// An order to be checked out
///
/// Every instance owns its own line items and status; nothing is shared
/// between orders.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID (generated)
    pub id: String,

    /// Line items, only appended through `add_line_item`
    line_items: Vec<LineItem>,

    /// Status, only changed through `mark_paid`
    status: OrderStatus,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new empty, open order with generated ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            line_items: Vec::new(),
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    /// Add a line item.
    ///
    /// Fails with `InvalidLineItem` if `quantity <= 0` or `unit_price` is
    /// negative (or not a finite number). A rejected item is never partially
    /// applied.
    pub fn add_line_item(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        unit_price: f64,
    ) -> PaymentResult<()> {
        let name = name.into();

        if quantity <= 0 {
            return Err(PaymentError::InvalidLineItem {
                name,
                reason: format!("quantity must be positive, got {}", quantity),
            });
        }
        let quantity = u32::try_from(quantity).map_err(|_| PaymentError::InvalidLineItem {
            name: name.clone(),
            reason: format!("quantity {} is too large", quantity),
        })?;

        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(PaymentError::InvalidLineItem {
                name,
                reason: format!("unit price must be a non-negative number, got {}", unit_price),
            });
        }

        if self.is_paid() {
            warn!(order_id = %self.id, item = %name, "Adding item to an order that is already paid");
        }

        debug!(order_id = %self.id, item = %name, quantity, unit_price, "Line item added");
        self.line_items.push(LineItem {
            name,
            quantity,
            unit_price,
        });
        Ok(())
    }

    /// Calculate order total: sum of quantity * unit_price (0 when empty)
    pub fn total_price(&self) -> f64 {
        self.line_items.iter().map(LineItem::total).sum()
    }

    /// Transition `Open -> Paid`.
    ///
    /// This is the only status mutation point. Fails with `AlreadyPaid` and
    /// leaves the order untouched if it is already paid.
    pub fn mark_paid(&mut self) -> PaymentResult<()> {
        if self.is_paid() {
            return Err(PaymentError::AlreadyPaid {
                order_id: self.id.clone(),
            });
        }
        self.status = OrderStatus::Paid;
        Ok(())
    }

    /// Current status
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Check if order has been paid
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Line items in insertion order
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Check if order is empty
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Get item count (sum of quantities)
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn demo_order() -> Order {
        let mut order = Order::new();
        order.add_line_item("Keyboard", 1, 50.0).unwrap();
        order.add_line_item("Mouse", 1, 25.0).unwrap();
        order.add_line_item("Monitor", 2, 200.0).unwrap();
        order
    }

    #[test]
    fn test_order_total() {
        let order = demo_order();

        assert_eq!(order.total_price(), 525.0);
        assert_eq!(order.item_count(), 4);
        assert_eq!(order.line_items().len(), 3);
        assert_eq!(order.line_items()[2].total(), 400.0);
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();

        assert!(order.is_empty());
        assert_eq!(order.total_price(), 0.0);
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_orders_do_not_share_items() {
        let first = demo_order();
        let second = Order::new();

        assert_eq!(first.line_items().len(), 3);
        assert!(second.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[rstest]
    #[case(0, 10.0)]
    #[case(-1, 10.0)]
    #[case(1, -0.01)]
    #[case(1, f64::NAN)]
    #[case(1, f64::INFINITY)]
    #[case(i64::MAX, 1.0)]
    fn test_invalid_line_item(#[case] quantity: i64, #[case] unit_price: f64) {
        let mut order = demo_order();

        let err = order
            .add_line_item("Broken", quantity, unit_price)
            .unwrap_err();

        assert!(matches!(err, PaymentError::InvalidLineItem { .. }));
        assert_eq!(order.total_price(), 525.0);
        assert_eq!(order.line_items().len(), 3);
    }

    #[test]
    fn test_free_item_allowed() {
        let mut order = Order::new();
        order.add_line_item("Sticker", 3, 0.0).unwrap();

        assert_eq!(order.total_price(), 0.0);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_item_count_beyond_u32() {
        let mut order = Order::new();
        order.add_line_item("Bulk", i64::from(u32::MAX), 1.0).unwrap();
        order.add_line_item("Extra", 1, 1.0).unwrap();

        assert_eq!(order.item_count(), u64::from(u32::MAX) + 1);
        assert_eq!(order.total_price(), 4_294_967_296.0);
    }

    #[test]
    fn test_mark_paid_once() {
        let mut order = demo_order();

        order.mark_paid().unwrap();
        assert!(order.is_paid());

        let err = order.mark_paid().unwrap_err();
        assert_eq!(
            err,
            PaymentError::AlreadyPaid {
                order_id: order.id.clone()
            }
        );
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_add_after_paid_is_allowed() {
        let mut order = demo_order();
        order.mark_paid().unwrap();

        order.add_line_item("Cable", 1, 5.0).unwrap();

        assert_eq!(order.total_price(), 530.0);
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn test_order_serialization() {
        let order = demo_order();
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["status"], "open");
        assert_eq!(json["line_items"][0]["name"], "Keyboard");
    }

    proptest! {
        #[test]
        fn prop_total_is_sum_of_items(
            items in prop::collection::vec((1i64..100, 0u32..10_000), 0..20)
        ) {
            let mut order = Order::new();
            let mut expected = 0.0;
            for (quantity, price) in &items {
                order.add_line_item("item", *quantity, f64::from(*price)).unwrap();
                expected += *quantity as f64 * f64::from(*price);
            }

            prop_assert_eq!(order.total_price(), expected);
        }

        #[test]
        fn prop_invalid_items_never_change_total(
            quantity in -100i64..=0,
            price in -10_000.0f64..-0.001,
        ) {
            let mut order = Order::new();
            order.add_line_item("base", 2, 10.0).unwrap();

            prop_assert!(order.add_line_item("bad-qty", quantity, 1.0).is_err());
            prop_assert!(order.add_line_item("bad-price", 1, price).is_err());
            prop_assert_eq!(order.total_price(), 20.0);
        }
    }
}
