//! Read-only order history: grouping by status, per-status counts, and a
//! text search over order ids. Statuses in the data never transition.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::domain::order::{Order, OrderLine, OrderStatus};
use crate::domain::product::ProductId;

pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The storefront's historical fixture orders.
    pub fn seed() -> Self {
        Self::new(vec![
            Order {
                id: "ORD-2024-001".to_string(),
                placed_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
                status: OrderStatus::Complete,
                total: dec!(2499.99),
                lines: vec![OrderLine {
                    product_id: ProductId(1),
                    title: "RavenBook Pro X1".to_string(),
                    image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=300&fit=crop".to_string(),
                    unit_price: dec!(2499.99),
                    quantity: 1,
                }],
            },
            Order {
                id: "ORD-2024-002".to_string(),
                placed_on: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap_or_default(),
                status: OrderStatus::Shipping,
                total: dec!(3599.98),
                lines: vec![
                    OrderLine {
                        product_id: ProductId(2),
                        title: "ShadowCore Gaming Rig".to_string(),
                        image: "https://images.unsplash.com/photo-1587831990711-23ca6441447b?w=400&h=300&fit=crop".to_string(),
                        unit_price: dec!(3299.99),
                        quantity: 1,
                    },
                    OrderLine {
                        product_id: ProductId(5),
                        title: "VoidTech Gaming Headset".to_string(),
                        image: "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=400&h=300&fit=crop".to_string(),
                        unit_price: dec!(299.99),
                        quantity: 1,
                    },
                ],
            },
        ])
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders.iter().filter(|order| order.status == status).collect()
    }

    /// Counts for every status, including the empty ones.
    pub fn status_counts(&self) -> BTreeMap<OrderStatus, usize> {
        OrderStatus::ALL
            .into_iter()
            .map(|status| (status, self.by_status(status).len()))
            .collect()
    }

    /// Case-insensitive substring match over the order id.
    pub fn search(&self, query: &str) -> Vec<&Order> {
        let needle = query.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|order| order.id.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::OrderHistory;
    use crate::domain::order::OrderStatus;

    #[test]
    fn grouping_by_status_partitions_the_fixture_orders() {
        let history = OrderHistory::seed();
        assert_eq!(history.by_status(OrderStatus::Complete).len(), 1);
        assert_eq!(history.by_status(OrderStatus::Shipping).len(), 1);
        assert!(history.by_status(OrderStatus::Packing).is_empty());
    }

    #[test]
    fn counts_cover_every_status() {
        let counts = OrderHistory::seed().status_counts();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&OrderStatus::AwaitingPayment], 0);
        assert_eq!(counts[&OrderStatus::Complete], 1);
    }

    #[test]
    fn search_matches_ids_case_insensitively() {
        let history = OrderHistory::seed();
        assert_eq!(history.search("ord-2024").len(), 2);
        assert_eq!(history.search("002").len(), 1);
        assert!(history.search("ORD-1999").is_empty());
    }
}
