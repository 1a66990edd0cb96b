use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::ProductId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub String);

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cart entry: a product tied to a quantity and an optional variant
/// selection. At most one line exists per (product, size, color) tuple.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub product_id: ProductId,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub selected_size: Option<String>,
    pub selected_color: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Whether this line holds the given variant combination.
    pub fn matches(
        &self,
        product_id: ProductId,
        size: Option<&str>,
        color: Option<&str>,
    ) -> bool {
        self.product_id == product_id
            && self.selected_size.as_deref() == size
            && self.selected_color.as_deref() == color
    }
}

/// Source of fresh cart line identities. Injected into the ledger so tests
/// can use a deterministic sequence.
pub trait LineIdGenerator: Send {
    fn next_id(&mut self) -> LineId;
}

#[derive(Debug, Default)]
pub struct UuidLineIds;

impl LineIdGenerator for UuidLineIds {
    fn next_id(&mut self) -> LineId {
        LineId(Uuid::new_v4().simple().to_string())
    }
}

#[derive(Debug, Default)]
pub struct MonotonicLineIds {
    next: u64,
}

impl LineIdGenerator for MonotonicLineIds {
    fn next_id(&mut self) -> LineId {
        self.next += 1;
        LineId(format!("line-{}", self.next))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{CartLine, LineId, LineIdGenerator, MonotonicLineIds, UuidLineIds};
    use crate::domain::product::ProductId;

    #[test]
    fn monotonic_generator_never_repeats() {
        let mut ids = MonotonicLineIds::default();
        assert_eq!(ids.next_id(), LineId("line-1".to_string()));
        assert_eq!(ids.next_id(), LineId("line-2".to_string()));
    }

    #[test]
    fn uuid_generator_produces_distinct_ids() {
        let mut ids = UuidLineIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn variant_matching_distinguishes_size_and_color() {
        let line = CartLine {
            id: LineId("line-1".to_string()),
            product_id: ProductId(1),
            unit_price: dec!(100.00),
            quantity: 2,
            selected_size: Some("15-inch".to_string()),
            selected_color: None,
        };

        assert!(line.matches(ProductId(1), Some("15-inch"), None));
        assert!(!line.matches(ProductId(1), Some("17-inch"), None));
        assert!(!line.matches(ProductId(1), Some("15-inch"), Some("Midnight Black")));
        assert_eq!(line.line_total(), dec!(200.00));
    }
}
