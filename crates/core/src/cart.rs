//! The cart ledger: the only owner of cart line items. Every mutation is
//! followed by a synchronous snapshot write through the key-value seam, and
//! construction restores the previous snapshot when one parses.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::cart::{CartLine, LineId, LineIdGenerator};
use crate::domain::product::Product;
use crate::storage::KeyValueStore;

pub struct CartLedger {
    lines: Vec<CartLine>,
    ids: Box<dyn LineIdGenerator>,
    store: Box<dyn KeyValueStore>,
    snapshot_key: String,
}

impl CartLedger {
    /// Restores the ledger from a prior snapshot under `snapshot_key`,
    /// falling back to `default_lines` when the snapshot is absent or does
    /// not parse. A parse failure is logged and swallowed; stale data never
    /// takes the storefront down.
    pub fn restore(
        store: Box<dyn KeyValueStore>,
        snapshot_key: impl Into<String>,
        default_lines: Vec<CartLine>,
        ids: Box<dyn LineIdGenerator>,
    ) -> Self {
        let snapshot_key = snapshot_key.into();
        let lines = match store.get(&snapshot_key) {
            Some(raw) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => lines,
                Err(error) => {
                    warn!(key = %snapshot_key, %error, "discarding malformed cart snapshot");
                    default_lines
                }
            },
            None => default_lines,
        };

        Self { lines, ids, store, snapshot_key }
    }

    /// Merges into an existing (product, size, color) line or appends a new
    /// one. Stock is not clamped here; the surface layer owns that bound.
    /// A merged quantity saturates at `u32::MAX` rather than wrapping.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: u32,
        selected_size: Option<String>,
        selected_color: Option<String>,
    ) -> LineId {
        let existing = self.lines.iter_mut().find(|line| {
            line.matches(product.id, selected_size.as_deref(), selected_color.as_deref())
        });

        let id = if let Some(line) = existing {
            line.quantity = line.quantity.saturating_add(quantity);
            line.id.clone()
        } else {
            let id = self.ids.next_id();
            self.lines.push(CartLine {
                id: id.clone(),
                product_id: product.id,
                unit_price: product.price,
                quantity,
                selected_size,
                selected_color,
            });
            id
        };

        self.persist();
        id
    }

    /// Replaces a line's quantity; zero or below removes the line.
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(line_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| &line.id == line_id) {
            line.quantity = quantity;
        }
        self.persist();
    }

    /// Idempotent: removing an absent line is a no-op.
    pub fn remove_item(&mut self, line_id: &LineId) {
        self.lines.retain(|line| &line.id != line_id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Sum of line totals. Tax, shipping, and discounts belong to pricing.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities, not the number of lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn find_line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == line_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.lines) {
            Ok(snapshot) => {
                self.store.set(&self.snapshot_key, &snapshot);
                debug!(key = %self.snapshot_key, lines = self.lines.len(), "cart snapshot written");
            }
            Err(error) => warn!(%error, "cart snapshot serialization failed"),
        }
    }
}
