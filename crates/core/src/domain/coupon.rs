use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discount code with a percent-off value and an optional minimum-subtotal
/// eligibility rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub percent_off: Decimal,
    pub min_subtotal: Option<Decimal>,
    pub description: String,
}

impl Coupon {
    pub fn eligible(&self, subtotal: Decimal) -> bool {
        self.min_subtotal.map_or(true, |minimum| subtotal >= minimum)
    }

    pub fn discount_on(&self, subtotal: Decimal) -> Decimal {
        subtotal * self.percent_off / Decimal::from(100)
    }
}
