use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    AwaitingPayment,
    Packing,
    Shipping,
    Complete,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] =
        [Self::AwaitingPayment, Self::Packing, Self::Shipping, Self::Complete];

    pub fn label(self) -> &'static str {
        match self {
            Self::AwaitingPayment => "Awaiting Payment",
            Self::Packing => "Packing",
            Self::Shipping => "Shipping",
            Self::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slug = match self {
            Self::AwaitingPayment => "awaiting-payment",
            Self::Packing => "packing",
            Self::Shipping => "shipping",
            Self::Complete => "complete",
        };
        f.write_str(slug)
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "awaiting-payment" => Ok(Self::AwaitingPayment),
            "packing" => Ok(Self::Packing),
            "shipping" => Ok(Self::Shipping),
            "complete" => Ok(Self::Complete),
            other => Err(format!(
                "unknown order status `{other}` (expected awaiting-payment|packing|shipping|complete)"
            )),
        }
    }
}

/// Snapshot of a purchased line as it appeared at order time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub image: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub total: Decimal,
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus;

    #[test]
    fn status_parses_from_kebab_case_slug() {
        assert_eq!("awaiting-payment".parse::<OrderStatus>(), Ok(OrderStatus::AwaitingPayment));
        assert_eq!("Shipping".parse::<OrderStatus>(), Ok(OrderStatus::Shipping));
        assert!("delivered".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_slug_round_trips_through_display() {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }
}
