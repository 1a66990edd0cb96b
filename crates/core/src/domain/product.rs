use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog record. The catalog is fixed at startup and products are
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub brand: String,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub discount_pct: u32,
    pub rating: Decimal,
    pub review_count: u32,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub specifications: BTreeMap<String, String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: u32,
    pub flash_sale: bool,
    pub new_arrival: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: u32,
    pub name: String,
}

/// A labelled price bucket offered by the listing sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub label: String,
    pub min: Decimal,
    pub max: Decimal,
}
