//! Checkout validation and receipt construction. The form is filled in two
//! steps, shipping then payment; a step with missing fields blocks
//! submission with a step-specific rejection. Payment always
//! "succeeds" — the processing delay is simulated by the caller.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::config::PricingConfig;
use crate::domain::coupon::Coupon;
use crate::domain::order::OrderLine;
use crate::domain::product::ProductId;
use crate::pricing::{price, PricingBreakdown, ShippingMethod};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutStep {
    Shipping,
    Payment,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("shipping information is incomplete (missing: {})", missing.join(", "))]
    IncompleteShipping { missing: Vec<String> },
    #[error("payment information is incomplete (missing: {})", missing.join(", "))]
    IncompletePayment { missing: Vec<String> },
    #[error("the cart is empty")]
    EmptyCart,
    #[error("cart references product {0} which is not in the catalog")]
    UnknownProduct(ProductId),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
    pub shipping_method: ShippingMethod,
    pub save_address: bool,
    pub newsletter: bool,
}

impl CheckoutForm {
    pub fn validate_step(&self, step: CheckoutStep) -> Result<(), CheckoutError> {
        match step {
            CheckoutStep::Shipping => {
                let missing = missing_fields(&[
                    ("first_name", &self.first_name),
                    ("last_name", &self.last_name),
                    ("email", &self.email),
                    ("address", &self.address),
                    ("city", &self.city),
                    ("state", &self.state),
                    ("zip_code", &self.zip_code),
                ]);
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(CheckoutError::IncompleteShipping { missing })
                }
            }
            CheckoutStep::Payment => {
                let missing = missing_fields(&[
                    ("card_number", &self.card_number),
                    ("expiry_date", &self.expiry_date),
                    ("cvv", &self.cvv),
                    ("card_name", &self.card_name),
                ]);
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(CheckoutError::IncompletePayment { missing })
                }
            }
        }
    }
}

fn missing_fields(fields: &[(&str, &str)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
}

/// The confirmed order handed back to the shopper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub lines: Vec<OrderLine>,
    pub pricing: PricingBreakdown,
}

/// Validates both steps, snapshots the cart lines, and prices the order.
/// The cart itself is left untouched; callers clear it once the simulated
/// processing finishes.
pub fn place_order(
    ledger: &CartLedger,
    catalog: &Catalog,
    coupon: Option<&Coupon>,
    form: &CheckoutForm,
    config: &PricingConfig,
) -> Result<OrderReceipt, CheckoutError> {
    form.validate_step(CheckoutStep::Shipping)?;
    form.validate_step(CheckoutStep::Payment)?;

    if ledger.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(ledger.lines().len());
    for cart_line in ledger.lines() {
        let product = catalog
            .find(cart_line.product_id)
            .ok_or(CheckoutError::UnknownProduct(cart_line.product_id))?;
        lines.push(OrderLine {
            product_id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price: cart_line.unit_price,
            quantity: cart_line.quantity,
        });
    }

    let pricing = price(ledger.total(), form.shipping_method, coupon, config);

    Ok(OrderReceipt { order_id: next_order_id(), lines, pricing })
}

fn next_order_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ORD-{}-{}", Utc::now().year(), &suffix[..6].to_uppercase())
}
