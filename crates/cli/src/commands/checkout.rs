use std::time::Duration;

use clap::Args;
use tracing::info;

use noctis_core::catalog::Catalog;
use noctis_core::checkout::{place_order, CheckoutError, CheckoutForm};
use noctis_core::config::AppConfig;
use noctis_core::errors::DomainError;
use noctis_core::pricing::{CouponBook, ShippingMethod};

use crate::commands::{restore_cart, simulate_processing, CommandResult};

/// Mirrors the two-step checkout form: shipping details first, then card
/// details, plus the order-level options.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub card_number: Option<String>,
    #[arg(long)]
    pub expiry_date: Option<String>,
    #[arg(long)]
    pub cvv: Option<String>,
    #[arg(long)]
    pub card_name: Option<String>,

    #[arg(long, default_value = "standard", help = "Shipping method: standard|express")]
    pub shipping: ShippingMethod,
    #[arg(long, help = "Coupon code to apply to the order")]
    pub coupon: Option<String>,
    #[arg(long, help = "Remember the shipping address")]
    pub save_address: bool,
    #[arg(long, help = "Subscribe to the newsletter")]
    pub newsletter: bool,
}

impl From<&CheckoutArgs> for CheckoutForm {
    fn from(args: &CheckoutArgs) -> Self {
        Self {
            first_name: args.first_name.clone().unwrap_or_default(),
            last_name: args.last_name.clone().unwrap_or_default(),
            email: args.email.clone().unwrap_or_default(),
            phone: args.phone.clone().unwrap_or_default(),
            address: args.address.clone().unwrap_or_default(),
            city: args.city.clone().unwrap_or_default(),
            state: args.state.clone().unwrap_or_default(),
            zip_code: args.zip_code.clone().unwrap_or_default(),
            country: args.country.clone().unwrap_or_default(),
            card_number: args.card_number.clone().unwrap_or_default(),
            expiry_date: args.expiry_date.clone().unwrap_or_default(),
            cvv: args.cvv.clone().unwrap_or_default(),
            card_name: args.card_name.clone().unwrap_or_default(),
            shipping_method: args.shipping,
            save_address: args.save_address,
            newsletter: args.newsletter,
        }
    }
}

const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

pub fn run(config: &AppConfig, args: CheckoutArgs) -> CommandResult {
    let catalog = Catalog::seed();
    let mut ledger = match restore_cart("checkout", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };

    let book = CouponBook::default();
    let coupon = match &args.coupon {
        Some(code) => match book.apply(code, ledger.total()) {
            Ok(coupon) => Some(coupon),
            Err(error @ DomainError::UnknownCoupon { .. }) => {
                return CommandResult::failure("checkout", "invalid_coupon", error.to_string(), 1);
            }
            Err(error) => {
                return CommandResult::failure(
                    "checkout",
                    "coupon_not_eligible",
                    error.to_string(),
                    1,
                );
            }
        },
        None => None,
    };

    let form = CheckoutForm::from(&args);
    let receipt = match place_order(&ledger, &catalog, coupon, &form, &config.pricing) {
        Ok(receipt) => receipt,
        Err(error) => {
            let class = match &error {
                CheckoutError::IncompleteShipping { .. } => "incomplete_shipping",
                CheckoutError::IncompletePayment { .. } => "incomplete_payment",
                CheckoutError::EmptyCart => "empty_cart",
                CheckoutError::UnknownProduct(_) => "product_not_found",
            };
            return CommandResult::failure("checkout", class, error.to_string(), 1);
        }
    };

    // Mock payment processing: a fixed pause, then unconditional success.
    simulate_processing(PROCESSING_DELAY);
    info!(order_id = %receipt.order_id, total = %receipt.pricing.total, "order placed");
    ledger.clear();

    match serde_json::to_value(&receipt) {
        Ok(data) => CommandResult::success_with(
            "checkout",
            format!("order {} placed, total ${}", receipt.order_id, receipt.pricing.total),
            Some(data),
        ),
        Err(error) => CommandResult::failure(
            "checkout",
            "serialization",
            format!("could not serialize receipt: {error}"),
            3,
        ),
    }
}

