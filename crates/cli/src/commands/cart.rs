use clap::Subcommand;
use serde_json::json;

use noctis_core::catalog::Catalog;
use noctis_core::config::AppConfig;
use noctis_core::domain::cart::LineId;
use noctis_core::domain::product::ProductId;
use noctis_core::errors::DomainError;
use noctis_core::pricing::{price, remaining_for_free_shipping, CouponBook, ShippingMethod};

use crate::commands::{restore_cart, CommandResult};

#[derive(Debug, Subcommand)]
pub enum CartAction {
    #[command(about = "Add a product (optionally a size/color variant) to the cart")]
    Add {
        product_id: u32,
        #[arg(long, default_value_t = 1)]
        qty: u32,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    #[command(about = "List cart lines with the running subtotal")]
    Show,
    #[command(about = "Replace a line's quantity (0 removes it)")]
    Set { line_id: String, qty: u32 },
    #[command(about = "Remove a line; a no-op when the id is unknown")]
    Remove { line_id: String },
    #[command(about = "Empty the cart")]
    Clear,
    #[command(about = "Price the cart with optional coupon and shipping method")]
    Total {
        #[arg(long, help = "Coupon code (case-insensitive)")]
        coupon: Option<String>,
        #[arg(long, default_value = "standard", help = "Shipping method: standard|express")]
        shipping: ShippingMethod,
    },
}

pub fn run(config: &AppConfig, action: CartAction) -> CommandResult {
    match action {
        CartAction::Add { product_id, qty, size, color } => add(config, product_id, qty, size, color),
        CartAction::Show => show(config),
        CartAction::Set { line_id, qty } => set(config, line_id, qty),
        CartAction::Remove { line_id } => remove(config, line_id),
        CartAction::Clear => clear(config),
        CartAction::Total { coupon, shipping } => total(config, coupon, shipping),
    }
}

fn add(
    config: &AppConfig,
    product_id: u32,
    qty: u32,
    size: Option<String>,
    color: Option<String>,
) -> CommandResult {
    let catalog = Catalog::seed();
    let product_id = ProductId(product_id);
    let Some(product) = catalog.find(product_id) else {
        return CommandResult::failure(
            "cart add",
            "product_not_found",
            DomainError::ProductNotFound(product_id).to_string(),
            4,
        );
    };

    let mut ledger = match restore_cart("cart add", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };

    // The ledger itself is permissive about stock; the bound is enforced
    // here at the surface. An addition that does not fit in u32 cannot fit
    // in stock either.
    let already_held: u32 = ledger
        .lines()
        .iter()
        .filter(|line| line.matches(product_id, size.as_deref(), color.as_deref()))
        .map(|line| line.quantity)
        .sum();
    let requested = already_held.checked_add(qty);
    if requested.map_or(true, |total| total > product.stock) {
        let error = DomainError::InsufficientStock {
            product_id,
            requested: requested.unwrap_or(u32::MAX),
            stock: product.stock,
        };
        return CommandResult::failure("cart add", "insufficient_stock", error.to_string(), 1);
    }

    let line_id = ledger.add_item(product, qty, size, color);
    CommandResult::success_with(
        "cart add",
        format!("added {}x `{}`", qty, product.title),
        Some(json!({
            "line_id": line_id,
            "item_count": ledger.item_count(),
            "subtotal": ledger.total(),
        })),
    )
}

fn show(config: &AppConfig) -> CommandResult {
    let ledger = match restore_cart("cart show", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };

    match serde_json::to_value(ledger.lines()) {
        Ok(lines) => CommandResult::success_with(
            "cart show",
            format!("{} items across {} lines", ledger.item_count(), ledger.lines().len()),
            Some(json!({
                "lines": lines,
                "item_count": ledger.item_count(),
                "subtotal": ledger.total(),
            })),
        ),
        Err(error) => CommandResult::failure(
            "cart show",
            "serialization",
            format!("could not serialize cart: {error}"),
            3,
        ),
    }
}

fn set(config: &AppConfig, line_id: String, qty: u32) -> CommandResult {
    let mut ledger = match restore_cart("cart set", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };

    let line_id = LineId(line_id);
    // Same stock bound as `cart add`; replacing a quantity must not over-set
    // past what is in stock.
    if qty > 0 {
        if let Some(line) = ledger.find_line(&line_id) {
            let catalog = Catalog::seed();
            let Some(product) = catalog.find(line.product_id) else {
                return CommandResult::failure(
                    "cart set",
                    "product_not_found",
                    DomainError::ProductNotFound(line.product_id).to_string(),
                    4,
                );
            };
            if qty > product.stock {
                let error = DomainError::InsufficientStock {
                    product_id: product.id,
                    requested: qty,
                    stock: product.stock,
                };
                return CommandResult::failure("cart set", "insufficient_stock", error.to_string(), 1);
            }
        }
    }
    ledger.set_quantity(&line_id, qty);
    let message = if qty == 0 {
        format!("line {line_id} removed")
    } else {
        format!("line {line_id} set to {qty}")
    };
    CommandResult::success_with(
        "cart set",
        message,
        Some(json!({ "item_count": ledger.item_count(), "subtotal": ledger.total() })),
    )
}

fn remove(config: &AppConfig, line_id: String) -> CommandResult {
    let mut ledger = match restore_cart("cart remove", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };

    ledger.remove_item(&LineId(line_id));
    CommandResult::success_with(
        "cart remove",
        "line removed if present",
        Some(json!({ "item_count": ledger.item_count(), "subtotal": ledger.total() })),
    )
}

fn clear(config: &AppConfig) -> CommandResult {
    let mut ledger = match restore_cart("cart clear", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };

    ledger.clear();
    CommandResult::success("cart clear", "cart emptied")
}

fn total(config: &AppConfig, coupon: Option<String>, shipping: ShippingMethod) -> CommandResult {
    let ledger = match restore_cart("cart total", config) {
        Ok(ledger) => ledger,
        Err(result) => return result,
    };
    let subtotal = ledger.total();

    let book = CouponBook::default();
    let applied = match coupon {
        Some(code) => match book.apply(&code, subtotal) {
            Ok(coupon) => Some(coupon),
            Err(error @ DomainError::UnknownCoupon { .. }) => {
                return CommandResult::failure("cart total", "invalid_coupon", error.to_string(), 1);
            }
            Err(error) => {
                return CommandResult::failure(
                    "cart total",
                    "coupon_not_eligible",
                    error.to_string(),
                    1,
                );
            }
        },
        None => None,
    };

    let breakdown = price(subtotal, shipping, applied, &config.pricing);
    // The free-shipping hint only makes sense for the standard tier; the
    // waiver never applies to express.
    let message = match shipping {
        ShippingMethod::Express => format!("total ${} (express shipping)", breakdown.total),
        ShippingMethod::Standard if breakdown.shipping.is_zero() => {
            format!("total ${} (standard shipping, waived)", breakdown.total)
        }
        ShippingMethod::Standard => format!(
            "total ${} (standard shipping, ${} left for free shipping)",
            breakdown.total,
            remaining_for_free_shipping(subtotal, &config.pricing),
        ),
    };
    match serde_json::to_value(&breakdown) {
        Ok(data) => CommandResult::success_with("cart total", message, Some(data)),
        Err(error) => CommandResult::failure(
            "cart total",
            "serialization",
            format!("could not serialize breakdown: {error}"),
            3,
        ),
    }
}
