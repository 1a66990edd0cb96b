use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::product::ProductId;

/// Errors a shopper can run into. Display text is the user-facing message;
/// every variant maps to a distinct rejection the surface layer shows
/// without terminating anything.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("coupon code `{code}` is not recognized")]
    UnknownCoupon { code: String },
    #[error("coupon `{code}` requires a minimum order of ${minimum}")]
    IneligibleCoupon { code: String, minimum: Decimal },
    #[error("product {0} is not in the catalog")]
    ProductNotFound(ProductId),
    #[error("only {stock} of product {product_id} in stock, requested {requested}")]
    InsufficientStock { product_id: ProductId, requested: u32, stock: u32 },
}
