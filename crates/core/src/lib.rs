pub mod browse;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod errors;
pub mod orders;
pub mod pricing;
pub mod session;
pub mod storage;

pub use browse::{browse, FilterCriteria, SortKey};
pub use cart::CartLedger;
pub use catalog::Catalog;
pub use checkout::{place_order, CheckoutError, CheckoutForm, CheckoutStep, OrderReceipt};
pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, PricingConfig};
pub use domain::cart::{CartLine, LineId, LineIdGenerator, MonotonicLineIds, UuidLineIds};
pub use domain::coupon::Coupon;
pub use domain::order::{Order, OrderLine, OrderStatus};
pub use domain::product::{Brand, Category, PriceRange, Product, ProductId};
pub use domain::session::{AuthSession, UserProfile};
pub use errors::DomainError;
pub use orders::OrderHistory;
pub use pricing::{
    price, remaining_for_free_shipping, CouponBook, PricingBreakdown, ShippingMethod,
};
pub use session::{AuthError, LoginRequest, RegisterRequest, SessionManager};
pub use storage::{KeyValueStore, MemoryStore};
