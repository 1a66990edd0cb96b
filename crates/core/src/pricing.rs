//! Order pricing: shipping, tax, and coupon discounts derived from a cart
//! subtotal. Pure functions over `Decimal`; the constants live in
//! `PricingConfig` so deployments can tune them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::domain::coupon::Coupon;
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl std::str::FromStr for ShippingMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            other => Err(format!("unknown shipping method `{other}` (expected standard|express)")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Derives the full breakdown from a subtotal. Express shipping is a flat
/// fee that ignores the free-shipping waiver; tax applies to the subtotal
/// only. The total is not clamped at zero when a discount exceeds
/// everything else.
pub fn price(
    subtotal: Decimal,
    method: ShippingMethod,
    coupon: Option<&Coupon>,
    config: &PricingConfig,
) -> PricingBreakdown {
    let shipping = match method {
        ShippingMethod::Express => config.express_shipping_fee,
        ShippingMethod::Standard => {
            if subtotal > config.free_shipping_threshold {
                Decimal::ZERO
            } else {
                config.standard_shipping_fee
            }
        }
    };

    let tax = subtotal * config.tax_rate_pct / Decimal::from(100);
    let discount = coupon.map_or(Decimal::ZERO, |coupon| coupon.discount_on(subtotal));

    PricingBreakdown { subtotal, shipping, tax, discount, total: subtotal + shipping + tax - discount }
}

/// Amount still needed to reach free standard shipping; zero once reached.
pub fn remaining_for_free_shipping(subtotal: Decimal, config: &PricingConfig) -> Decimal {
    (config.free_shipping_threshold - subtotal).max(Decimal::ZERO)
}

/// The fixed table of discount codes the storefront honors.
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl Default for CouponBook {
    fn default() -> Self {
        use rust_decimal_macros::dec;

        Self {
            coupons: vec![
                Coupon {
                    code: "GOTHIC10".to_string(),
                    percent_off: dec!(10),
                    min_subtotal: None,
                    description: "10% off your order".to_string(),
                },
                Coupon {
                    code: "SHADOW15".to_string(),
                    percent_off: dec!(15),
                    min_subtotal: Some(dec!(1500)),
                    description: "15% off orders over $1500".to_string(),
                },
                Coupon {
                    code: "NEWUSER20".to_string(),
                    percent_off: dec!(20),
                    min_subtotal: None,
                    description: "20% off for new customers".to_string(),
                },
            ],
        }
    }
}

impl CouponBook {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// Case-insensitive lookup, no eligibility check.
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.coupons.iter().find(|coupon| coupon.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Resolves a code against the current subtotal. An unknown code and a
    /// known-but-ineligible code are distinct rejections.
    pub fn apply(&self, code: &str, subtotal: Decimal) -> Result<&Coupon, DomainError> {
        let coupon = self
            .find(code)
            .ok_or_else(|| DomainError::UnknownCoupon { code: code.trim().to_string() })?;

        if !coupon.eligible(subtotal) {
            return Err(DomainError::IneligibleCoupon {
                code: coupon.code.clone(),
                minimum: coupon.min_subtotal.unwrap_or_default(),
            });
        }

        Ok(coupon)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{price, remaining_for_free_shipping, CouponBook, ShippingMethod};
    use crate::config::PricingConfig;
    use crate::errors::DomainError;

    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    #[test]
    fn standard_shipping_is_waived_above_the_threshold() {
        let breakdown = price(dec!(1200), ShippingMethod::Standard, None, &config());
        assert_eq!(breakdown.shipping, dec!(0));
        assert_eq!(breakdown.tax, dec!(96.00));
        assert_eq!(breakdown.total, dec!(1296.00));
    }

    #[test]
    fn standard_shipping_charges_the_flat_fee_below_the_threshold() {
        let breakdown = price(dec!(500), ShippingMethod::Standard, None, &config());
        assert_eq!(breakdown.shipping, dec!(49.99));
    }

    #[test]
    fn express_fee_applies_regardless_of_subtotal() {
        let small = price(dec!(100), ShippingMethod::Express, None, &config());
        let large = price(dec!(5000), ShippingMethod::Express, None, &config());
        assert_eq!(small.shipping, dec!(29.99));
        assert_eq!(large.shipping, dec!(29.99));
    }

    #[test]
    fn tax_is_eight_percent_of_subtotal_only() {
        let breakdown = price(dec!(500), ShippingMethod::Standard, None, &config());
        assert_eq!(breakdown.tax, dec!(40.00));
    }

    #[test]
    fn applied_coupon_discounts_the_subtotal() {
        let book = CouponBook::default();
        let coupon = book.apply("SHADOW15", dec!(2000)).expect("eligible");
        let breakdown = price(dec!(2000), ShippingMethod::Standard, Some(coupon), &config());

        assert_eq!(breakdown.discount, dec!(300.00));
        assert_eq!(breakdown.total, dec!(2000) + dec!(0) + dec!(160.00) - dec!(300.00));
    }

    #[test]
    fn coupon_lookup_is_case_insensitive() {
        let book = CouponBook::default();
        assert!(book.find("gothic10").is_some());
        assert!(book.find(" Shadow15 ").is_some());
    }

    #[test]
    fn unknown_code_and_ineligible_code_are_distinct_rejections() {
        let book = CouponBook::default();

        let unknown = book.apply("VOID99", dec!(5000)).expect_err("unknown code");
        assert!(matches!(unknown, DomainError::UnknownCoupon { .. }));

        let ineligible = book.apply("SHADOW15", dec!(1000)).expect_err("below minimum");
        assert!(matches!(
            ineligible,
            DomainError::IneligibleCoupon { ref code, minimum } if code == "SHADOW15" && minimum == dec!(1500)
        ));
    }

    #[test]
    fn total_is_not_clamped_when_discount_dominates() {
        // A dominant discount can push the total below zero; the ledger
        // reports it as-is.
        let coupon = crate::domain::coupon::Coupon {
            code: "EVERYTHING".to_string(),
            percent_off: dec!(200),
            min_subtotal: None,
            description: "test".to_string(),
        };
        let breakdown = price(dec!(100), ShippingMethod::Standard, Some(&coupon), &config());
        assert!(breakdown.total < dec!(0));
    }

    #[test]
    fn free_shipping_progress_floors_at_zero() {
        assert_eq!(remaining_for_free_shipping(dec!(400), &config()), dec!(600));
        assert_eq!(remaining_for_free_shipping(dec!(1500), &config()), dec!(0));
    }
}
