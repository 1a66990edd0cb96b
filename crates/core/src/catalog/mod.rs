mod seed;

use rust_decimal::Decimal;

use crate::domain::product::{Brand, Category, PriceRange, Product, ProductId};

/// The fixed set of product records plus the taxonomy the listing sidebar
/// filters against. Built once at startup, read-only afterwards.
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    price_ranges: Vec<PriceRange>,
    sizes: Vec<String>,
    colors: Vec<String>,
}

impl Catalog {
    pub fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        brands: Vec<Brand>,
        price_ranges: Vec<PriceRange>,
        sizes: Vec<String>,
        colors: Vec<String>,
    ) -> Self {
        Self { products, categories, brands, price_ranges, sizes, colors }
    }

    /// The built-in gothic-electronics data set.
    pub fn seed() -> Self {
        seed::catalog()
    }

    /// Detail-view lookup. A miss is a valid not-found state, not a failure.
    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn price_ranges(&self) -> &[PriceRange] {
        &self.price_ranges
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn max_price(&self) -> Decimal {
        self.products.iter().map(|product| product.price).max().unwrap_or(Decimal::ZERO)
    }

    pub fn flash_sale(&self) -> Vec<&Product> {
        self.products.iter().filter(|product| product.flash_sale).collect()
    }

    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|product| product.new_arrival).collect()
    }
}
