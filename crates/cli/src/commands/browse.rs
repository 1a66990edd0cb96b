use clap::Args;
use rust_decimal::Decimal;
use serde_json::json;

use noctis_core::browse::{browse, FilterCriteria, SortKey};
use noctis_core::catalog::Catalog;
use noctis_core::config::AppConfig;
use noctis_core::domain::product::ProductId;
use noctis_core::errors::DomainError;

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[arg(long, help = "Exact category slug (e.g. laptops)")]
    pub category: Option<String>,

    #[arg(long, help = "Case-insensitive text search over title, brand, and description")]
    pub search: Option<String>,

    #[arg(long = "brand", help = "Brand filter; repeat for multiple brands")]
    pub brands: Vec<String>,

    #[arg(long = "color", help = "Color filter; repeat for multiple colors")]
    pub colors: Vec<String>,

    #[arg(long = "size", help = "Size filter; repeat for multiple sizes")]
    pub sizes: Vec<String>,

    #[arg(long, help = "Inclusive lower price bound")]
    pub min_price: Option<Decimal>,

    #[arg(long, help = "Inclusive upper price bound")]
    pub max_price: Option<Decimal>,

    #[arg(long, help = "Minimum star rating (0-5)")]
    pub min_rating: Option<Decimal>,

    #[arg(long, help = "Flash-sale products only")]
    pub sale: bool,

    #[arg(long = "new", help = "New arrivals only")]
    pub new_only: bool,

    #[arg(long, default_value = "name", help = "Sort key: name|price-low|price-high|rating")]
    pub sort: SortKey,
}

impl From<BrowseArgs> for FilterCriteria {
    fn from(args: BrowseArgs) -> Self {
        let defaults = FilterCriteria::default();
        Self {
            search: args.search.unwrap_or_default(),
            category: args.category.unwrap_or_default(),
            brands: args.brands,
            price_min: args.min_price.unwrap_or(defaults.price_min),
            price_max: args.max_price.unwrap_or(defaults.price_max),
            colors: args.colors,
            sizes: args.sizes,
            min_rating: args.min_rating.unwrap_or(defaults.min_rating),
            sale_only: args.sale,
            new_only: args.new_only,
            sort: args.sort,
        }
    }
}

pub fn run(_config: &AppConfig, args: BrowseArgs) -> CommandResult {
    let catalog = Catalog::seed();
    let criteria = FilterCriteria::from(args);
    let results = browse(&catalog, &criteria);

    let listing: Vec<_> = results
        .iter()
        .map(|product| {
            json!({
                "id": product.id,
                "title": product.title,
                "category": product.category,
                "brand": product.brand,
                "price": product.price,
                "rating": product.rating,
                "stock": product.stock,
                "flash_sale": product.flash_sale,
                "new_arrival": product.new_arrival,
            })
        })
        .collect();

    CommandResult::success_with(
        "browse",
        format!("{} of {} products match", results.len(), catalog.products().len()),
        Some(json!({ "active_filters": criteria.active_count(), "products": listing })),
    )
}

/// The product detail view. A lookup miss is a not-found payload, never a
/// crash.
pub fn show(_config: &AppConfig, product_id: u32) -> CommandResult {
    let catalog = Catalog::seed();
    let product_id = ProductId(product_id);

    match catalog.find(product_id) {
        Some(product) => match serde_json::to_value(product) {
            Ok(data) => CommandResult::success_with(
                "show",
                format!("product {} `{}`", product.id, product.title),
                Some(data),
            ),
            Err(error) => CommandResult::failure(
                "show",
                "serialization",
                format!("could not serialize product: {error}"),
                3,
            ),
        },
        None => CommandResult::failure(
            "show",
            "product_not_found",
            DomainError::ProductNotFound(product_id).to_string(),
            4,
        ),
    }
}
