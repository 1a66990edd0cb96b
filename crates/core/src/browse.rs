//! Listing projection: maps the catalog plus the active filter criteria onto
//! an ordered result set. Pure and cheap enough to recompute on every
//! criteria change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::product::Product;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            other => Err(format!(
                "unknown sort key `{other}` (expected name|price-low|price-high|rating)"
            )),
        }
    }
}

/// A snapshot of the active filter selections. The default passes every
/// product through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: String,
    pub brands: Vec<String>,
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub min_rating: Decimal,
    pub sale_only: bool,
    pub new_only: bool,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            brands: Vec::new(),
            price_min: Decimal::ZERO,
            price_max: Decimal::MAX,
            colors: Vec::new(),
            sizes: Vec::new(),
            min_rating: Decimal::ZERO,
            sale_only: false,
            new_only: false,
            sort: SortKey::Name,
        }
    }
}

impl FilterCriteria {
    /// Number of active selections, used by the listing header badge.
    pub fn active_count(&self) -> usize {
        let mut count = self.brands.len() + self.colors.len() + self.sizes.len();
        if !self.search.is_empty() {
            count += 1;
        }
        if !self.category.is_empty() {
            count += 1;
        }
        if self.min_rating > Decimal::ZERO {
            count += 1;
        }
        if self.price_min > Decimal::ZERO || self.price_max < Decimal::MAX {
            count += 1;
        }
        count
    }

    fn matches(&self, product: &Product) -> bool {
        if !self.category.is_empty() && product.category != self.category {
            return false;
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = product.title.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }

        // The price range is always applied; the default covers everything.
        if product.price < self.price_min || product.price > self.price_max {
            return false;
        }

        if !self.colors.is_empty()
            && !product.colors.iter().any(|color| self.colors.contains(color))
        {
            return false;
        }

        if !self.sizes.is_empty() && !product.sizes.iter().any(|size| self.sizes.contains(size)) {
            return false;
        }

        if self.min_rating > Decimal::ZERO && product.rating < self.min_rating {
            return false;
        }

        if self.sale_only && !product.flash_sale {
            return false;
        }

        if self.new_only && !product.new_arrival {
            return false;
        }

        true
    }
}

/// Applies the criteria to the catalog and sorts the survivors. Ties keep
/// catalog order (the sort is stable).
pub fn browse<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Product> {
    let mut matched: Vec<&Product> =
        catalog.products().iter().filter(|product| criteria.matches(product)).collect();

    match criteria.sort {
        SortKey::Name => {
            matched.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::PriceLow => matched.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => matched.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => matched.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    matched
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{browse, FilterCriteria, SortKey};
    use crate::catalog::Catalog;

    #[test]
    fn default_criteria_pass_the_whole_catalog() {
        let catalog = Catalog::seed();
        let results = browse(&catalog, &FilterCriteria::default());
        assert_eq!(results.len(), catalog.products().len());
    }

    #[test]
    fn every_result_satisfies_every_active_predicate() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria {
            search: "gothic".to_string(),
            price_min: dec!(200),
            price_max: dec!(3000),
            min_rating: dec!(4.5),
            sale_only: true,
            ..FilterCriteria::default()
        };

        for product in browse(&catalog, &criteria) {
            assert!(product.description.to_lowercase().contains("gothic"));
            assert!(product.price >= dec!(200) && product.price <= dec!(3000));
            assert!(product.rating >= dec!(4.5));
            assert!(product.flash_sale);
        }
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = Catalog::seed();
        let criteria =
            FilterCriteria { category: "laptops".to_string(), ..FilterCriteria::default() };
        let results = browse(&catalog, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "RavenBook Pro X1");
    }

    #[test]
    fn brand_and_category_predicates_are_conjoined() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria {
            category: "laptops".to_string(),
            brands: vec!["NightVision".to_string()],
            ..FilterCriteria::default()
        };
        assert!(browse(&catalog, &criteria).is_empty());
    }

    #[test]
    fn search_matches_title_brand_or_description_case_insensitively() {
        let catalog = Catalog::seed();
        let criteria =
            FilterCriteria { search: "RAVENBOOK".to_string(), ..FilterCriteria::default() };
        assert_eq!(browse(&catalog, &criteria).len(), 1);

        let criteria =
            FilterCriteria { search: "nightvision".to_string(), ..FilterCriteria::default() };
        assert_eq!(browse(&catalog, &criteria).len(), 1);
    }

    #[test]
    fn color_filter_needs_only_one_overlap() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria {
            colors: vec!["Blood Red".to_string()],
            ..FilterCriteria::default()
        };
        let results = browse(&catalog, &criteria);
        assert_eq!(results.len(), 2);
        for product in results {
            assert!(product.colors.iter().any(|color| color == "Blood Red"));
        }
    }

    #[test]
    fn price_low_sort_is_non_decreasing() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria { sort: SortKey::PriceLow, ..FilterCriteria::default() };
        let results = browse(&catalog, &criteria);
        assert!(results.windows(2).all(|pair| pair[0].price <= pair[1].price));
    }

    #[test]
    fn price_high_sort_is_non_increasing() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria { sort: SortKey::PriceHigh, ..FilterCriteria::default() };
        let results = browse(&catalog, &criteria);
        assert!(results.windows(2).all(|pair| pair[0].price >= pair[1].price));
    }

    #[test]
    fn name_sort_is_lexicographically_non_decreasing() {
        let catalog = Catalog::seed();
        let results = browse(&catalog, &FilterCriteria::default());
        assert!(results
            .windows(2)
            .all(|pair| pair[0].title.to_lowercase() <= pair[1].title.to_lowercase()));
    }

    #[test]
    fn rating_sort_is_non_increasing() {
        let catalog = Catalog::seed();
        let criteria = FilterCriteria { sort: SortKey::Rating, ..FilterCriteria::default() };
        let results = browse(&catalog, &criteria);
        assert!(results.windows(2).all(|pair| pair[0].rating >= pair[1].rating));
    }

    #[test]
    fn empty_result_is_valid_output() {
        let catalog = Catalog::seed();
        let criteria =
            FilterCriteria { search: "nonexistent".to_string(), ..FilterCriteria::default() };
        assert!(browse(&catalog, &criteria).is_empty());
    }

    #[test]
    fn active_count_tallies_selections() {
        let criteria = FilterCriteria {
            search: "raven".to_string(),
            brands: vec!["RavenTech".to_string(), "VoidTech".to_string()],
            min_rating: dec!(4.5),
            price_max: dec!(3000),
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.active_count(), 5);
    }
}
