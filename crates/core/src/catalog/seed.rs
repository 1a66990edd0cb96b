//! Built-in gothic-electronics demo data set: five products across five
//! categories and six brands, matching the storefront's fixture content.

use std::collections::BTreeMap;

use rust_decimal_macros::dec;

use super::Catalog;
use crate::domain::product::{Brand, Category, PriceRange, Product, ProductId};

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn catalog() -> Catalog {
    let products = vec![
        Product {
            id: ProductId(1),
            title: "RavenBook Pro X1".to_string(),
            category: "laptops".to_string(),
            brand: "RavenTech".to_string(),
            price: dec!(2499.99),
            old_price: Some(dec!(2899.99)),
            discount_pct: 14,
            rating: dec!(4.8),
            review_count: 234,
            image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=600&h=400&fit=crop",
                "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=600&h=400&fit=crop",
                "https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=600&h=400&fit=crop",
            ]),
            description: "Experience the darkness of power with our flagship laptop. Equipped with shadow-black aluminum chassis and crimson-lit keyboard.".to_string(),
            specifications: specs(&[
                ("processor", "Intel Core i9-13900H"),
                ("memory", "32GB DDR5 RAM"),
                ("storage", "1TB NVMe SSD"),
                ("graphics", "NVIDIA RTX 4070"),
                ("display", "15.6\" 4K OLED"),
            ]),
            sizes: strings(&["13-inch", "15-inch", "17-inch"]),
            colors: strings(&["Midnight Black", "Crimson Red", "Shadow Gray"]),
            stock: 15,
            flash_sale: true,
            new_arrival: false,
        },
        Product {
            id: ProductId(2),
            title: "ShadowCore Gaming Rig".to_string(),
            category: "computers".to_string(),
            brand: "ShadowCore".to_string(),
            price: dec!(3299.99),
            old_price: Some(dec!(3799.99)),
            discount_pct: 13,
            rating: dec!(4.9),
            review_count: 156,
            image: "https://images.unsplash.com/photo-1587831990711-23ca6441447b?w=400&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1587831990711-23ca6441447b?w=600&h=400&fit=crop",
                "https://images.unsplash.com/photo-1551963831-b3b1ca40c98e?w=600&h=400&fit=crop",
            ]),
            description: "Unleash the shadows with this beast of a gaming machine. RGB lighting meets gothic design in perfect harmony.".to_string(),
            specifications: specs(&[
                ("processor", "AMD Ryzen 9 7900X"),
                ("memory", "64GB DDR5 RAM"),
                ("storage", "2TB NVMe SSD"),
                ("graphics", "NVIDIA RTX 4080"),
                ("motherboard", "X670E Chipset"),
            ]),
            sizes: strings(&["Mini-ITX", "Mid-Tower", "Full-Tower"]),
            colors: strings(&["Obsidian Black", "Blood Red", "Dark Purple"]),
            stock: 8,
            flash_sale: true,
            new_arrival: false,
        },
        Product {
            id: ProductId(3),
            title: "NightVision Pro 15".to_string(),
            category: "smartphones".to_string(),
            brand: "NightVision".to_string(),
            price: dec!(1299.99),
            old_price: Some(dec!(1499.99)),
            discount_pct: 13,
            rating: dec!(4.7),
            review_count: 892,
            image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=600&h=400&fit=crop",
                "https://images.unsplash.com/photo-1574944985070-8f3ebc6b79d2?w=600&h=400&fit=crop",
            ]),
            description: "See through the darkness with our flagship smartphone. Advanced night photography and gothic design aesthetics.".to_string(),
            specifications: specs(&[
                ("display", "6.7\" AMOLED"),
                ("processor", "Snapdragon 8 Gen 3"),
                ("memory", "12GB RAM"),
                ("storage", "256GB"),
                ("camera", "108MP Triple Camera"),
            ]),
            sizes: strings(&["128GB", "256GB", "512GB"]),
            colors: strings(&["Void Black", "Crimson Red", "Midnight Purple"]),
            stock: 25,
            flash_sale: false,
            new_arrival: true,
        },
        Product {
            id: ProductId(4),
            title: "DarkStorm Elite Watch".to_string(),
            category: "smartwatches".to_string(),
            brand: "DarkStorm".to_string(),
            price: dec!(799.99),
            old_price: Some(dec!(999.99)),
            discount_pct: 20,
            rating: dec!(4.6),
            review_count: 445,
            image: "https://images.unsplash.com/photo-1546868871-7041f2a55e12?w=400&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1546868871-7041f2a55e12?w=600&h=400&fit=crop",
                "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=600&h=400&fit=crop",
            ]),
            description: "Time becomes your ally with this gothic smartwatch. Track your vitals while embracing the darkness.".to_string(),
            specifications: specs(&[
                ("display", "1.9\" AMOLED"),
                ("battery", "7 days"),
                ("waterproof", "10ATM"),
                ("sensors", "Heart Rate, SpO2, GPS"),
                ("connectivity", "Bluetooth 5.3, WiFi"),
            ]),
            sizes: strings(&["42mm", "46mm"]),
            colors: strings(&["Shadow Black", "Blood Red", "Midnight Blue"]),
            stock: 12,
            flash_sale: true,
            new_arrival: false,
        },
        Product {
            id: ProductId(5),
            title: "VoidTech Gaming Headset".to_string(),
            category: "accessories".to_string(),
            brand: "VoidTech".to_string(),
            price: dec!(299.99),
            old_price: Some(dec!(349.99)),
            discount_pct: 14,
            rating: dec!(4.5),
            review_count: 678,
            image: "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=400&h=300&fit=crop".to_string(),
            images: strings(&[
                "https://images.unsplash.com/photo-1484704849700-f032a568e944?w=600&h=400&fit=crop",
                "https://images.unsplash.com/photo-1583394838336-acd977736f90?w=600&h=400&fit=crop",
            ]),
            description: "Immerse yourself in the soundscape of shadows. Premium audio quality with gothic-inspired design.".to_string(),
            specifications: specs(&[
                ("driver", "50mm Dynamic"),
                ("frequency", "20Hz-20kHz"),
                ("impedance", "32Ω"),
                ("connectivity", "USB-C, 3.5mm"),
                ("features", "Active Noise Cancellation"),
            ]),
            sizes: strings(&["Standard"]),
            colors: strings(&["Midnight Black", "Crimson Accent", "Purple Haze"]),
            stock: 35,
            flash_sale: true,
            new_arrival: true,
        },
    ];

    let categories = vec![
        Category { id: 1, name: "Laptops".to_string(), slug: "laptops".to_string() },
        Category { id: 2, name: "Computers".to_string(), slug: "computers".to_string() },
        Category { id: 3, name: "Smartphones".to_string(), slug: "smartphones".to_string() },
        Category { id: 4, name: "Smart Watches".to_string(), slug: "smartwatches".to_string() },
        Category { id: 5, name: "Accessories".to_string(), slug: "accessories".to_string() },
    ];

    let brands = vec![
        Brand { id: 1, name: "RavenTech".to_string() },
        Brand { id: 2, name: "ShadowCore".to_string() },
        Brand { id: 3, name: "NightVision".to_string() },
        Brand { id: 4, name: "DarkStorm".to_string() },
        Brand { id: 5, name: "VoidTech".to_string() },
        Brand { id: 6, name: "CrimsonEdge".to_string() },
    ];

    let price_ranges = vec![
        PriceRange { label: "Under $500".to_string(), min: dec!(0), max: dec!(500) },
        PriceRange { label: "$500 - $1000".to_string(), min: dec!(500), max: dec!(1000) },
        PriceRange { label: "$1000 - $2000".to_string(), min: dec!(1000), max: dec!(2000) },
        PriceRange { label: "$2000 - $3000".to_string(), min: dec!(2000), max: dec!(3000) },
        PriceRange { label: "Over $3000".to_string(), min: dec!(3000), max: dec!(99999) },
    ];

    let sizes = strings(&[
        "13-inch", "15-inch", "17-inch", "42mm", "46mm", "Mini-ITX", "Mid-Tower", "Full-Tower",
        "128GB", "256GB", "512GB",
    ]);

    let colors = strings(&[
        "Midnight Black",
        "Crimson Red",
        "Shadow Gray",
        "Blood Red",
        "Dark Purple",
        "Obsidian Black",
        "Void Black",
        "Midnight Purple",
        "Midnight Blue",
        "Purple Haze",
        "Crimson Accent",
    ]);

    Catalog::new(products, categories, brands, price_ranges, sizes, colors)
}
