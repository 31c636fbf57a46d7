//! Deterministic demo inventory loaded at startup.

use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use crate::models::{Product, ProductStatus, CATEGORIES};

pub const VENDORS: [&str; 8] = [
    "TechCorp",
    "FashionHub",
    "HomeStyle",
    "SportZone",
    "BookWorld",
    "AutoParts",
    "BeautyCare",
    "ToyLand",
];

const YEAR_SECONDS: u64 = 365 * 24 * 60 * 60;
const MONTH_SECONDS: u64 = 30 * 24 * 60 * 60;

/// SplitMix64 finalizer over (index, salt); stable across runs and platforms
fn mix(index: u64, salt: u64) -> u64 {
    let mut x = index
        .wrapping_add(salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

fn pick<T: Copy>(items: &[T], index: u64, salt: u64) -> T {
    items[(mix(index, salt) % items.len() as u64) as usize]
}

/// Build `count` demo products with ids `prod-001`, `prod-002`, ...
///
/// Timestamps are spread over the year before `now`; `updated_at` never
/// precedes `created_at` nor exceeds `now`.
pub fn seed_products(count: usize, now: OffsetDateTime) -> Vec<Product> {
    (1..=count as u64)
        .map(|i| {
            let category = pick(&CATEGORIES, i, 1);
            let status = pick(&ProductStatus::ALL, i, 2);
            let vendor = pick(&VENDORS, i, 3);

            let cents = 1_000 + mix(i, 4) % 100_000;
            let stock_quantity = 1 + (mix(i, 5) % 1_000) as u32;

            let age = Duration::seconds((mix(i, 6) % YEAR_SECONDS) as i64);
            let created_at = now - age;
            let edited_after = Duration::seconds((mix(i, 7) % MONTH_SECONDS) as i64);
            let updated_at = (created_at + edited_after).min(now);

            Product {
                id: format!("prod-{:03}", i),
                name: format!("{} Product {}", category, i),
                price: Decimal::new(cents as i64, 2),
                stock_quantity,
                category: category.to_string(),
                status,
                vendor: vendor.to_string(),
                description: format!(
                    "This is a {} product with high quality and great features.",
                    category.to_lowercase()
                ),
                image_url: format!("https://picsum.photos/400/400?random={}", i),
                created_at,
                updated_at,
            }
        })
        .collect()
}
