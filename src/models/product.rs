use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Categories offered by the dashboard, paired with their placeholder image slot
pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Automotive",
    "Health & Beauty",
    "Toys",
];

const PLACEHOLDER_BASE: &str = "https://picsum.photos/400/400?random=";
const FALLBACK_PLACEHOLDER_SLOT: usize = 9;

/// Deterministic placeholder image for a category.
///
/// Known categories map to slots 1..=8 in [`CATEGORIES`] order, anything else
/// to slot 9.
pub fn default_image_url(category: &str) -> String {
    let slot = CATEGORIES
        .iter()
        .position(|known| *known == category)
        .map(|idx| idx + 1)
        .unwrap_or(FALLBACK_PLACEHOLDER_SLOT);
    format!("{}{}", PLACEHOLDER_BASE, slot)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Active, Self::Inactive, Self::Discontinued];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Discontinued => "discontinued",
        }
    }

    /// Human readable label used by the dashboard filters
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Discontinued => "Discontinued",
        }
    }

    /// Badge color used by the dashboard
    pub fn color(&self) -> &'static str {
        match self {
            Self::Active => "green",
            Self::Inactive => "yellow",
            Self::Discontinued => "red",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Invalid status: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub stock_quantity: u32,
    pub category: String,
    pub status: ProductStatus,
    pub vendor: String,
    pub description: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

/// Price as sent by a client. Anything that is not a number or a numeric
/// string is kept as [`PriceInput::Invalid`] so validation can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceInput {
    Amount(Decimal),
    Invalid,
}

impl From<Decimal> for PriceInput {
    fn from(amount: Decimal) -> Self {
        Self::Amount(amount)
    }
}

impl<'de> Deserialize<'de> for PriceInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(serde_json::from_value::<Decimal>(value)
            .map(Self::Amount)
            .unwrap_or(Self::Invalid))
    }
}

/// Product creation payload (before id and timestamps are assigned).
///
/// Every field is optional at the type level so that missing fields are
/// reported by [`ProductDraft::validate`] with a specific message instead of
/// a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<PriceInput>,
    pub stock_quantity: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update payload. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<PriceInput>,
    pub stock_quantity: Option<i64>,
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// Overlay this patch on an existing record, producing a draft that goes
    /// through the same validation as a create.
    pub fn merge_onto(self, existing: &Product) -> ProductDraft {
        ProductDraft {
            name: self.name.or_else(|| Some(existing.name.clone())),
            price: self.price.or(Some(PriceInput::Amount(existing.price))),
            stock_quantity: self
                .stock_quantity
                .or(Some(i64::from(existing.stock_quantity))),
            category: self.category.or_else(|| Some(existing.category.clone())),
            status: self.status.or(Some(existing.status)),
            vendor: self.vendor.or_else(|| Some(existing.vendor.clone())),
            description: self
                .description
                .or_else(|| Some(existing.description.clone())),
            image_url: self.image_url.or_else(|| Some(existing.image_url.clone())),
        }
    }
}

/// Field values that passed validation, waiting for id and timestamps
#[derive(Debug, Clone)]
pub struct ValidatedProduct {
    pub name: String,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub category: String,
    pub status: ProductStatus,
    pub vendor: String,
    pub description: String,
    pub image_url: String,
}

impl ValidatedProduct {
    pub fn into_product(
        self,
        id: String,
        created_at: OffsetDateTime,
        updated_at: OffsetDateTime,
    ) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock_quantity: self.stock_quantity,
            category: self.category,
            status: self.status,
            vendor: self.vendor,
            description: self.description,
            image_url: self.image_url,
            created_at,
            updated_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProductDraft {
    /// Check required fields and numeric ranges, filling defaults for
    /// stock quantity, description and image.
    pub fn validate(self) -> AppResult<ValidatedProduct> {
        let name = non_blank(self.name);
        let category = non_blank(self.category);
        let vendor = non_blank(self.vendor);
        let price = self.price.map(|input| match input {
            PriceInput::Amount(amount) if amount >= Decimal::ZERO => Ok(amount),
            _ => Err(AppError::Validation("Invalid price".to_string())),
        });

        let missing: Vec<&str> = [
            ("name", name.is_none()),
            ("price", price.is_none()),
            ("category", category.is_none()),
            ("status", self.status.is_none()),
            ("vendor", vendor.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        let (Some(name), Some(price), Some(category), Some(status), Some(vendor)) =
            (name, price, category, self.status, vendor)
        else {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        let price = price?;

        let stock_quantity = match self.stock_quantity {
            None => 0,
            Some(quantity) => u32::try_from(quantity)
                .map_err(|_| AppError::Validation("Invalid stock quantity".to_string()))?,
        };

        let image_url = non_blank(self.image_url).unwrap_or_else(|| default_image_url(&category));

        Ok(ValidatedProduct {
            name,
            price,
            stock_quantity,
            category,
            status,
            vendor,
            description: self.description.unwrap_or_default(),
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn complete_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Wireless Mouse".to_string()),
            price: Some(Decimal::new(2499, 2).into()),
            stock_quantity: Some(40),
            category: Some("Electronics".to_string()),
            status: Some(ProductStatus::Active),
            vendor: Some("TechCorp".to_string()),
            description: None,
            image_url: None,
        }
    }

    fn existing_product() -> Product {
        Product {
            id: "prod-001".to_string(),
            name: "Desk Lamp".to_string(),
            price: Decimal::new(3500, 2),
            stock_quantity: 12,
            category: "Home & Garden".to_string(),
            status: ProductStatus::Inactive,
            vendor: "HomeStyle".to_string(),
            description: "Warm light".to_string(),
            image_url: "https://example.com/lamp.png".to_string(),
            created_at: datetime!(2024-01-01 10:00 UTC),
            updated_at: datetime!(2024-01-02 10:00 UTC),
        }
    }

    #[test]
    fn test_validate_fills_defaults() {
        let mut draft = complete_draft();
        draft.stock_quantity = None;

        let valid = draft.validate().unwrap();
        assert_eq!(valid.stock_quantity, 0);
        assert_eq!(valid.description, "");
        assert_eq!(valid.image_url, "https://picsum.photos/400/400?random=1");
    }

    #[test]
    fn test_validate_reports_missing_fields_in_order() {
        let draft = ProductDraft {
            name: Some("   ".to_string()),
            vendor: None,
            ..complete_draft()
        };

        let err = draft.validate().unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Missing required fields: name, vendor"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let draft = ProductDraft {
            price: Some(Decimal::new(-1, 0).into()),
            ..complete_draft()
        };

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid price"));
    }

    #[test]
    fn test_validate_accepts_zero_price() {
        let draft = ProductDraft {
            price: Some(Decimal::ZERO.into()),
            ..complete_draft()
        };

        assert_eq!(draft.validate().unwrap().price, Decimal::ZERO);
    }

    #[test]
    fn test_validate_rejects_negative_stock() {
        let draft = ProductDraft {
            stock_quantity: Some(-3),
            ..complete_draft()
        };

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid stock quantity"));
    }

    #[test]
    fn test_validate_trims_required_strings() {
        let draft = ProductDraft {
            name: Some("  Wireless Mouse ".to_string()),
            ..complete_draft()
        };

        assert_eq!(draft.validate().unwrap().name, "Wireless Mouse");
    }

    #[test]
    fn test_default_image_url_unknown_category() {
        assert_eq!(
            default_image_url("Garden Gnomes"),
            "https://picsum.photos/400/400?random=9"
        );
        assert_eq!(
            default_image_url("Toys"),
            "https://picsum.photos/400/400?random=8"
        );
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let existing = existing_product();
        let patch = ProductPatch {
            price: Some(Decimal::new(2999, 2).into()),
            ..Default::default()
        };

        let merged = patch.merge_onto(&existing).validate().unwrap();
        assert_eq!(merged.price, Decimal::new(2999, 2));
        assert_eq!(merged.name, "Desk Lamp");
        assert_eq!(merged.stock_quantity, 12);
        assert_eq!(merged.status, ProductStatus::Inactive);
        assert_eq!(merged.description, "Warm light");
        assert_eq!(merged.image_url, "https://example.com/lamp.png");
    }

    #[test]
    fn test_patch_blank_name_is_rejected() {
        let existing = existing_product();
        let patch = ProductPatch {
            name: Some(String::new()),
            ..Default::default()
        };

        let err = patch.merge_onto(&existing).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Missing required fields: name"));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "discontinued".parse::<ProductStatus>().unwrap(),
            ProductStatus::Discontinued
        );
        assert!("archived".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(existing_product()).unwrap();

        assert_eq!(json["stockQuantity"], 12);
        assert_eq!(json["price"], 35.0);
        assert_eq!(json["status"], "inactive");
        assert_eq!(json["imageUrl"], "https://example.com/lamp.png");
        assert_eq!(json["createdAt"], "2024-01-01T10:00:00Z");
    }

    #[test]
    fn test_draft_accepts_numeric_string_price() {
        let draft: ProductDraft = serde_json::from_value(serde_json::json!({
            "name": "Novel",
            "price": "12.50",
            "category": "Books",
            "status": "active",
            "vendor": "BookWorld"
        }))
        .unwrap();

        assert_eq!(draft.price, Some(PriceInput::Amount(Decimal::new(1250, 2))));
    }

    #[test]
    fn test_draft_keeps_unparseable_price_for_validation() {
        let draft: ProductDraft = serde_json::from_value(serde_json::json!({
            "name": "Novel",
            "price": "abc",
            "category": "Books",
            "status": "active",
            "vendor": "BookWorld"
        }))
        .unwrap();

        assert_eq!(draft.price, Some(PriceInput::Invalid));

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid price"));
    }

    #[test]
    fn test_null_price_is_missing() {
        let draft: ProductDraft = serde_json::from_value(serde_json::json!({
            "name": "Novel",
            "price": null,
            "category": "Books",
            "status": "active",
            "vendor": "BookWorld"
        }))
        .unwrap();

        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(msg) if msg == "Missing required fields: price"
        ));
    }
}
