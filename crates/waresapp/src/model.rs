//! # Domain Model
//!
//! This module defines the core data structures for wares: [`Product`], its
//! identifier [`ProductId`], the fixed [`Category`] set, and [`ProductDraft`]
//! (a product as submitted by a form, before the store has assigned an id).
//!
//! ## Identifiers
//!
//! Two id populations coexist in one collection:
//!
//! 1. **Seed-assigned**: whatever the seed payload carried. Often numeric on
//!    the wire; stored as opaque text and never reinterpreted.
//! 2. **Store-assigned**: 5-character alphanumeric strings minted by
//!    [`crate::store::RecordStore`] at create time.
//!
//! Both are immutable once set and never reused after deletion.
//!
//! ## Validation
//!
//! A record is persistable when its title is non-empty after trimming and its
//! price is not negative. The stored title keeps the submitted spelling; only
//! the trimmed form is checked. Stock cannot go negative by construction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaresError};

/// Opaque record identifier. Unique across the store, immutable, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

// Seed payloads carry server-assigned numeric ids; client-created records use
// 5-character strings. Both deserialize to the same opaque text form.
impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdRepr {
            Num(u64),
            Text(String),
        }

        Ok(match IdRepr::deserialize(deserializer)? {
            IdRepr::Num(n) => ProductId(n.to_string()),
            IdRepr::Text(s) => ProductId(s),
        })
    }
}

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The fixed category set. Wire form is kebab-case (`home-decoration`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Smartphones,
    Laptops,
    Fragrances,
    Skincare,
    Groceries,
    HomeDecoration,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Smartphones,
        Category::Laptops,
        Category::Fragrances,
        Category::Skincare,
        Category::Groceries,
        Category::HomeDecoration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Smartphones => "smartphones",
            Category::Laptops => "laptops",
            Category::Fragrances => "fragrances",
            Category::Skincare => "skincare",
            Category::Groceries => "groceries",
            Category::HomeDecoration => "home-decoration",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// A product record as held by the store.
///
/// Unknown fields in seed payloads are ignored on deserialization; optional
/// fields default so partial seed objects still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    // Present in seed data and filterable, but never settable through the
    // edit form. Client-created records leave it unset.
    #[serde(default)]
    pub brand: Option<String>,
}

impl Product {
    pub fn from_draft(draft: ProductDraft, id: ProductId) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            brand: draft.brand,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, self.price)
    }
}

/// A product without an identifier, as submitted by the create form.
///
/// `Default` yields the empty form: blank title and description, no
/// category, zero price and stock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub price: f64,
    pub stock: u32,
    pub brand: Option<String>,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.title, self.price)
    }
}

fn validate_fields(title: &str, price: f64) -> Result<()> {
    if title.trim().is_empty() {
        return Err(WaresError::Validation("title is required".to_string()));
    }
    if price < 0.0 {
        return Err(WaresError::Validation(
            "price must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&Category::HomeDecoration).unwrap();
        assert_eq!(json, "\"home-decoration\"");

        let parsed: Category = serde_json::from_str("\"smartphones\"").unwrap();
        assert_eq!(parsed, Category::Smartphones);
    }

    #[test]
    fn test_category_from_str_roundtrip() {
        for cat in Category::ALL {
            let parsed: Category = cat.as_str().parse().unwrap();
            assert_eq!(parsed, cat);
        }
        assert!("beachwear".parse::<Category>().is_err());
    }

    #[test]
    fn test_id_deserializes_from_number() {
        let id: ProductId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn test_id_deserializes_from_string() {
        let id: ProductId = serde_json::from_str("\"xK3b9\"").unwrap();
        assert_eq!(id.as_str(), "xK3b9");
    }

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&ProductId::new("17")).unwrap();
        assert_eq!(json, "\"17\"");
    }

    #[test]
    fn test_product_deserializes_seed_object() {
        // Seed objects carry fields the model doesn't track.
        let json = r#"{
            "id": 1,
            "title": "iPhone 9",
            "description": "An apple mobile which is nothing like apple",
            "price": 549,
            "rating": 4.69,
            "stock": 94,
            "brand": "Apple",
            "category": "smartphones",
            "thumbnail": "https://example.com/thumb.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.title, "iPhone 9");
        assert_eq!(product.category, Some(Category::Smartphones));
        assert_eq!(product.price, 549.0);
        assert_eq!(product.stock, 94);
        assert_eq!(product.brand.as_deref(), Some("Apple"));
    }

    #[test]
    fn test_product_deserializes_without_optional_fields() {
        let json = r#"{"id": "abc12", "title": "Bare"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.description, "");
        assert_eq!(product.category, None);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
        assert_eq!(product.brand, None);
    }

    #[test]
    fn test_empty_draft_matches_empty_form() {
        let draft = ProductDraft::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.category, None);
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.stock, 0);
        assert_eq!(draft.brand, None);
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let draft = ProductDraft {
            title: "   ".to_string(),
            ..Default::default()
        };
        match draft.validate() {
            Err(WaresError::Validation(msg)) => assert!(msg.contains("title")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_keeps_submitted_spelling() {
        let draft = ProductDraft {
            title: "  Moto G  ".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        let product = Product::from_draft(draft, ProductId::new("aaaaa"));
        assert_eq!(product.title, "  Moto G  ");
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let draft = ProductDraft {
            title: "Discounted".to_string(),
            price: -1.0,
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(WaresError::Validation(_))));
    }
}
