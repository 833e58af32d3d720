//! Homepage content document.
//!
//! Field names serialize as camelCase so the JSON served at `/api/content`
//! matches what the page scripts expect (`primaryCta`, `ctaLabel`, ...).
//!
//! Every section is `#[serde(default)]`: the renderer must cope with a partial
//! document from an older or newer service, and a missing list simply renders
//! as empty.

use serde::{Deserialize, Serialize};

/// The structured record describing all homepage copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub featured: Featured,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

/// Hero block at the top of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CallToAction>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
}

/// A button label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A headline number, e.g. `250+ Local suppliers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
}

/// The sample delivery card shown beside the hero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub items: Vec<DeliveryItem>,
}

/// A line on the sample delivery card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

/// A shopping category tile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Wrapper for the featured products section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Featured {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A featured product card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
}

/// A service promise (delivery windows, tracking, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A customer quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}
