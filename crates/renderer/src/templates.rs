//! Per-entry HTML templates for the homepage regions.
//!
//! Every interpolated value is HTML-escaped.

use freshbasket_core::{Category, DeliveryItem, Product, Service, Stat, Testimonial};
use htmlescape::encode_minimal as escape;

/// Placeholder for a region whose list is empty.
pub const EMPTY_STATE: &str = r#"<p class="empty-state">Content coming soon.</p>"#;

/// Replaces the grids when a refresh fails after content was shown.
pub const LOAD_ERROR: &str =
    r#"<p class="empty-state">We couldn't load the latest inventory. Please refresh.</p>"#;

/// Label for a product button without its own `ctaLabel`.
pub const DEFAULT_PRODUCT_CTA: &str = "Add to cart";

/// Render `items` with `template` and join, or [`EMPTY_STATE`] for an empty list.
#[must_use]
pub fn collection<T>(items: &[T], template: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return EMPTY_STATE.to_string();
    }
    items.iter().map(template).collect()
}

#[must_use]
pub fn stat(stat: &Stat) -> String {
    format!(
        "<div><strong>{}</strong><span>{}</span></div>",
        escape(&stat.value),
        escape(&stat.label)
    )
}

#[must_use]
pub fn delivery_item(item: &DeliveryItem) -> String {
    format!(
        "<li><span>{}</span><strong>{}</strong></li>",
        escape(&item.name),
        escape(&item.price)
    )
}

#[must_use]
pub fn category(category: &Category) -> String {
    format!(
        "<article><h3>{}</h3><p>{}</p></article>",
        escape(&category.title),
        escape(&category.description)
    )
}

#[must_use]
pub fn product(product: &Product) -> String {
    let tag = product
        .tag
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape(tag)))
        .unwrap_or_default();
    let cta = product
        .cta_label
        .as_deref()
        .filter(|label| !label.is_empty())
        .unwrap_or(DEFAULT_PRODUCT_CTA);

    format!(
        r#"<article>{tag}<h3>{}</h3><p>{}</p><div class="price"><strong>{}</strong><span>{}</span></div><button class="btn secondary full">{}</button></article>"#,
        escape(&product.title),
        escape(&product.description),
        escape(&product.price),
        escape(&product.size),
        escape(cta)
    )
}

#[must_use]
pub fn service(service: &Service) -> String {
    format!(
        "<article><h3>{}</h3><p>{}</p></article>",
        escape(&service.title),
        escape(&service.description)
    )
}

#[must_use]
pub fn testimonial(testimonial: &Testimonial) -> String {
    format!(
        "<article><p>\u{201c}{}\u{201d}</p><h3>{}</h3><span>{}</span></article>",
        escape(&testimonial.quote),
        escape(&testimonial.name),
        escape(&testimonial.role)
    )
}
