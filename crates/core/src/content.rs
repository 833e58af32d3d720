//! The FreshBasket homepage copy.
//!
//! This is the single source of the content document: the site serves it at
//! `/api/content` and the renderer embeds it as the offline fallback.

use std::sync::LazyLock;

use crate::types::{
    CallToAction, Category, ContentDocument, Delivery, DeliveryItem, Featured, Hero, Product,
    Service, Stat, Testimonial,
};

static SITE_CONTENT: LazyLock<ContentDocument> = LazyLock::new(build_site_content);

/// The homepage content document.
///
/// Built once on first access and immutable afterwards.
#[must_use]
pub fn site_content() -> &'static ContentDocument {
    &SITE_CONTENT
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn cta(label: &str) -> Option<CallToAction> {
    Some(CallToAction { label: text(label) })
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn delivery_item(name: &str, price: &str) -> DeliveryItem {
    DeliveryItem {
        name: name.to_string(),
        price: price.to_string(),
    }
}

fn category(title: &str, description: &str) -> Category {
    Category {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn product(tag: &str, title: &str, description: &str, price: &str, size: &str) -> Product {
    Product {
        tag: text(tag),
        title: title.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        size: size.to_string(),
        cta_label: text("Add to cart"),
    }
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn testimonial(quote: &str, name: &str, role: &str) -> Testimonial {
    Testimonial {
        quote: quote.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    }
}

fn build_site_content() -> ContentDocument {
    ContentDocument {
        hero: Some(Hero {
            title: text("Groceries delivered fresh to your door in under 2 hours."),
            subtitle: text(
                "Order local produce, pantry staples, and household essentials with transparent pricing and zero hidden fees.",
            ),
            primary_cta: cta("Browse Weekly Deals"),
            secondary_cta: cta("Schedule Delivery"),
            stats: vec![
                stat("250+", "Local suppliers"),
                stat("98%", "On-time deliveries"),
                stat("4.9/5", "Customer rating"),
            ],
            delivery: Some(Delivery {
                slot: text("Today · 4:30 PM"),
                cta_label: text("Track Delivery"),
                items: vec![
                    delivery_item("Organic Kale Bunch", "$4.99"),
                    delivery_item("Heirloom Tomatoes", "$5.49"),
                    delivery_item("Oat Milk 1L", "$3.79"),
                ],
            }),
        }),
        categories: vec![
            category(
                "Fresh Produce",
                "Seasonal fruits and vegetables from nearby farms.",
            ),
            category(
                "Dairy & Eggs",
                "Creamy dairy, plant-based alternatives, and free-range eggs.",
            ),
            category(
                "Bakery & Snacks",
                "Daily baked breads, pastries, and wholesome snacks.",
            ),
            category(
                "Pantry Staples",
                "Grains, spices, sauces, and global flavors for every recipe.",
            ),
            category(
                "Frozen & Ready",
                "Chef-prepared meals, frozen fruits, and quick heat bites.",
            ),
            category(
                "Household Care",
                "Eco cleaners, paper goods, and personal care essentials.",
            ),
        ],
        featured: Featured {
            products: vec![
                product(
                    "New",
                    "Mango Passion Kombucha",
                    "Probiotic sparkling tea brewed in small batches.",
                    "$3.49",
                    "12 fl oz",
                ),
                product(
                    "Local",
                    "Farmer's Market Salad Kit",
                    "Mixed greens, edible flowers, and citrus dressing.",
                    "$8.99",
                    "for 2 servings",
                ),
                product(
                    "Limited",
                    "Wildflower Honey",
                    "Raw, unfiltered honey harvested from mountain apiaries.",
                    "$11.50",
                    "8 oz jar",
                ),
                product(
                    "Deal",
                    "Cold Brew Concentrate",
                    "Bold, smooth, and ready for iced lattes or nitro drinks.",
                    "$14.00",
                    "32 fl oz",
                ),
            ],
        },
        services: vec![
            service(
                "Flexible delivery windows",
                "Choose 2-hour windows, same-day, or express delivery.",
            ),
            service(
                "Real-time order tracking",
                "Live driver location, delivery notes, and doorstep photo proof.",
            ),
            service(
                "Zero plastic promise",
                "Compostable bags and reusable crates for subscription members.",
            ),
            service(
                "Chef-curated bundles",
                "Dinner kits and weekly staples curated by local chefs.",
            ),
        ],
        testimonials: vec![
            testimonial(
                "The produce quality rivals our weekend farmers market. Deliveries are always thoughtful and on time.",
                "Sara L.",
                "Chef & food blogger",
            ),
            testimonial(
                "I save at least 4 hours every week. The pantry bundles mean I never run out of essentials.",
                "David P.",
                "Busy parent",
            ),
            testimonial(
                "Their zero-waste packaging and local sourcing make it the guilt-free way to stock my kitchen.",
                "Priya N.",
                "Sustainability coach",
            ),
        ],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_section_sizes() {
        let content = site_content();
        let hero = content.hero.as_ref().unwrap();

        assert_eq!(hero.stats.len(), 3);
        assert_eq!(hero.delivery.as_ref().unwrap().items.len(), 3);
        assert_eq!(content.categories.len(), 6);
        assert_eq!(content.featured.products.len(), 4);
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
    }

    #[test]
    fn test_every_product_has_tag_and_cta() {
        for product in &site_content().featured.products {
            assert!(product.tag.is_some(), "{} has no tag", product.title);
            assert_eq!(product.cta_label.as_deref(), Some("Add to cart"));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(site_content()).unwrap();

        assert_eq!(
            json["hero"]["primaryCta"]["label"],
            "Browse Weekly Deals"
        );
        assert_eq!(json["hero"]["delivery"]["slot"], "Today · 4:30 PM");
        assert_eq!(json["featured"]["products"][0]["ctaLabel"], "Add to cart");
        assert_eq!(json["testimonials"][2]["name"], "Priya N.");
    }

    #[test]
    fn test_same_instance_every_call() {
        assert!(std::ptr::eq(site_content(), site_content()));
    }
}
