//! Fetch-and-render state machine for the homepage.

use chrono::{Datelike, Local};
use freshbasket_core::{ContentDocument, Hero, site_content};

use crate::client::ContentSource;
use crate::page::Page;
use crate::templates;

pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const PRIMARY_CTA: &str = "primary-cta";
pub const SECONDARY_CTA: &str = "secondary-cta";
pub const HERO_STATS: &str = "hero-stats";
pub const DELIVERY_SLOT: &str = "delivery-slot";
pub const DELIVERY_ITEMS: &str = "delivery-items";
pub const DELIVERY_CTA: &str = "delivery-cta";
pub const CATEGORY_GRID: &str = "category-grid";
pub const PRODUCT_GRID: &str = "product-grid";
pub const SERVICE_GRID: &str = "service-grid";
pub const TESTIMONIAL_GRID: &str = "testimonial-grid";
pub const YEAR: &str = "year";

/// Grid regions that show [`templates::LOAD_ERROR`] when a refresh fails.
pub const GRID_REGIONS: [&str; 4] = [CATEGORY_GRID, PRODUCT_GRID, SERVICE_GRID, TESTIMONIAL_GRID];

/// Class of the offline warning banner.
pub const STATUS_BANNER_CLASS: &str = "status-banner";

/// Text of the offline warning banner.
pub const STATUS_BANNER_TEXT: &str =
    "Showing cached inventory. Refresh once you're back online to see the latest stock.";

/// What a call to [`Renderer::load`] ended up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Content came from the service.
    Live,
    /// The service was unreachable on first load; the embedded copy is shown.
    Fallback,
    /// The service failed after content was shown; the grids show an error.
    Stale,
}

/// Loads homepage content from a [`ContentSource`] and renders it into a [`Page`].
#[derive(Debug)]
pub struct Renderer<S> {
    source: S,
    current: Option<ContentDocument>,
}

impl<S: ContentSource> Renderer<S> {
    /// Create a renderer with nothing loaded yet.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            current: None,
        }
    }

    /// The content last rendered, if any.
    pub const fn current(&self) -> Option<&ContentDocument> {
        self.current.as_ref()
    }

    /// Set the year, fetch content, and render it.
    ///
    /// On a failed fetch the page shows the embedded fallback plus a warning
    /// banner if nothing was loaded before, otherwise an inline error in each
    /// grid. Errors never propagate.
    pub async fn load<P: Page>(&mut self, page: &mut P) -> LoadOutcome {
        set_year(page, Local::now().year());

        match self.source.fetch_content().await {
            Ok(content) => {
                tracing::debug!("Rendering live content");
                render_content(page, &content);
                self.current = Some(content);
                LoadOutcome::Live
            }
            Err(e) => {
                tracing::error!(error = %e, "Unable to load site content");
                if self.current.is_none() {
                    let fallback = site_content().clone();
                    render_content(page, &fallback);
                    self.current = Some(fallback);
                    show_load_warning(page);
                    LoadOutcome::Fallback
                } else {
                    show_load_error(page);
                    LoadOutcome::Stale
                }
            }
        }
    }
}

/// Write `year` into the footer.
pub fn set_year<P: Page>(page: &mut P, year: i32) {
    page.set_text(YEAR, &year.to_string());
}

/// Render every region from `content`.
pub fn render_content<P: Page>(page: &mut P, content: &ContentDocument) {
    if let Some(hero) = &content.hero {
        render_hero(page, hero);
    }
    render_list(page, CATEGORY_GRID, &content.categories, templates::category);
    render_list(page, PRODUCT_GRID, &content.featured.products, templates::product);
    render_list(page, SERVICE_GRID, &content.services, templates::service);
    render_list(
        page,
        TESTIMONIAL_GRID,
        &content.testimonials,
        templates::testimonial,
    );
}

fn render_hero<P: Page>(page: &mut P, hero: &Hero) {
    set_optional_text(page, HERO_TITLE, hero.title.as_deref());
    set_optional_text(page, HERO_SUBTITLE, hero.subtitle.as_deref());
    set_optional_text(
        page,
        PRIMARY_CTA,
        hero.primary_cta.as_ref().and_then(|cta| cta.label.as_deref()),
    );
    set_optional_text(
        page,
        SECONDARY_CTA,
        hero.secondary_cta.as_ref().and_then(|cta| cta.label.as_deref()),
    );
    render_list(page, HERO_STATS, &hero.stats, templates::stat);

    let delivery = hero.delivery.as_ref();
    set_optional_text(page, DELIVERY_SLOT, delivery.and_then(|d| d.slot.as_deref()));
    render_list(
        page,
        DELIVERY_ITEMS,
        delivery.map_or(&[][..], |d| d.items.as_slice()),
        templates::delivery_item,
    );
    set_optional_text(
        page,
        DELIVERY_CTA,
        delivery.and_then(|d| d.cta_label.as_deref()),
    );
}

/// Absent text leaves the region as it was.
fn set_optional_text<P: Page>(page: &mut P, id: &str, text: Option<&str>) {
    if let Some(text) = text {
        page.set_text(id, text);
    }
}

fn render_list<P: Page, T>(page: &mut P, id: &str, items: &[T], template: impl Fn(&T) -> String) {
    if page.has_region(id) {
        page.set_html(id, templates::collection(items, template));
    }
}

fn show_load_warning<P: Page>(page: &mut P) {
    if page.has_banner(STATUS_BANNER_CLASS) {
        return;
    }
    page.insert_banner(STATUS_BANNER_CLASS, STATUS_BANNER_TEXT);
}

fn show_load_error<P: Page>(page: &mut P) {
    for id in GRID_REGIONS {
        page.set_html(id, templates::LOAD_ERROR.to_string());
    }
}
