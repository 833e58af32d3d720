//! End-to-end tests: a real site on a local port, driven over HTTP by
//! `reqwest` and the renderer.

#![allow(clippy::unwrap_used)]

use freshbasket_core::{ContentDocument, site_content};
use freshbasket_integration_tests::{TestServer, unreachable_base_url};
use freshbasket_renderer::{
    LoadOutcome, Notification, Page, PageDocument, Renderer, SiteClient, newsletter,
    render::{CATEGORY_GRID, HERO_TITLE, PRODUCT_GRID},
};
use reqwest::StatusCode;
use serde_json::{Value, json};

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[tokio::test]
async fn renderer_fills_the_shell_with_live_content() {
    let server = TestServer::spawn().await;

    let mut page = PageDocument::default();
    let mut renderer = Renderer::new(SiteClient::new(&server.base_url()).unwrap());

    assert_eq!(renderer.load(&mut page).await, LoadOutcome::Live);

    let content = site_content();
    assert!(page.has_region(HERO_TITLE));
    assert_eq!(
        count(page.region(CATEGORY_GRID).unwrap(), "<article>"),
        content.categories.len()
    );
    assert_eq!(
        count(page.region(PRODUCT_GRID).unwrap(), "<article>"),
        content.featured.products.len()
    );

    let html = page.render();
    assert!(!html.contains("<!-- region:"));
    assert!(!html.contains("status-banner"));
    assert!(html.contains("Fresh Produce"));
}

#[tokio::test]
async fn homepage_is_served_already_rendered() {
    let server = TestServer::spawn().await;

    let response = reqwest::get(server.url("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(!html.contains("<!-- region:"));
    assert!(html.contains("Fresh Produce"));
    assert_eq!(
        count(&html, "<article>"),
        site_content().categories.len()
            + site_content().featured.products.len()
            + site_content().services.len()
            + site_content().testimonials.len()
    );
}

#[tokio::test]
async fn renderer_falls_back_when_the_site_is_down() {
    let base_url = unreachable_base_url().await;
    let mut page = PageDocument::default();
    let mut renderer = Renderer::new(SiteClient::new(&base_url).unwrap());

    assert_eq!(renderer.load(&mut page).await, LoadOutcome::Fallback);
    assert_eq!(renderer.load(&mut page).await, LoadOutcome::Stale);

    assert_eq!(renderer.current(), Some(site_content()));
    assert_eq!(page.banner_count(), 1);
    assert_eq!(count(&page.render(), r#"class="status-banner""#), 1);
}

#[tokio::test]
async fn fallback_matches_the_served_document() {
    let server = TestServer::spawn().await;

    let served: ContentDocument = reqwest::get(server.url("/api/content"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(&served, site_content());
}

#[tokio::test]
async fn newsletter_round_trip_through_the_renderer_client() {
    let server = TestServer::spawn().await;
    let client = SiteClient::new(&server.base_url()).unwrap();

    let first = newsletter::submit(&client, " Jane@Example.com ").await;
    assert_eq!(
        first,
        Notification::Subscribed(
            "Thanks for joining FreshBasket! Check your inbox for a welcome gift.".to_string()
        )
    );
    assert!(first.reset_form());

    let second = newsletter::submit(&client, "jane@example.com").await;
    assert!(second.message().contains("already on the FreshBasket list"));

    // The site answers 400, which the form reports as a failed request.
    let invalid = newsletter::submit(&client, "jane.example.com").await;
    assert_eq!(invalid, Notification::Failed(newsletter::FAILURE_MESSAGE.to_string()));

    let blank = newsletter::submit(&client, "   ").await;
    assert_eq!(
        blank,
        Notification::Rejected(newsletter::EMPTY_EMAIL_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn subscribe_endpoint_validates_over_http() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    let response = http
        .post(server.url("/api/subscribe"))
        .json(&json!({ "email": "no-at-sign" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Please provide a valid email address.");
}

#[tokio::test]
async fn health_reports_ok() {
    let server = TestServer::spawn().await;
    let client = SiteClient::new(&server.base_url()).unwrap();

    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert!(health.timestamp > 0);
}

#[tokio::test]
async fn deep_links_serve_the_rendered_page() {
    let server = TestServer::spawn().await;

    for path in ["/deals/weekly", "/.env"] {
        let response = reqwest::get(server.url(path)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "path {path}");
        let html = response.text().await.unwrap();
        assert!(html.contains("class=\"cta-form\""), "path {path}");
        assert!(html.contains("Fresh Produce"), "path {path}");
    }
}
