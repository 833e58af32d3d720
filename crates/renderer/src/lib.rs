//! FreshBasket homepage renderer.
//!
//! Fetches the content document from the site, fills the page regions, and
//! falls back to the embedded copy when the service can't be reached. Also
//! handles the newsletter form.
//!
//! # Example
//!
//! ```no_run
//! use freshbasket_renderer::{PageDocument, Renderer, SiteClient};
//!
//! # async fn run() -> Result<(), freshbasket_renderer::ClientError> {
//! let client = SiteClient::new("http://127.0.0.1:3000")?;
//! let mut renderer = Renderer::new(client);
//! let mut page = PageDocument::default();
//! renderer.load(&mut page).await;
//! println!("{}", page.render());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod newsletter;
pub mod page;
pub mod render;
pub mod templates;

pub use client::{ContentSource, SiteClient, SubscribeEndpoint};
pub use error::ClientError;
pub use newsletter::{Notification, submit};
pub use page::{Page, PageDocument};
pub use render::{LoadOutcome, Renderer};
