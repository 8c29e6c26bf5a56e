//! SQLite persistence for the Hostel content server.
//!
//! All tenants share one database. The tables are owned by this crate:
//!
//! - `theme`: template source shared by one or more virtual hosts
//! - `server`: virtual hosts; exactly one row is the default host
//! - `theme_content`: localizable key/value pairs exposed to templates
//! - `page` / `page_content`: URL-addressable pages and their
//!   per-language title/body
//! - `static_resource`: per-host static assets served under `/static/`
//!
//! The render path only reads. Writes happen through the admin API
//! methods in [`Store`] and through schema bootstrap at startup.
//!
//! The `fixtures` feature exposes provisioning helpers for tests in
//! dependent crates.

mod admin;
mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod models;
mod store;

pub use error::StoreError;
pub use models::{
    NavEntry, NewPage, NewPageContent, NewServer, Page, PageContent, PageContentPatch,
    ResolvedPage, Server, StaticResource, ThemeContentItem,
};
pub use store::Store;
