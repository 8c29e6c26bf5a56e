//! Row types and admin API payloads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A virtual host: a hostname-addressable site sharing the database
/// with the other tenants, bound to a theme.
///
/// Exactly one server has `is_default = true`; lookups that match no
/// hostname fall back to it. The default host may have no hostname.
#[derive(Clone, Debug, FromRow, Serialize)]
pub struct Server {
    pub id: i64,
    pub hostname: Option<String>,
    pub theme_id: i64,
    pub is_default: bool,
}

/// Payload for creating a server.
#[derive(Clone, Debug, Deserialize)]
pub struct NewServer {
    pub hostname: String,
    pub theme_id: i64,
}

/// A URL-addressable content unit under a virtual host.
#[derive(Clone, Debug, FromRow, Serialize)]
pub struct Page {
    pub id: i64,
    pub server_id: i64,
    /// Parent for navigation sub-menus. Presence only; not yet used
    /// when building the navigation list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<i64>,
    /// URL path of the page, e.g. `/hello-world`. Unique per server.
    pub relative_path: String,
}

/// Payload for creating a page.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPage {
    pub server_id: i64,
    #[serde(default)]
    pub parent_page_id: Option<i64>,
    pub relative_path: String,
}

/// The localized title and body of a page in one language.
///
/// A page with no row for a requested language is the "not found" case,
/// not an error.
#[derive(Clone, Debug, FromRow, Serialize)]
pub struct PageContent {
    pub id: i64,
    pub page_id: i64,
    pub language: String,
    pub title: String,
    /// Raw markdown; converted to HTML by the render pipeline.
    pub content: String,
}

/// Payload for creating page content.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPageContent {
    pub page_id: i64,
    pub language: String,
    pub title: String,
    pub content: String,
}

/// Partial update of page content. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageContentPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// One localizable key/value pair a theme exposes as a template
/// variable (tagline, copyright notice, and the like).
#[derive(Clone, Debug, FromRow, Serialize)]
pub struct ThemeContentItem {
    pub key: String,
    pub value: String,
}

/// A navigation entry: relative URL and localized title.
#[derive(Clone, Debug, FromRow, Serialize)]
pub struct NavEntry {
    pub url: String,
    pub title: String,
}

/// Result of the host/page/content resolution query.
///
/// The server and theme columns are always present (the query only
/// yields a row when a host answered). The page content columns are
/// `None` when no page matched the path or no content matched the
/// language.
#[derive(Clone, Debug, FromRow)]
pub struct ResolvedPage {
    pub server_id: i64,
    pub theme_id: i64,
    pub template: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub language: Option<String>,
}

/// A static asset attached to a virtual host.
#[derive(Clone, Debug, FromRow)]
pub struct StaticResource {
    pub value: Vec<u8>,
    pub content_type: String,
}
