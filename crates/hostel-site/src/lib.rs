//! Page resolution and rendering pipeline for the Hostel content
//! server.
//!
//! One pipeline execution per request:
//!
//! ```text
//! (host, path, language)
//!     │
//!     ▼
//! Resolver ──► RenderContext ──► TemplateData ──► PageResponse
//!              (owned by the     (adapter with    (status +
//!               request)          nav cursor)      text/html body)
//! ```
//!
//! The [`Resolver`] selects the answering virtual host (exact hostname
//! match, else the default host), loads the theme template, the
//! localized page content, the theme's key/value items, and the
//! navigation list. [`render`] expands the template against that
//! context and assembles the response: 200 for a found page, 404 with
//! sentinel title/content otherwise. Only those two outcomes ever reach
//! a client; everything else is an error surfaced to the operator.

mod adapter;
mod context;
mod error;
mod resolver;
mod response;

pub use adapter::TemplateData;
pub use context::{NOT_FOUND_BODY, NOT_FOUND_TITLE, PageBody, RenderContext};
pub use error::{RenderError, SiteError};
pub use resolver::Resolver;
pub use response::{PageResponse, render};
