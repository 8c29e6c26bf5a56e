//! Per-request render context.

use hostel_store::{NavEntry, ThemeContentItem};

/// Placeholder title rendered when no page or translation matched.
pub const NOT_FOUND_TITLE: &str = "Not Found!";

/// Placeholder body rendered when no page or translation matched.
/// Inserted as-is; the sentinel is not run through markdown conversion.
pub const NOT_FOUND_BODY: &str = "Not found!";

/// The localized page fields of a resolved request.
///
/// Content absence is an expected state, not an error: a missing page
/// or a missing translation both land on `NotFound` and render the
/// host's normal template with the sentinel strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageBody {
    /// The page exists and has content in the resolved language.
    Found {
        title: String,
        /// Body already converted from markdown to HTML.
        html: String,
    },
    /// No page matched the path, or no content matched the language.
    NotFound,
}

impl PageBody {
    /// Whether this request resolves to the not-found outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageBody::NotFound)
    }

    /// The title interpolated for `{{title}}` outside the nav section.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            PageBody::Found { title, .. } => title,
            PageBody::NotFound => NOT_FOUND_TITLE,
        }
    }

    /// The HTML interpolated for `{{content}}`.
    #[must_use]
    pub fn html(&self) -> &str {
        match self {
            PageBody::Found { html, .. } => html,
            PageBody::NotFound => NOT_FOUND_BODY,
        }
    }
}

/// Everything needed to render one request.
///
/// Assembled by the [`Resolver`](crate::Resolver), owned exclusively by
/// the request that created it, and dropped when the response has been
/// assembled. The iteration cursor used during expansion lives in
/// [`TemplateData`](crate::TemplateData), not here, so an unmutated
/// context can be rendered any number of times.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Theme template source.
    pub template: String,
    /// Theme key/value items, in storage order.
    pub items: Vec<ThemeContentItem>,
    /// Localized page fields, or the not-found state.
    pub page: PageBody,
    /// Resolved request language.
    pub language: String,
    /// Navigation entries for the resolved host, in stable order.
    pub nav: Vec<NavEntry>,
}
