//! Pipeline error types.

use hostel_render::TemplateError;
use hostel_store::StoreError;

/// Errors raised while resolving a request to a render context.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No virtual host matched and no default host exists. A
    /// provisioned database always has a default host, so this is a
    /// configuration error, not a per-request condition.
    #[error("no default host is configured")]
    NoDefaultHost,

    /// Storage failure; fatal for this request.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while expanding a context into the theme template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Malformed template; the request is aborted with no partial
    /// output.
    #[error("template expansion failed: {0}")]
    Template(#[from] TemplateError),
}
