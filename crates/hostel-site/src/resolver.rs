//! Request resolution: host selection, content lookup, context
//! assembly.

use hostel_render::markdown;
use hostel_store::Store;

use crate::context::{PageBody, RenderContext};
use crate::error::SiteError;

/// Resolves incoming requests to render contexts.
///
/// Cheap to clone; clones share the store's connection pool.
#[derive(Clone)]
pub struct Resolver {
    store: Store,
}

impl Resolver {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Verify that the database can answer requests at all.
    ///
    /// Called once before serving; a database without exactly one
    /// default host is a configuration error and the process must not
    /// start.
    pub async fn verify_default_host(&self) -> Result<(), SiteError> {
        if self.store.has_default_host().await? {
            Ok(())
        } else {
            Err(SiteError::NoDefaultHost)
        }
    }

    /// Resolve a request to a fully assembled [`RenderContext`].
    ///
    /// Host selection prefers an exact hostname match over the default
    /// host. A missing page or missing translation produces the
    /// not-found state; found content is converted from markdown here,
    /// so the context always carries HTML.
    pub async fn resolve(
        &self,
        host: &str,
        path: &str,
        language: &str,
    ) -> Result<RenderContext, SiteError> {
        tracing::debug!(host, path, language, "Resolving page");

        let Some(resolved) = self.store.resolve_page(host, path, language).await? else {
            return Err(SiteError::NoDefaultHost);
        };

        let page = match (resolved.title, resolved.content) {
            (Some(title), Some(content)) => PageBody::Found {
                title,
                html: markdown::to_html(&content),
            },
            _ => PageBody::NotFound,
        };
        if page.is_not_found() {
            tracing::debug!(host, path, language, "No content for page");
        }

        let items = self.store.theme_content(resolved.theme_id, language).await?;
        let nav = self.store.navigation(resolved.server_id, language).await?;

        Ok(RenderContext {
            template: resolved.template,
            items,
            page,
            language: language.to_owned(),
            nav,
        })
    }
}
