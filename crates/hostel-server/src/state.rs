//! Shared application state.

use hostel_site::Resolver;
use hostel_store::Store;

/// State shared by all request handlers.
pub(crate) struct AppState {
    /// Request resolution and rendering pipeline.
    pub(crate) resolver: Resolver,
    /// Database access for admin endpoints and static resources.
    pub(crate) store: Store,
    /// Language used when a request carries no Accept-Language header.
    pub(crate) default_language: String,
}
