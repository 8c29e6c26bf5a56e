//! Provisioning helpers for tests.
//!
//! Themes and default hosts have no admin API endpoint (they are
//! provisioned directly in the database), so tests in this crate and in
//! dependent crates use these helpers to build a populated store.

use crate::error::StoreError;
use crate::store::Store;

/// Remove all servers, including the seeded default host. Used by
/// tests that provision hosts explicitly.
pub async fn clear_servers(store: &Store) -> Result<(), StoreError> {
    sqlx::query("delete from server").execute(store.pool()).await?;
    Ok(())
}

/// Insert a theme and return its id.
pub async fn theme(store: &Store, template: &str) -> Result<i64, StoreError> {
    let result = sqlx::query("insert into theme (template) values (?)")
        .bind(template)
        .execute(store.pool())
        .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a non-default server and return its id.
pub async fn server(store: &Store, hostname: &str, theme_id: i64) -> Result<i64, StoreError> {
    let result = sqlx::query("insert into server (hostname, theme_id, is_default) values (?, ?, 0)")
        .bind(hostname)
        .bind(theme_id)
        .execute(store.pool())
        .await?;
    Ok(result.last_insert_rowid())
}

/// Insert the default server (no hostname) and return its id.
pub async fn default_server(store: &Store, theme_id: i64) -> Result<i64, StoreError> {
    let result =
        sqlx::query("insert into server (hostname, theme_id, is_default) values (null, ?, 1)")
            .bind(theme_id)
            .execute(store.pool())
            .await?;
    Ok(result.last_insert_rowid())
}

/// Insert one theme content item.
pub async fn theme_content(
    store: &Store,
    theme_id: i64,
    language: &str,
    key: &str,
    value: &str,
) -> Result<(), StoreError> {
    sqlx::query("insert into theme_content (theme_id, language, key, value) values (?, ?, ?, ?)")
        .bind(theme_id)
        .bind(language)
        .bind(key)
        .bind(value)
        .execute(store.pool())
        .await?;
    Ok(())
}

/// Insert a page and return its id.
pub async fn page(store: &Store, server_id: i64, relative_path: &str) -> Result<i64, StoreError> {
    let result = sqlx::query("insert into page (server_id, relative_path) values (?, ?)")
        .bind(server_id)
        .bind(relative_path)
        .execute(store.pool())
        .await?;
    Ok(result.last_insert_rowid())
}

/// Insert page content and return its id.
pub async fn page_content(
    store: &Store,
    page_id: i64,
    language: &str,
    title: &str,
    content: &str,
) -> Result<i64, StoreError> {
    let result = sqlx::query(
        "insert into page_content (page_id, language, title, content) values (?, ?, ?, ?)",
    )
    .bind(page_id)
    .bind(language)
    .bind(title)
    .bind(content)
    .execute(store.pool())
    .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a static resource.
pub async fn static_resource(
    store: &Store,
    server_id: i64,
    key: &str,
    value: &[u8],
    content_type: &str,
) -> Result<(), StoreError> {
    sqlx::query(
        "insert into static_resource (server_id, key, value, content_type) values (?, ?, ?, ?)",
    )
    .bind(server_id)
    .bind(key)
    .bind(value)
    .bind(content_type)
    .execute(store.pool())
    .await?;
    Ok(())
}
