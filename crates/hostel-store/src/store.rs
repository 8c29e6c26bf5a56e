//! Connection pool, schema bootstrap, and render-path queries.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;
use crate::models::{NavEntry, ResolvedPage, StaticResource, ThemeContentItem};

/// Schema bootstrap script.
const SCHEMA: &str = include_str!("schema.sql");

/// Template seeded for the default host of a freshly created database.
const SEED_TEMPLATE: &str = include_str!("seed_template.html");

/// Handle to the shared SQLite database.
///
/// Cheap to clone; clones share the underlying pool. The render path
/// only reads, so concurrent resolutions need no transaction scope
/// beyond each individual query.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database at `path`.
    pub async fn connect(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        // More than one connection would see independent empty databases.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the tables and seed a default host if the database holds
    /// no servers yet.
    ///
    /// The seed keeps the exactly-one-default invariant satisfied from
    /// the first start, so every request can be answered.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;

        let servers: i64 = sqlx::query_scalar("select count(*) from server")
            .fetch_one(&self.pool)
            .await?;
        if servers == 0 {
            tracing::info!("Empty database, seeding default host");
            let theme = sqlx::query("insert into theme (template) values (?)")
                .bind(SEED_TEMPLATE)
                .execute(&self.pool)
                .await?;
            sqlx::query("insert into server (hostname, theme_id, is_default) values (null, ?, 1)")
                .bind(theme.last_insert_rowid())
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Whether exactly one default host exists.
    ///
    /// Checked once at startup; a database without a default host
    /// cannot answer requests for unknown hostnames.
    pub async fn has_default_host(&self) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("select count(*) from server where is_default")
            .fetch_one(&self.pool)
            .await?;
        Ok(count == 1)
    }

    /// Resolve a request to its owning host, theme template, and (if
    /// present) localized page content, in a single joined query.
    ///
    /// A server matching `host` exactly is preferred over the default
    /// row. `None` means neither matched, which only happens when the
    /// database has no default host.
    pub async fn resolve_page(
        &self,
        host: &str,
        path: &str,
        language: &str,
    ) -> Result<Option<ResolvedPage>, StoreError> {
        sqlx::query_as::<_, ResolvedPage>(
            "select s.id as server_id, s.theme_id, t.template, \
                    pc.title, pc.content, pc.language \
             from server s \
             join theme t on t.id = s.theme_id \
             left outer join page p \
               on p.server_id = s.id \
               and p.relative_path = ? \
             left outer join page_content pc \
               on pc.page_id = p.id \
               and pc.language = ? \
             where s.hostname = ? or s.is_default \
             order by s.is_default \
             limit 1",
        )
        .bind(path)
        .bind(language)
        .bind(host)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    /// All key/value content of a theme in one language, in storage
    /// order.
    pub async fn theme_content(
        &self,
        theme_id: i64,
        language: &str,
    ) -> Result<Vec<ThemeContentItem>, StoreError> {
        sqlx::query_as::<_, ThemeContentItem>(
            "select key, value \
             from theme_content \
             where theme_id = ? and language = ? \
             order by rowid",
        )
        .bind(theme_id)
        .bind(language)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    /// Navigation entries for a server: every page that has content in
    /// the requested language, in creation order.
    pub async fn navigation(
        &self,
        server_id: i64,
        language: &str,
    ) -> Result<Vec<NavEntry>, StoreError> {
        sqlx::query_as::<_, NavEntry>(
            "select p.relative_path as url, pc.title \
             from page p \
             join page_content pc on pc.page_id = p.id \
             where p.server_id = ? and pc.language = ? \
             order by p.id",
        )
        .bind(server_id)
        .bind(language)
        .fetch_all(&self.pool)
        .await
        .map_err(Into::into)
    }

    /// Look up a static asset by host and key.
    pub async fn static_resource(
        &self,
        host: &str,
        key: &str,
    ) -> Result<Option<StaticResource>, StoreError> {
        sqlx::query_as::<_, StaticResource>(
            "select sr.value, sr.content_type \
             from static_resource sr \
             join server s on s.id = sr.server_id \
             where sr.key = ? and s.hostname = ?",
        )
        .bind(key)
        .bind(host)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }
}
