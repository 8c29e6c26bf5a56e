//! Admin API queries: listing and mutating servers, pages, and page
//! content.
//!
//! These back the JSON admin endpoints; the render path never calls
//! them.

use crate::error::StoreError;
use crate::models::{NewPage, NewPageContent, NewServer, Page, PageContent, PageContentPatch, Server};
use crate::store::Store;

impl Store {
    /// List all virtual hosts.
    pub async fn servers(&self) -> Result<Vec<Server>, StoreError> {
        sqlx::query_as::<_, Server>("select id, hostname, theme_id, is_default from server")
            .fetch_all(self.pool())
            .await
            .map_err(Into::into)
    }

    /// Create a virtual host. New hosts are never the default.
    pub async fn create_server(&self, new: &NewServer) -> Result<Server, StoreError> {
        let result = sqlx::query("insert into server (hostname, theme_id, is_default) values (?, ?, 0)")
            .bind(&new.hostname)
            .bind(new.theme_id)
            .execute(self.pool())
            .await?;
        Ok(Server {
            id: result.last_insert_rowid(),
            hostname: Some(new.hostname.clone()),
            theme_id: new.theme_id,
            is_default: false,
        })
    }

    /// List all pages across all hosts.
    pub async fn pages(&self) -> Result<Vec<Page>, StoreError> {
        sqlx::query_as::<_, Page>(
            "select id, server_id, parent_page_id, relative_path from page",
        )
        .fetch_all(self.pool())
        .await
        .map_err(Into::into)
    }

    /// Create a page under a host.
    pub async fn create_page(&self, new: &NewPage) -> Result<Page, StoreError> {
        let result =
            sqlx::query("insert into page (server_id, parent_page_id, relative_path) values (?, ?, ?)")
                .bind(new.server_id)
                .bind(new.parent_page_id)
                .bind(&new.relative_path)
                .execute(self.pool())
                .await?;
        Ok(Page {
            id: result.last_insert_rowid(),
            server_id: new.server_id,
            parent_page_id: new.parent_page_id,
            relative_path: new.relative_path.clone(),
        })
    }

    /// List all page content rows.
    pub async fn page_contents(&self) -> Result<Vec<PageContent>, StoreError> {
        sqlx::query_as::<_, PageContent>(
            "select id, page_id, language, title, content from page_content",
        )
        .fetch_all(self.pool())
        .await
        .map_err(Into::into)
    }

    /// Create localized content for a page.
    pub async fn create_page_content(
        &self,
        new: &NewPageContent,
    ) -> Result<PageContent, StoreError> {
        let result = sqlx::query(
            "insert into page_content (page_id, language, title, content) values (?, ?, ?, ?)",
        )
        .bind(new.page_id)
        .bind(&new.language)
        .bind(&new.title)
        .bind(&new.content)
        .execute(self.pool())
        .await?;
        Ok(PageContent {
            id: result.last_insert_rowid(),
            page_id: new.page_id,
            language: new.language.clone(),
            title: new.title.clone(),
            content: new.content.clone(),
        })
    }

    /// Apply a partial update to a page content row.
    ///
    /// A patch with neither field is a no-op success.
    pub async fn update_page_content(
        &self,
        id: i64,
        patch: &PageContentPatch,
    ) -> Result<(), StoreError> {
        match (&patch.title, &patch.content) {
            (Some(title), Some(content)) => {
                sqlx::query("update page_content set title = ?, content = ? where id = ?")
                    .bind(title)
                    .bind(content)
                    .bind(id)
                    .execute(self.pool())
                    .await?;
            }
            (Some(title), None) => {
                sqlx::query("update page_content set title = ? where id = ?")
                    .bind(title)
                    .bind(id)
                    .execute(self.pool())
                    .await?;
            }
            (None, Some(content)) => {
                sqlx::query("update page_content set content = ? where id = ?")
                    .bind(content)
                    .bind(id)
                    .execute(self.pool())
                    .await?;
            }
            (None, None) => {}
        }
        Ok(())
    }
}
