use std::sync::Arc;

use stardex_core::{Item, Page, PageWindow, parse_page};
use stardex_storage::traits::ItemStore;

use crate::ServiceError;

/// Assembles catalog pages from the item store.
pub struct CatalogService {
    items: Arc<dyn ItemStore>,
}

impl CatalogService {
    #[must_use]
    pub fn new(items: Arc<dyn ItemStore>) -> Self {
        Self { items }
    }

    /// Page `page` of the catalog, ordered by item name.
    pub async fn page(&self, page: u64) -> Result<Page<Item>, ServiceError> {
        let window = PageWindow::for_page(page)?;
        let items = self.items.list_items(window.offset, window.limit).await?;
        let total = self.items.count_items().await?;
        tracing::debug!(page, offset = window.offset, returned = items.len(), total, "catalog page");
        Ok(Page::new(window, items, total))
    }

    /// Same as [`Self::page`] for a page number taken from a request path.
    pub async fn page_from_path(&self, raw: &str) -> Result<Page<Item>, ServiceError> {
        let page = parse_page(raw)?;
        self.page(page).await
    }
}
