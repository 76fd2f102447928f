use anyhow::Result;
use stardex_service::CatalogService;

use crate::backends;

pub(crate) async fn run(page: u64) -> Result<()> {
    let service = CatalogService::new(backends::item_store().await?);
    let page = service.page(page).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
