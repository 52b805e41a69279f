use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ImageAttachment, MemeUrl};
use crate::global_constants;

#[async_trait]
pub trait MemeSearchService: Send + Sync {
    /// Returns the `url` of the random meme the service picks, even when `count > 1`.
    async fn fetch_random_meme(&self, count: u32) -> Result<MemeUrl>;

    /// `fetch_random_meme` with `DEFAULT_RANDOM_MEME_COUNT`.
    async fn fetch_default_random_meme(&self) -> Result<MemeUrl> {
        self.fetch_random_meme(global_constants::DEFAULT_RANDOM_MEME_COUNT)
            .await
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<MemeUrl>>;

    async fn search_by_image_text(
        &self,
        query: &str,
        image: &ImageAttachment,
    ) -> Result<Vec<MemeUrl>>;
}
