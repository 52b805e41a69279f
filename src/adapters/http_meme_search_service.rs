use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::Response;

use crate::core::interfaces::adapters::MemeSearchService;
use crate::core::models::{
    ClientSettings, ImageAttachment, MemeUrl, RandomMemeResponse, RequestError, SearchResponse,
};
use crate::global_constants;

/// Talks to the remote meme service over HTTP.
///
/// Holds no per-call state: one request per operation, no retries, no caching,
/// and the transport's default timeout behavior.
pub struct HttpMemeSearchService {
    http_client: reqwest::Client,
    base_url: String,
    search_results_count: u32,
}

impl HttpMemeSearchService {
    pub fn new(settings: &ClientSettings) -> Self {
        Self::with_http_client(reqwest::Client::new(), settings)
    }

    pub fn with_http_client(http_client: reqwest::Client, settings: &ClientSettings) -> Self {
        Self {
            http_client,
            base_url: settings.base_url().to_string(),
            search_results_count: settings.search_results_count,
        }
    }

    fn construct_random_url(&self, count: u32) -> String {
        format!("{}/random?n={}", self.base_url, count)
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&n={}",
            self.base_url,
            urlencoding::encode(query),
            self.search_results_count
        )
    }

    fn construct_search_form(&self, query: &str, image: &ImageAttachment) -> Result<Form> {
        let image_part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;

        Ok(Form::new()
            .text(global_constants::FORM_FIELD_QUERY, query.to_string())
            .text(
                global_constants::FORM_FIELD_COUNT,
                self.search_results_count.to_string(),
            )
            .part(global_constants::FORM_FIELD_IMAGE, image_part))
    }

    fn ensure_success(response: Response, message: &'static str) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "{} {} (status {})",
                global_constants::LOG_TAG_MEME_API,
                message,
                status
            );
            return Err(RequestError::new(message, status).into());
        }
        Ok(response)
    }
}

#[async_trait]
impl MemeSearchService for HttpMemeSearchService {
    async fn fetch_random_meme(&self, count: u32) -> Result<MemeUrl> {
        anyhow::ensure!(count >= 1, "Random meme count must be at least 1, got {}", count);

        let url = self.construct_random_url(count);
        log::info!("{} Fetching random meme", global_constants::LOG_TAG_MEME_API);
        log::debug!("{} GET {}", global_constants::LOG_TAG_MEME_API, url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, global_constants::ACCEPT_JSON)
            .send()
            .await?;
        let response = Self::ensure_success(response, global_constants::ERROR_FETCH_RANDOM_MEME)?;

        let body: RandomMemeResponse = response.json().await?;
        log::debug!("{} Random meme: {}", global_constants::LOG_TAG_MEME_API, body.url);

        Ok(body.url)
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<MemeUrl>> {
        let url = self.construct_search_url(query);
        log::info!("{} Searching memes by text", global_constants::LOG_TAG_MEME_API);
        log::debug!("{} GET {}", global_constants::LOG_TAG_MEME_API, url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, global_constants::ACCEPT_JSON)
            .send()
            .await?;
        let response = Self::ensure_success(response, global_constants::ERROR_SEARCH_BY_TEXT)?;

        let urls = response.json::<SearchResponse>().await?.into_urls();
        log::debug!(
            "{} Text search returned {} results",
            global_constants::LOG_TAG_MEME_API,
            urls.len()
        );

        Ok(urls)
    }

    async fn search_by_image_text(
        &self,
        query: &str,
        image: &ImageAttachment,
    ) -> Result<Vec<MemeUrl>> {
        let url = format!("{}/search", self.base_url);
        let form = self.construct_search_form(query, image)?;

        log::info!(
            "{} Searching memes by image and text",
            global_constants::LOG_TAG_MEME_API
        );
        log::debug!(
            "{} POST {} with {:?}",
            global_constants::LOG_TAG_MEME_API,
            url,
            image
        );

        let response = self
            .http_client
            .post(&url)
            .header(ACCEPT, global_constants::ACCEPT_JSON)
            .multipart(form)
            .send()
            .await?;
        let response =
            Self::ensure_success(response, global_constants::ERROR_SEARCH_BY_IMAGE_TEXT)?;

        let urls = response.json::<SearchResponse>().await?.into_urls();
        log::debug!(
            "{} Image search returned {} results",
            global_constants::LOG_TAG_MEME_API,
            urls.len()
        );

        Ok(urls)
    }
}
