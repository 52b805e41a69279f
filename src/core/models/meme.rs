use serde::Deserialize;

/// Absolute URL of a meme served by the remote backend. Not validated locally.
pub type MemeUrl = String;

/// One element of a search response.
///
/// The service answers either with bare URL strings or with records carrying a
/// `url` field. The record shape is tried first; anything matching neither shape
/// fails to decode instead of being coerced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResultItem {
    Record { url: MemeUrl },
    Bare(MemeUrl),
}

impl SearchResultItem {
    pub fn into_url(self) -> MemeUrl {
        match self {
            SearchResultItem::Record { url } => url,
            SearchResultItem::Bare(url) => url,
        }
    }
}

/// Body of a search response: a sequence of items or a single item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Many(Vec<SearchResultItem>),
    Single(SearchResultItem),
}

impl SearchResponse {
    pub fn into_urls(self) -> Vec<MemeUrl> {
        match self {
            SearchResponse::Many(items) => {
                items.into_iter().map(SearchResultItem::into_url).collect()
            }
            SearchResponse::Single(item) => vec![item.into_url()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomMemeResponse {
    pub url: MemeUrl,
}
