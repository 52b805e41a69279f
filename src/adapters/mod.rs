mod http_meme_search_service;

pub use http_meme_search_service::HttpMemeSearchService;
