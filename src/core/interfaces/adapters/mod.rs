mod meme_search_service;

pub use meme_search_service::MemeSearchService;
