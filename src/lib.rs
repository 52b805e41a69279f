//! Client for the remote meme retrieval service: random memes, text search,
//! and image-plus-text search, all normalized to lists of meme URLs.

pub mod adapters;
pub mod core;
pub mod global_constants;

pub use adapters::HttpMemeSearchService;
pub use crate::core::interfaces::adapters::MemeSearchService;
pub use crate::core::models::{ClientSettings, ImageAttachment, MemeUrl, RequestError};
