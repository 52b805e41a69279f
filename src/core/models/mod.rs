mod client_settings;
mod image_attachment;
mod meme;
mod request_error;

pub use client_settings::ClientSettings;
pub use image_attachment::ImageAttachment;
pub use meme::{MemeUrl, RandomMemeResponse, SearchResponse, SearchResultItem};
pub use request_error::RequestError;
